/// Indices to decode around `active`: the image itself first, then its
/// neighbours outwards, wrapping at both ends and never repeating.
pub fn preload_window(active: usize, len: usize, radius: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }

    let active = active % len;
    let mut indices = vec![active];

    for step in 1..=radius {
        let step = step % len;
        for idx in [(active + step) % len, (active + len - step) % len] {
            if !indices.contains(&idx) {
                indices.push(idx);
            }
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_wraps() {
        assert_eq!(preload_window(0, 10, 2), vec![0, 1, 9, 2, 8]);
        assert_eq!(preload_window(9, 10, 1), vec![9, 0, 8]);
    }

    #[test]
    fn test_short_lists_do_not_repeat() {
        assert_eq!(preload_window(0, 1, 2), vec![0]);
        assert_eq!(preload_window(1, 3, 2), vec![1, 2, 0]);
    }

    #[test]
    fn test_zero_radius() {
        assert_eq!(preload_window(4, 5, 0), vec![4]);
    }
}
