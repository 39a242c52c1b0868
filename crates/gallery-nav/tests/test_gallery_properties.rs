use gallery_config::GalleryConfig;
use gallery_nav::{Effect, FocusTarget, Gallery, GalleryKey, Mode, ScrollLock};
use gallery_types::{GalleryImage, ImageList};

fn images(len: usize) -> ImageList {
    let images = (0..len)
        .map(|i| GalleryImage::new(format!("img-{i}"), format!("{i}.jpg"), format!("Room {i}")))
        .collect();
    ImageList::new(images).unwrap()
}

fn gallery_with(len: usize, config: &GalleryConfig, lock: &ScrollLock) -> Gallery {
    Gallery::new(images(len), config, lock.clone())
}

fn gallery(len: usize) -> Gallery {
    gallery_with(len, &GalleryConfig::default(), &ScrollLock::new())
}

/// Plays the host role for the settle timer: every scheduled settle fires.
fn settle(gallery: &mut Gallery, effects: Vec<Effect>) {
    for effect in effects {
        if let Effect::ScheduleSettle(ticket) = effect {
            gallery.settle(ticket);
        }
    }
}

fn press(gallery: &mut Gallery, key: GalleryKey) {
    let effects = gallery.key(key);
    settle(gallery, effects);
}

#[test]
fn test_wraparound_in_both_directions() {
    let mut g = gallery(4);
    press(&mut g, GalleryKey::ArrowLeft);
    assert_eq!(g.active_index(), 3);

    press(&mut g, GalleryKey::ArrowRight);
    assert_eq!(g.active_index(), 0);
}

#[test]
fn test_double_next_inside_lock_window_moves_once() {
    let mut g = gallery(5);
    let first = g.next();
    let second = g.next();

    assert_eq!(g.active_index(), 1);
    assert!(second.is_empty());

    settle(&mut g, first);
    let _ = g.next();
    assert_eq!(g.active_index(), 2);
}

#[test]
fn test_swipe_threshold() {
    let mut g = gallery(5);

    g.touch_start(0, 200.0);
    g.touch_move(0, 151.0);
    assert!(g.touch_end(0).is_empty());
    assert_eq!(g.active_index(), 0);

    g.touch_start(0, 200.0);
    g.touch_move(0, 149.0);
    let effects = g.touch_end(0);
    assert_eq!(g.active_index(), 1);
    settle(&mut g, effects);

    g.touch_start(0, 149.0);
    g.touch_move(0, 200.0);
    let _ = g.touch_end(0);
    assert_eq!(g.active_index(), 0);
}

#[test]
fn test_lightbox_navigation_is_independent() {
    for len in [3, 5, 7] {
        let mut g = gallery(len);
        for _ in 0..2 {
            press(&mut g, GalleryKey::ArrowRight);
        }
        assert_eq!(g.active_index(), 2);

        let _ = g.open_lightbox(None, Some(FocusTarget::MainImage));
        let _ = g.lightbox_next();
        let _ = g.lightbox_next();

        assert_eq!(g.active_index(), 2);
        assert_eq!(g.lightbox().index(), Some(4 % len));

        let _ = g.close_lightbox();
        assert_eq!(g.active_index(), 2);
    }
}

#[test]
fn test_every_open_path_has_a_releasing_close_path() {
    let lock = ScrollLock::new();
    let config = GalleryConfig::default();

    // click open, close button
    let mut g = gallery_with(3, &config, &lock);
    let _ = g.open_lightbox(None, Some(FocusTarget::MainImage));
    assert!(lock.is_locked());
    let _ = g.close_lightbox();
    assert!(!lock.is_locked());

    // keyboard open, Escape
    g.set_focus(Some(FocusTarget::MainImage));
    press(&mut g, GalleryKey::Space);
    assert!(lock.is_locked());
    press(&mut g, GalleryKey::Escape);
    assert!(!lock.is_locked());

    // keyboard open, Enter on the close control
    g.set_focus(Some(FocusTarget::MainImage));
    press(&mut g, GalleryKey::Enter);
    assert_eq!(g.focus(), Some(FocusTarget::LightboxClose));
    press(&mut g, GalleryKey::Enter);
    assert!(!lock.is_locked());

    // open, teardown
    let _ = g.open_lightbox(Some(1), None);
    g.teardown();
    assert!(!lock.is_locked());

    // open, unmount
    let _ = g.open_lightbox(Some(1), None);
    assert!(lock.is_locked());
    drop(g);
    assert!(!lock.is_locked());
}

#[test]
fn test_arrow_right_scenario_with_five_images() {
    let mut g = gallery(5);

    for _ in 0..3 {
        press(&mut g, GalleryKey::ArrowRight);
    }
    assert_eq!(g.active_index(), 3);

    press(&mut g, GalleryKey::ArrowRight);
    press(&mut g, GalleryKey::ArrowRight);
    assert_eq!(g.active_index(), 0);

    press(&mut g, GalleryKey::ArrowRight);
    assert_eq!(g.active_index(), 1);
}

#[test]
fn test_autoplay_suspended_while_lightbox_open() {
    let config = GalleryConfig {
        auto_play: true,
        auto_play_interval_ms: 5000,
        ..GalleryConfig::default()
    };
    let mut g = gallery_with(4, &config, &ScrollLock::new());
    assert!(g.auto_play_interval().is_some());

    let effects = g.auto_play_tick();
    assert_eq!(g.active_index(), 1);
    settle(&mut g, effects);

    let _ = g.open_lightbox(None, None);
    assert_eq!(g.mode(), Mode::Lightbox);
    assert_eq!(g.auto_play_interval(), None);
    assert!(g.auto_play_tick().is_empty());
    assert_eq!(g.active_index(), 1);

    let _ = g.close_lightbox();
    assert!(g.auto_play_interval().is_some());
    let _ = g.auto_play_tick();
    assert_eq!(g.active_index(), 2);
}

#[test]
fn test_finger_without_a_surface_press_never_swipes() {
    let mut g = gallery(5);

    // The press landed on the rail, so only its moves and lift arrive
    g.touch_move(0, 300.0);
    g.touch_move(0, 100.0);
    assert!(g.touch_end(0).is_empty());
    assert_eq!(g.active_index(), 0);

    g.touch_start(1, 400.0);
    g.touch_move(1, 300.0);
    let effects = g.touch_end(1);
    assert!(!effects.is_empty());
    assert_eq!(g.active_index(), 1);
}
