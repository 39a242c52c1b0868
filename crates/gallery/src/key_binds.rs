use crate::message::Message;
use cosmic::{
    iced::keyboard::{Key, Modifiers, key::Named},
    widget::menu::key_bind::{KeyBind, Modifier},
};
use gallery_nav::GalleryKey;
use std::{collections::HashMap, sync::LazyLock};

static KEY_BINDS: LazyLock<HashMap<KeyBind, GalleryKey>> = LazyLock::new(init_key_binds);

fn bind(
    binds: &mut HashMap<KeyBind, GalleryKey>,
    modifiers: Vec<Modifier>,
    named: Named,
    key: GalleryKey,
) {
    binds.insert(
        KeyBind {
            modifiers,
            key: Key::Named(named),
        },
        key,
    );
}

pub fn init_key_binds() -> HashMap<KeyBind, GalleryKey> {
    let mut binds = HashMap::new();

    bind(&mut binds, vec![], Named::ArrowLeft, GalleryKey::ArrowLeft);
    bind(&mut binds, vec![], Named::ArrowRight, GalleryKey::ArrowRight);
    bind(&mut binds, vec![], Named::Home, GalleryKey::Home);
    bind(&mut binds, vec![], Named::End, GalleryKey::End);
    bind(&mut binds, vec![], Named::Enter, GalleryKey::Enter);
    bind(&mut binds, vec![], Named::Space, GalleryKey::Space);
    bind(&mut binds, vec![], Named::Escape, GalleryKey::Escape);

    // Focus traversal
    bind(&mut binds, vec![], Named::Tab, GalleryKey::Tab);
    bind(&mut binds, vec![Modifier::Shift], Named::Tab, GalleryKey::ShiftTab);

    binds
}

pub fn key_press_handler(key: Key, modifiers: Modifiers) -> Option<Message> {
    let mut mods = Vec::new();

    if modifiers.control() {
        mods.push(Modifier::Ctrl);
    }

    if modifiers.shift() {
        mods.push(Modifier::Shift);
    }

    if modifiers.alt() {
        mods.push(Modifier::Alt);
    }

    if modifiers.logo() {
        mods.push(Modifier::Super);
    }

    let key_bind = KeyBind {
        modifiers: mods,
        key,
    };

    KEY_BINDS.get(&key_bind).map(|key| Message::Key(*key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_tab_is_distinct_from_tab() {
        assert!(matches!(
            key_press_handler(Key::Named(Named::Tab), Modifiers::empty()),
            Some(Message::Key(GalleryKey::Tab))
        ));
        assert!(matches!(
            key_press_handler(Key::Named(Named::Tab), Modifiers::SHIFT),
            Some(Message::Key(GalleryKey::ShiftTab))
        ));
    }

    #[test]
    fn test_modified_arrows_are_unbound() {
        assert!(key_press_handler(Key::Named(Named::ArrowRight), Modifiers::CTRL).is_none());
        assert!(key_press_handler(Key::Character("a".into()), Modifiers::empty()).is_none());
    }
}
