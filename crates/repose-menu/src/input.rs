//! Keyboard vocabulary shared by the controller and the menu items.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool, // Cmd on Mac, Win key on Windows
}

impl Modifiers {
    /// Ctrl, Alt or Meta held. Shift alone still types a character.
    pub fn is_command(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Enter,
    Tab,
    Escape,
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    /// Maps a legacy DOM `keyCode` onto the shared vocabulary.
    ///
    /// Only the navigation keys have fixed codes; letters arrive as
    /// [`Key::Character`] from the text of the event instead.
    pub fn from_key_code(code: u32) -> Option<Key> {
        Some(match code {
            9 => Key::Tab,
            13 => Key::Enter,
            27 => Key::Escape,
            32 => Key::Space,
            33 => Key::PageUp,
            34 => Key::PageDown,
            35 => Key::End,
            36 => Key::Home,
            37 => Key::ArrowLeft,
            38 => Key::ArrowUp,
            39 => Key::ArrowRight,
            40 => Key::ArrowDown,
            _ => return None,
        })
    }

    /// A single visible character usable for typeahead.
    pub fn printable(&self) -> Option<char> {
        match *self {
            Key::Character(c) if !c.is_control() && !c.is_whitespace() => Some(c),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }
}
