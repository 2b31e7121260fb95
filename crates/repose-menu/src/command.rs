//! Raw adapter signals and the commands they turn into.

use bitflags::bitflags;
use smallvec::{SmallVec, smallvec};

use crate::config::MenuConfig;
use crate::input::{Key, KeyEvent};
use crate::navigation::Direction;
use crate::registry::ItemId;

/// A signal reported by the platform adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    ControllerClick,
    ControllerKey(KeyEvent),
    ControllerPointerEnter,
    ControllerPointerLeave,
    ItemKey(ItemId, KeyEvent),
    ItemClick(ItemId),
    ItemFocus(ItemId),
    ItemBlur(ItemId),
    MenuPointerEnter,
    MenuPointerLeave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTarget {
    Controller,
    Menu,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Close {
    /// Return focus to the controller, then close immediately.
    Dismiss,
    /// Re-check focus and hover after the close delay.
    Deferred,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Open the menu, then optionally focus an item.
    Open { focus: Option<Direction> },
    Close(Close),
    MoveFocus { from: Option<ItemId>, to: Direction },
    Search { from: ItemId, ch: char },
    Commit(ItemId),
    Hover { target: HoverTarget, hovered: bool },
    Focus { item: ItemId, focused: bool },
}

bitflags! {
    /// What the adapter should do with the original key event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct KeyOutcome: u8 {
        const PREVENT_DEFAULT = 1 << 0;
        const STOP_PROPAGATION = 1 << 1;
        const CONSUMED = Self::PREVENT_DEFAULT.bits() | Self::STOP_PROPAGATION.bits();
    }
}

pub type Commands = SmallVec<[Command; 2]>;

/// Translates one adapter signal into commands for `PopupMenu::dispatch`.
pub fn classify(event: &MenuEvent, config: &MenuConfig) -> (Commands, KeyOutcome) {
    let deferred = Command::Close(Close::Deferred);
    match *event {
        MenuEvent::ControllerClick => (
            smallvec![Command::Open {
                focus: Some(Direction::First)
            }],
            KeyOutcome::empty(),
        ),
        MenuEvent::ControllerKey(ev) => controller_key(ev),
        MenuEvent::ControllerPointerEnter => (
            smallvec![
                Command::Hover {
                    target: HoverTarget::Controller,
                    hovered: true
                },
                Command::Open { focus: None }
            ],
            KeyOutcome::empty(),
        ),
        MenuEvent::ControllerPointerLeave => (
            smallvec![
                Command::Hover {
                    target: HoverTarget::Controller,
                    hovered: false
                },
                deferred
            ],
            KeyOutcome::empty(),
        ),
        MenuEvent::ItemKey(item, ev) => item_key(item, ev, config),
        MenuEvent::ItemClick(item) => (smallvec![Command::Commit(item)], KeyOutcome::empty()),
        MenuEvent::ItemFocus(item) => (
            smallvec![Command::Focus {
                item,
                focused: true
            }],
            KeyOutcome::empty(),
        ),
        MenuEvent::ItemBlur(item) => (
            smallvec![
                Command::Focus {
                    item,
                    focused: false
                },
                deferred
            ],
            KeyOutcome::empty(),
        ),
        MenuEvent::MenuPointerEnter => (
            smallvec![Command::Hover {
                target: HoverTarget::Menu,
                hovered: true
            }],
            KeyOutcome::empty(),
        ),
        MenuEvent::MenuPointerLeave => (
            smallvec![
                Command::Hover {
                    target: HoverTarget::Menu,
                    hovered: false
                },
                deferred
            ],
            KeyOutcome::empty(),
        ),
    }
}

fn controller_key(ev: KeyEvent) -> (Commands, KeyOutcome) {
    let focus = match ev.key {
        Key::Enter | Key::Space | Key::ArrowDown => Direction::First,
        Key::ArrowUp => Direction::Last,
        _ => return (Commands::new(), KeyOutcome::empty()),
    };
    (
        smallvec![Command::Open { focus: Some(focus) }],
        KeyOutcome::CONSUMED,
    )
}

fn item_key(item: ItemId, ev: KeyEvent, config: &MenuConfig) -> (Commands, KeyOutcome) {
    let command = match ev.key {
        Key::Enter | Key::Space => Command::Commit(item),
        Key::Escape => Command::Close(Close::Dismiss),
        Key::ArrowUp => Command::MoveFocus {
            from: Some(item),
            to: Direction::Previous,
        },
        Key::ArrowDown => Command::MoveFocus {
            from: Some(item),
            to: Direction::Next,
        },
        Key::Home | Key::PageUp => Command::MoveFocus {
            from: Some(item),
            to: Direction::First,
        },
        Key::End | Key::PageDown => Command::MoveFocus {
            from: Some(item),
            to: Direction::Last,
        },
        // tab traversal carries on past the controller
        Key::Tab => {
            return (
                smallvec![Command::Close(Close::Dismiss)],
                KeyOutcome::empty(),
            );
        }
        key => match key.printable() {
            Some(ch) if config.typeahead && !ev.modifiers.is_command() => {
                Command::Search { from: item, ch }
            }
            _ => return (Commands::new(), KeyOutcome::empty()),
        },
    };
    (smallvec![command], KeyOutcome::CONSUMED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;

    fn item(key: Key) -> (Commands, KeyOutcome) {
        classify(
            &MenuEvent::ItemKey(ItemId(1), key.into()),
            &MenuConfig::default(),
        )
    }

    #[test]
    fn item_keys_map_to_commands() {
        assert_eq!(item(Key::Enter).0.as_slice(), &[Command::Commit(ItemId(1))]);
        assert_eq!(item(Key::Space).0.as_slice(), &[Command::Commit(ItemId(1))]);
        assert_eq!(
            item(Key::Escape).0.as_slice(),
            &[Command::Close(Close::Dismiss)]
        );
        assert_eq!(
            item(Key::PageUp).0.as_slice(),
            &[Command::MoveFocus {
                from: Some(ItemId(1)),
                to: Direction::First
            }]
        );
        assert_eq!(
            item(Key::End).0.as_slice(),
            &[Command::MoveFocus {
                from: Some(ItemId(1)),
                to: Direction::Last
            }]
        );
        assert_eq!(
            item(Key::Character('q')).0.as_slice(),
            &[Command::Search {
                from: ItemId(1),
                ch: 'q'
            }]
        );
    }

    #[test]
    fn recognized_keys_consume_except_tab() {
        for key in [
            Key::Enter,
            Key::Space,
            Key::Escape,
            Key::ArrowUp,
            Key::ArrowDown,
            Key::Home,
            Key::End,
            Key::PageUp,
            Key::PageDown,
            Key::Character('a'),
        ] {
            assert_eq!(item(key).1, KeyOutcome::CONSUMED, "{key:?}");
        }

        let (cmds, outcome) = item(Key::Tab);
        assert_eq!(cmds.as_slice(), &[Command::Close(Close::Dismiss)]);
        assert!(outcome.is_empty());
    }

    #[test]
    fn unrecognized_keys_pass_through() {
        for key in [Key::ArrowLeft, Key::ArrowRight, Key::Character('\t')] {
            let (cmds, outcome) = item(key);
            assert!(cmds.is_empty());
            assert!(outcome.is_empty());
        }
    }

    #[test]
    fn shortcuts_and_disabled_typeahead_are_not_searches() {
        let ctrl = KeyEvent::new(
            Key::Character('s'),
            Modifiers {
                ctrl: true,
                ..Default::default()
            },
        );
        let (cmds, outcome) = classify(
            &MenuEvent::ItemKey(ItemId(0), ctrl),
            &MenuConfig::default(),
        );
        assert!(cmds.is_empty() && outcome.is_empty());

        let (cmds, _) = classify(
            &MenuEvent::ItemKey(ItemId(0), Key::Character('s').into()),
            &MenuConfig::default().without_typeahead(),
        );
        assert!(cmds.is_empty());
    }

    #[test]
    fn controller_keys_pick_initial_item() {
        let cfg = MenuConfig::default();
        let open = |key: Key| classify(&MenuEvent::ControllerKey(key.into()), &cfg);
        assert_eq!(
            open(Key::ArrowUp).0.as_slice(),
            &[Command::Open {
                focus: Some(Direction::Last)
            }]
        );
        assert_eq!(
            open(Key::Space).0.as_slice(),
            &[Command::Open {
                focus: Some(Direction::First)
            }]
        );
        assert_eq!(open(Key::Space).1, KeyOutcome::CONSUMED);
        assert!(open(Key::Escape).0.is_empty());
    }

    #[test]
    fn leaving_schedules_a_deferred_close() {
        let cfg = MenuConfig::default();
        for ev in [
            MenuEvent::ControllerPointerLeave,
            MenuEvent::MenuPointerLeave,
            MenuEvent::ItemBlur(ItemId(0)),
        ] {
            let (cmds, _) = classify(&ev, &cfg);
            assert_eq!(cmds.last(), Some(&Command::Close(Close::Deferred)));
        }
    }
}
