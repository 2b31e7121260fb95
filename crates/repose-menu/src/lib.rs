//! # Menu buttons and popup menus
//!
//! `repose-menu` is the interaction model behind a menu button: a controller
//! (button or menu item) that reveals a popup list, plus the keyboard and
//! pointer rules for which item has focus, when the popup is visible and how
//! focus gets back to the controller. It draws nothing; a [`MenuHost`]
//! receives the effects.
//!
//! ```rust
//! use repose_menu::*;
//!
//! let source = MenuNode::with_items(["Apple", "Banana", "Apricot"]);
//! let host: RecordingHost = RecordingHost::default();
//! let mut menu = PopupMenu::new(&source, host, ControllerState::new())?;
//!
//! menu.on_activate();
//! assert!(menu.is_open());
//! assert_eq!(menu.host().focused(), Some(FocusTarget::Item(ItemId(0))));
//!
//! menu.on_item_key(ItemId(0), Key::ArrowDown);
//! menu.on_item_key(ItemId(1), Key::Character('a'));
//! assert_eq!(menu.host().focused(), Some(FocusTarget::Item(ItemId(2))));
//!
//! menu.on_item_key(ItemId(2), Key::Escape);
//! assert!(!menu.is_open());
//! # Ok::<(), MenuError>(())
//! ```
//!
//! ## Closing
//!
//! Escape, Tab and committing an item close the menu at once. Pointer-leave
//! and blur only *schedule* a close: after [`MenuConfig::close_delay`] the
//! menu closes if neither the menu nor the controller has regained focus or
//! hover. Hosts call [`PopupMenu::poll_timers`] (see
//! [`PopupMenu::next_deadline`]) from their event loop to run these.

pub mod clock;
pub mod command;
pub mod config;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
pub mod menu;
pub mod navigation;
pub mod registry;
pub mod semantics;
pub mod source;
pub mod timer;
pub mod visibility;


pub use clock::*;
pub use command::*;
pub use config::*;
pub use error::{ConfigError, MenuError};
pub use geometry::*;
pub use host::*;
pub use input::*;
pub use menu::*;
pub use navigation::Direction;
pub use registry::*;
pub use semantics::*;
pub use source::*;
pub use visibility::*;
