//! The controller binding: one popup menu, the element that owns it, and
//! the host that renders both.

use std::rc::Rc;
use std::sync::Arc;

use web_time::Instant;

use crate::clock::{Clock, SystemClock};
use crate::command::{Close, Command, HoverTarget, KeyOutcome, MenuEvent, classify};
use crate::config::MenuConfig;
use crate::error::Result;
use crate::host::MenuHost;
use crate::input::KeyEvent;
use crate::navigation::{self, Direction};
use crate::registry::{ItemId, ItemRegistry};
use crate::semantics::FocusTarget;
use crate::source::{ItemSource, collect_items};
use crate::visibility::{ControllerState, MenuState, Visibility, VisibilityController};

pub struct PopupMenu<H: MenuHost> {
    items: ItemRegistry<H::Handle>,
    visibility: VisibilityController,
    host: H,
    clock: Arc<dyn Clock>,
    config: MenuConfig,
}

impl<H: MenuHost> PopupMenu<H> {
    pub fn new<S>(source: &S, host: H, controller: Rc<ControllerState>) -> Result<Self>
    where
        S: ItemSource<Handle = H::Handle>,
    {
        Self::with_config(
            source,
            host,
            controller,
            MenuConfig::default(),
            Arc::new(SystemClock),
        )
    }

    /// Validates `source`, registers its items and takes the menu and its
    /// items out of the tab order. Nothing is shown yet.
    pub fn with_config<S>(
        source: &S,
        mut host: H,
        controller: Rc<ControllerState>,
        config: MenuConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self>
    where
        S: ItemSource<Handle = H::Handle>,
    {
        let items = collect_items(source)?;

        host.remove_from_tab_order(FocusTarget::Menu);
        for item in items.iter() {
            host.remove_from_tab_order(FocusTarget::Item(item.id()));
        }

        Ok(Self {
            items,
            visibility: VisibilityController::new(controller, config.close_delay),
            host,
            clock,
            config,
        })
    }

    // Controller signals

    /// Click (or Enter/Space) on the controller.
    pub fn on_activate(&mut self) {
        self.handle(MenuEvent::ControllerClick);
    }

    pub fn on_controller_key(&mut self, key: impl Into<KeyEvent>) -> KeyOutcome {
        self.handle(MenuEvent::ControllerKey(key.into()))
    }

    pub fn on_controller_hover_enter(&mut self) {
        self.handle(MenuEvent::ControllerPointerEnter);
    }

    pub fn on_controller_hover_leave(&mut self) {
        self.handle(MenuEvent::ControllerPointerLeave);
    }

    // Item signals

    pub fn on_item_key(&mut self, item: ItemId, key: impl Into<KeyEvent>) -> KeyOutcome {
        self.handle(MenuEvent::ItemKey(item, key.into()))
    }

    pub fn on_item_commit(&mut self, item: ItemId) {
        self.handle(MenuEvent::ItemClick(item));
    }

    pub fn on_item_focus(&mut self, item: ItemId) {
        self.handle(MenuEvent::ItemFocus(item));
    }

    pub fn on_item_blur(&mut self, item: ItemId) {
        self.handle(MenuEvent::ItemBlur(item));
    }

    // Container signals

    pub fn on_menu_hover_enter(&mut self) {
        self.handle(MenuEvent::MenuPointerEnter);
    }

    pub fn on_menu_hover_leave(&mut self) {
        self.handle(MenuEvent::MenuPointerLeave);
    }

    /// Classifies `event` and runs the resulting commands in order.
    pub fn handle(&mut self, event: MenuEvent) -> KeyOutcome {
        let (commands, outcome) = classify(&event, &self.config);
        for command in commands {
            self.dispatch(command);
        }
        outcome
    }

    pub fn dispatch(&mut self, command: Command) {
        log::trace!("dispatch {command:?}");
        match command {
            Command::Open { focus } => {
                self.open();
                if let Some(dir) = focus {
                    self.move_focus(None, dir);
                }
            }
            Command::Close(Close::Dismiss) => {
                self.host.focus_controller();
                self.close();
            }
            Command::Close(Close::Deferred) => {
                match self.visibility.request_close(self.clock.now()) {
                    Some(at) => log::trace!(
                        "deferred close at {at:?} ({} pending)",
                        self.visibility.pending()
                    ),
                    None => log::warn!("close delay out of range; deferred close dropped"),
                }
            }
            Command::MoveFocus { from, to } => self.move_focus(from, to),
            Command::Search { from, ch } => {
                if !self.config.typeahead {
                    return;
                }
                match navigation::checked_find_by_char(&self.items, from, ch) {
                    Ok(Some(id)) => self.host.focus_item(&self.items[id]),
                    Ok(None) => log::trace!("no item starts with {ch:?}"),
                    Err(e) => log::warn!("typeahead from {from}: {e}"),
                }
            }
            Command::Commit(item) => {
                let Some(chosen) = self.items.get(item) else {
                    log::warn!("commit on unknown item {item}");
                    return;
                };
                log::debug!("commit {item} {:?}", chosen.label());
                self.host.item_committed(chosen);
                self.host.focus_controller();
                self.close();
            }
            Command::Hover {
                target: HoverTarget::Controller,
                hovered,
            } => self.visibility.controller().set_hovered(hovered),
            Command::Hover {
                target: HoverTarget::Menu,
                hovered,
            } => self.visibility.set_hover(hovered),
            Command::Focus { item, focused } => {
                if self.items.get(item).is_none() {
                    log::warn!("focus change on unknown item {item}");
                    return;
                }
                self.visibility.set_focus(focused);
            }
        }
    }

    /// Runs every deferred close that is due. Returns how many fired.
    pub fn poll_timers(&mut self) -> usize {
        let (fired, closed) = self.visibility.poll(self.clock.now());
        if closed {
            log::debug!("menu closed after delay");
            self.hidden();
        }
        fired
    }

    /// When the host should next call [`PopupMenu::poll_timers`].
    pub fn next_deadline(&self) -> Option<Instant> {
        self.visibility.next_deadline()
    }

    pub fn pending_closes(&self) -> usize {
        self.visibility.pending()
    }

    // Accessors

    pub fn visibility(&self) -> Visibility {
        self.visibility.visibility()
    }

    pub fn is_open(&self) -> bool {
        self.visibility() == Visibility::Open
    }

    pub fn state(&self) -> MenuState {
        self.visibility.state()
    }

    pub fn registry(&self) -> &ItemRegistry<H::Handle> {
        &self.items
    }

    pub fn controller(&self) -> &Rc<ControllerState> {
        self.visibility.controller()
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Unconditional close; also used by Escape, Tab and commit.
    pub fn close(&mut self) {
        if self.visibility.force_close() {
            log::debug!("menu closed");
            self.hidden();
        }
    }

    pub fn open(&mut self) {
        if self.visibility.request_open() {
            let origin = self.host.menu_origin();
            log::debug!("menu open at ({}, {})", origin.x, origin.y);
            self.host.show(origin);
            self.host.set_expanded(true);
        }
    }

    fn hidden(&mut self) {
        self.host.hide();
        self.host.set_expanded(false);
    }

    fn move_focus(&mut self, from: Option<ItemId>, to: Direction) {
        let target = match from {
            Some(cur) => navigation::checked_step(&self.items, cur, to),
            None => Ok(navigation::step(&self.items, None, to)),
        };
        match target {
            Ok(Some(id)) => self.host.focus_item(&self.items[id]),
            Ok(None) => {}
            Err(e) => log::warn!("focus move {to:?}: {e}"),
        }
    }
}
