//! Open/closed state of a popup and the debounced auto-close.

use std::cell::Cell;
use std::rc::Rc;

use web_time::{Duration, Instant};

use crate::timer::DeferredQueue;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// Focus/hover flags of the menu container and its items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub visibility: Visibility,
    /// An item (or the container) holds input focus.
    pub has_focus: bool,
    /// The pointer is over the container.
    pub has_hover: bool,
}

/// Hover flag of the element that owns the menu. Shared with the owner,
/// which may outlive the menu.
#[derive(Debug, Default)]
pub struct ControllerState {
    hovered: Cell<bool>,
}

impl ControllerState {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn hovered(&self) -> bool {
        self.hovered.get()
    }

    pub fn set_hovered(&self, hovered: bool) {
        self.hovered.set(hovered);
    }
}

pub struct VisibilityController {
    state: MenuState,
    controller: Rc<ControllerState>,
    pending: DeferredQueue,
    delay: Duration,
}

impl VisibilityController {
    pub fn new(controller: Rc<ControllerState>, delay: Duration) -> Self {
        Self {
            state: MenuState::default(),
            controller,
            pending: DeferredQueue::new(),
            delay,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn visibility(&self) -> Visibility {
        self.state.visibility
    }

    pub fn controller(&self) -> &Rc<ControllerState> {
        &self.controller
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.state.has_focus = focused;
    }

    pub fn set_hover(&mut self, hovered: bool) {
        self.state.has_hover = hovered;
    }

    /// `Closed -> Open`. Returns whether the state changed.
    pub fn request_open(&mut self) -> bool {
        if self.state.visibility == Visibility::Open {
            return false;
        }
        self.state.visibility = Visibility::Open;
        true
    }

    /// `Open -> Closed` regardless of focus and hover.
    pub fn force_close(&mut self) -> bool {
        if self.state.visibility == Visibility::Closed {
            return false;
        }
        self.state.visibility = Visibility::Closed;
        true
    }

    /// Schedules a close evaluation `delay` after `now`. Returns `None`
    /// (nothing scheduled) when that instant is not representable.
    pub fn request_close(&mut self, now: Instant) -> Option<Instant> {
        let at = now.checked_add(self.delay)?;
        self.pending.schedule(at);
        Some(at)
    }

    /// Whether a deferred evaluation firing right now would close the menu.
    pub fn should_close(&self) -> bool {
        self.state.visibility == Visibility::Open
            && !self.state.has_focus
            && !self.state.has_hover
            && !self.controller.hovered()
    }

    /// Fires every evaluation due at `now`. Returns how many fired and
    /// whether one of them closed the menu.
    pub fn poll(&mut self, now: Instant) -> (usize, bool) {
        let fired = self.pending.take_due(now);
        let mut closed = false;
        for _ in 0..fired {
            if self.should_close() {
                self.state.visibility = Visibility::Closed;
                closed = true;
            } else {
                log::trace!("deferred close skipped: {:?}", self.state);
            }
        }
        (fired, closed)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.next_deadline()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_controller() -> (VisibilityController, Instant) {
        let mut v = VisibilityController::new(ControllerState::new(), Duration::from_millis(300));
        assert!(v.request_open());
        (v, Instant::now())
    }

    #[test]
    fn open_is_idempotent() {
        let (mut v, _) = open_controller();
        assert!(!v.request_open());
        assert_eq!(v.visibility(), Visibility::Open);
    }

    #[test]
    fn force_close_ignores_flags() {
        let (mut v, _) = open_controller();
        v.set_focus(true);
        v.set_hover(true);
        v.controller().set_hovered(true);
        assert!(v.force_close());
        assert_eq!(v.visibility(), Visibility::Closed);
        assert!(!v.force_close());
    }

    #[test]
    fn deferred_close_waits_for_delay() {
        let (mut v, t0) = open_controller();
        v.request_close(t0);
        assert_eq!(v.poll(t0 + Duration::from_millis(299)), (0, false));
        assert_eq!(v.visibility(), Visibility::Open);
        assert_eq!(v.poll(t0 + Duration::from_millis(300)), (1, true));
        assert_eq!(v.visibility(), Visibility::Closed);
    }

    #[test]
    fn deferred_close_rechecks_each_flag() {
        let (mut v, t0) = open_controller();
        let fire = t0 + Duration::from_millis(300);

        v.set_focus(true);
        v.request_close(t0);
        assert_eq!(v.poll(fire), (1, false));

        v.set_focus(false);
        v.set_hover(true);
        v.request_close(t0);
        assert_eq!(v.poll(fire), (1, false));

        v.set_hover(false);
        v.controller().set_hovered(true);
        v.request_close(t0);
        assert_eq!(v.poll(fire), (1, false));
        assert_eq!(v.visibility(), Visibility::Open);
    }

    #[test]
    fn outstanding_evaluations_each_use_current_flags() {
        let (mut v, t0) = open_controller();
        v.request_close(t0);
        v.request_close(t0 + Duration::from_millis(50));
        v.set_hover(true);
        // first fires while hovered: stays open
        assert_eq!(v.poll(t0 + Duration::from_millis(300)), (1, false));
        v.set_hover(false);
        // second sees the pointer gone
        assert_eq!(v.poll(t0 + Duration::from_millis(350)), (1, true));
    }

    #[test]
    fn unrepresentable_delay_schedules_nothing() {
        let mut v = VisibilityController::new(ControllerState::new(), Duration::MAX);
        v.request_open();
        assert_eq!(v.request_close(Instant::now()), None);
        assert_eq!(v.pending(), 0);
        assert_eq!(v.visibility(), Visibility::Open);
    }

    #[test]
    fn evaluation_on_closed_menu_is_noop() {
        let mut v = VisibilityController::new(ControllerState::new(), Duration::from_millis(300));
        let t0 = Instant::now();
        v.request_close(t0);
        assert_eq!(v.poll(t0 + Duration::from_secs(1)), (1, false));
        assert_eq!(v.visibility(), Visibility::Closed);
    }
}
