use crate::geometry::{OffsetChain, Positioner, Rect, Vec2};
use crate::registry::{ItemId, MenuItem};
use crate::semantics::FocusTarget;

/// Platform side of a popup menu: displays it, moves real input focus and
/// reflects expanded state to assistive technology.
pub trait MenuHost: Positioner {
    type Handle;

    /// Display the menu with its top-left corner at `origin`.
    fn show(&mut self, origin: Vec2);
    fn hide(&mut self);
    /// Expanded state of the owning controller.
    fn set_expanded(&mut self, expanded: bool);
    fn focus_item(&mut self, item: &MenuItem<Self::Handle>);
    fn focus_controller(&mut self);
    /// Focusable programmatically but skipped by sequential tab order.
    fn remove_from_tab_order(&mut self, target: FocusTarget);
    /// An item was chosen (click, Enter or Space).
    fn item_committed(&mut self, _item: &MenuItem<Self::Handle>) {}
}

#[derive(Clone, Debug, PartialEq)]
pub enum HostEffect {
    Show(Vec2),
    Hide,
    Expanded(bool),
    Focus(FocusTarget),
    Committed(ItemId),
    Untabbable(FocusTarget),
}

/// Host that records every effect; for tests and headless runs.
#[derive(Clone, Debug)]
pub struct RecordingHost<H = usize> {
    pub anchor: OffsetChain,
    pub effects: Vec<HostEffect>,
    _handle: std::marker::PhantomData<H>,
}

impl<H> Default for RecordingHost<H> {
    fn default() -> Self {
        Self::new(OffsetChain::default())
    }
}

impl<H> RecordingHost<H> {
    pub fn new(anchor: OffsetChain) -> Self {
        Self {
            anchor,
            effects: Vec::new(),
            _handle: std::marker::PhantomData,
        }
    }

    /// Effects recorded since the last call.
    pub fn take(&mut self) -> Vec<HostEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Most recent focus move, if any.
    pub fn focused(&self) -> Option<FocusTarget> {
        self.effects.iter().rev().find_map(|e| match e {
            HostEffect::Focus(t) => Some(*t),
            _ => None,
        })
    }

    fn record(&mut self, effect: HostEffect) {
        log::debug!("host: {effect:?}");
        self.effects.push(effect);
    }
}

impl<H> Positioner for RecordingHost<H> {
    fn anchor(&self) -> Rect {
        self.anchor.anchor()
    }
}

impl<H> MenuHost for RecordingHost<H> {
    type Handle = H;

    fn show(&mut self, origin: Vec2) {
        self.record(HostEffect::Show(origin));
    }
    fn hide(&mut self) {
        self.record(HostEffect::Hide);
    }
    fn set_expanded(&mut self, expanded: bool) {
        self.record(HostEffect::Expanded(expanded));
    }
    fn focus_item(&mut self, item: &MenuItem<H>) {
        self.record(HostEffect::Focus(FocusTarget::Item(item.id())));
    }
    fn focus_controller(&mut self) {
        self.record(HostEffect::Focus(FocusTarget::Controller));
    }
    fn remove_from_tab_order(&mut self, target: FocusTarget) {
        self.record(HostEffect::Untabbable(target));
    }
    fn item_committed(&mut self, item: &MenuItem<H>) {
        self.record(HostEffect::Committed(item.id()));
    }
}
