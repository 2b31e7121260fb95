#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Lower-left corner: where a drop-down opens below this rect.
    pub fn below(&self) -> Vec2 {
        Vec2 {
            x: self.x,
            y: self.y + self.h,
        }
    }
}

/// One link of an offset-parent chain, innermost first.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OffsetBox {
    /// Offset relative to the next box in the chain.
    pub offset: Vec2,
    /// Current scroll position of this box.
    pub scroll: Vec2,
    /// Border width between the box edge and its client area.
    pub client: Vec2,
}

/// Sums `offset - scroll + client` over the whole chain.
pub fn accumulate_origin(chain: impl IntoIterator<Item = OffsetBox>) -> Vec2 {
    chain.into_iter().fold(Vec2::default(), |acc, b| Vec2 {
        x: acc.x + b.offset.x - b.scroll.x + b.client.x,
        y: acc.y + b.offset.y - b.scroll.y + b.client.y,
    })
}

/// Supplies the controller's on-screen box so the menu can be placed
/// relative to it.
pub trait Positioner {
    /// Accumulated origin and size of the controller.
    fn anchor(&self) -> Rect;

    /// Origin for the popup: `left = anchor.x`, `top = anchor.y + anchor.h`.
    fn menu_origin(&self) -> Vec2 {
        self.anchor().below()
    }
}

/// Positioner backed by an explicit offset-parent chain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OffsetChain {
    pub chain: Vec<OffsetBox>,
    pub size: Size,
}

impl OffsetChain {
    pub fn new(chain: Vec<OffsetBox>, size: Size) -> Self {
        Self { chain, size }
    }
}

impl Positioner for OffsetChain {
    fn anchor(&self) -> Rect {
        let origin = accumulate_origin(self.chain.iter().copied());
        Rect {
            x: origin.x,
            y: origin.y,
            w: self.size.width,
            h: self.size.height,
        }
    }
}
