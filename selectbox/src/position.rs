//! Placement of the option list relative to the select and the viewport.

use crate::layout::Rect;

/// Rows the option list may take when neither the caller nor the config
/// says otherwise.
pub const DEFAULT_MAX_HEIGHT: u16 = 10;

/// Rows kept free between the bottom of the list and the viewport edge.
pub const DEFAULT_VIEWPORT_MARGIN: u16 = 1;

/// Where the option list is drawn, in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionStyle {
    pub top: u16,
    pub left: u16,
    pub width: u16,
    pub max_height: u16,
}

impl PositionStyle {
    pub const fn new(max_height: u16) -> Self {
        Self {
            top: 0,
            left: 0,
            width: 0,
            max_height,
        }
    }

    /// Place the list directly under `anchor`.
    ///
    /// The height is the smaller of `max_height` and the rows left between
    /// the anchor and the viewport bottom, minus `margin`.
    pub fn below(anchor: Rect, viewport: Rect, max_height: u16, margin: u16) -> Self {
        let remaining = viewport
            .bottom()
            .saturating_sub(anchor.bottom())
            .saturating_sub(margin);

        Self {
            top: anchor.bottom(),
            left: anchor.x,
            width: anchor.width,
            max_height: max_height.min(remaining),
        }
    }

    /// The rectangle for a list of `rows` options.
    pub fn list_rect(&self, rows: usize) -> Rect {
        let rows = u16::try_from(rows).unwrap_or(u16::MAX);
        Rect::new(self.left, self.top, self.width, rows.min(self.max_height))
    }
}
