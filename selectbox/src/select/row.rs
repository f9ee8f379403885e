//! A single option line in the open list.

use crate::buffer::{Buffer, Pen};
use crate::config::SelectTheme;
use crate::event::{Event, MouseButton};
use crate::layout::Rect;
use crate::text::truncate_to_width;
use crate::types::TextStyle;

/// What a row reports back to its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent {
    /// The row was clicked
    Selected(usize),
    /// The pointer entered the row
    Highlighted(usize),
}

/// Stateless renderer for one option.
///
/// The container decides the flags; the row only draws them and translates
/// pointer input inside its area into [`RowEvent`]s.
#[derive(Debug, Clone, Copy)]
pub struct OptionRow<'a> {
    pub index: usize,
    pub label: &'a str,
    pub selected: bool,
    pub highlighted: bool,
}

impl<'a> OptionRow<'a> {
    pub fn new(index: usize, label: &'a str) -> Self {
        Self {
            index,
            label,
            selected: false,
            highlighted: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Highlight wins over selection; both invert the text color.
    pub fn pen(&self, theme: &SelectTheme) -> Pen {
        if self.highlighted {
            Pen::new(theme.background.to_rgb(), theme.highlighted_bg.to_rgb())
        } else if self.selected {
            Pen::new(theme.background.to_rgb(), theme.selected_bg.to_rgb())
                .style(TextStyle::new().bold())
        } else {
            Pen::new(theme.text.to_rgb(), theme.list_bg.to_rgb())
        }
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect, theme: &SelectTheme) {
        if area.is_empty() {
            return;
        }
        let pen = self.pen(theme);
        buf.fill(area, pen);

        // One column of padding on each side
        let inner = area.width.saturating_sub(2) as usize;
        let text = truncate_to_width(self.label, inner);
        buf.set_str(area.x.saturating_add(1), area.y, &text, area.right().saturating_sub(1), pen);
    }

    /// Translate pointer input over `area` into a row event.
    pub fn handle(&self, event: &Event, area: Rect) -> Option<RowEvent> {
        match *event {
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } if area.contains(x, y) => Some(RowEvent::Selected(self.index)),
            Event::MouseMove { x, y } if area.contains(x, y) => {
                Some(RowEvent::Highlighted(self.index))
            }
            _ => None,
        }
    }
}
