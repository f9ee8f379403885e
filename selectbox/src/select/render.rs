//! Rendering for the Select widget.

use crate::buffer::{Buffer, Pen};
use crate::config::SelectTheme;
use crate::error::SelectError;
use crate::layout::Rect;
use crate::props::SelectProps;
use crate::text::{display_width, truncate_to_width};
use crate::types::TextStyle;

use super::row::OptionRow;
use super::Select;

const REQUIRED_MARKER: &str = "Required";

impl Select {
    /// Draw the label row, the box and, when open, the option list.
    ///
    /// Fails without drawing when the controlled value is not among the
    /// options.
    pub fn render(
        &mut self,
        props: &SelectProps,
        buf: &mut Buffer,
        area: Rect,
    ) -> Result<(), SelectError> {
        self.sync_props(props);
        let text = props.box_text()?;

        if self.viewport.is_empty() {
            self.viewport = buf.area();
        }
        let layout = Self::layout(props, area);
        self.set_area(props, area);

        let theme = &self.config.theme;
        render_label(buf, layout.label, props, theme);
        render_field(buf, layout.field, props, &text, self.is_open(), self.focused, theme);

        if self.is_open() {
            let list = self.state.position.list_rect(props.options.len());
            render_list(buf, list, props, self.highlighted_index(), self.scroll_offset, theme);
        }

        Ok(())
    }
}

fn render_label(buf: &mut Buffer, area: Rect, props: &SelectProps, theme: &SelectTheme) {
    if area.is_empty() {
        return;
    }
    let background = theme.background.to_rgb();
    let label_color = props.label_color.unwrap_or(theme.label);
    let pen = Pen::new(label_color.to_rgb(), background);
    buf.fill(area, Pen::new(theme.text.to_rgb(), background));

    let marker_width = if props.required {
        display_width(REQUIRED_MARKER) as u16 + 1
    } else {
        0
    };
    let label_room = area.width.saturating_sub(marker_width) as usize;
    let label = truncate_to_width(&props.label_text, label_room);
    buf.set_str(area.x, area.y, &label, area.right(), pen);

    if props.required && area.width >= marker_width {
        let x = area.right() - marker_width + 1;
        let marker_pen = Pen::new(theme.required.to_rgb(), background).style(TextStyle::new().italic());
        buf.set_str(x, area.y, REQUIRED_MARKER, area.right(), marker_pen);
    }
}

fn render_field(
    buf: &mut Buffer,
    area: Rect,
    props: &SelectProps,
    text: &str,
    open: bool,
    focused: bool,
    theme: &SelectTheme,
) {
    if area.is_empty() {
        return;
    }

    let bg = if props.is_greyed() {
        theme.grey_bg
    } else if focused {
        theme.focused_bg
    } else {
        theme.box_bg
    }
    .to_rgb();

    let mut style = TextStyle::new();
    if focused {
        style = style.bold();
    }
    if props.disabled {
        style = style.dim();
    }

    let is_placeholder = props.value.is_empty();
    let fg = if is_placeholder {
        theme.placeholder
    } else {
        theme.text
    };
    let text_pen = Pen::new(fg.to_rgb(), bg).style(style);
    buf.fill(area, Pen::new(theme.text.to_rgb(), bg));

    // [pad][text ...][space][arrow][pad]
    let text_room = area.width.saturating_sub(4) as usize;
    let shown = truncate_to_width(text, text_room);
    buf.set_str(area.x.saturating_add(1), area.y, &shown, area.right().saturating_sub(3), text_pen);

    if area.width >= 2 {
        let arrow = if open { "▲" } else { "▼" };
        let arrow_pen = Pen::new(theme.muted.to_rgb(), bg).style(TextStyle::new().dim());
        buf.set_str(area.right() - 2, area.y, arrow, area.right(), arrow_pen);
    }
}

fn render_list(
    buf: &mut Buffer,
    list: Rect,
    props: &SelectProps,
    highlighted: usize,
    scroll_offset: u16,
    theme: &SelectTheme,
) {
    let visible = list.intersection(buf.area());
    if visible.is_empty() {
        return;
    }
    buf.fill(visible, Pen::new(theme.text.to_rgb(), theme.list_bg.to_rgb()));

    for offset in 0..list.height {
        let index = usize::from(scroll_offset) + usize::from(offset);
        let Some(option) = props.options.get(index) else {
            break;
        };
        let Some(row_area) = list.row(offset) else {
            break;
        };
        let label = props.option_text(option);
        OptionRow::new(index, &label)
            .selected(option.value == props.value)
            .highlighted(index == highlighted)
            .render(buf, row_area.intersection(visible), theme);
    }
}
