//! Event handling for the Select widget.

use crate::event::{Event, Key, Modifiers, MouseButton, Outcome};
use crate::layout::Rect;
use crate::props::SelectProps;

use super::row::{OptionRow, RowEvent};
use super::state::{find_by_letter, Action};
use super::Select;

impl Select {
    /// Feed one input event to the widget.
    ///
    /// Keys only reach a focused widget. Clicks, scrolls and resizes are
    /// screen-wide: while the list is open the widget reacts to them even
    /// when they land elsewhere, which is how outside clicks close it.
    pub fn handle_event(&mut self, props: &SelectProps, event: &Event) -> Outcome {
        self.sync_props(props);

        match *event {
            Event::Key { key, modifiers } => self.on_key(props, key, modifiers),
            Event::Click { x, y, button } => self.on_click(props, event, x, y, button),
            Event::MouseMove { x, y } => self.on_hover(props, event, x, y),
            Event::Scroll { x, y, delta } => self.on_scroll(props, x, y, delta),
            Event::Resize { width, height } => self.on_resize(props, width, height),
        }
    }

    fn on_key(&mut self, props: &SelectProps, key: Key, modifiers: Modifiers) -> Outcome {
        if !self.focused || self.disabled || modifiers.is_chord() {
            return Outcome::ignored();
        }

        let open = self.is_open();
        let len = props.options.len();

        match key {
            Key::Up if open => self.shift_highlight(props, -1),
            Key::Down if open => self.shift_highlight(props, 1),
            Key::Up | Key::Down | Key::Char(' ') if !open => {
                self.show(props);
            }
            Key::Enter | Key::Char(' ') if open => {
                let index = self.highlighted_index();
                return Outcome::changed(self.commit(props, index));
            }
            Key::Escape if open => {
                self.hide();
            }
            // Focus stays on the widget while choosing
            Key::Tab | Key::BackTab if open => {}
            Key::Home if open && len > 0 => self.set_highlight(0, len),
            Key::End if open && len > 0 => self.set_highlight(len - 1, len),
            Key::Char(c) if open && c.is_ascii_alphabetic() => {
                if let Some(index) = find_by_letter(&props.options, self.highlighted_index(), c) {
                    self.set_highlight(index, len);
                }
            }
            _ => return Outcome::ignored(),
        }

        Outcome::consumed()
    }

    fn on_click(
        &mut self,
        props: &SelectProps,
        event: &Event,
        x: u16,
        y: u16,
        button: MouseButton,
    ) -> Outcome {
        if let Some(list) = self.open_list_rect(props) {
            if list.contains(x, y) {
                return match self.row_event(props, list, event, y) {
                    Some(RowEvent::Selected(index)) => {
                        Outcome::changed(self.commit(props, index))
                    }
                    _ => Outcome::consumed(),
                };
            }
        }

        if self.anchor.contains(x, y) {
            if self.disabled || button != MouseButton::Left {
                return Outcome::ignored();
            }
            self.focused = true;
            self.toggle(props);
            return Outcome::consumed();
        }

        // Anywhere else: only a primary click counts as leaving the widget
        if button != MouseButton::Left {
            return Outcome::ignored();
        }
        if self.is_listening() {
            log::debug!("[select] {} outside click at ({}, {})", self.id, x, y);
            self.hide();
        }
        self.focused = false;
        Outcome::ignored()
    }

    fn on_hover(&mut self, props: &SelectProps, event: &Event, x: u16, y: u16) -> Outcome {
        let Some(list) = self.open_list_rect(props) else {
            return Outcome::ignored();
        };
        if !list.contains(x, y) {
            return Outcome::ignored();
        }

        if let Some(RowEvent::Highlighted(index)) = self.row_event(props, list, event, y) {
            if index != self.highlighted_index() {
                self.dispatch(Action::SetHighlightedIndex(index));
            }
        }
        Outcome::consumed()
    }

    fn on_scroll(&mut self, props: &SelectProps, x: u16, y: u16, delta: i16) -> Outcome {
        let Some(list) = self.open_list_rect(props) else {
            return Outcome::ignored();
        };

        if list.contains(x, y) {
            self.scroll_by(delta, props.options.len());
            return Outcome::consumed();
        }

        // The page moved under the list; the host reports the new area via
        // set_area, so only the placement is refreshed here.
        self.update_position(props);
        Outcome::ignored()
    }

    fn on_resize(&mut self, props: &SelectProps, width: u16, height: u16) -> Outcome {
        self.viewport = Rect::from_size(width, height);
        if self.is_listening() {
            self.update_position(props);
        }
        Outcome::ignored()
    }

    /// The list rectangle, when the list is open.
    fn open_list_rect(&self, props: &SelectProps) -> Option<Rect> {
        if !self.is_open() {
            return None;
        }
        Some(self.state.position.list_rect(props.options.len()))
    }

    /// Let the row under `y` translate `event`.
    fn row_event(&self, props: &SelectProps, list: Rect, event: &Event, y: u16) -> Option<RowEvent> {
        let offset = y.checked_sub(list.y)?;
        let index = usize::from(self.scroll_offset) + usize::from(offset);
        let option = props.options.get(index)?;
        let area = list.row(offset)?;
        OptionRow::new(index, &option.name).handle(event, area)
    }
}
