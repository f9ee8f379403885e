//! Select widget - a dropdown container with keyboard and mouse navigation.
//!
//! The container provides:
//! - Open/closed state driven by a typed reducer ([`state`])
//! - A highlighted-index cursor that wraps at both ends
//! - Placement of the option list under the box, clamped to the viewport
//! - Screen-wide listeners held only while the list is open
//!
//! # Example
//!
//! ```
//! use selectbox::{Buffer, Event, Key, Listeners, Rect, Select, SelectOption, SelectProps};
//!
//! let listeners = Listeners::new();
//! let mut select = Select::new(listeners.clone());
//! let props = SelectProps::new(
//!     "period",
//!     "All",
//!     vec![
//!         SelectOption::new("All", "All"),
//!         SelectOption::new("12 hours", "12"),
//!         SelectOption::new("24 hours", "24"),
//!     ],
//!     "Period",
//! );
//!
//! select.mount(&props, Rect::new(0, 0, 20, 2), Rect::from_size(80, 24));
//! select.handle_event(&props, &Event::click(1, 1));
//! select.handle_event(&props, &Event::key(Key::Down));
//! let outcome = select.handle_event(&props, &Event::key(Key::Enter));
//!
//! assert_eq!(outcome.change.unwrap().value, "12");
//! assert!(listeners.is_empty());
//! ```

mod events;
mod render;
pub mod row;
pub mod state;

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::SelectConfig;
use crate::event::ChangeEvent;
use crate::layout::Rect;
use crate::listeners::{ListenerGuard, Listeners};
use crate::position::PositionStyle;
use crate::props::SelectProps;

use state::{reduce, shift_index, Action, WidgetState};

/// Rows taken by the widget itself: the label row and the box.
pub const SELECT_HEIGHT: u16 = 2;

/// Unique identifier for a Select widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SelectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__select_{}", self.0)
    }
}

/// Screen areas of the widget's parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectLayout {
    /// Label row and box together; the list is placed under this.
    pub container: Rect,
    pub label: Rect,
    pub field: Rect,
}

/// The select container.
///
/// Holds the open state, the highlighted index and the list placement. The
/// selected value stays with the caller in [`SelectProps::value`].
#[derive(Debug)]
pub struct Select {
    id: SelectId,
    config: SelectConfig,
    listeners: Listeners,
    state: WidgetState,
    /// Present exactly while the list is open
    guard: Option<ListenerGuard>,
    focused: bool,
    disabled: bool,
    anchor: Rect,
    viewport: Rect,
    scroll_offset: u16,
}

impl Select {
    pub fn new(listeners: Listeners) -> Self {
        Self::with_config(listeners, SelectConfig::default())
    }

    pub fn with_config(listeners: Listeners, config: SelectConfig) -> Self {
        Self {
            id: SelectId::new(),
            state: WidgetState::new(config.max_height),
            config,
            listeners,
            guard: None,
            focused: false,
            disabled: false,
            anchor: Rect::default(),
            viewport: Rect::default(),
            scroll_offset: 0,
        }
    }

    pub fn id(&self) -> SelectId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn highlighted_index(&self) -> usize {
        self.state.highlighted_index
    }

    pub fn position(&self) -> PositionStyle {
        self.state.position
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// First option index shown in the list.
    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    /// Whether this widget currently holds screen-wide listeners.
    pub fn is_listening(&self) -> bool {
        self.guard.is_some()
    }

    /// Split `area` into the widget's parts. A `width` prop narrows the
    /// widget; it never grows past `area`.
    pub fn layout(props: &SelectProps, area: Rect) -> SelectLayout {
        let width = props.width.map_or(area.width, |w| w.min(area.width));
        let container = Rect::new(area.x, area.y, width, SELECT_HEIGHT.min(area.height));
        SelectLayout {
            container,
            label: Rect::new(area.x, area.y, width, 1),
            field: Rect::new(area.x, area.y.saturating_add(1), width, 1),
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Place the widget for the first time and compute the list position.
    /// Takes focus when `auto_focus` is set and the widget is enabled.
    pub fn mount(&mut self, props: &SelectProps, area: Rect, viewport: Rect) {
        self.anchor = Self::layout(props, area).container;
        self.viewport = viewport;
        self.sync_props(props);
        self.update_position(props);
        if props.auto_focus && !props.disabled {
            self.focused = true;
        }
        log::debug!(
            "[select] {} mounted at {:?} focused={}",
            self.id,
            self.anchor,
            self.focused
        );
    }

    /// Close the list and drop every listener. Dropping the widget does the
    /// same.
    pub fn unmount(&mut self) {
        self.hide();
        self.focused = false;
        log::debug!("[select] {} unmounted", self.id);
    }

    /// Move the widget, e.g. after the host scrolled its content.
    pub fn set_area(&mut self, props: &SelectProps, area: Rect) {
        let anchor = Self::layout(props, area).container;
        if anchor != self.anchor {
            self.anchor = anchor;
            self.update_position(props);
        }
    }

    /// Apply prop changes that affect state: disabling closes the list and
    /// drops focus, and the highlight is kept inside the option range.
    pub fn sync_props(&mut self, props: &SelectProps) {
        if props.disabled && !self.disabled {
            log::debug!("[select] {} disabled", self.id);
            self.hide();
            self.focused = false;
        }
        self.disabled = props.disabled;

        let len = props.options.len();
        let highlighted = self.state.highlighted_index;
        if len == 0 && highlighted != 0 {
            self.dispatch(Action::SetHighlightedIndex(0));
        } else if len > 0 && highlighted >= len {
            self.dispatch(Action::SetHighlightedIndex(len - 1));
            self.clamp_scroll(len);
            if self.state.open {
                self.scroll_into_view(len - 1, len);
            }
        }
    }

    pub fn focus(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.focused = true;
        true
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.hide();
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    fn dispatch(&mut self, action: Action) {
        self.state = reduce(self.state, action);
        log::trace!("[select] {} {:?} -> {:?}", self.id, action, self.state);
    }

    fn max_height(&self, props: &SelectProps) -> u16 {
        props.max_height.unwrap_or(self.config.max_height)
    }

    /// Recompute the list placement from the anchor and viewport.
    fn update_position(&mut self, props: &SelectProps) {
        // An unknown viewport does not limit the list
        let viewport = if self.viewport.is_empty() {
            Rect::from_size(u16::MAX, u16::MAX)
        } else {
            self.viewport
        };
        let position = PositionStyle::below(
            self.anchor,
            viewport,
            self.max_height(props),
            self.config.viewport_margin,
        );
        self.dispatch(Action::UpdatePosition(position));
        self.clamp_scroll(props.options.len());
    }

    pub(crate) fn show(&mut self, props: &SelectProps) -> bool {
        if self.disabled || self.state.open {
            return false;
        }
        self.dispatch(Action::ShowOptions);
        self.update_position(props);
        if self.guard.is_none() {
            self.guard = Some(self.listeners.acquire(self.id_string()));
        }
        self.scroll_into_view(self.state.highlighted_index, props.options.len());
        log::debug!("[select] {} opened at {:?}", self.id, self.state.position);
        true
    }

    pub(crate) fn hide(&mut self) -> bool {
        if !self.state.open {
            return false;
        }
        self.dispatch(Action::HideOptions);
        self.guard = None;
        log::debug!("[select] {} closed", self.id);
        true
    }

    fn toggle(&mut self, props: &SelectProps) {
        if self.state.open {
            self.hide();
        } else {
            self.show(props);
        }
    }

    fn shift_highlight(&mut self, props: &SelectProps, delta: isize) {
        let len = props.options.len();
        if len == 0 {
            return;
        }
        let index = shift_index(self.state.highlighted_index, delta, len);
        self.set_highlight(index, len);
    }

    fn set_highlight(&mut self, index: usize, len: usize) {
        self.dispatch(Action::SetHighlightedIndex(index));
        self.scroll_into_view(index, len);
    }

    /// Close the list and propose `index` as the new value.
    ///
    /// Returns no event when the option is already the controlled value.
    fn commit(&mut self, props: &SelectProps, index: usize) -> Option<ChangeEvent> {
        self.hide();
        let option = props.options.get(index)?;
        if option.value == props.value {
            log::debug!("[select] {} kept '{}'", self.id, option.value);
            return None;
        }
        log::debug!("[select] {} changed to '{}'", self.id, option.value);
        Some(ChangeEvent {
            name: props.name.clone(),
            value: option.value.clone(),
        })
    }

    // -------------------------------------------------------------------------
    // List scrolling
    // -------------------------------------------------------------------------

    fn visible_rows(&self, len: usize) -> u16 {
        self.state.position.list_rect(len).height
    }

    fn scroll_into_view(&mut self, index: usize, len: usize) {
        let rows = self.visible_rows(len);
        if rows == 0 {
            self.scroll_offset = 0;
            return;
        }
        let index = u16::try_from(index).unwrap_or(u16::MAX);
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset.saturating_add(rows) {
            self.scroll_offset = index.saturating_add(1) - rows;
        }
    }

    fn scroll_by(&mut self, delta: i16, len: usize) -> bool {
        let max = self.max_scroll(len);
        let next = (i32::from(self.scroll_offset) + i32::from(delta)).clamp(0, i32::from(max));
        let next = u16::try_from(next).unwrap_or(max);
        let changed = next != self.scroll_offset;
        self.scroll_offset = next;
        changed
    }

    fn max_scroll(&self, len: usize) -> u16 {
        u16::try_from(len)
            .unwrap_or(u16::MAX)
            .saturating_sub(self.visible_rows(len))
    }

    fn clamp_scroll(&mut self, len: usize) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll(len));
    }
}
