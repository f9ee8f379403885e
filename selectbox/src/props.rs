//! Caller-owned inputs to the select widget.

use std::fmt;
use std::sync::Arc;

use crate::error::SelectError;
use crate::option::SelectOption;
use crate::types::Color;

/// Per-option render override. Returns the text drawn for the option in the
/// list instead of its `name`.
pub type DisplayFn = Arc<dyn Fn(&SelectOption) -> String + Send + Sync>;

/// Properties supplied by the embedding application on every frame.
///
/// The select never stores the selected value itself: `value` is the source
/// of truth, and the widget proposes changes through
/// [`ChangeEvent`](crate::ChangeEvent).
///
/// # Example
///
/// ```
/// use selectbox::{SelectOption, SelectProps};
///
/// let props = SelectProps::new(
///     "period",
///     "All",
///     vec![
///         SelectOption::new("All", "All"),
///         SelectOption::new("12 hours", "12"),
///     ],
///     "Period",
/// )
/// .placeholder("Choose a period")
/// .required(true);
///
/// assert_eq!(props.selected_option().unwrap().unwrap().name, "All");
/// ```
#[derive(Clone)]
pub struct SelectProps {
    pub name: String,
    pub value: String,
    pub options: Vec<SelectOption>,
    pub label_text: String,
    pub label_color: Option<Color>,
    pub placeholder: Option<String>,
    pub auto_focus: bool,
    pub display: Option<DisplayFn>,
    pub required: bool,
    pub tab_index: Option<u16>,
    pub width: Option<u16>,
    pub max_height: Option<u16>,
    pub grey: bool,
    pub disabled: bool,
}

impl SelectProps {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        options: Vec<SelectOption>,
        label_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            options,
            label_text: label_text.into(),
            label_color: None,
            placeholder: None,
            auto_focus: false,
            display: None,
            required: false,
            tab_index: None,
            width: None,
            max_height: None,
            grey: false,
            disabled: false,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn label_color(mut self, color: Color) -> Self {
        self.label_color = Some(color);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    pub fn display<F>(mut self, display: F) -> Self
    where
        F: Fn(&SelectOption) -> String + Send + Sync + 'static,
    {
        self.display = Some(Arc::new(display));
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn tab_index(mut self, tab_index: u16) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn max_height(mut self, max_height: u16) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn grey(mut self, grey: bool) -> Self {
        self.grey = grey;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The option matching the controlled value.
    ///
    /// `Ok(None)` when the value is empty (the placeholder is shown).
    pub fn selected_option(&self) -> Result<Option<&SelectOption>, SelectError> {
        if self.value.is_empty() {
            return Ok(None);
        }
        self.options
            .iter()
            .find(|o| o.value == self.value)
            .map(Some)
            .ok_or_else(|| SelectError::UnknownValue {
                name: self.name.clone(),
                value: self.value.clone(),
            })
    }

    /// Text shown in the box: the selected option's label or the placeholder.
    pub fn box_text(&self) -> Result<String, SelectError> {
        Ok(match self.selected_option()? {
            Some(option) => option.name.clone(),
            None => self.placeholder.clone().unwrap_or_default(),
        })
    }

    /// Text drawn for an option row, honoring the display override.
    pub fn option_text(&self, option: &SelectOption) -> String {
        match &self.display {
            Some(display) => display(option),
            None => option.name.clone(),
        }
    }

    /// Tab order position; `None` takes the widget out of the tab order.
    pub fn effective_tab_index(&self) -> Option<u16> {
        if self.disabled {
            None
        } else {
            Some(self.tab_index.unwrap_or(0))
        }
    }

    /// Whether the box is drawn greyed out.
    pub fn is_greyed(&self) -> bool {
        self.grey || self.disabled
    }
}

impl fmt::Debug for SelectProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectProps")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("options", &self.options)
            .field("label_text", &self.label_text)
            .field("label_color", &self.label_color)
            .field("placeholder", &self.placeholder)
            .field("auto_focus", &self.auto_focus)
            .field("display", &self.display.as_ref().map(|_| "<fn>"))
            .field("required", &self.required)
            .field("tab_index", &self.tab_index)
            .field("width", &self.width)
            .field("max_height", &self.max_height)
            .field("grey", &self.grey)
            .field("disabled", &self.disabled)
            .finish()
    }
}
