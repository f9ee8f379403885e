//! Open/closed state of the select as a reducer over typed actions.

use crate::option::SelectOption;
use crate::position::PositionStyle;
use crate::text::initial_letter;

/// State owned by the select container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetState {
    pub open: bool,
    pub highlighted_index: usize,
    pub position: PositionStyle,
}

impl WidgetState {
    pub const fn new(max_height: u16) -> Self {
        Self {
            open: false,
            highlighted_index: 0,
            position: PositionStyle::new(max_height),
        }
    }
}

/// Every way the container state can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowOptions,
    HideOptions,
    SetHighlightedIndex(usize),
    UpdatePosition(PositionStyle),
}

pub fn reduce(state: WidgetState, action: Action) -> WidgetState {
    match action {
        Action::ShowOptions => WidgetState {
            open: true,
            ..state
        },
        Action::HideOptions => WidgetState {
            open: false,
            ..state
        },
        Action::SetHighlightedIndex(highlighted_index) => WidgetState {
            highlighted_index,
            ..state
        },
        Action::UpdatePosition(position) => WidgetState { position, ..state },
    }
}

/// Move `current` by `delta`, wrapping past either end of a list of `len`.
pub fn shift_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = current as isize + delta;
    if next < 0 {
        len - 1
    } else if next as usize >= len {
        0
    } else {
        next as usize
    }
}

/// Find the option to highlight when `letter` is typed.
///
/// Searches for options whose label starts with `letter` (ignoring case),
/// beginning after `current` and wrapping. When none match, the following
/// letters up to `Z` are tried, then the preceding letters down to `A`.
pub fn find_by_letter(options: &[SelectOption], current: usize, letter: char) -> Option<usize> {
    if options.is_empty() || !letter.is_ascii_alphabetic() {
        return None;
    }
    let pressed = letter.to_ascii_uppercase();
    (pressed..='Z')
        .chain(('A'..pressed).rev())
        .find_map(|candidate| next_with_initial(options, current, candidate))
}

fn next_with_initial(options: &[SelectOption], current: usize, initial: char) -> Option<usize> {
    let len = options.len();
    (1..=len)
        .map(|step| (current + step) % len)
        .find(|&i| initial_letter(&options[i].name) == Some(initial))
}
