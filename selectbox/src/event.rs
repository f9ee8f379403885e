//! Input events fed to the widget and the change notification it emits.

/// Input events the widget reacts to.
///
/// Coordinates are absolute screen cells. Hosts translate their terminal
/// events with [`Event::from_crossterm`] or build these directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press, delivered to the focused widget
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button press
    Click { x: u16, y: u16, button: MouseButton },
    /// Mouse move (hover tracking)
    MouseMove { x: u16, y: u16 },
    /// Mouse wheel; positive `delta` scrolls down
    Scroll { x: u16, y: u16, delta: i16 },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Plain key press without modifiers.
    pub fn key(key: Key) -> Self {
        Self::Key {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// Left click at the given cell.
    pub fn click(x: u16, y: u16) -> Self {
        Self::Click {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    /// Convert a crossterm event. Returns `None` for events the widget never
    /// handles (focus changes, paste, key releases, unsupported keys).
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

        match event {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => {
                let code = Key::try_from(key.code).ok()?;
                Some(Self::Key {
                    key: code,
                    modifiers: key.modifiers.into(),
                })
            }
            CtEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(button) => Some(Self::Click {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Moved => Some(Self::MouseMove { x, y }),
                    MouseEventKind::ScrollUp => Some(Self::Scroll { x, y, delta: -1 }),
                    MouseEventKind::ScrollDown => Some(Self::Scroll { x, y, delta: 1 }),
                    _ => None,
                }
            }
            CtEvent::Resize(width, height) => Some(Self::Resize { width, height }),
            _ => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    /// True when ctrl or alt is held. Shift alone still types letters.
    pub fn is_chord(&self) -> bool {
        self.ctrl || self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Whether the widget consumed an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The widget handled the event; the host should not act on it further.
    Consumed,
    /// The widget did not use the event.
    Ignored,
}

/// Emitted when the user commits an option whose value differs from the
/// controlled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// The widget's configured `name`.
    pub name: String,
    /// The newly chosen option value.
    pub value: String,
}

/// Result of feeding one event to the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub result: EventResult,
    pub change: Option<ChangeEvent>,
}

impl Outcome {
    pub(crate) fn consumed() -> Self {
        Self {
            result: EventResult::Consumed,
            change: None,
        }
    }

    pub(crate) fn ignored() -> Self {
        Self {
            result: EventResult::Ignored,
            change: None,
        }
    }

    pub(crate) fn changed(change: Option<ChangeEvent>) -> Self {
        Self {
            result: EventResult::Consumed,
            change,
        }
    }

    pub fn is_consumed(&self) -> bool {
        self.result == EventResult::Consumed
    }
}

/// Error for crossterm key codes with no [`Key`] equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedKey;

impl TryFrom<crossterm::event::KeyCode> for Key {
    type Error = UnsupportedKey;

    fn try_from(code: crossterm::event::KeyCode) -> Result<Self, Self::Error> {
        use crossterm::event::KeyCode;
        Ok(match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => return Err(UnsupportedKey),
        })
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
