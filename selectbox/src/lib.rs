pub mod buffer;
pub mod config;
pub mod error;
pub mod event;
pub mod layout;
pub mod listeners;
pub mod logging;
pub mod option;
pub mod painter;
pub mod position;
pub mod props;
pub mod select;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell, Pen};
pub use config::{SelectConfig, SelectTheme};
pub use error::SelectError;
pub use event::{ChangeEvent, Event, EventResult, Key, Modifiers, MouseButton, Outcome};
pub use layout::Rect;
pub use listeners::{ListenerGuard, ListenerKind, Listeners};
pub use option::SelectOption;
pub use painter::Painter;
pub use position::PositionStyle;
pub use props::SelectProps;
pub use select::row::{OptionRow, RowEvent};
pub use select::state::{Action, WidgetState};
pub use select::{Select, SelectId, SelectLayout};
pub use types::{Color, Rgb, TextStyle};
