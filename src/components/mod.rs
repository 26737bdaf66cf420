//! Built-in UI components

pub mod button;
pub mod popup;
pub mod text;

pub use button::Button;
pub use popup::{Alert, AlertAction, AlertState, Callback, Popup, PopupPosition, PopupResult};
pub use text::{Text, TextAlign};
