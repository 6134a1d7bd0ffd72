mod factory;
mod headless;
mod terminal;
mod traits;

pub use factory::{ToolkitKind, create_toolkit};
pub use headless::{HeadlessToolkit, WidgetRecord};
pub use terminal::TerminalToolkit;
pub use traits::{GroupId, StyleId, TimerId, Toolkit, WidgetId};
