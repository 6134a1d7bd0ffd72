use crate::config::Config;
use crate::error::{PageError, PageResult};

use super::headless::HeadlessToolkit;
use super::terminal::TerminalToolkit;
use super::traits::Toolkit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolkitKind {
    #[default]
    Terminal,
    Headless,
}

impl ToolkitKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Headless => "headless",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "terminal" => Some(Self::Terminal),
            "headless" => Some(Self::Headless),
            _ => None,
        }
    }
}

pub fn create_toolkit(kind: ToolkitKind, config: &Config) -> PageResult<Box<dyn Toolkit>> {
    let (width, height) = (config.screen.width, config.screen.height);
    if width <= 0 || height <= 0 {
        return Err(PageError::invalid_config(format!(
            "screen size {width}x{height} is not positive"
        )));
    }
    match kind {
        ToolkitKind::Terminal => Ok(Box::new(TerminalToolkit::new(width, height))),
        ToolkitKind::Headless => Ok(Box::new(HeadlessToolkit::with_screen_size(width, height))),
    }
}
