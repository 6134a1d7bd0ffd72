pub mod anim;
pub mod config;
pub mod demo;
pub mod error;
pub mod event;
pub mod manager;
pub mod page;
pub mod toolkit;

pub use anim::{AnimAttr, AnimCurve, AnimDescriptor, AnimKind};
pub use config::Config;
pub use error::{PageError, PageResult};
pub use event::PageEvent;
pub use manager::{NavOutcome, PageManager, RejectReason};
pub use page::{PageCtx, PageDelegate, PageDescriptor, PageState};
pub use toolkit::{Toolkit, ToolkitKind, create_toolkit};
