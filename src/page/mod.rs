mod descriptor;
mod instance;
mod registry;

pub use descriptor::{PageCtx, PageDelegate, PageDescriptor};
pub use instance::{PageInstance, PageRef, PageResources, PageState};
pub use registry::PageRegistry;
