mod core;
mod lifecycle;
mod nav;
pub(crate) mod stack;

#[cfg(test)]
mod tests;

pub use core::PageManager;
pub use nav::{NavOutcome, RejectReason};
