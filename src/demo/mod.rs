mod event_loop;
mod pages;
mod session;

pub use event_loop::run;
pub use pages::demo_descriptors;
