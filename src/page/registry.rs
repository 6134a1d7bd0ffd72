use std::sync::Arc;

use log::{debug, warn};

use crate::error::{PageError, PageResult};

use super::descriptor::PageDescriptor;

/// Pool of registered page descriptors, keyed by identity.
///
/// Two descriptors may share a display name; only `Arc::ptr_eq` decides
/// whether a descriptor is "the same page". The on-stack guard for
/// unregistration lives in the manager, which owns the stack.
#[derive(Default)]
pub struct PageRegistry {
    pool: Vec<Arc<PageDescriptor>>,
}

impl PageRegistry {
    pub fn register(&mut self, descriptor: &Arc<PageDescriptor>) -> PageResult<()> {
        if descriptor.name().is_empty() {
            warn!("rejecting descriptor with empty name");
            return Err(PageError::invalid_descriptor("page name must not be empty"));
        }
        if self.contains(descriptor) {
            warn!("descriptor \"{}\" already registered", descriptor.name());
            return Err(PageError::AlreadyRegistered(descriptor.name().to_string()));
        }

        self.pool.push(Arc::clone(descriptor));
        debug!("registered page \"{}\"", descriptor.name());
        Ok(())
    }

    /// Remove a descriptor from the pool. Absence is a logged no-op, not an
    /// error; the caller still owns the descriptor either way.
    pub fn remove(&mut self, descriptor: &Arc<PageDescriptor>) {
        let before = self.pool.len();
        self.pool.retain(|entry| !Arc::ptr_eq(entry, descriptor));
        if self.pool.len() == before {
            debug!(
                "unregister of \"{}\" skipped: not in pool",
                descriptor.name()
            );
        } else {
            debug!("unregistered page \"{}\"", descriptor.name());
        }
    }

    pub fn contains(&self, descriptor: &Arc<PageDescriptor>) -> bool {
        self.pool.iter().any(|entry| Arc::ptr_eq(entry, descriptor))
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::error::{PageError, PageResult};
    use crate::page::{PageCtx, PageDelegate, PageDescriptor};

    use super::PageRegistry;

    struct EmptyPage;

    impl PageDelegate for EmptyPage {
        fn build(&self, _ctx: &mut PageCtx<'_>) -> PageResult<()> {
            Ok(())
        }
    }

    fn descriptor(name: &str) -> Arc<PageDescriptor> {
        Arc::new(PageDescriptor::new(name, Box::new(EmptyPage)))
    }

    #[test]
    fn register_rejects_duplicates_by_identity_not_name() {
        let mut registry = PageRegistry::default();
        let first = descriptor("home");
        let same_name = descriptor("home");

        registry.register(&first).expect("first should register");
        assert!(matches!(
            registry.register(&first),
            Err(PageError::AlreadyRegistered(_))
        ));
        registry
            .register(&same_name)
            .expect("distinct descriptor with same name should register");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn register_rejects_empty_name() {
        let mut registry = PageRegistry::default();
        assert!(matches!(
            registry.register(&descriptor("")),
            Err(PageError::InvalidDescriptor(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn remove_is_a_no_op_for_unknown_descriptors() {
        let mut registry = PageRegistry::default();
        let known = descriptor("a");
        let unknown = descriptor("b");

        registry.register(&known).expect("should register");
        registry.remove(&unknown);
        assert_eq!(registry.len(), 1);
        registry.remove(&known);
        assert!(!registry.contains(&known));
    }
}
