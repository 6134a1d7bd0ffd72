use std::sync::Arc;
use std::time::Duration;

use log::warn;

use crate::anim::AnimCoordinator;
use crate::config::Config;
use crate::error::{PageError, PageResult};
use crate::event::PageEvent;
use crate::page::{PageDescriptor, PageInstance, PageRef, PageRegistry, PageState};
use crate::toolkit::Toolkit;

use super::lifecycle::{LifecycleCtx, advance};
use super::stack::PageStack;

/// The navigation facade: registry + stack + the two animation slots.
///
/// One value owns the whole subsystem; the host constructs it once,
/// borrows its toolkit into every call, and drives animations by calling
/// [`PageManager::tick`] from its frame loop. Everything is
/// single-threaded and cooperative; nothing here blocks.
pub struct PageManager {
    pub(crate) registry: PageRegistry,
    pub(crate) stack: PageStack,
    pub(crate) anim: AnimCoordinator,
    pub(crate) events: Vec<PageEvent>,
    config: Config,
}

impl PageManager {
    pub fn new(config: Config) -> Self {
        Self {
            registry: PageRegistry::default(),
            stack: PageStack::default(),
            anim: AnimCoordinator::default(),
            events: Vec::new(),
            config,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    pub fn register(&mut self, descriptor: &Arc<PageDescriptor>) -> PageResult<()> {
        self.registry.register(descriptor)
    }

    /// Remove a descriptor from the pool. Fails while any stack entry (or
    /// the instance currently tearing down) still references it; absence
    /// from the pool is a no-op.
    pub fn unregister(&mut self, descriptor: &Arc<PageDescriptor>) -> PageResult<()> {
        if self.stack.contains_descriptor(descriptor) {
            warn!(
                "\"{}\" is on the stack and cannot be unregistered",
                descriptor.name()
            );
            return Err(PageError::DescriptorOnStack(descriptor.name().to_string()));
        }
        self.registry.remove(descriptor);
        Ok(())
    }

    /// Advance in-flight animations by `dt` and resume the lifecycle of
    /// every page whose transition just finished.
    pub fn tick(&mut self, toolkit: &mut dyn Toolkit, dt: Duration) -> PageResult<()> {
        let finished = self.anim.tick(dt, toolkit);
        for (target, slot) in finished {
            if let Some(page) = self.stack.get(target) {
                self.events.push(PageEvent::TransitionFinished {
                    name: page.name().to_string(),
                    slot,
                });
            }
            self.run_lifecycle(toolkit, target)?;
        }
        Ok(())
    }

    /// Re-enter the lifecycle machine for `target`, lending out the
    /// coordinator, event buffer and toolkit the handlers need.
    pub(crate) fn run_lifecycle(
        &mut self,
        toolkit: &mut dyn Toolkit,
        target: PageRef,
    ) -> PageResult<()> {
        let mut ctx = LifecycleCtx {
            toolkit,
            anim: &mut self.anim,
            events: &mut self.events,
            max_anim_duration: Duration::from_millis(self.config.anim.max_duration_ms),
        };
        advance(&mut self.stack, target, &mut ctx)
    }

    /// True while a transition is in flight on either shared slot; push
    /// and pop are refused until this clears.
    pub fn is_busy(&self) -> bool {
        self.stack.is_gate_busy()
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn top_name(&self) -> Option<&str> {
        self.stack.top().map(|page| page.name())
    }

    pub fn top_state(&self) -> Option<PageState> {
        self.stack.top().map(|page| page.state())
    }

    /// Every live instance bottom to top, including the one currently
    /// tearing down. Hosts walk this to draw page roots in z-order.
    pub fn pages(&self) -> impl Iterator<Item = &PageInstance> {
        self.stack.iter()
    }

    pub fn registered_pages(&self) -> usize {
        self.registry.len()
    }

    /// Drain the lifecycle notifications accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<PageEvent> {
        std::mem::take(&mut self.events)
    }
}
