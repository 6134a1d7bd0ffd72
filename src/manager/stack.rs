use std::sync::Arc;

use crate::page::{PageDescriptor, PageInstance, PageRef};

/// The navigation stack: a vector arena with the top at the back, plus one
/// slot for the popped instance finishing its teardown.
///
/// "The node beneath" is `index - 1`; instances are dropped exactly once,
/// when their unload handler takes them out of the arena.
#[derive(Default)]
pub(crate) struct PageStack {
    entries: Vec<PageInstance>,
    retiring: Option<PageInstance>,
}

impl PageStack {
    pub(crate) fn push(&mut self, instance: PageInstance) -> PageRef {
        self.entries.push(instance);
        PageRef::Stack(self.entries.len() - 1)
    }

    /// Move the top entry out of the stack so its pop-out/unload sequence
    /// can run while the revealed page re-appears. Fails if a previous
    /// teardown is still in flight.
    pub(crate) fn retire_top(&mut self) -> Option<PageRef> {
        if self.retiring.is_some() {
            return None;
        }
        let instance = self.entries.pop()?;
        self.retiring = Some(instance);
        Some(PageRef::Retiring)
    }

    pub(crate) fn take_retiring(&mut self) -> Option<PageInstance> {
        self.retiring.take()
    }

    /// Drop the top entry without running its teardown; only meaningful
    /// for a freshly pushed entry whose load has just failed.
    pub(crate) fn discard_top(&mut self) -> Option<PageInstance> {
        self.entries.pop()
    }

    pub(crate) fn get(&self, page: PageRef) -> Option<&PageInstance> {
        match page {
            PageRef::Stack(index) => self.entries.get(index),
            PageRef::Retiring => self.retiring.as_ref(),
        }
    }

    pub(crate) fn get_mut(&mut self, page: PageRef) -> Option<&mut PageInstance> {
        match page {
            PageRef::Stack(index) => self.entries.get_mut(index),
            PageRef::Retiring => self.retiring.as_mut(),
        }
    }

    /// The stack entry directly beneath `page`. The retiring instance is
    /// outside the stack and has no neighbour.
    pub(crate) fn below(&self, page: PageRef) -> Option<PageRef> {
        match page {
            PageRef::Stack(index) if index > 0 => Some(PageRef::Stack(index - 1)),
            _ => None,
        }
    }

    pub(crate) fn top_index(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }

    pub(crate) fn below_top_index(&self) -> Option<usize> {
        self.entries.len().checked_sub(2)
    }

    pub(crate) fn top(&self) -> Option<&PageInstance> {
        self.entries.last()
    }

    pub(crate) fn depth(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every live instance bottom to top, with the retiring one last.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &PageInstance> {
        self.entries.iter().chain(self.retiring.as_ref())
    }

    pub(crate) fn contains_descriptor(&self, descriptor: &Arc<PageDescriptor>) -> bool {
        self.entries
            .iter()
            .chain(self.retiring.as_ref())
            .any(|instance| Arc::ptr_eq(&instance.descriptor, descriptor))
    }

    /// The animation gate: busy while the top two entries or the retiring
    /// instance have a transition in flight. With only two shared slots, a
    /// third concurrent transition would retarget a slot mid-flight.
    pub(crate) fn is_gate_busy(&self) -> bool {
        let top_two_busy = self
            .entries
            .iter()
            .rev()
            .take(2)
            .any(|instance| instance.is_anim_busy);
        let retiring_busy = self
            .retiring
            .as_ref()
            .is_some_and(|instance| instance.is_anim_busy);
        top_two_busy || retiring_busy
    }
}
