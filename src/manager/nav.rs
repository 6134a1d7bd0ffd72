use std::sync::Arc;

use log::{debug, warn};

use crate::anim::AnimKind;
use crate::error::PageResult;
use crate::event::PageEvent;
use crate::page::{PageDescriptor, PageInstance, PageRef, PageState};
use crate::toolkit::Toolkit;

use super::core::PageManager;

/// Why a navigation request was refused. Rejections are expected under
/// rapid input and are not errors; callers debounce and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// A transition is in flight on one of the top two entries (or the
    /// retiring instance); starting another would retarget a shared slot.
    AnimationBusy,
    NotRegistered,
    /// One live instance per descriptor: the descriptor already occupies a
    /// stack entry.
    AlreadyOnStack,
    EmptyStack,
}

impl RejectReason {
    pub fn id(self) -> &'static str {
        match self {
            Self::AnimationBusy => "animation-busy",
            Self::NotRegistered => "not-registered",
            Self::AlreadyOnStack => "already-on-stack",
            Self::EmptyStack => "empty-stack",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Pushed {
        name: String,
    },
    Popped {
        name: String,
        /// Name of the page revealed beneath, if any.
        revealed: Option<String>,
    },
    Rejected(RejectReason),
}

impl PageManager {
    /// Push a registered page onto the stack and drive it through its load
    /// and appear sequence, up to the animation hand-off.
    ///
    /// The previously-topmost page is marked push-covered; its disappear
    /// sequence runs synchronously right here when its push-out kind is
    /// `None`, and is otherwise chained from the new page's did-appear so
    /// the two animations do not contend for the shared slots.
    pub fn push(
        &mut self,
        toolkit: &mut dyn Toolkit,
        descriptor: &Arc<PageDescriptor>,
    ) -> PageResult<NavOutcome> {
        if self.stack.is_gate_busy() {
            debug!(
                "push of \"{}\" rejected: animation in flight",
                descriptor.name()
            );
            return Ok(NavOutcome::Rejected(RejectReason::AnimationBusy));
        }
        if !self.registry.contains(descriptor) {
            warn!("push of \"{}\" rejected: not registered", descriptor.name());
            return Ok(NavOutcome::Rejected(RejectReason::NotRegistered));
        }
        if self.stack.contains_descriptor(descriptor) {
            warn!(
                "push of \"{}\" rejected: already on the stack",
                descriptor.name()
            );
            return Ok(NavOutcome::Rejected(RejectReason::AlreadyOnStack));
        }

        let covered = self.stack.top_index();
        if let Some(index) = covered
            && let Some(previous_top) = self.stack.get_mut(PageRef::Stack(index))
        {
            // Being covered by a push: if the page ever re-appears it does
            // so push-driven, and its disappearance uses push-out attrs.
            previous_top.is_push = true;
        }

        let target = self.stack.push(PageInstance::new(Arc::clone(descriptor)));
        let name = descriptor.name().to_string();
        self.events.push(PageEvent::Pushed { name: name.clone() });

        if let Some(page) = self.stack.get_mut(target) {
            page.state = PageState::Load;
        }
        self.run_lifecycle(toolkit, target)?;

        if let Some(index) = covered {
            let run_now = self
                .stack
                .get(PageRef::Stack(index))
                .is_some_and(|previous_top| {
                    previous_top.state == PageState::Activity
                        && previous_top.descriptor.anim().push_out.kind == AnimKind::None
                });
            if run_now {
                // Nothing to animate, so the covered page does not have to
                // wait for the new page's appear animation.
                self.run_lifecycle(toolkit, PageRef::Stack(index))?;
            }
        }

        Ok(NavOutcome::Pushed { name })
    }

    /// Pop the topmost page: the page beneath (if any) re-appears with its
    /// pop-in attributes while the popped page plays pop-out and unloads.
    ///
    /// The popped instance is freed inside its unload handler, once its
    /// disappear animation has finished; the stack itself is already one
    /// entry shorter when this returns.
    pub fn pop(&mut self, toolkit: &mut dyn Toolkit) -> PageResult<NavOutcome> {
        if self.stack.is_empty() {
            debug!("pop rejected: stack is empty");
            return Ok(NavOutcome::Rejected(RejectReason::EmptyStack));
        }
        if self.stack.is_gate_busy() {
            debug!("pop rejected: animation in flight");
            return Ok(NavOutcome::Rejected(RejectReason::AnimationBusy));
        }

        let revealed_index = self.stack.below_top_index();
        if let Some(index) = revealed_index {
            if let Some(revealed) = self.stack.get_mut(PageRef::Stack(index)) {
                revealed.is_push = false;
            }
            self.run_lifecycle(toolkit, PageRef::Stack(index))?;
        }
        let revealed = revealed_index
            .and_then(|index| self.stack.get(PageRef::Stack(index)))
            .map(|page| page.name().to_string());

        let Some(target) = self.stack.retire_top() else {
            warn!("pop rejected: a previous teardown is still in flight");
            return Ok(NavOutcome::Rejected(RejectReason::AnimationBusy));
        };
        let mut name = String::new();
        if let Some(page) = self.stack.get_mut(target) {
            page.is_push = false;
            name = page.name().to_string();
        }
        self.events.push(PageEvent::Popped {
            name: name.clone(),
            revealed: revealed.clone(),
        });

        self.run_lifecycle(toolkit, target)?;

        Ok(NavOutcome::Popped { name, revealed })
    }
}
