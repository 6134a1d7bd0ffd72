use std::sync::Arc;

use crate::toolkit::{GroupId, StyleId, TimerId, WidgetId};

use super::descriptor::PageDescriptor;

/// Lifecycle position of one live page.
///
/// The cycle is `Idle → Load → WillAppear → DidAppear → Activity →
/// WillDisappear → DidDisappear → {WillAppear | Unload} → Idle`; a covered
/// page branches back to `WillAppear` and parks there until the pop that
/// reveals it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Idle,
    Load,
    WillAppear,
    DidAppear,
    Activity,
    WillDisappear,
    DidDisappear,
    Unload,
}

impl PageState {
    pub fn id(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Load => "load",
            Self::WillAppear => "will-appear",
            Self::DidAppear => "did-appear",
            Self::Activity => "activity",
            Self::WillDisappear => "will-disappear",
            Self::DidDisappear => "did-disappear",
            Self::Unload => "unload",
        }
    }
}

/// Address of one live instance: a stack position, or the single popped
/// instance finishing its teardown outside the stack.
///
/// Navigation is gated while any animation is in flight, so stack indices
/// are stable for the whole time a slot holds one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRef {
    Stack(usize),
    Retiring,
}

/// Toolkit resources a page acquired at load, released exactly once at
/// unload.
#[derive(Debug, Default)]
pub struct PageResources {
    pub focus_group: Option<GroupId>,
    pub input_bound: bool,
    pub timer: Option<TimerId>,
    pub styles: Vec<StyleId>,
}

/// One live, stateful occurrence of a page on the navigation stack.
#[derive(Debug)]
pub struct PageInstance {
    pub(crate) descriptor: Arc<PageDescriptor>,
    pub(crate) state: PageState,
    pub(crate) root: Option<WidgetId>,
    /// True while the current transition direction was initiated by a push;
    /// selects push-in/push-out over pop-in/pop-out attributes and decides
    /// whether a disappeared page parks or unloads.
    pub(crate) is_push: bool,
    pub(crate) is_anim_busy: bool,
    pub(crate) resources: PageResources,
}

impl PageInstance {
    pub(crate) fn new(descriptor: Arc<PageDescriptor>) -> Self {
        Self {
            descriptor,
            state: PageState::Idle,
            root: None,
            is_push: true,
            is_anim_busy: false,
            resources: PageResources::default(),
        }
    }

    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    pub fn descriptor(&self) -> &Arc<PageDescriptor> {
        &self.descriptor
    }

    pub fn is_anim_busy(&self) -> bool {
        self.is_anim_busy
    }
}
