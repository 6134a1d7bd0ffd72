use std::time::Duration;

use crate::anim::AnimDescriptor;
use crate::error::PageResult;
use crate::toolkit::{StyleId, Toolkit, WidgetId};

/// Toolkit access handed to a page's build callback and lifecycle hooks.
///
/// The context deliberately exposes the toolkit and the page's own root
/// only; a hook cannot reach the manager, so it can never re-enter
/// `push`/`pop` mid-transition.
pub struct PageCtx<'a> {
    toolkit: &'a mut dyn Toolkit,
    root: WidgetId,
    styles: &'a mut Vec<StyleId>,
}

impl<'a> PageCtx<'a> {
    pub(crate) fn new(
        toolkit: &'a mut dyn Toolkit,
        root: WidgetId,
        styles: &'a mut Vec<StyleId>,
    ) -> Self {
        Self {
            toolkit,
            root,
            styles,
        }
    }

    pub fn root(&self) -> WidgetId {
        self.root
    }

    pub fn toolkit(&mut self) -> &mut dyn Toolkit {
        self.toolkit
    }

    /// Allocate a style owned by this page; it is released at unload.
    pub fn alloc_style(&mut self) -> PageResult<StyleId> {
        let style = self.toolkit.alloc_style()?;
        self.styles.push(style);
        Ok(style)
    }
}

/// Content and lifecycle hooks of one kind of page.
///
/// `build` populates the freshly created root container and is the only
/// required method; the eight hooks default to no-ops, mirroring an
/// optional callback table. Hooks are best-effort callouts with no error
/// channel.
pub trait PageDelegate {
    fn build(&self, ctx: &mut PageCtx<'_>) -> PageResult<()>;

    fn on_will_load(&self) {}
    fn on_loaded(&self, _ctx: &mut PageCtx<'_>) {}
    fn on_will_appear(&self, _ctx: &mut PageCtx<'_>) {}
    fn on_appeared(&self, _ctx: &mut PageCtx<'_>) {}
    fn on_will_disappear(&self, _ctx: &mut PageCtx<'_>) {}
    fn on_disappeared(&self, _ctx: &mut PageCtx<'_>) {}
    fn on_will_unload(&self, _ctx: &mut PageCtx<'_>) {}
    fn on_unloaded(&self) {}
}

/// Immutable template describing how to build and animate one kind of page.
///
/// Descriptors are shared as `Arc<PageDescriptor>`; the registry and the
/// stack compare them by identity (`Arc::ptr_eq`), never by name.
pub struct PageDescriptor {
    name: String,
    delegate: Box<dyn PageDelegate>,
    anim: AnimDescriptor,
    focus_group: bool,
    bind_input: bool,
    refresh_timer: Option<Duration>,
}

impl PageDescriptor {
    pub fn new(name: impl Into<String>, delegate: Box<dyn PageDelegate>) -> Self {
        Self {
            name: name.into(),
            delegate,
            anim: AnimDescriptor::default(),
            focus_group: false,
            bind_input: false,
            refresh_timer: None,
        }
    }

    pub fn with_anim(mut self, anim: AnimDescriptor) -> Self {
        self.anim = anim;
        self
    }

    /// Request an input-focus group for this page; `bind_input` also points
    /// the input device at the group while the page is loaded.
    pub fn with_focus_group(mut self, bind_input: bool) -> Self {
        self.focus_group = true;
        self.bind_input = bind_input;
        self
    }

    pub fn with_refresh_timer(mut self, period: Duration) -> Self {
        self.refresh_timer = Some(period);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn anim(&self) -> &AnimDescriptor {
        &self.anim
    }

    pub(crate) fn delegate(&self) -> &dyn PageDelegate {
        self.delegate.as_ref()
    }

    pub(crate) fn wants_focus_group(&self) -> bool {
        self.focus_group
    }

    pub(crate) fn wants_input_binding(&self) -> bool {
        self.bind_input
    }

    pub(crate) fn refresh_timer(&self) -> Option<Duration> {
        self.refresh_timer
    }
}

impl std::fmt::Debug for PageDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageDescriptor")
            .field("name", &self.name)
            .field("anim", &self.anim)
            .field("focus_group", &self.focus_group)
            .field("bind_input", &self.bind_input)
            .field("refresh_timer", &self.refresh_timer)
            .finish_non_exhaustive()
    }
}
