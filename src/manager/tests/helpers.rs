use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::anim::{AnimAttr, AnimCurve, AnimDescriptor, AnimKind};
use crate::config::Config;
use crate::error::{PageError, PageResult};
use crate::manager::PageManager;
use crate::page::{PageCtx, PageDelegate, PageDescriptor};
use crate::toolkit::HeadlessToolkit;

pub(super) type HookLog = Arc<Mutex<Vec<String>>>;

/// Delegate that appends `"name:hook"` to a shared log from every callback.
pub(super) struct RecordingPage {
    name: &'static str,
    log: HookLog,
}

impl RecordingPage {
    pub(super) fn new(name: &'static str, log: &HookLog) -> Self {
        Self {
            name,
            log: Arc::clone(log),
        }
    }

    fn record(&self, hook: &str) {
        self.log
            .lock()
            .expect("hook log lock")
            .push(format!("{}:{hook}", self.name));
    }
}

impl PageDelegate for RecordingPage {
    fn build(&self, ctx: &mut PageCtx<'_>) -> PageResult<()> {
        self.record("build");
        ctx.alloc_style()?;
        Ok(())
    }

    fn on_will_load(&self) {
        self.record("will-load");
    }

    fn on_loaded(&self, _ctx: &mut PageCtx<'_>) {
        self.record("loaded");
    }

    fn on_will_appear(&self, _ctx: &mut PageCtx<'_>) {
        self.record("will-appear");
    }

    fn on_appeared(&self, _ctx: &mut PageCtx<'_>) {
        self.record("appeared");
    }

    fn on_will_disappear(&self, _ctx: &mut PageCtx<'_>) {
        self.record("will-disappear");
    }

    fn on_disappeared(&self, _ctx: &mut PageCtx<'_>) {
        self.record("disappeared");
    }

    fn on_will_unload(&self, _ctx: &mut PageCtx<'_>) {
        self.record("will-unload");
    }

    fn on_unloaded(&self) {
        self.record("unloaded");
    }
}

/// Page declaring every optional resource: a bound focus group, a refresh
/// timer, and a style from its build.
pub(super) fn full_resource_page(name: &'static str) -> Arc<PageDescriptor> {
    let log = HookLog::default();
    Arc::new(
        PageDescriptor::new(name, Box::new(RecordingPage::new(name, &log)))
            .with_focus_group(true)
            .with_refresh_timer(Duration::from_millis(50)),
    )
}

/// Delegate whose build allocates a style and then gives up.
struct BrokenPage;

impl PageDelegate for BrokenPage {
    fn build(&self, ctx: &mut PageCtx<'_>) -> PageResult<()> {
        ctx.alloc_style()?;
        Err(PageError::toolkit("panel allocation refused"))
    }
}

/// Page whose build always fails, with every declared resource so the
/// unwind path has something to release.
pub(super) fn broken_page(name: &'static str) -> Arc<PageDescriptor> {
    Arc::new(
        PageDescriptor::new(name, Box::new(BrokenPage))
            .with_focus_group(true)
            .with_refresh_timer(Duration::from_millis(50)),
    )
}

pub(super) fn setup() -> (PageManager, HeadlessToolkit) {
    (
        PageManager::new(Config::default()),
        HeadlessToolkit::default(),
    )
}

/// Page with no animations; every transition completes synchronously.
pub(super) fn instant_page(name: &'static str) -> Arc<PageDescriptor> {
    let log = HookLog::default();
    recorded_page(name, &log)
}

pub(super) fn recorded_page(name: &'static str, log: &HookLog) -> Arc<PageDescriptor> {
    Arc::new(PageDescriptor::new(
        name,
        Box::new(RecordingPage::new(name, log)),
    ))
}

/// Fades in on push and on pop; leaves without animation.
pub(super) fn fade_page(name: &'static str, duration_ms: u64) -> Arc<PageDescriptor> {
    let fade = AnimAttr::new(
        AnimKind::Fade,
        AnimCurve::Linear,
        Duration::from_millis(duration_ms),
    );
    let log = HookLog::default();
    Arc::new(
        PageDescriptor::new(name, Box::new(RecordingPage::new(name, &log))).with_anim(
            AnimDescriptor {
                push_in: fade,
                push_out: AnimAttr::none(),
                pop_out: AnimAttr::none(),
                pop_in: fade,
            },
        ),
    )
}

/// Slides vertically into place on push and out again on pop.
pub(super) fn move_up_page(name: &'static str, duration_ms: u64) -> Arc<PageDescriptor> {
    let slide = AnimAttr::new(
        AnimKind::MoveUp,
        AnimCurve::Linear,
        Duration::from_millis(duration_ms),
    );
    let log = HookLog::default();
    Arc::new(
        PageDescriptor::new(name, Box::new(RecordingPage::new(name, &log))).with_anim(
            AnimDescriptor {
                push_in: slide,
                push_out: AnimAttr::none(),
                pop_out: slide,
                pop_in: AnimAttr::none(),
            },
        ),
    )
}

pub(super) fn tick(manager: &mut PageManager, toolkit: &mut HeadlessToolkit, ms: u64) {
    manager
        .tick(toolkit, Duration::from_millis(ms))
        .expect("tick should succeed");
}
