use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

use crate::anim::{AnimCoordinator, StartOutcome};
use crate::error::{PageError, PageResult};
use crate::event::PageEvent;
use crate::page::{PageCtx, PageInstance, PageRef, PageState};
use crate::toolkit::{Toolkit, WidgetId};

use super::stack::PageStack;

/// Everything the lifecycle handlers touch besides the stack itself.
pub(crate) struct LifecycleCtx<'a> {
    pub(crate) toolkit: &'a mut dyn Toolkit,
    pub(crate) anim: &'a mut AnimCoordinator,
    pub(crate) events: &'a mut Vec<PageEvent>,
    pub(crate) max_anim_duration: Duration,
}

/// Drive one instance's state machine as far as it can go synchronously.
///
/// This is the re-entrant dispatcher of the design, flattened into a
/// trampoline: handlers report whether to keep looping, and cross-instance
/// chaining (a covered page's deferred disappearance) goes through the
/// work list instead of recursing. The machine stops at the two animation
/// hand-offs (`WillAppear`, `WillDisappear`) and at the two parking states
/// (`Activity`, a covered page's `WillAppear`); animation completions
/// re-enter it through `PageManager::tick`.
pub(crate) fn advance(
    stack: &mut PageStack,
    start: PageRef,
    ctx: &mut LifecycleCtx<'_>,
) -> PageResult<()> {
    let mut work: VecDeque<PageRef> = VecDeque::from([start]);

    while let Some(target) = work.pop_front() {
        loop {
            let Some(page) = stack.get_mut(target) else {
                break;
            };

            match page.state {
                PageState::Idle => break,
                PageState::Load => {
                    if let Err(err) = do_load(page, ctx) {
                        warn!("page \"{}\" failed to load: {err}", page.name());
                        release_resources(page, ctx);
                        match target {
                            PageRef::Stack(_) => {
                                stack.discard_top();
                            }
                            PageRef::Retiring => {
                                stack.take_retiring();
                            }
                        }
                        // The failed load may have grabbed the input device
                        // from the page it was about to cover.
                        if let Some(top) = stack.top()
                            && top.resources.input_bound
                            && let Some(group) = top.resources.focus_group
                        {
                            ctx.toolkit.bind_input_device(Some(group));
                        }
                        return Err(err);
                    }
                    transition(page, PageState::WillAppear, ctx);
                }
                PageState::WillAppear => {
                    let outcome = do_will_appear(page, target, ctx)?;
                    transition(page, PageState::DidAppear, ctx);
                    if outcome == StartOutcome::Running {
                        break;
                    }
                }
                PageState::DidAppear => {
                    do_did_appear(page, ctx);
                    let chained_from_push = page.is_push;
                    transition(page, PageState::Activity, ctx);

                    if chained_from_push
                        && let Some(below) = stack.below(target)
                        && stack
                            .get(below)
                            .is_some_and(|covered| covered.state == PageState::Activity)
                    {
                        // The page this one covered has not started its
                        // disappearance yet; run it now that the appear
                        // slot is free, so the two animations play
                        // back-to-back.
                        work.push_back(below);
                    }
                    break;
                }
                PageState::Activity => {
                    transition(page, PageState::WillDisappear, ctx);
                }
                PageState::WillDisappear => {
                    let outcome = do_will_disappear(page, target, ctx)?;
                    transition(page, PageState::DidDisappear, ctx);
                    if outcome == StartOutcome::Running {
                        break;
                    }
                }
                PageState::DidDisappear => {
                    do_did_disappear(page, ctx);
                    if page.is_push {
                        // Covered, not removed: park until the pop that
                        // reveals this page again.
                        transition(page, PageState::WillAppear, ctx);
                        break;
                    }
                    transition(page, PageState::Unload, ctx);
                }
                PageState::Unload => {
                    do_unload(page, ctx);
                    transition(page, PageState::Idle, ctx);
                    let name = page.name().to_string();
                    if matches!(target, PageRef::Retiring) {
                        stack.take_retiring();
                    } else {
                        warn!("stack entry \"{name}\" reached unload without being popped");
                    }
                    ctx.events.push(PageEvent::Unloaded { name });
                    break;
                }
            }
        }
    }
    Ok(())
}

fn transition(page: &mut PageInstance, to: PageState, ctx: &mut LifecycleCtx<'_>) {
    let from = page.state;
    page.state = to;
    debug!(
        "page \"{}\": {} -> {}",
        page.name(),
        from.id(),
        to.id()
    );
    ctx.events.push(PageEvent::StateChanged {
        name: page.name().to_string(),
        from,
        to,
    });
}

/// Create the root container, acquire the declared resources and let the
/// delegate populate the page.
fn do_load(page: &mut PageInstance, ctx: &mut LifecycleCtx<'_>) -> PageResult<()> {
    let descriptor = Arc::clone(&page.descriptor);
    descriptor.delegate().on_will_load();

    let root = ctx.toolkit.create_root()?;
    ctx.toolkit.set_hidden(root, true);
    page.root = Some(root);

    if descriptor.wants_focus_group() {
        let group = ctx.toolkit.create_focus_group()?;
        page.resources.focus_group = Some(group);
        if descriptor.wants_input_binding() {
            ctx.toolkit.bind_input_device(Some(group));
            page.resources.input_bound = true;
        }
    }
    if let Some(period) = descriptor.refresh_timer() {
        page.resources.timer = Some(ctx.toolkit.create_timer(period)?);
    }

    let mut page_ctx = PageCtx::new(ctx.toolkit, root, &mut page.resources.styles);
    descriptor.delegate().build(&mut page_ctx)?;
    descriptor.delegate().on_loaded(&mut page_ctx);
    Ok(())
}

fn do_will_appear(
    page: &mut PageInstance,
    target: PageRef,
    ctx: &mut LifecycleCtx<'_>,
) -> PageResult<StartOutcome> {
    let descriptor = Arc::clone(&page.descriptor);
    let root = require_root(page.root, page.name(), "will-appear")?;

    let mut page_ctx = PageCtx::new(ctx.toolkit, root, &mut page.resources.styles);
    descriptor.delegate().on_will_appear(&mut page_ctx);

    ctx.toolkit.set_hidden(root, false);
    let attr = if page.is_push {
        descriptor.anim().push_in
    } else {
        descriptor.anim().pop_in
    }
    .clamped(ctx.max_anim_duration);
    ctx.anim
        .set_appear(target, root, attr, ctx.toolkit.screen_size());
    page.is_anim_busy = true;
    Ok(ctx.anim.start_appear(ctx.toolkit))
}

fn do_did_appear(page: &mut PageInstance, ctx: &mut LifecycleCtx<'_>) {
    let descriptor = Arc::clone(&page.descriptor);
    // A bound page loses the input device while it is covered; point the
    // device back at its group now that it is frontmost again.
    if page.resources.input_bound
        && let Some(group) = page.resources.focus_group
    {
        ctx.toolkit.bind_input_device(Some(group));
    }
    if let Some(root) = page.root {
        let mut page_ctx = PageCtx::new(ctx.toolkit, root, &mut page.resources.styles);
        descriptor.delegate().on_appeared(&mut page_ctx);
    }
    page.is_anim_busy = false;
}

fn do_will_disappear(
    page: &mut PageInstance,
    target: PageRef,
    ctx: &mut LifecycleCtx<'_>,
) -> PageResult<StartOutcome> {
    let descriptor = Arc::clone(&page.descriptor);
    let root = require_root(page.root, page.name(), "will-disappear")?;

    let mut page_ctx = PageCtx::new(ctx.toolkit, root, &mut page.resources.styles);
    descriptor.delegate().on_will_disappear(&mut page_ctx);

    let attr = if page.is_push {
        descriptor.anim().push_out
    } else {
        descriptor.anim().pop_out
    }
    .clamped(ctx.max_anim_duration);
    ctx.anim
        .set_disappear(target, root, attr, ctx.toolkit.screen_size());
    page.is_anim_busy = true;
    Ok(ctx.anim.start_disappear(ctx.toolkit))
}

fn do_did_disappear(page: &mut PageInstance, ctx: &mut LifecycleCtx<'_>) {
    let descriptor = Arc::clone(&page.descriptor);
    if let Some(root) = page.root {
        ctx.toolkit.set_hidden(root, true);
        let mut page_ctx = PageCtx::new(ctx.toolkit, root, &mut page.resources.styles);
        descriptor.delegate().on_disappeared(&mut page_ctx);
    }
    page.is_anim_busy = false;
}

/// Teardown hooks around the resource release. The instance itself is
/// dropped by the caller.
fn do_unload(page: &mut PageInstance, ctx: &mut LifecycleCtx<'_>) {
    let descriptor = Arc::clone(&page.descriptor);
    if let Some(root) = page.root {
        let mut page_ctx = PageCtx::new(ctx.toolkit, root, &mut page.resources.styles);
        descriptor.delegate().on_will_unload(&mut page_ctx);
    }
    release_resources(page, ctx);
    descriptor.delegate().on_unloaded();
}

/// Release everything `do_load` acquired, in reverse order. Also the
/// unwind path when a build callback fails mid-load.
fn release_resources(page: &mut PageInstance, ctx: &mut LifecycleCtx<'_>) {
    for style in page.resources.styles.drain(..) {
        ctx.toolkit.release_style(style);
    }
    if let Some(timer) = page.resources.timer.take() {
        ctx.toolkit.destroy_timer(timer);
    }
    if page.resources.input_bound {
        // A page that re-appeared beneath this one may have re-bound the
        // device already; only detach it if it still points at our group.
        if ctx.toolkit.bound_input_group() == page.resources.focus_group {
            ctx.toolkit.bind_input_device(None);
        }
        page.resources.input_bound = false;
    }
    if let Some(group) = page.resources.focus_group.take() {
        ctx.toolkit.destroy_focus_group(group);
    }
    if let Some(root) = page.root.take() {
        ctx.toolkit.destroy_root(root);
    }
}

fn require_root(root: Option<WidgetId>, name: &str, phase: &'static str) -> PageResult<WidgetId> {
    root.ok_or_else(|| {
        PageError::toolkit(format!("page \"{name}\" has no root container at {phase}"))
    })
}
