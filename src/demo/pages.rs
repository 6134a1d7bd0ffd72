use std::sync::Arc;
use std::time::Duration;

use crate::anim::{AnimAttr, AnimCurve, AnimDescriptor, AnimKind};
use crate::config::Config;
use crate::error::PageResult;
use crate::page::{PageCtx, PageDelegate, PageDescriptor};

/// A bordered panel page. The demo toolkit draws every live root as a
/// block; the page itself only claims the resources a real screen would.
struct PanelPage;

impl PageDelegate for PanelPage {
    fn build(&self, ctx: &mut PageCtx<'_>) -> PageResult<()> {
        ctx.alloc_style()?;
        Ok(())
    }
}

/// The three demo descriptors: a fading home screen, a sliding settings
/// screen and an about screen that drops in with a bounce.
pub fn demo_descriptors(config: &Config) -> Vec<Arc<PageDescriptor>> {
    let duration = Duration::from_millis(config.anim.default_duration_ms);

    let home = PageDescriptor::new("home", Box::new(PanelPage))
        .with_anim(AnimDescriptor::uniform(
            AnimKind::Fade,
            AnimCurve::EaseInOut,
            duration,
        ))
        .with_focus_group(true)
        .with_refresh_timer(Duration::from_millis(config.demo.tick_ms));

    let settings = PageDescriptor::new("settings", Box::new(PanelPage))
        .with_anim(AnimDescriptor {
            push_in: AnimAttr::new(AnimKind::MoveLeft, AnimCurve::EaseOut, duration),
            push_out: AnimAttr::none(),
            pop_out: AnimAttr::new(AnimKind::MoveRight, AnimCurve::EaseIn, duration),
            pop_in: AnimAttr::none(),
        })
        .with_focus_group(true);

    let about = PageDescriptor::new("about", Box::new(PanelPage)).with_anim(AnimDescriptor {
        push_in: AnimAttr::new(AnimKind::MoveUp, AnimCurve::Bounce, duration * 2),
        push_out: AnimAttr::none(),
        pop_out: AnimAttr::new(AnimKind::MoveDown, AnimCurve::EaseIn, duration),
        pop_in: AnimAttr::none(),
    });

    vec![Arc::new(home), Arc::new(settings), Arc::new(about)]
}
