use std::time::Duration;

use log::{debug, warn};

use crate::page::PageRef;
use crate::toolkit::{Toolkit, WidgetId};

use super::curve::curve_value;
use super::types::{AnimAttr, AnimCurve, AnimKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Appear,
    Disappear,
}

impl SlotKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::Appear => "appear",
            Self::Disappear => "disappear",
        }
    }
}

/// Result of starting a configured slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Running,
    /// `AnimKind::None` has nothing to play; the lifecycle continues
    /// synchronously instead of waiting for a tick.
    Finished,
}

#[derive(Debug, Clone, Copy)]
struct SlotConfig {
    target: PageRef,
    root: WidgetId,
    kind: AnimKind,
    curve: AnimCurve,
    start: i32,
    end: i32,
    duration: Duration,
}

#[derive(Debug, Clone, Copy)]
struct ActiveAnim {
    config: SlotConfig,
    elapsed: Duration,
}

/// The two shared animation players.
///
/// Exactly one appear and one disappear transition may be in flight
/// system-wide; the slots are re-targeted per transition and never
/// allocated per page. The `is_anim_busy` gate on the instances is the
/// only thing keeping a slot from being retargeted mid-flight.
#[derive(Debug, Default)]
pub struct AnimCoordinator {
    appear_config: Option<SlotConfig>,
    disappear_config: Option<SlotConfig>,
    appear: Option<ActiveAnim>,
    disappear: Option<ActiveAnim>,
}

impl AnimCoordinator {
    /// Configure the appear slot for `target`, deriving the value range
    /// from the animation kind and the screen dimensions.
    pub fn set_appear(
        &mut self,
        target: PageRef,
        root: WidgetId,
        attr: AnimAttr,
        screen: (i32, i32),
    ) {
        if self.appear.is_some() {
            warn!("appear slot retargeted while an animation is in flight");
        }
        let (start, end) = appear_values(attr.kind, screen);
        self.appear_config = Some(SlotConfig {
            target,
            root,
            kind: attr.kind,
            curve: attr.curve,
            start,
            end,
            duration: attr.duration,
        });
    }

    pub fn set_disappear(
        &mut self,
        target: PageRef,
        root: WidgetId,
        attr: AnimAttr,
        screen: (i32, i32),
    ) {
        if self.disappear.is_some() {
            warn!("disappear slot retargeted while an animation is in flight");
        }
        let (start, end) = disappear_values(attr.kind, screen);
        self.disappear_config = Some(SlotConfig {
            target,
            root,
            kind: attr.kind,
            curve: attr.curve,
            start,
            end,
            duration: attr.duration,
        });
    }

    pub fn start_appear(&mut self, toolkit: &mut dyn Toolkit) -> StartOutcome {
        let Some(config) = self.appear_config.take() else {
            warn!("start_appear called with no configured slot");
            return StartOutcome::Finished;
        };
        Self::start_slot(&mut self.appear, config, SlotKind::Appear, toolkit)
    }

    pub fn start_disappear(&mut self, toolkit: &mut dyn Toolkit) -> StartOutcome {
        let Some(config) = self.disappear_config.take() else {
            warn!("start_disappear called with no configured slot");
            return StartOutcome::Finished;
        };
        Self::start_slot(&mut self.disappear, config, SlotKind::Disappear, toolkit)
    }

    fn start_slot(
        slot: &mut Option<ActiveAnim>,
        config: SlotConfig,
        kind: SlotKind,
        toolkit: &mut dyn Toolkit,
    ) -> StartOutcome {
        if config.kind == AnimKind::None {
            return StartOutcome::Finished;
        }

        apply_value(toolkit, config.root, config.kind, config.start);
        *slot = Some(ActiveAnim {
            config,
            elapsed: Duration::ZERO,
        });
        debug!(
            "{} slot started: {} over {:?}",
            kind.id(),
            config.kind.id(),
            config.duration
        );
        StartOutcome::Running
    }

    pub fn is_running(&self, slot: SlotKind) -> bool {
        match slot {
            SlotKind::Appear => self.appear.is_some(),
            SlotKind::Disappear => self.disappear.is_some(),
        }
    }

    /// Advance both slots by `dt` and apply the eased values through the
    /// toolkit. Returns the targets whose animation just finished; each of
    /// their lifecycle machines must be re-entered by the caller.
    pub fn tick(&mut self, dt: Duration, toolkit: &mut dyn Toolkit) -> Vec<(PageRef, SlotKind)> {
        let mut finished = Vec::new();
        if Self::tick_slot(&mut self.appear, dt, toolkit)
            && let Some(target) = finished_target(&mut self.appear)
        {
            finished.push((target, SlotKind::Appear));
        }
        if Self::tick_slot(&mut self.disappear, dt, toolkit)
            && let Some(target) = finished_target(&mut self.disappear)
        {
            finished.push((target, SlotKind::Disappear));
        }
        finished
    }

    fn tick_slot(slot: &mut Option<ActiveAnim>, dt: Duration, toolkit: &mut dyn Toolkit) -> bool {
        let Some(active) = slot.as_mut() else {
            return false;
        };

        active.elapsed = active.elapsed.saturating_add(dt);
        let config = active.config;
        if active.elapsed >= config.duration {
            // Snap to the resting pose instead of the interpolated end
            // value so accumulated rounding never leaks into the layout.
            apply_resting(toolkit, config.root, config.kind);
            return true;
        }

        let t = active.elapsed.as_secs_f32() / config.duration.as_secs_f32();
        let factor = curve_value(config.curve, t);
        let range = (config.end - config.start) as f32;
        let value = config.start + (range * factor).round() as i32;
        apply_value(toolkit, config.root, config.kind, value);
        false
    }
}

fn finished_target(slot: &mut Option<ActiveAnim>) -> Option<PageRef> {
    slot.take().map(|active| active.config.target)
}

/// Start/end values for a page entering the screen.
fn appear_values(kind: AnimKind, (width, height): (i32, i32)) -> (i32, i32) {
    match kind {
        AnimKind::None => (0, 0),
        AnimKind::MoveUp => (-height, 0),
        AnimKind::MoveDown => (height, 0),
        AnimKind::MoveLeft => (width, 0),
        AnimKind::MoveRight => (-width, 0),
        AnimKind::Fade => (0, 255),
    }
}

/// Start/end values for a page leaving the screen; the mirror of
/// `appear_values`.
fn disappear_values(kind: AnimKind, (width, height): (i32, i32)) -> (i32, i32) {
    match kind {
        AnimKind::None => (0, 0),
        AnimKind::MoveUp => (0, height),
        AnimKind::MoveDown => (0, -height),
        AnimKind::MoveLeft => (0, -width),
        AnimKind::MoveRight => (0, width),
        AnimKind::Fade => (255, 0),
    }
}

fn apply_value(toolkit: &mut dyn Toolkit, root: WidgetId, kind: AnimKind, value: i32) {
    match kind {
        AnimKind::None => {}
        AnimKind::MoveLeft | AnimKind::MoveRight => toolkit.set_position(root, value, 0),
        AnimKind::MoveUp | AnimKind::MoveDown => toolkit.set_position(root, 0, value),
        AnimKind::Fade => toolkit.set_opacity(root, value.clamp(0, 255) as u8),
    }
}

/// Restore the resting pose. A disappeared page is made invisible by its
/// hidden flag, so even a fade-out ends fully opaque at the origin,
/// ready to be shown again.
fn apply_resting(toolkit: &mut dyn Toolkit, root: WidgetId, kind: AnimKind) {
    match kind {
        AnimKind::None => {}
        AnimKind::MoveLeft | AnimKind::MoveRight | AnimKind::MoveUp | AnimKind::MoveDown => {
            toolkit.set_position(root, 0, 0)
        }
        AnimKind::Fade => toolkit.set_opacity(root, 255),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::page::PageRef;
    use crate::toolkit::{HeadlessToolkit, Toolkit};

    use super::super::types::{AnimAttr, AnimCurve, AnimKind};
    use super::{AnimCoordinator, SlotKind, StartOutcome};

    fn fade(duration_ms: u64) -> AnimAttr {
        AnimAttr::new(
            AnimKind::Fade,
            AnimCurve::Linear,
            Duration::from_millis(duration_ms),
        )
    }

    #[test]
    fn none_kind_finishes_at_start() {
        let mut toolkit = HeadlessToolkit::default();
        let root = toolkit.create_root().expect("root");
        let mut anim = AnimCoordinator::default();

        anim.set_appear(PageRef::Stack(0), root, AnimAttr::none(), (240, 240));
        assert_eq!(anim.start_appear(&mut toolkit), StartOutcome::Finished);
        assert!(!anim.is_running(SlotKind::Appear));
    }

    #[test]
    fn fade_appear_progresses_and_snaps_to_opaque() {
        let mut toolkit = HeadlessToolkit::default();
        let root = toolkit.create_root().expect("root");
        let mut anim = AnimCoordinator::default();

        anim.set_appear(PageRef::Stack(0), root, fade(100), (240, 240));
        assert_eq!(anim.start_appear(&mut toolkit), StartOutcome::Running);
        assert_eq!(toolkit.widget(root).expect("record").opacity, 0);

        let finished = anim.tick(Duration::from_millis(50), &mut toolkit);
        assert!(finished.is_empty());
        let midway = toolkit.widget(root).expect("record").opacity;
        assert!(midway > 0 && midway < 255, "midway opacity was {midway}");

        let finished = anim.tick(Duration::from_millis(50), &mut toolkit);
        assert_eq!(finished, vec![(PageRef::Stack(0), SlotKind::Appear)]);
        assert_eq!(toolkit.widget(root).expect("record").opacity, 255);
        assert!(!anim.is_running(SlotKind::Appear));
    }

    #[test]
    fn move_up_slides_in_from_above_and_rests_at_origin() {
        let mut toolkit = HeadlessToolkit::with_screen_size(240, 320);
        let root = toolkit.create_root().expect("root");
        let mut anim = AnimCoordinator::default();

        let attr = AnimAttr::new(
            AnimKind::MoveUp,
            AnimCurve::Linear,
            Duration::from_millis(100),
        );
        anim.set_appear(PageRef::Stack(1), root, attr, (240, 320));
        assert_eq!(anim.start_appear(&mut toolkit), StartOutcome::Running);
        assert_eq!(toolkit.widget(root).expect("record").y, -320);

        anim.tick(Duration::from_millis(50), &mut toolkit);
        let y = toolkit.widget(root).expect("record").y;
        assert!((-320..0).contains(&y), "midway y was {y}");

        let finished = anim.tick(Duration::from_millis(60), &mut toolkit);
        assert_eq!(finished, vec![(PageRef::Stack(1), SlotKind::Appear)]);
        assert_eq!(toolkit.widget(root).expect("record").y, 0);
    }

    #[test]
    fn fade_disappear_snaps_back_to_opaque_for_reuse() {
        let mut toolkit = HeadlessToolkit::default();
        let root = toolkit.create_root().expect("root");
        let mut anim = AnimCoordinator::default();

        anim.set_disappear(PageRef::Retiring, root, fade(40), (240, 240));
        assert_eq!(anim.start_disappear(&mut toolkit), StartOutcome::Running);
        assert_eq!(toolkit.widget(root).expect("record").opacity, 255);

        let finished = anim.tick(Duration::from_millis(40), &mut toolkit);
        assert_eq!(finished, vec![(PageRef::Retiring, SlotKind::Disappear)]);
        assert_eq!(toolkit.widget(root).expect("record").opacity, 255);
    }

    #[test]
    fn both_slots_run_concurrently() {
        let mut toolkit = HeadlessToolkit::default();
        let entering = toolkit.create_root().expect("root");
        let leaving = toolkit.create_root().expect("root");
        let mut anim = AnimCoordinator::default();

        anim.set_appear(PageRef::Stack(0), entering, fade(30), (240, 240));
        anim.set_disappear(PageRef::Retiring, leaving, fade(60), (240, 240));
        anim.start_appear(&mut toolkit);
        anim.start_disappear(&mut toolkit);
        assert!(anim.is_running(SlotKind::Appear));
        assert!(anim.is_running(SlotKind::Disappear));

        let finished = anim.tick(Duration::from_millis(30), &mut toolkit);
        assert_eq!(finished, vec![(PageRef::Stack(0), SlotKind::Appear)]);

        let finished = anim.tick(Duration::from_millis(30), &mut toolkit);
        assert_eq!(finished, vec![(PageRef::Retiring, SlotKind::Disappear)]);
    }
}
