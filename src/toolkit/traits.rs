use std::time::Duration;

use crate::error::PageResult;

/// Handle to one page's root container widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

/// Handle to an input-focus group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub u64);

/// Handle to a periodic refresh timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Handle to a dynamically allocated style object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleId(pub u64);

/// The widget-toolkit operations the page stack consumes.
///
/// This is the boundary to the real GUI library: the manager never touches
/// rendering or layout, it only creates and destroys root containers, moves
/// them, fades them, hides them, and manages the per-page focus/timer/style
/// resources. Implementations are expected to be cheap; all calls happen on
/// the single toolkit thread.
pub trait Toolkit {
    /// Create an empty full-screen root container for one page.
    fn create_root(&mut self) -> PageResult<WidgetId>;
    fn destroy_root(&mut self, root: WidgetId);

    fn set_position(&mut self, root: WidgetId, x: i32, y: i32);
    /// Opacity in `0..=255`, 255 fully opaque.
    fn set_opacity(&mut self, root: WidgetId, opacity: u8);
    fn set_hidden(&mut self, root: WidgetId, hidden: bool);

    fn create_focus_group(&mut self) -> PageResult<GroupId>;
    fn destroy_focus_group(&mut self, group: GroupId);
    /// Point the input device at `group`. Passing `None` detaches it.
    fn bind_input_device(&mut self, group: Option<GroupId>);
    /// The group the input device currently points at, if any.
    fn bound_input_group(&self) -> Option<GroupId>;

    fn create_timer(&mut self, period: Duration) -> PageResult<TimerId>;
    fn destroy_timer(&mut self, timer: TimerId);

    fn alloc_style(&mut self) -> PageResult<StyleId>;
    fn release_style(&mut self, style: StyleId);

    /// Logical screen dimensions, used to derive slide-animation travel.
    fn screen_size(&self) -> (i32, i32);
}
