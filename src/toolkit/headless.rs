use std::collections::HashMap;
use std::time::Duration;

use crate::error::PageResult;

use super::traits::{GroupId, StyleId, TimerId, Toolkit, WidgetId};

/// Observable state of one root container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetRecord {
    pub x: i32,
    pub y: i32,
    pub opacity: u8,
    pub hidden: bool,
}

impl Default for WidgetRecord {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            opacity: 255,
            hidden: false,
        }
    }
}

/// In-memory toolkit with full allocation bookkeeping.
///
/// Used by the lifecycle tests to prove resource symmetry (every create is
/// matched by exactly one destroy) and usable by embedders that drive the
/// page stack headlessly.
#[derive(Debug)]
pub struct HeadlessToolkit {
    screen: (i32, i32),
    next_id: u64,
    widgets: HashMap<u64, WidgetRecord>,
    groups: HashMap<u64, ()>,
    timers: HashMap<u64, Duration>,
    styles: HashMap<u64, ()>,
    bound_group: Option<GroupId>,
    pub created_roots: usize,
    pub destroyed_roots: usize,
    pub created_groups: usize,
    pub destroyed_groups: usize,
    pub created_timers: usize,
    pub destroyed_timers: usize,
    pub allocated_styles: usize,
    pub released_styles: usize,
    /// Destroy/release calls whose handle was no longer (or never) live.
    pub stale_releases: usize,
}

impl Default for HeadlessToolkit {
    fn default() -> Self {
        Self::with_screen_size(240, 240)
    }
}

impl HeadlessToolkit {
    pub fn with_screen_size(width: i32, height: i32) -> Self {
        Self {
            screen: (width.max(1), height.max(1)),
            next_id: 1,
            widgets: HashMap::new(),
            groups: HashMap::new(),
            timers: HashMap::new(),
            styles: HashMap::new(),
            bound_group: None,
            created_roots: 0,
            destroyed_roots: 0,
            created_groups: 0,
            destroyed_groups: 0,
            created_timers: 0,
            destroyed_timers: 0,
            allocated_styles: 0,
            released_styles: 0,
            stale_releases: 0,
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn widget(&self, root: WidgetId) -> Option<&WidgetRecord> {
        self.widgets.get(&root.0)
    }

    pub fn live_widgets(&self) -> usize {
        self.widgets.len()
    }

    pub fn live_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn live_styles(&self) -> usize {
        self.styles.len()
    }

    pub fn bound_group(&self) -> Option<GroupId> {
        self.bound_group
    }

    pub fn timer_period(&self, timer: TimerId) -> Option<Duration> {
        self.timers.get(&timer.0).copied()
    }
}

impl Toolkit for HeadlessToolkit {
    fn create_root(&mut self) -> PageResult<WidgetId> {
        let id = self.next_id();
        self.widgets.insert(id, WidgetRecord::default());
        self.created_roots += 1;
        Ok(WidgetId(id))
    }

    fn destroy_root(&mut self, root: WidgetId) {
        if self.widgets.remove(&root.0).is_some() {
            self.destroyed_roots += 1;
        } else {
            self.stale_releases += 1;
        }
    }

    fn set_position(&mut self, root: WidgetId, x: i32, y: i32) {
        if let Some(record) = self.widgets.get_mut(&root.0) {
            record.x = x;
            record.y = y;
        }
    }

    fn set_opacity(&mut self, root: WidgetId, opacity: u8) {
        if let Some(record) = self.widgets.get_mut(&root.0) {
            record.opacity = opacity;
        }
    }

    fn set_hidden(&mut self, root: WidgetId, hidden: bool) {
        if let Some(record) = self.widgets.get_mut(&root.0) {
            record.hidden = hidden;
        }
    }

    fn create_focus_group(&mut self) -> PageResult<GroupId> {
        let id = self.next_id();
        self.groups.insert(id, ());
        self.created_groups += 1;
        Ok(GroupId(id))
    }

    fn destroy_focus_group(&mut self, group: GroupId) {
        if self.groups.remove(&group.0).is_some() {
            self.destroyed_groups += 1;
        } else {
            self.stale_releases += 1;
        }
        if self.bound_group == Some(group) {
            self.bound_group = None;
        }
    }

    fn bind_input_device(&mut self, group: Option<GroupId>) {
        self.bound_group = group;
    }

    fn bound_input_group(&self) -> Option<GroupId> {
        self.bound_group
    }

    fn create_timer(&mut self, period: Duration) -> PageResult<TimerId> {
        let id = self.next_id();
        self.timers.insert(id, period);
        self.created_timers += 1;
        Ok(TimerId(id))
    }

    fn destroy_timer(&mut self, timer: TimerId) {
        if self.timers.remove(&timer.0).is_some() {
            self.destroyed_timers += 1;
        } else {
            self.stale_releases += 1;
        }
    }

    fn alloc_style(&mut self) -> PageResult<StyleId> {
        let id = self.next_id();
        self.styles.insert(id, ());
        self.allocated_styles += 1;
        Ok(StyleId(id))
    }

    fn release_style(&mut self, style: StyleId) {
        if self.styles.remove(&style.0).is_some() {
            self.released_styles += 1;
        } else {
            self.stale_releases += 1;
        }
    }

    fn screen_size(&self) -> (i32, i32) {
        self.screen
    }
}
