use std::time::Duration;

use log::debug;

use crate::error::PageResult;

use super::headless::WidgetRecord;
use super::traits::{GroupId, StyleId, TimerId, Toolkit, WidgetId};

/// Toolkit backing the terminal demo.
///
/// Root containers are tracked as logical panels in creation order, which is
/// also their z-order; the demo's draw pass maps each panel's logical
/// position and opacity onto ratatui widgets. Focus groups, timers and
/// styles have no terminal counterpart and are tracked as plain handles so
/// the lifecycle's create/destroy pairing still holds.
#[derive(Debug)]
pub struct TerminalToolkit {
    screen: (i32, i32),
    next_id: u64,
    panels: Vec<(WidgetId, WidgetRecord)>,
    groups: Vec<GroupId>,
    timers: Vec<(TimerId, Duration)>,
    styles: Vec<StyleId>,
    bound_group: Option<GroupId>,
}

impl TerminalToolkit {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            screen: (width.max(1), height.max(1)),
            next_id: 1,
            panels: Vec::new(),
            groups: Vec::new(),
            timers: Vec::new(),
            styles: Vec::new(),
            bound_group: None,
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Live panels in z-order, bottom first.
    pub fn panels(&self) -> impl Iterator<Item = (WidgetId, &WidgetRecord)> {
        self.panels.iter().map(|(id, record)| (*id, record))
    }

    pub fn panel(&self, root: WidgetId) -> Option<&WidgetRecord> {
        self.panels
            .iter()
            .find(|(id, _)| *id == root)
            .map(|(_, record)| record)
    }

    fn panel_mut(&mut self, root: WidgetId) -> Option<&mut WidgetRecord> {
        self.panels
            .iter_mut()
            .find(|(id, _)| *id == root)
            .map(|(_, record)| record)
    }
}

impl Toolkit for TerminalToolkit {
    fn create_root(&mut self) -> PageResult<WidgetId> {
        let id = WidgetId(self.next_id());
        self.panels.push((id, WidgetRecord::default()));
        debug!("terminal toolkit: created root {}", id.0);
        Ok(id)
    }

    fn destroy_root(&mut self, root: WidgetId) {
        self.panels.retain(|(id, _)| *id != root);
    }

    fn set_position(&mut self, root: WidgetId, x: i32, y: i32) {
        if let Some(record) = self.panel_mut(root) {
            record.x = x;
            record.y = y;
        }
    }

    fn set_opacity(&mut self, root: WidgetId, opacity: u8) {
        if let Some(record) = self.panel_mut(root) {
            record.opacity = opacity;
        }
    }

    fn set_hidden(&mut self, root: WidgetId, hidden: bool) {
        if let Some(record) = self.panel_mut(root) {
            record.hidden = hidden;
        }
    }

    fn create_focus_group(&mut self) -> PageResult<GroupId> {
        let id = GroupId(self.next_id());
        self.groups.push(id);
        Ok(id)
    }

    fn destroy_focus_group(&mut self, group: GroupId) {
        self.groups.retain(|id| *id != group);
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
        let id = TimerId(self.next_id());
        self.timers.push((id, period));
        Ok(id)
    }

    fn destroy_timer(&mut self, timer: TimerId) {
        self.timers.retain(|(id, _)| *id != timer);
    }

    fn alloc_style(&mut self) -> PageResult<StyleId> {
        let id = StyleId(self.next_id());
        self.styles.push(id);
        Ok(id)
    }

    fn release_style(&mut self, style: StyleId) {
        self.styles.retain(|id| *id != style);
    }

    fn screen_size(&self) -> (i32, i32) {
        self.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_keep_creation_order() {
        let mut toolkit = TerminalToolkit::new(240, 240);
        let a = toolkit.create_root().expect("create root");
        let b = toolkit.create_root().expect("create root");
        toolkit.set_position(b, 10, 0);

        let order: Vec<WidgetId> = toolkit.panels().map(|(id, _)| id).collect();
        assert_eq!(order, vec![a, b]);
        assert_eq!(toolkit.panel(b).map(|record| record.x), Some(10));

        toolkit.destroy_root(a);
        let order: Vec<WidgetId> = toolkit.panels().map(|(id, _)| id).collect();
        assert_eq!(order, vec![b]);
    }
}
