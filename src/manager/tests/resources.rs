use std::time::Duration;

use crate::page::PageState;
use crate::toolkit::TimerId;

use super::helpers::{full_resource_page, setup};

#[test]
fn every_acquired_resource_is_released_exactly_once() {
    let (mut manager, mut toolkit) = setup();
    let a = full_resource_page("a");
    let b = full_resource_page("b");
    manager.register(&a).expect("register a");
    manager.register(&b).expect("register b");

    manager.push(&mut toolkit, &a).expect("push a");
    manager.push(&mut toolkit, &b).expect("push b");
    manager.pop(&mut toolkit).expect("pop b");
    manager.pop(&mut toolkit).expect("pop a");

    assert_eq!(toolkit.created_roots, 2);
    assert_eq!(toolkit.destroyed_roots, 2);
    assert_eq!(toolkit.created_groups, 2);
    assert_eq!(toolkit.destroyed_groups, 2);
    assert_eq!(toolkit.created_timers, 2);
    assert_eq!(toolkit.destroyed_timers, 2);
    assert_eq!(toolkit.allocated_styles, 2);
    assert_eq!(toolkit.released_styles, 2);
    assert_eq!(toolkit.stale_releases, 0);

    assert_eq!(toolkit.live_widgets(), 0);
    assert_eq!(toolkit.live_groups(), 0);
    assert_eq!(toolkit.live_timers(), 0);
    assert_eq!(toolkit.live_styles(), 0);
    assert_eq!(toolkit.bound_group(), None);
}

#[test]
fn round_trip_preserves_root_and_focus_group() {
    let (mut manager, mut toolkit) = setup();
    let a = full_resource_page("a");
    let b = full_resource_page("b");
    manager.register(&a).expect("register a");
    manager.register(&b).expect("register b");

    manager.push(&mut toolkit, &a).expect("push a");
    let (a_root, a_group) = {
        let page = manager.pages().next().expect("a on the stack");
        (page.root(), page.resources.focus_group)
    };
    assert!(a_root.is_some());
    assert_eq!(toolkit.bound_group(), a_group);

    manager.push(&mut toolkit, &b).expect("push b");
    let b_group = manager
        .pages()
        .find(|page| page.name() == "b")
        .and_then(|page| page.resources.focus_group);
    assert_eq!(toolkit.bound_group(), b_group, "the top page owns the device");

    manager.pop(&mut toolkit).expect("pop b");

    let page = manager.pages().next().expect("a revealed");
    assert_eq!(page.state(), PageState::Activity);
    assert_eq!(page.root(), a_root, "root survives being covered");
    assert_eq!(page.resources.focus_group, a_group);
    assert_eq!(toolkit.bound_group(), a_group, "binding survives the trip");
}

#[test]
fn refresh_timer_uses_the_declared_period() {
    let (mut manager, mut toolkit) = setup();
    let a = full_resource_page("a");
    manager.register(&a).expect("register");
    manager.push(&mut toolkit, &a).expect("push");

    let timer: TimerId = manager
        .pages()
        .next()
        .and_then(|page| page.resources.timer)
        .expect("timer allocated at load");
    assert_eq!(toolkit.timer_period(timer), Some(Duration::from_millis(50)));

    manager.pop(&mut toolkit).expect("pop");
    assert_eq!(toolkit.live_timers(), 0);
}
