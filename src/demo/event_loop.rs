use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use log::{debug, warn};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear, Paragraph};
use tokio::time;

use crate::config::Config;
use crate::error::{PageError, PageResult};
use crate::manager::{NavOutcome, PageManager};
use crate::page::PageDescriptor;
use crate::toolkit::{TerminalToolkit, Toolkit};

use super::pages::demo_descriptors;
use super::session::DemoSession;

/// Drive the demo: a frame tick advances animations, key presses push and
/// pop pages, and every frame the live roots are drawn in z-order.
pub async fn run(config: Config) -> PageResult<()> {
    let mut session = DemoSession::enter()?;
    let mut toolkit = TerminalToolkit::new(config.screen.width, config.screen.height);
    let tick_period = Duration::from_millis(config.demo.tick_ms);

    let descriptors = demo_descriptors(&config);
    let mut manager = PageManager::new(config);
    for descriptor in &descriptors {
        manager.register(descriptor)?;
    }
    push_logged(&mut manager, &mut toolkit, &descriptors[0])?;

    let mut input = EventStream::new().fuse();
    let mut tick = time::interval(tick_period);
    tick.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            maybe_event = input.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        let quit = matches!(key.code, KeyCode::Char('q'))
                            || (matches!(key.code, KeyCode::Char('c'))
                                && key.modifiers.contains(KeyModifiers::CONTROL));
                        if quit {
                            break;
                        }
                        match key.code {
                            KeyCode::Char('1') => {
                                push_logged(&mut manager, &mut toolkit, &descriptors[0])?;
                            }
                            KeyCode::Char('2') => {
                                push_logged(&mut manager, &mut toolkit, &descriptors[1])?;
                            }
                            KeyCode::Char('3') => {
                                push_logged(&mut manager, &mut toolkit, &descriptors[2])?;
                            }
                            KeyCode::Backspace | KeyCode::Esc => {
                                let outcome = manager.pop(&mut toolkit)?;
                                debug!("pop: {outcome:?}");
                            }
                            _ => {}
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        warn!("input stream error: {err}");
                    }
                    None => break,
                }
            }
            _ = tick.tick() => {
                manager.tick(&mut toolkit, tick_period)?;
                for event in manager.take_events() {
                    debug!("event: {event:?}");
                }
                session.draw(|frame| draw_frame(frame, &manager, &toolkit))?;
            }
        }
    }

    session
        .restore()
        .map_err(|source| PageError::io_with_context(source, "failed to restore the terminal"))
}

fn push_logged(
    manager: &mut PageManager,
    toolkit: &mut TerminalToolkit,
    descriptor: &Arc<PageDescriptor>,
) -> PageResult<()> {
    match manager.push(toolkit, descriptor)? {
        NavOutcome::Rejected(reason) => {
            debug!("push of \"{}\": {}", descriptor.name(), reason.id());
        }
        outcome => debug!("push: {outcome:?}"),
    }
    Ok(())
}

fn draw_frame(frame: &mut Frame<'_>, manager: &PageManager, toolkit: &TerminalToolkit) {
    let area = frame.area();
    if area.height < 2 {
        return;
    }
    let body = Rect::new(area.x, area.y, area.width, area.height - 1);
    let status_line = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    let (screen_w, screen_h) = toolkit.screen_size();
    for page in manager.pages() {
        let Some(root) = page.root() else { continue };
        let Some(record) = toolkit.panel(root) else {
            continue;
        };
        if record.hidden {
            continue;
        }
        let Some(rect) = panel_rect(body, screen_w, screen_h, record.x, record.y) else {
            continue;
        };

        let mut style = Style::default();
        if record.opacity < u8::MAX {
            style = style.add_modifier(Modifier::DIM);
        }
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Block::bordered().title(page.name().to_string()).style(style),
            rect,
        );
    }

    let top = manager
        .top_name()
        .map(|name| name.to_string())
        .unwrap_or_else(|| "-".to_string());
    let status = format!(
        "pagestack demo | top: {top} | depth: {} | [1/2/3] push  [backspace] pop  [q] quit",
        manager.depth()
    );
    frame.render_widget(Paragraph::new(status), status_line);
}

/// Map a full-screen panel at logical offset `(x, y)` into terminal cells,
/// clipped to `body`. Returns `None` when the panel is entirely offscreen.
fn panel_rect(body: Rect, screen_w: i32, screen_h: i32, x: i32, y: i32) -> Option<Rect> {
    let dx = (x * i32::from(body.width)) / screen_w.max(1);
    let dy = (y * i32::from(body.height)) / screen_h.max(1);

    let left = i32::from(body.x) + dx;
    let top = i32::from(body.y) + dy;
    let right = left + i32::from(body.width);
    let bottom = top + i32::from(body.height);

    let clip_left = left.max(i32::from(body.x));
    let clip_top = top.max(i32::from(body.y));
    let clip_right = right.min(i32::from(body.x) + i32::from(body.width));
    let clip_bottom = bottom.min(i32::from(body.y) + i32::from(body.height));
    if clip_left >= clip_right || clip_top >= clip_bottom {
        return None;
    }

    Some(Rect::new(
        clip_left as u16,
        clip_top as u16,
        (clip_right - clip_left) as u16,
        (clip_bottom - clip_top) as u16,
    ))
}

#[cfg(test)]
mod tests {
    use super::panel_rect;
    use ratatui::layout::Rect;

    #[test]
    fn resting_panel_fills_the_body() {
        let body = Rect::new(0, 0, 80, 24);
        assert_eq!(panel_rect(body, 240, 240, 0, 0), Some(body));
    }

    #[test]
    fn half_slid_panel_is_clipped() {
        let body = Rect::new(0, 0, 80, 24);
        let rect = panel_rect(body, 240, 240, 120, 0).expect("panel partly visible");
        assert_eq!(rect, Rect::new(40, 0, 40, 24));
    }

    #[test]
    fn offscreen_panel_is_skipped() {
        let body = Rect::new(0, 0, 80, 24);
        assert_eq!(panel_rect(body, 240, 240, 240, 0), None);
        assert_eq!(panel_rect(body, 240, 240, 0, -240), None);
    }
}
