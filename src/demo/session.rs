use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::error::{PageError, PageResult};

/// Raw-mode alternate-screen terminal session; restored on drop.
pub(crate) struct DemoSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl DemoSession {
    pub(crate) fn enter() -> PageResult<Self> {
        enable_raw_mode()
            .map_err(|source| PageError::io_with_context(source, "failed to enter raw mode"))?;
        let mut stdout = io::stdout();
        if let Err(source) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(PageError::io_with_context(
                source,
                "failed to enter the alternate screen",
            ));
        }

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(source) => {
                let mut stdout = io::stdout();
                let _ = execute!(stdout, LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(PageError::io_with_context(
                    source,
                    "failed to initialize the terminal",
                ));
            }
        };
        if let Err(source) = terminal.clear() {
            let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(PageError::io_with_context(
                source,
                "failed to clear the terminal",
            ));
        }

        Ok(Self {
            terminal,
            active: true,
        })
    }

    pub(crate) fn draw<F>(&mut self, render: F) -> PageResult<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal
            .draw(render)
            .map(|_| ())
            .map_err(|source| PageError::io_with_context(source, "failed to draw a frame"))
    }

    pub(crate) fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        self.active = false;
        Ok(())
    }
}

impl Drop for DemoSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
