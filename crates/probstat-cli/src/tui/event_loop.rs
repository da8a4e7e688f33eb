use crossterm::event;

use crate::tui::event::TuiEvent;

/// Redraws after every terminal event and otherwise blocks on input.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self { dirty: true } // Initial render is required on startup
    }
}

impl EventLoop {
    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        let event = event::read()?;
        self.dirty = true;
        Ok(event.into())
    }
}
