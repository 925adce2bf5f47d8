//! Scroll listener lifetime.
//!
//! Mouse reporting is what turns the wheel into scroll events. The listener
//! enables it when attached and disables it when detached or dropped, so the
//! terminal never stays in mouse mode after the dashboard goes away.

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use std::io::{self, Write};

pub struct ScrollListener<W: Write> {
    out: W,
    attached: bool,
}

impl<W: Write> ScrollListener<W> {
    pub fn attach(mut out: W) -> io::Result<Self> {
        execute!(out, EnableMouseCapture)?;
        tracing::debug!("scroll listener attached");
        Ok(Self {
            out,
            attached: true,
        })
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Stop listening. Calling it again is a no-op.
    pub fn detach(&mut self) -> io::Result<()> {
        if self.attached {
            self.attached = false;
            execute!(self.out, DisableMouseCapture)?;
            tracing::debug!("scroll listener detached");
        }
        Ok(())
    }
}

impl<W: Write> Drop for ScrollListener<W> {
    fn drop(&mut self) {
        let _ = self.detach();
    }
}
