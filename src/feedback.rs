//! Haptic feedback boundary
//!
//! The scoreboard fires a light impact on every scoring and theme button
//! press. In a terminal the closest thing is the bell, so [`TerminalBell`] is
//! the production sink. [`Feedback`] applies the gating: the user's haptics
//! preference and whether the platform can give feedback at all.

use crate::prefs::Preferences;
use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;
use tracing::debug;

/// A fire-and-forget feedback sink
pub trait Haptics {
    fn light_impact(&mut self);
}

/// Rings the terminal bell
pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
}

impl TerminalBell {
    pub fn stdout() -> Self {
        TerminalBell { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        TerminalBell { out }
    }
}

impl<W: Write> Haptics for TerminalBell<W> {
    fn light_impact(&mut self) {
        if let Err(err) = self.out.write_all(b"\x07").and_then(|()| self.out.flush()) {
            debug!(error = %err, "bell failed");
        }
    }
}

pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn light_impact(&mut self) {}
}

/// Counts impacts; clones share the count
#[derive(Debug, Clone, Default)]
pub struct RecordingHaptics {
    impacts: Rc<Cell<usize>>,
}

impl RecordingHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn impacts(&self) -> usize {
        self.impacts.get()
    }
}

impl Haptics for RecordingHaptics {
    fn light_impact(&mut self) {
        self.impacts.set(self.impacts.get() + 1);
    }
}

/// Whether this terminal can give feedback at all
pub fn platform_supports_feedback(term: Option<&str>, no_bell: bool) -> bool {
    !no_bell && term != Some("dumb")
}

/// A haptics sink gated by platform support and the user's preference
pub struct Feedback {
    haptics: Box<dyn Haptics>,
    supported: bool,
}

impl Feedback {
    pub fn new(haptics: Box<dyn Haptics>, supported: bool) -> Self {
        Feedback { haptics, supported }
    }

    pub fn disabled() -> Self {
        Self::new(Box::new(NoHaptics), false)
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Fire a light impact for a button press
    pub fn press(&mut self, prefs: &Preferences) {
        if self.supported && prefs.haptics_enabled() {
            self.haptics.light_impact();
        }
    }
}
