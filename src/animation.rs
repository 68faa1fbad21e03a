//! Playback flags and the external control channel.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

/// Message payload that pauses the loop. Anything else resumes it.
pub const PAUSE_MESSAGE: &str = "pause";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Pause,
    Resume,
    /// Stop the loop for good and tear the app down.
    Shutdown,
}

impl Control {
    pub fn from_message(message: &str) -> Self {
        if message == PAUSE_MESSAGE {
            Self::Pause
        } else {
            Self::Resume
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Playback {
    /// Points orbit every frame while set.
    pub animating: bool,
    /// No stepping and no presenting while set.
    pub paused: bool,
    pub stopped: bool,
}

impl Playback {
    pub fn apply(&mut self, control: Control) {
        match control {
            Control::Pause => self.paused = true,
            Control::Resume => self.paused = false,
            Control::Shutdown => self.stopped = true,
        }
    }

    pub fn toggle_animation(&mut self) {
        self.animating = !self.animating;
    }

    pub fn is_running(&self) -> bool {
        !self.paused && !self.stopped
    }
}

/// Outcome of one frame of the loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// The scene was handed to the renderer this frame.
    pub presented: bool,
    /// Point positions changed and must be re-uploaded.
    pub geometry_dirty: bool,
}

/// Queue of control requests shared with other threads or the host page.
///
/// Writers may live anywhere; the frame loop drains it once per frame before
/// doing any other work.
#[derive(Clone, Debug, Default)]
pub struct ControlInbox {
    queue: Arc<Mutex<VecDeque<Control>>>,
}

impl ControlInbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send(&self, control: Control) {
        self.queue.lock().push_back(control);
    }

    /// Queue a string message: `"pause"` pauses, any other value resumes.
    pub fn post_message(&self, message: &str) {
        self.send(Control::from_message(message));
    }

    pub fn shutdown(&self) {
        self.send(Control::Shutdown);
    }

    pub fn drain(&self) -> Vec<Control> {
        self.queue.lock().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}
