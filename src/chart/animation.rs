//! Progressive-reveal animation: one frame per year, plus the two-state
//! playback machine the UI drives through its Play/Pause buttons.

use crate::chart::Trace;
use serde::Serialize;

/// Milliseconds each frame stays on screen during playback.
pub const FRAME_DURATION_MS: u64 = 50;

/// One snapshot of the reveal: the first `k` observed points and the trend
/// line evaluated over those same dates.
///
/// The trend segment reuses the full-series fit; only the drawn x-range
/// grows from frame to frame. Frames are ordered and never removed or
/// reordered after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationFrame {
    /// Calendar year of the newest revealed point, for frame-selection UIs.
    pub label: String,
    pub observed: Trace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trace>,
}

/// The action a playback control triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackAction {
    Play,
    Pause,
}

/// Descriptor for one playback button handed to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaybackControl {
    pub action: PlaybackAction,
    pub label: &'static str,
    /// Frame interval while this action is active; 0 halts advancement.
    pub frame_duration_ms: u64,
}

/// The fixed Play/Pause control pair every chart carries.
pub fn playback_controls() -> [PlaybackControl; 2] {
    [
        PlaybackControl {
            action: PlaybackAction::Play,
            label: "Play",
            frame_duration_ms: FRAME_DURATION_MS,
        },
        PlaybackControl {
            action: PlaybackAction::Pause,
            label: "Pause",
            frame_duration_ms: 0,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlaybackState {
    Stopped,
    Playing,
}

/// Two-state playback over a frame strip. No scrubbing: the only
/// transitions are play, pause, and stepwise advancement while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    state: PlaybackState,
    frame_index: usize,
    frame_count: usize,
}

impl Playback {
    /// Starts Stopped at frame 0; the static full-series traces are on
    /// screen until playback begins.
    pub fn new(frame_count: usize) -> Self {
        Self {
            state: PlaybackState::Stopped,
            frame_index: 0,
            frame_count,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Index of the frame currently on screen.
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Stopped → Playing. Advancement resumes from the current frame.
    pub fn play(&mut self) {
        self.state = PlaybackState::Playing;
    }

    /// Playing → Stopped, keeping the current frame index.
    pub fn pause(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    /// Steps to the next frame if playing, stopping on the last frame.
    /// Returns the index of the frame now on screen.
    pub fn advance(&mut self) -> usize {
        if self.state == PlaybackState::Playing {
            if self.frame_index + 1 < self.frame_count {
                self.frame_index += 1;
            } else {
                self.state = PlaybackState::Stopped;
            }
        }
        self.frame_index
    }
}
