//! Snapshot module - read-only view of a game for rendering and export
//!
//! Snapshots are plain data decoupled from the live [`Game`](crate::Game):
//! renderers and machine consumers read them without touching game state.
//! They serialize to JSON for the runner's line-delimited output mode.

use serde::{Serialize, Serializer};

use tenpin_types::{FrameKind, PinCount, FRAMES_PER_GAME, SECOND_ATTEMPT, THIRD_ATTEMPT};

use crate::frame::Frame;
use crate::game::Game;

fn serialize_kind<S: Serializer>(
    kind: &Option<FrameKind>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match kind {
        Some(kind) => serializer.serialize_some(kind.as_str()),
        None => serializer.serialize_none(),
    }
}

/// One frame as a scoreboard sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameSnapshot {
    pub number: u8,
    /// Balls thrown so far, in order; `None` for balls not yet bowled
    pub rolls: [Option<PinCount>; 3],
    /// How the frame resolved; `None` while it is open for play or unplayed
    #[serde(serialize_with = "serialize_kind")]
    pub kind: Option<FrameKind>,
    /// Cumulative game total through this frame, once it can be shown
    pub total: Option<u32>,
}

impl FrameSnapshot {
    fn unplayed(number: u8) -> Self {
        Self {
            number,
            rolls: [None; 3],
            kind: None,
            total: None,
        }
    }

    fn of(frame: &Frame, total: Option<u32>) -> Self {
        let attempt = frame.attempt();
        let rolls = [
            (attempt >= 1).then(|| frame.first_attempt_pins()),
            (attempt >= SECOND_ATTEMPT).then(|| frame.second_attempt_pins()),
            (attempt >= THIRD_ATTEMPT).then(|| frame.extra_pins()),
        ];
        Self {
            number: frame.number(),
            rolls,
            kind: frame.kind(),
            total,
        }
    }
}

/// Full game as a scoreboard sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub frames: [FrameSnapshot; FRAMES_PER_GAME as usize],
    pub score: u32,
    pub complete: bool,
}

impl GameSnapshot {
    /// Capture the current state of a game
    pub fn of(game: &Game) -> Self {
        let totals = game.frame_scores();
        let mut frames = [FrameSnapshot::unplayed(0); FRAMES_PER_GAME as usize];
        for (idx, slot) in frames.iter_mut().enumerate() {
            let number = idx as u8 + 1;
            *slot = match game.frame(number) {
                Some(frame) => FrameSnapshot::of(frame, totals.get(idx).copied()),
                None => FrameSnapshot::unplayed(number),
            };
        }
        Self {
            frames,
            score: game.score(),
            complete: game.is_complete(),
        }
    }
}

impl Game {
    /// Capture a read-only scoreboard view of this game
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::of(self)
    }
}
