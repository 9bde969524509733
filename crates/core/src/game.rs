//! Game module - sequences play across frames and totals the score
//!
//! Frames live in a fixed array of ten slots indexed by frame number, so the
//! `next` and `after-next` lookups that strike and spare bonuses need are
//! plain index arithmetic, independent of the order frames were played in.
//! The total is always recomputed from the frames on demand; nothing is
//! cached, so calling [`Game::score`] at any point mid-game is safe and
//! idempotent.

use arrayvec::ArrayVec;

use tenpin_types::{PinCount, FIRST_ATTEMPT, FRAMES_PER_GAME, PINS_PER_FRAME};

use crate::frame::Frame;

const FRAME_SLOTS: usize = FRAMES_PER_GAME as usize;

/// A single ten-pin game
///
/// Owns its frames exclusively; frames know nothing about their neighbors,
/// and all cross-frame bonus logic lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Game {
    /// One slot per frame number; a slot fills on the frame's first ball
    frames: [Option<Frame>; FRAME_SLOTS],
}

impl Game {
    /// Start a new game with no frames played
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot index for a frame number, or `None` outside 1..=10
    fn slot(number: u8) -> Option<usize> {
        if (1..=FRAMES_PER_GAME).contains(&number) {
            Some((number - 1) as usize)
        } else {
            None
        }
    }

    /// Record one ball: `pins` knocked down on `attempt` of `frame`
    ///
    /// The frame is created on first reference. Frame numbers outside 1..=10
    /// are ignored, as are attempts a frame no longer accepts; nothing here
    /// returns an error.
    pub fn play(&mut self, frame: u8, attempt: u8, pins: PinCount) {
        let Some(idx) = Self::slot(frame) else {
            return;
        };
        self.frames[idx]
            .get_or_insert_with(|| Frame::new(frame))
            .play(attempt, pins);
    }

    /// Total score of the game as played so far
    ///
    /// A pure recomputation over the frames in number order. Bonuses whose
    /// resolving frame has not been played yet contribute zero and appear
    /// once that frame lands and `score` is called again.
    pub fn score(&self) -> u32 {
        (0..FRAME_SLOTS).map(|idx| self.frame_total(idx)).sum()
    }

    /// Cumulative totals for the contiguously played frames, in frame order
    ///
    /// This is the running score a scoreboard prints under each frame. Stops
    /// at the first unplayed frame.
    pub fn frame_scores(&self) -> ArrayVec<u32, FRAME_SLOTS> {
        let mut totals = ArrayVec::new();
        let mut running = 0u32;
        for idx in 0..FRAME_SLOTS {
            if self.frames[idx].is_none() {
                break;
            }
            running += self.frame_total(idx);
            totals.push(running);
        }
        totals
    }

    /// One frame's contribution: its own pins plus any strike/spare bonus
    fn frame_total(&self, idx: usize) -> u32 {
        let Some(frame) = &self.frames[idx] else {
            return 0;
        };
        let mut total = frame.score();
        if frame.is_strike() {
            total += self.strike_bonus(idx);
        } else if frame.is_spare() {
            total += self.spare_bonus(idx);
        }
        total
    }

    /// Strike bonus: the next two balls bowled after the strike
    ///
    /// When the following frame is itself a strike it only holds one ball,
    /// so the second bonus ball comes from the frame after it; frame 10
    /// holds its own second ball even after a strike. A tenth-frame strike
    /// earns no bonus here - its extra balls fold into its own score.
    fn strike_bonus(&self, idx: usize) -> u32 {
        let Some(next) = self.played_frame(idx + 1) else {
            return 0;
        };
        if next.is_strike() && !next.is_last_frame() {
            let second_ball = self
                .played_frame(idx + 2)
                .map_or(0, |after| after.first_attempt_pins() as u32);
            PINS_PER_FRAME as u32 + second_ball
        } else {
            next.first_attempt_pins() as u32 + next.second_attempt_pins() as u32
        }
    }

    /// Spare bonus: the first ball of the following frame
    fn spare_bonus(&self, idx: usize) -> u32 {
        self.played_frame(idx + 1)
            .map_or(0, |next| next.first_attempt_pins() as u32)
    }

    fn played_frame(&self, idx: usize) -> Option<&Frame> {
        self.frames.get(idx).and_then(|slot| slot.as_ref())
    }

    /// The frame with this number, if it has been played
    pub fn frame(&self, number: u8) -> Option<&Frame> {
        Self::slot(number).and_then(|idx| self.frames[idx].as_ref())
    }

    /// How many frames have received at least one ball
    pub fn frames_played(&self) -> usize {
        self.frames.iter().filter(|slot| slot.is_some()).count()
    }

    /// Pins standing in this frame right now
    ///
    /// A full rack for a frame that has not been played yet; drivers use
    /// this to know what the next ball can hit.
    pub fn pins_standing(&self, frame: u8) -> u8 {
        self.frame(frame)
            .map_or(PINS_PER_FRAME, Frame::pins_standing)
    }

    /// The attempt index the next ball of this frame should carry
    pub fn next_attempt(&self, frame: u8) -> u8 {
        self.frame(frame)
            .map_or(FIRST_ATTEMPT, |f| f.attempt() + 1)
    }

    /// Whether all ten frames have been played to completion
    pub fn is_complete(&self) -> bool {
        self.frames
            .iter()
            .all(|slot| slot.as_ref().is_some_and(Frame::is_done))
    }
}
