//! Frame module - one scoring unit of a game
//!
//! A frame tracks its own attempts, the pins still standing, and its raw
//! score split by attempt so the game can resolve cross-frame bonuses.
//! Strike and spare are latched at the moment the qualifying ball lands and
//! never reinterpreted afterwards, so queries stay valid under any call
//! ordering.

use tenpin_types::{
    FrameKind, PinCount, FIRST_ATTEMPT, FRAME_ATTEMPTS, LAST_FRAME, LAST_FRAME_ATTEMPTS,
    PINS_PER_FRAME, SECOND_ATTEMPT,
};

/// State of a single frame
///
/// One instance per frame number; created on the frame's first ball and
/// mutated only through [`Frame::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Frame identity, 1..=10, fixed at creation
    number: u8,
    /// Attempt cap; 2, raised once to 3 for frame 10 on a strike or spare
    max_attempts: u8,
    /// Pins still standing; re-racked in frame 10 when bonus balls remain
    pins_standing: u8,
    /// Last attempt index processed (1-based); 0 before the first ball
    attempt: u8,
    first_attempt_pins: u8,
    second_attempt_pins: u8,
    /// Frame 10's bonus ball, folded into the frame's own total
    extra_pins: u8,
    strike: bool,
    spare: bool,
}

impl Frame {
    /// Create a fresh frame with a full rack and no attempts
    ///
    /// The number is not range-checked; keeping it within 1..=10 is the
    /// caller's responsibility.
    pub fn new(number: u8) -> Self {
        Self {
            number,
            max_attempts: FRAME_ATTEMPTS,
            pins_standing: PINS_PER_FRAME,
            attempt: 0,
            first_attempt_pins: 0,
            second_attempt_pins: 0,
            extra_pins: 0,
            strike: false,
            spare: false,
        }
    }

    /// Record one ball of this frame
    ///
    /// Attempts beyond `max_attempts` are ignored, as is any ball thrown at
    /// a non-last frame that already holds a strike. Invalid attempt
    /// ordering is not checked; the caller supplies attempts in order.
    pub fn play(&mut self, attempt: u8, pins: PinCount) {
        if attempt > self.max_attempts {
            return;
        }
        if self.strike && !self.is_last_frame() {
            return;
        }

        self.attempt = attempt;
        self.add_pins(attempt, pins);
        self.knock_down(pins);

        if attempt == FIRST_ATTEMPT && self.pins_standing == 0 {
            self.strike = true;
        } else if attempt == SECOND_ATTEMPT && self.pins_standing == 0 && !self.strike {
            self.spare = true;
        }

        // Frame 10 earns its third ball on a strike or a spare, once.
        if self.is_last_frame()
            && (self.strike || self.spare)
            && self.max_attempts == FRAME_ATTEMPTS
        {
            self.max_attempts = LAST_FRAME_ATTEMPTS;
        }

        // Bonus balls in frame 10 are thrown at a fresh rack.
        if self.is_last_frame() && self.pins_standing == 0 && self.attempt < self.max_attempts {
            self.pins_standing = PINS_PER_FRAME;
        }
    }

    /// Lower the standing pins by `pins`, clamping at zero
    pub fn knock_down(&mut self, pins: PinCount) {
        self.pins_standing = self.pins_standing.saturating_sub(pins);
    }

    fn add_pins(&mut self, attempt: u8, pins: PinCount) {
        match attempt {
            FIRST_ATTEMPT => self.first_attempt_pins = self.first_attempt_pins.saturating_add(pins),
            SECOND_ATTEMPT => {
                self.second_attempt_pins = self.second_attempt_pins.saturating_add(pins)
            }
            _ => self.extra_pins = self.extra_pins.saturating_add(pins),
        }
    }

    /// Whether the first ball cleared the full rack
    pub fn is_strike(&self) -> bool {
        self.strike
    }

    /// Whether the second ball cleared what the first left standing
    pub fn is_spare(&self) -> bool {
        self.spare
    }

    /// Whether this is the bonus-eligible tenth frame
    pub fn is_last_frame(&self) -> bool {
        self.number == LAST_FRAME
    }

    /// Whether this frame accepts no further balls
    pub fn is_done(&self) -> bool {
        if self.is_last_frame() {
            self.attempt >= self.max_attempts
        } else {
            self.strike || self.attempt >= self.max_attempts
        }
    }

    /// How this frame resolved, or `None` while balls remain
    pub fn kind(&self) -> Option<FrameKind> {
        if self.strike {
            Some(FrameKind::Strike)
        } else if self.spare {
            Some(FrameKind::Spare)
        } else if self.is_done() {
            Some(FrameKind::Open)
        } else {
            None
        }
    }

    /// The frame's own raw total: every pin it knocked down, bonus ball
    /// included, with no cross-frame bonus
    pub fn score(&self) -> u32 {
        self.first_attempt_pins as u32 + self.second_attempt_pins as u32 + self.extra_pins as u32
    }

    /// Pins recorded on the first ball only
    ///
    /// This is the one-ball bonus a preceding spare collects.
    pub fn first_attempt_pins(&self) -> PinCount {
        self.first_attempt_pins
    }

    /// Pins recorded on the second ball only
    pub fn second_attempt_pins(&self) -> PinCount {
        self.second_attempt_pins
    }

    /// Pins recorded on frame 10's bonus ball
    pub fn extra_pins(&self) -> PinCount {
        self.extra_pins
    }

    /// Frame identity, 1..=10
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Pins still standing (leftover pins)
    pub fn pins_standing(&self) -> u8 {
        self.pins_standing
    }

    /// Last attempt index processed; 0 before the first ball
    pub fn attempt(&self) -> u8 {
        self.attempt
    }

    /// Current attempt cap (2, or 3 for an extended tenth frame)
    pub fn max_attempts(&self) -> u8 {
        self.max_attempts
    }
}
