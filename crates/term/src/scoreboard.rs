//! Scoreboard: maps a `GameSnapshot` into printable text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tenpin_core::GameSnapshot;
use tenpin_types::{FrameKind, PinCount, FRAMES_PER_GAME, PINS_PER_FRAME};

/// Column width of a regular frame cell (two ball marks)
const CELL_WIDTH: usize = 5;

/// Column width of the tenth frame's cell (three ball marks)
const LAST_CELL_WIDTH: usize = 7;

/// Mark for a single ball: `X` for a full rack, `-` for a miss, the digit
/// otherwise, and a space for a ball not yet bowled
fn ball_mark(roll: Option<PinCount>) -> char {
    match roll {
        None => ' ',
        Some(0) => '-',
        Some(pins) if pins >= PINS_PER_FRAME => 'X',
        Some(pins) => char::from_digit(pins as u32, 10).unwrap_or('?'),
    }
}

/// The classic frame-grid scoreboard renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreboardView;

impl ScoreboardView {
    pub fn new() -> Self {
        Self
    }

    /// Render the grid: a header of frame numbers, one row of ball marks,
    /// one row of cumulative totals
    pub fn render(&self, snap: &GameSnapshot) -> Vec<String> {
        let border = self.row(|_| String::new(), '-', '+');
        let header = self.row(|idx| format!("{}", idx + 1), ' ', '|');
        let marks = self.row(|idx| self.marks_cell(snap, idx), ' ', '|');
        let totals = self.row(
            |idx| match snap.frames[idx].total {
                Some(total) => format!("{}", total),
                None => String::new(),
            },
            ' ',
            '|',
        );

        vec![
            border.clone(),
            header,
            border.clone(),
            marks,
            totals,
            border,
        ]
    }

    /// One-line summary under the grid
    pub fn summary(&self, snap: &GameSnapshot) -> String {
        if snap.complete {
            format!("final score: {}", snap.score)
        } else {
            format!("score so far: {}", snap.score)
        }
    }

    fn row<F: Fn(usize) -> String>(&self, cell: F, fill: char, sep: char) -> String {
        let mut line = String::new();
        line.push(sep);
        for idx in 0..FRAMES_PER_GAME as usize {
            let width = if idx == FRAMES_PER_GAME as usize - 1 {
                LAST_CELL_WIDTH
            } else {
                CELL_WIDTH
            };
            line.push_str(&center(&cell(idx), width, fill));
            line.push(sep);
        }
        line
    }

    fn marks_cell(&self, snap: &GameSnapshot, idx: usize) -> String {
        let frame = &snap.frames[idx];
        let [first, second, third] = frame.rolls;

        let m1 = ball_mark(first);
        let m2 = if frame.kind == Some(FrameKind::Spare) {
            '/'
        } else {
            ball_mark(second)
        };

        if idx == FRAMES_PER_GAME as usize - 1 {
            // The tenth frame's last ball can itself finish a leftover rack.
            let m3 = match (frame.kind, second, third) {
                (Some(FrameKind::Strike), Some(b2), Some(b3))
                    if b2 < PINS_PER_FRAME && b2 + b3 == PINS_PER_FRAME =>
                {
                    '/'
                }
                _ => ball_mark(third),
            };
            format!("{} {} {}", m1, m2, m3)
        } else {
            format!("{} {}", m1, m2)
        }
    }
}

fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count().min(width);
    let pad = width - len;
    let left = pad / 2;
    let mut out = String::new();
    for _ in 0..left {
        out.push(fill);
    }
    out.push_str(text);
    for _ in 0..pad - left {
        out.push(fill);
    }
    out
}
