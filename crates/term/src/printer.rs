//! Printer: flushes a rendered scoreboard to a real terminal.
//!
//! Plain text goes through untouched; strike and spare marks and the
//! summary line pick up color so a finished game reads at a glance.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use tenpin_core::GameSnapshot;

use crate::scoreboard::ScoreboardView;

/// Print the scoreboard grid and summary for a game to stdout
pub fn print_scoreboard(snap: &GameSnapshot) -> Result<()> {
    let view = ScoreboardView::new();
    let mut stdout = io::stdout();

    for line in view.render(snap) {
        queue_marked_line(&mut stdout, &line)?;
    }

    stdout.queue(SetAttribute(Attribute::Bold))?;
    if snap.complete {
        stdout.queue(SetForegroundColor(Color::Green))?;
    }
    stdout.queue(Print(view.summary(snap)))?;
    stdout.queue(ResetColor)?;
    stdout.queue(SetAttribute(Attribute::Reset))?;
    stdout.queue(Print("\n"))?;

    stdout.flush()?;
    Ok(())
}

/// Queue one grid line, coloring strike and spare marks
fn queue_marked_line(stdout: &mut io::Stdout, line: &str) -> Result<()> {
    for ch in line.chars() {
        match ch {
            'X' => {
                stdout.queue(SetForegroundColor(Color::Red))?;
                stdout.queue(Print(ch))?;
                stdout.queue(ResetColor)?;
            }
            '/' => {
                stdout.queue(SetForegroundColor(Color::Cyan))?;
                stdout.queue(Print(ch))?;
                stdout.queue(ResetColor)?;
            }
            _ => {
                stdout.queue(Print(ch))?;
            }
        }
    }
    stdout.queue(Print("\n"))?;
    Ok(())
}
