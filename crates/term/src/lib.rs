//! Terminal output for game snapshots
//!
//! Two layers, split so the interesting part stays testable:
//!
//! - [`scoreboard`]: pure formatting of a snapshot into the classic frame
//!   grid (ball marks, spare/strike symbols, cumulative totals)
//! - [`printer`]: flushing those lines to stdout with crossterm styling

pub mod printer;
pub mod scoreboard;

pub use tenpin_core as core;
pub use tenpin_types as types;

pub use printer::print_scoreboard;
pub use scoreboard::ScoreboardView;
