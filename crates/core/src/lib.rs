//! Core scoring logic - pure, deterministic, and testable
//!
//! This crate contains the whole of the scoring rules: frame state
//! transitions and the game-level bonus resolution. It has **zero
//! dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the same sequence of balls always scores the same
//! - **Testable**: every rule is reachable from a plain method call
//! - **Portable**: usable from a terminal runner, a service, or a test rig
//!
//! # Module Structure
//!
//! - [`frame`]: one frame's attempts, standing pins, and strike/spare state
//! - [`game`]: ten frames plus the look-ahead bonus scoring across them
//! - [`rng`]: seeded LCG used by simulated play
//! - [`snapshot`]: read-only scoreboard views, serializable to JSON
//!
//! # Scoring Rules
//!
//! Standard ten-pin scoring:
//!
//! - **Open frame**: the frame scores its own pins
//! - **Spare**: all ten down in two balls; the next ball is added as bonus
//! - **Strike**: all ten down on the first ball; the next two balls are
//!   added as bonus
//! - **Tenth frame**: a strike or spare earns a third ball, thrown at a
//!   fresh rack; its pins count toward the frame itself
//!
//! The engine is permissive: attempts a frame no longer accepts and frame
//! numbers outside the game are silently ignored, never errors.
//! Input well-formedness (pins per ball, attempt ordering) is the caller's
//! job; a validating front end belongs above this crate.
//!
//! # Example
//!
//! ```
//! use tenpin_core::Game;
//!
//! let mut game = Game::new();
//! game.play(1, 1, 10); // strike
//! game.play(2, 1, 4);
//! game.play(2, 2, 2);
//!
//! assert_eq!(game.score(), 22);
//! ```
//!
//! `Game::score` is a pure recomputation: call it mid-game for a running
//! total, call it repeatedly, the stored state never changes.

pub mod frame;
pub mod game;
pub mod rng;
pub mod snapshot;

pub use tenpin_types as types;

// Re-export commonly used types for convenience
pub use frame::Frame;
pub use game::Game;
pub use rng::SimpleRng;
pub use snapshot::{FrameSnapshot, GameSnapshot};
