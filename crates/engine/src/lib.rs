//! Simulation driver - seeded random play against the scoring core
//!
//! The scoring core only records balls it is handed; something has to bowl
//! them. This crate is that something: a random player that throws at
//! whatever pins are standing, and a simulation loop that sequences its
//! throws into well-formed frame/attempt calls. It sits entirely outside
//! the scored core and is replaceable by any other driver (a parser, a UI,
//! a test harness).
//!
//! Runs are deterministic per seed, so simulated games can serve as fixtures.
//!
//! # Example
//!
//! ```
//! use tenpin_engine::Simulation;
//!
//! let mut sim = Simulation::new(12345);
//! let score = sim.run();
//!
//! assert!(score <= 300);
//! assert!(sim.game().is_complete());
//! assert_eq!(Simulation::new(12345).run(), score);
//! ```

use arrayvec::ArrayVec;

use tenpin_core::{Game, SimpleRng};
use tenpin_types::{PinCount, FRAMES_PER_GAME, MAX_ROLLS_PER_GAME};

/// A player that knocks down a uniformly random number of standing pins
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: SimpleRng,
}

impl RandomPlayer {
    /// Create a player with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Throw one ball at `pins_standing` pins, returning how many fall
    pub fn throw(&mut self, pins_standing: u8) -> PinCount {
        self.rng.next_range(pins_standing as u32 + 1) as PinCount
    }
}

/// Plays one full game with a [`RandomPlayer`] and keeps the ball log
#[derive(Debug, Clone)]
pub struct Simulation {
    game: Game,
    player: RandomPlayer,
    rolls: ArrayVec<PinCount, MAX_ROLLS_PER_GAME>,
}

impl Simulation {
    /// Create a simulation for one game with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(),
            player: RandomPlayer::new(seed),
            rolls: ArrayVec::new(),
        }
    }

    /// Play every frame to completion and return the final score
    ///
    /// Attempt sequencing follows the game's own bookkeeping: a strike ends
    /// a frame after one ball, and the tenth frame keeps going while it has
    /// bonus balls left.
    pub fn run(&mut self) -> u32 {
        for number in 1..=FRAMES_PER_GAME {
            self.play_frame(number);
        }
        self.game.score()
    }

    fn play_frame(&mut self, number: u8) {
        loop {
            let attempt = self.game.next_attempt(number);
            let pins = self.player.throw(self.game.pins_standing(number));
            self.game.play(number, attempt, pins);
            let _ = self.rolls.try_push(pins);

            match self.game.frame(number) {
                Some(frame) if !frame.is_done() => {}
                _ => break,
            }
        }
    }

    /// The game as played so far
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Every ball thrown, in order
    pub fn rolls(&self) -> &[PinCount] {
        &self.rolls
    }
}
