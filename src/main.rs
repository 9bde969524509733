//! Bowling simulator runner (default binary).
//!
//! Plays one or more seeded random games against the scoring core and
//! prints each finished scoreboard. With `--json`, emits one snapshot per
//! line for machine consumers instead of the styled grid.

use anyhow::{anyhow, Result};

use tenpin::engine::Simulation;
use tenpin::term::print_scoreboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunnerConfig {
    seed: u32,
    games: u32,
    json: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            games: 1,
            json: false,
        }
    }
}

fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

fn parse_args(args: &[String], mut config: RunnerConfig) -> Result<RunnerConfig> {
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--games" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --games"))?;
                config.games = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --games value: {}", v))?;
            }
            "--json" => {
                config.json = true;
            }
            other => {
                return Err(anyhow!(
                    "unknown argument: {} (expected --seed, --games, --json)",
                    other
                ));
            }
        }
        i += 1;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let mut defaults = RunnerConfig::default();
    if let Some(seed) = env_u32("TENPIN_SEED") {
        defaults.seed = seed;
    }
    if let Some(games) = env_u32("TENPIN_GAMES") {
        defaults.games = games;
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args, defaults)?;

    for offset in 0..config.games {
        let mut sim = Simulation::new(config.seed.wrapping_add(offset));
        sim.run();
        let snap = sim.game().snapshot();

        if config.json {
            println!("{}", serde_json::to_string(&snap)?);
        } else {
            print_scoreboard(&snap)?;
        }
    }

    Ok(())
}
