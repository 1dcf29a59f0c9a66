use std::fmt;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    error::SimError,
    game::{Game, Outcome, RoundResult},
};

fn default_rounds() -> u32 {
    100_000
}

fn default_progress_interval() -> u32 {
    10_000
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInput {
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u32,
}

impl Default for SimulationInput {
    fn default() -> Self {
        SimulationInput {
            rounds: default_rounds(),
            seed: None,
            progress_interval: default_progress_interval(),
        }
    }
}

impl SimulationInput {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.rounds == 0 {
            return Err(SimError::InvalidInput("rounds must be at least 1".into()));
        }
        if self.progress_interval == 0 {
            return Err(SimError::InvalidInput(
                "progressInterval must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Outcome counters owned by the driver loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub player_wins: u32,
    pub dealer_wins: u32,
    pub ties: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::DealerWin => self.dealer_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.player_wins + self.dealer_wins + self.ties
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub total_games: u32,
    pub player_wins: u32,
    pub dealer_wins: u32,
    pub ties: u32,
    pub player_win_rate: f64,
    pub dealer_win_rate: f64,
    pub tie_rate: f64,
    pub seed: u64,
}

impl SimulationResult {
    fn from_tally(tally: Tally, seed: u64) -> Self {
        let total_games = tally.total();
        let rate = |count: u32| {
            if total_games > 0 {
                (count as f64 / total_games as f64) * 100.0
            } else {
                0.0
            }
        };
        SimulationResult {
            total_games,
            player_wins: tally.player_wins,
            dealer_wins: tally.dealer_wins,
            ties: tally.ties,
            player_win_rate: rate(tally.player_wins),
            dealer_win_rate: rate(tally.dealer_wins),
            tie_rate: rate(tally.ties),
            seed,
        }
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+ Total Games: {}", self.total_games)?;
        writeln!(f, "  Player Win Rate: {:.2}%", self.player_win_rate)?;
        writeln!(f, "  Tie Rate: {:.2}%", self.tie_rate)
    }
}

fn seed_rng(seed: Option<u64>) -> (SmallRng, u64) {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    (SmallRng::seed_from_u64(seed), seed)
}

pub fn run(input: SimulationInput) -> Result<SimulationResult, SimError> {
    run_with_progress(input, |_current, _total| {})
}

pub fn run_with_progress<F>(
    input: SimulationInput,
    mut progress_cb: F,
) -> Result<SimulationResult, SimError>
where
    F: FnMut(u32, u32),
{
    input.validate()?;
    let (mut rng, seed) = seed_rng(input.seed);
    tracing::info!(rounds = input.rounds, seed, "starting simulation");

    let mut tally = Tally::default();
    let progress_interval = input.progress_interval;

    for round in 0..input.rounds {
        let result = Game::shuffled(&mut rng)
            .play_round()
            .map_err(|source| SimError::Round {
                round: round + 1,
                source,
            })?;
        tally.record(result.outcome);

        let completed = round + 1;
        if completed % progress_interval == 0 || completed == input.rounds {
            tracing::debug!(completed, total = input.rounds, "progress");
            progress_cb(completed, input.rounds);
        }
    }

    debug_assert_eq!(tally.total(), input.rounds);
    let result = SimulationResult::from_tally(tally, seed);
    tracing::info!(
        total_games = result.total_games,
        player_wins = result.player_wins,
        dealer_wins = result.dealer_wins,
        ties = result.ties,
        "simulation finished"
    );
    Ok(result)
}

/// Plays one round from a freshly shuffled deck. `rounds` is ignored.
pub fn play_single_round(input: SimulationInput) -> Result<RoundResult, SimError> {
    let (mut rng, seed) = seed_rng(input.seed);
    tracing::debug!(seed, "playing single round");
    Game::shuffled(&mut rng)
        .play_round()
        .map_err(|source| SimError::Round { round: 1, source })
}
