use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use blackjack_sim::logging::init_logging;
use blackjack_sim::sim::{self, SimulationInput};

/// Monte-Carlo simulator for fixed-strategy player vs. dealer rounds.
#[derive(Debug, Parser)]
#[command(name = "blackjack-sim", version, about)]
struct Cli {
    /// Path to a JSON simulation config; flags below override it.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of rounds to play.
    #[arg(short = 'n', long, value_name = "ROUNDS")]
    rounds: Option<u32>,

    /// RNG seed for reproducible runs.
    #[arg(short, long, value_name = "SEED")]
    seed: Option<u64>,

    /// Print the result as JSON instead of the text report.
    #[arg(long)]
    json: bool,

    /// Play a single round and show the dealt cards.
    #[arg(long)]
    single: bool,

    /// Log progress to stderr, overriding `RUST_LOG`.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose.then_some(Level::DEBUG));

    let mut input = match &cli.config {
        Some(path) => SimulationInput::from_path(path)?,
        None => SimulationInput::default(),
    };
    if let Some(rounds) = cli.rounds {
        input.rounds = rounds;
    }
    if let Some(seed) = cli.seed {
        input.seed = Some(seed);
    }
    input.validate()?;

    if cli.single {
        let round = sim::play_single_round(input).context("playing a single round")?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&round)?);
        } else {
            let show = |cards: &[blackjack_sim::deck::Card]| {
                cards
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            println!("Player: {} ({})", show(&round.player_cards), round.player_score);
            println!("Dealer: {} ({})", show(&round.dealer_cards), round.dealer_score);
            println!("Outcome: {:?}", round.outcome);
        }
        return Ok(());
    }

    let result = sim::run(input).context("running simulation")?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{result}");
    }
    Ok(())
}
