//! Self-play command - Fill a state cache by playing CPU against CPU

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::info;

use crate::{
    agent::{CpuAgent, MovePolicy},
    cli::output::{create_game_progress, percent, print_kv, print_section},
    config::AgentConfig,
    game::Game,
    grid::{GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play CPU against CPU and save the resulting cache")]
pub struct SelfPlayArgs {
    /// State cache for the agent (created if missing)
    #[arg(long, short = 'c')]
    pub cache: PathBuf,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Agent move policy: random, greedy or epsilon:<p>
    #[arg(long, short = 'p', default_value = "epsilon:0.1")]
    pub policy: MovePolicy,

    /// Opponent move policy (the opponent starts with an empty cache)
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: MovePolicy,

    /// Random seed for reproducibility (the opponent uses seed + 1)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Alternate which side moves first
    #[arg(long)]
    pub alternate: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Win/draw/loss tally from the agent's seat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: GameOutcome, seat: Player) {
        match outcome {
            GameOutcome::Win(winner) if winner == seat => self.wins += 1,
            GameOutcome::Win(_) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.wins + self.draws + self.losses
    }
}

/// Play `games` games between `agent` and `opponent`.
///
/// With `alternate`, odd-numbered games seat the agent as player two.
pub fn run_games(
    agent: &mut CpuAgent,
    opponent: &mut CpuAgent,
    games: usize,
    alternate: bool,
    mut on_game: impl FnMut(&Tally),
) -> crate::Result<Tally> {
    let mut tally = Tally::default();
    for game_index in 0..games {
        let seat = if alternate && game_index % 2 == 1 {
            Player::Two
        } else {
            Player::One
        };
        let record = match seat {
            Player::One => Game::new().run(&mut *agent, &mut *opponent)?,
            Player::Two => Game::new().run(&mut *opponent, &mut *agent)?,
        };
        tally.record(record.outcome, seat);
        on_game(&tally);
    }
    Ok(tally)
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    if args.games == 0 {
        return Err(anyhow!("--games must be at least 1"));
    }

    let agent_config = AgentConfig {
        seed: args.seed,
        policy: args.policy,
        cache_path: Some(args.cache.clone()),
        name: Some("Agent".to_string()),
    };
    let opponent_config = AgentConfig {
        seed: args.seed.map(|seed| seed.wrapping_add(1)),
        policy: args.opponent,
        cache_path: None,
        name: Some("Opponent".to_string()),
    };
    let mut agent = super::build_cpu_agent(&agent_config)?;
    let mut opponent = super::build_cpu_agent(&opponent_config)?;
    let states_before = agent.states().len();

    let pb = (!args.no_progress).then(|| create_game_progress(args.games as u64));
    let tally = run_games(&mut agent, &mut opponent, args.games, args.alternate, |tally| {
        if let Some(pb) = &pb {
            pb.inc(1);
            pb.set_message(format!(
                "W {} / D {} / L {}",
                tally.wins, tally.draws, tally.losses
            ));
        }
    })?;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    info!(games = tally.total(), wins = tally.wins, "self-play finished");

    print_section("Self-play results");
    print_kv("Games", &tally.total().to_string());
    print_kv("Agent policy", &args.policy.to_string());
    print_kv("Opponent policy", &args.opponent.to_string());
    print_kv(
        "Wins",
        &format!("{} ({:.1}%)", tally.wins, percent(tally.wins, tally.total())),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", tally.draws, percent(tally.draws, tally.total())),
    );
    print_kv(
        "Losses",
        &format!("{} ({:.1}%)", tally.losses, percent(tally.losses, tally.total())),
    );
    print_kv(
        "New states",
        &(agent.states().len() - states_before).to_string(),
    );

    super::save_cpu_agent(&agent, &args.cache)
}
