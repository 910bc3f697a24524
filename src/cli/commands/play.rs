//! Play command - A human on stdin against a cached CPU agent

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::LineInput,
    agent::{Agent, HumanAgent, MovePolicy},
    cli::output::describe_outcome,
    config::AgentConfig,
    game::{Game, format_board},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game against the computer")]
pub struct PlayArgs {
    /// State cache to load and update (JSON, or MessagePack for .msgpack)
    #[arg(long, short = 'c')]
    pub cache: Option<PathBuf>,

    /// Computer move policy: random, greedy or epsilon:<p>
    #[arg(long, short = 'p', default_value = "greedy")]
    pub policy: MovePolicy,

    /// Let the computer make the first move
    #[arg(long)]
    pub cpu_first: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not write the cache back after the game
    #[arg(long)]
    pub no_save: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = AgentConfig::new().with_policy(args.policy);
    config.seed = args.seed;
    config.cache_path = args.cache.clone();
    let mut cpu = super::build_cpu_agent(&config)?;
    let mut human = HumanAgent::new(LineInput::stdin()).with_name("You");

    println!("Cells are numbered 0-8, left to right, top to bottom.");
    let record = if args.cpu_first {
        Game::new().run(&mut cpu, &mut human)?
    } else {
        Game::new().run(&mut human, &mut cpu)?
    };

    let (name_one, name_two) = if args.cpu_first {
        (cpu.name(), human.name())
    } else {
        (human.name(), cpu.name())
    };
    println!("\n{}\n", format_board(&record.final_grid));
    println!("{}", describe_outcome(record.outcome, name_one, name_two));

    if let Some(path) = args.cache.as_deref().filter(|_| !args.no_save) {
        super::save_cpu_agent(&cpu, path)?;
    }
    Ok(())
}
