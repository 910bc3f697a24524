//! Inspect command - Summarize a saved state cache

use std::{collections::BTreeMap, path::PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::{
    cache::StateCache,
    cli::output::{print_kv, print_section},
    game::format_board,
};

#[derive(Parser, Debug)]
#[command(about = "Summarize a saved state cache")]
pub struct InspectArgs {
    /// State cache file (JSON, or MessagePack for .msgpack)
    pub cache: PathBuf,

    /// Also print the first N states with their move values
    #[arg(long, short = 'n', default_value_t = 0)]
    pub show: usize,
}

/// Aggregate figures over a cache
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheSummary {
    pub states: usize,
    /// Number of states keyed by how many legal moves they have
    pub by_legal_moves: BTreeMap<usize, usize>,
    /// States with at least one non-zero value
    pub valued_states: usize,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

impl CacheSummary {
    pub fn from_cache(cache: &StateCache) -> Self {
        let mut summary = CacheSummary {
            states: cache.len(),
            ..Default::default()
        };
        for (_, state) in cache.iter() {
            *summary
                .by_legal_moves
                .entry(state.next_states_transitions().len())
                .or_default() += 1;
            if state.next_states_values().iter().any(|&value| value != 0.0) {
                summary.valued_states += 1;
            }
            for &value in state.next_states_values() {
                summary.min_value = Some(summary.min_value.map_or(value, |min| min.min(value)));
                summary.max_value = Some(summary.max_value.map_or(value, |max| max.max(value)));
            }
        }
        summary
    }
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let cache = super::load_cache(&args.cache)?;
    let summary = CacheSummary::from_cache(&cache);

    print_section(&format!("State cache: {}", args.cache.display()));
    print_kv("States", &summary.states.to_string());
    print_kv("Valued states", &summary.valued_states.to_string());
    if let (Some(min), Some(max)) = (summary.min_value, summary.max_value) {
        print_kv("Value range", &format!("{min:.4} .. {max:.4}"));
    }
    println!("\n  States by number of legal moves:");
    for (moves, count) in &summary.by_legal_moves {
        print_kv(&format!("  {moves} moves"), &count.to_string());
    }

    for (seq, state) in cache.iter().take(args.show) {
        println!("\n#{seq}\n{}", format_board(state.grid()));
        for (position, value) in state.move_values() {
            println!("  move {position}: {value:.4}");
        }
    }
    Ok(())
}
