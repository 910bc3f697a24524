//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::grid::{GameOutcome, Player};

/// Create a progress bar for a batch of games
pub fn create_game_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    pb.set_style(style);
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// One-line description of an outcome, naming the winner
pub fn describe_outcome(outcome: GameOutcome, name_one: &str, name_two: &str) -> String {
    match outcome {
        GameOutcome::Win(Player::One) => format!("{name_one} wins"),
        GameOutcome::Win(Player::Two) => format!("{name_two} wins"),
        GameOutcome::Draw => "Draw".to_string(),
    }
}

/// Percentage of `part` in `total`, 0 when `total` is 0
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_outcome() {
        let win = describe_outcome(GameOutcome::Win(Player::Two), "You", "CPU");
        assert_eq!(win, "CPU wins");
        assert_eq!(describe_outcome(GameOutcome::Draw, "a", "b"), "Draw");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 4), 25.0);
        assert_eq!(percent(3, 0), 0.0);
    }
}
