//! Stats command
//!
//! Prints the persisted win count and streak without starting a game.

use crate::engine::GameStats;
use crate::output::print_stats;
use crate::storage::{read_json, StatsSnapshot, Storage, STATS_KEY};

/// Load and print the persisted statistics
pub fn run_stats(storage: &dyn Storage) {
    let stats = read_json::<StatsSnapshot>(storage, STATS_KEY)
        .map(|s| GameStats::from_snapshot(&s))
        .unwrap_or_default();

    print_stats(&stats);
}
