//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin battle_series`
//! `cargo run --release --bin battle_series -- --verbose`

use damson_draughts::engines::engine_greedy::GreedyEngine;
use damson_draughts::engines::engine_minimax::MinimaxEngine;
use damson_draughts::engines::engine_trait::Engine;
use damson_draughts::game_state::game_state::GameState;
use damson_draughts::utils::engine_match_harness::{
    play_engine_match, play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use damson_draughts::utils::pdn::write_pdn;

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Customize these two lines to experiment with different pairings.
    let player1 = || Box::new(MinimaxEngine::new()) as Box<dyn Engine>;
    let player2 = || Box::new(GreedyEngine::new()) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 160,
                opening_min_plies: 2,
                opening_max_plies: 6,
                ..MatchConfig::default()
            },
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);

    if verbose {
        // One showcase game as a PDN record.
        let showcase = play_engine_match(player1(), player2(), 1234, MatchConfig::default())?;
        let mut moves = showcase.opening_moves_lan.clone();
        moves.extend(showcase.played_moves_lan.iter().cloned());
        println!();
        println!(
            "{}",
            write_pdn(
                &GameState::new_game(),
                &moves,
                showcase.outcome.result_token()
            )
        );
        for event in &showcase.events {
            println!("{}", event);
        }
    }

    Ok(())
}
