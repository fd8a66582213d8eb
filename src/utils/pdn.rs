//! PDN-style game records.
//!
//! Serializes a finished match to Portable Draughts Notation text: bracketed
//! headers followed by numbered coordinate movetext and a result token.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::draughts_rules::STARTING_POSITION_FEN;
use crate::game_state::game_state::GameState;

/// Write a PDN record with default headers and today's date.
///
/// `result` should be one of `1-0`, `0-1`, `1/2-1/2`; anything else is
/// recorded as `*` (unknown).
pub fn write_pdn(initial_state: &GameState, moves_lan: &[String], result: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Damson Draughts Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "Light".to_owned());
    headers.insert("Black".to_owned(), "Dark".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    let initial_fen = initial_state.get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    write_pdn_with_headers(moves_lan, &headers)
}

/// Write a PDN record with caller-provided headers.
pub fn write_pdn_with_headers(
    moves_lan: &[String],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pdn_value(value)));
    }
    out.push('\n');

    let mut movetext = Vec::<String>::with_capacity(moves_lan.len() + moves_lan.len() / 2 + 1);
    for (i, lan) in moves_lan.iter().enumerate() {
        if i % 2 == 0 {
            movetext.push(format!("{}.", i / 2 + 1));
        }
        movetext.push(lan.clone());
    }

    let result = headers
        .get("Result")
        .map(String::as_str)
        .unwrap_or("*");
    movetext.push(result.to_owned());

    out.push_str(&movetext.join(" "));
    out.push('\n');
    out
}

fn normalize_result(result: &str) -> &str {
    match result {
        "1-0" | "0-1" | "1/2-1/2" => result,
        _ => "*",
    }
}

fn escape_pdn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
