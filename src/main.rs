//! Damson Draughts - a draughts engine speaking a UCI-style protocol.
//!
//! Reads line-oriented commands from stdin and writes responses to stdout.

use damson_draughts::uci::uci_top::run_stdio_loop;

fn main() -> std::io::Result<()> {
    run_stdio_loop()
}
