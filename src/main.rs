use std::cmp::Reverse;
use std::env;
use std::path::Path;

use log::info;
use scrabble_ai::{EngineConfig, MoveGenerator, Rack, Result, ScrabbleBoard};
#[macro_use]
extern crate text_io;

const USAGE: &str = "usage: movegen <dictionary.txt | config.json> [board.json]";

/// A `.json` argument is an engine config, anything else is the word list itself
fn load_config(arg: &str) -> Result<EngineConfig> {
    if Path::new(arg).extension().map_or(false, |ext| ext == "json") {
        EngineConfig::from_file(arg)
    } else {
        Ok(EngineConfig::new(arg))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = env::args().skip(1).collect::<Vec<_>>();
    let config = match args.first() {
        Some(arg) => load_config(arg)?,
        None => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };
    let engine = MoveGenerator::from_config(&config)?;
    let board = match args.get(1) {
        Some(path) => ScrabbleBoard::from_file(path)?,
        None => ScrabbleBoard::empty(),
    };
    info!("playing on\n{}", board);

    loop {
        println!("Enter Tray:");
        let tray: String = match try_read!("{}\n") {
            Ok(tray) => tray,
            Err(_) => break,
        };
        // only the line ending goes, a space may be the configured wildcard
        let tray = tray.trim_end_matches(['\r', '\n']);
        if tray.is_empty() {
            break;
        }

        let rack = Rack::from_hand(tray.chars(), config.wildcard);
        let mut moves = engine.find_all_moves(&board, &rack);
        moves.sort_by_key(|m| Reverse(m.len()));
        for m in moves.iter() {
            println!("{}", m);
        }
        println!("{} moves for {}", moves.len(), rack.to_hand(config.wildcard));
    }
    Ok(())
}
