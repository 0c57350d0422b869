use crate::reports;
use clap::Args;
use duelboard::board::Scoreboard;
use duelboard::config::BoardConfig;
use duelboard::events::BoardEvent;
use duelboard::store::Side;
use std::io::{self, BufRead};
use std::str::FromStr;
use std::time::Instant;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    #[command(flatten)]
    pub config: BoardConfig,
}

enum Input {
    Event(BoardEvent),
    Show,
    Help,
    Quit,
}

pub fn run(config: BoardConfig) {
    let plus_steps = config.get_plus_steps();
    let minus_steps = config.get_minus_steps();
    let mut board = Scoreboard::new(&config);

    println!("\n🪙 === DUELBOARD === 🪙");
    print_help();
    reports::print_board(&board, Instant::now());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let now = Instant::now();

        match parse_line(line.trim()) {
            Ok(Some(Input::Event(event))) => {
                // Off-contract amounts still apply (the store clamps), but
                // flag them so typos are visible.
                if let BoardEvent::Increment { amount, .. } = event {
                    if !plus_steps.contains(&amount) {
                        warn!("+{} is not a configured step ({})", amount, config.plus_steps);
                    }
                }
                if let BoardEvent::Decrement { amount, .. } = event {
                    if !minus_steps.contains(&amount) {
                        warn!(
                            "-{} is not a configured step ({})",
                            amount, config.minus_steps
                        );
                    }
                }
                board.apply(event, now);
                reports::print_board(&board, now);
            }
            Ok(Some(Input::Show)) => reports::print_board(&board, now),
            Ok(Some(Input::Help)) => print_help(),
            Ok(Some(Input::Quit)) => break,
            Ok(None) => {}
            Err(msg) => println!("❓ {}", msg),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  +N <side>      add N points (e.g. '+5 top')");
    println!("  -N <side>      remove N points, floored at 0 (e.g. '-3 bottom')");
    println!("  coin <side>    flip the side's single-use coin");
    println!("  uncoin <side>  hand the coin back");
    println!("  reset          restore both sides to the start score");
    println!("  show           redraw the board");
    println!("  quit           leave");
}

fn parse_line(line: &str) -> Result<Option<Input>, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(None);
    };

    match head {
        "show" | "board" => Ok(Some(Input::Show)),
        "help" | "?" => Ok(Some(Input::Help)),
        "quit" | "exit" | "q" => Ok(Some(Input::Quit)),
        "reset" => Ok(Some(Input::Event(BoardEvent::ResetAll))),
        "coin" => Ok(Some(Input::Event(BoardEvent::UseCoin {
            side: parse_side(parts.next())?,
        }))),
        "uncoin" => Ok(Some(Input::Event(BoardEvent::ResetCoin {
            side: parse_side(parts.next())?,
        }))),
        s if s.starts_with('+') || s.starts_with('-') => {
            let amount: u32 = s[1..]
                .parse()
                .map_err(|_| format!("bad amount '{}'", s))?;
            let side = parse_side(parts.next())?;
            let event = if s.starts_with('+') {
                BoardEvent::Increment { side, amount }
            } else {
                BoardEvent::Decrement { side, amount }
            };
            Ok(Some(Input::Event(event)))
        }
        other => Err(format!("unknown command '{}' (try 'help')", other)),
    }
}

fn parse_side(token: Option<&str>) -> Result<Side, String> {
    let raw = token.ok_or("missing side (top|bottom)")?;
    Side::from_str(raw).map_err(|_| format!("bad side '{}' (top|bottom)", raw))
}
