use crate::reports::{self, StepRecord};
use clap::Args;
use duelboard::board::Scoreboard;
use duelboard::config::BoardConfig;
use duelboard::script;
use std::process;
use std::time::{Duration, Instant};
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub config: BoardConfig,

    /// CSV event script (at_ms,action,side,amount).
    #[arg(short, long)]
    pub script: String,

    /// Also print the final snapshot as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ReplayArgs, config: BoardConfig) {
    info!("📜 Replaying script: {}", args.script);
    let events = script::load_script(&args.script).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let epoch = Instant::now();
    let mut board = Scoreboard::new(&config);
    let mut steps = Vec::with_capacity(events.len());

    for timed in &events {
        let now = epoch + Duration::from_millis(timed.at_ms);
        board.apply(timed.event, now);

        let badge = timed
            .event
            .side()
            .zip(timed.event.direction())
            .map(|(side, direction)| board.display(side, direction, now));
        let state = board.store();
        steps.push(StepRecord {
            at_ms: timed.at_ms,
            event: timed.event,
            top_score: state.top.score,
            bottom_score: state.bottom.score,
            badge,
        });
    }

    reports::print_timeline(&steps);

    // Settle past the last badge deadline before drawing the final board.
    let end = epoch
        + Duration::from_millis(
            events.last().map_or(0, |t| t.at_ms) + config.subtotal_visible_ms,
        );
    reports::print_board(&board, end);

    if args.json {
        match serde_json::to_string_pretty(&board.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Failed to serialize snapshot: {}", e),
        }
    }
}
