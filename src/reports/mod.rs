// ===== duelboard/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use duelboard::board::Scoreboard;
use duelboard::events::BoardEvent;
use duelboard::store::Side;
use duelboard::subtotal::{Direction, SubtotalDisplay};
use std::time::Instant;
use strum::IntoEnumIterator;

/// One applied script row, as shown in the replay timeline.
pub struct StepRecord {
    pub at_ms: u64,
    pub event: BoardEvent,
    pub top_score: u32,
    pub bottom_score: u32,
    pub badge: Option<SubtotalDisplay>,
}

/// Draws the whole board: scores, coin state and the four badges as they
/// would appear at `now`. Pure reader; never mutates the board.
pub fn print_board(board: &Scoreboard, now: Instant) {
    let state = board.snapshot();

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Side").add_attribute(Attribute::Bold),
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("Coin").add_attribute(Attribute::Bold),
        Cell::new("+ badge").add_attribute(Attribute::Bold),
        Cell::new("- badge").add_attribute(Attribute::Bold),
    ]);

    for side in Side::iter() {
        let player = state.player(side);
        let coin = if player.coin_used {
            Cell::new("used").fg(Color::DarkGrey)
        } else {
            Cell::new("ready").fg(Color::Yellow)
        };
        table.add_row(vec![
            Cell::new(side.to_string()),
            Cell::new(player.score.to_string())
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
            coin,
            badge_cell(board.display(side, Direction::Increase, now)),
            badge_cell(board.display(side, Direction::Decrease, now)),
        ]);
    }

    println!("{table}");
}

pub fn print_timeline(steps: &[StepRecord]) {
    if steps.is_empty() {
        println!("(empty script)");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("At (ms)").add_attribute(Attribute::Bold),
        Cell::new("Event").add_attribute(Attribute::Bold),
        Cell::new("Top").add_attribute(Attribute::Bold),
        Cell::new("Bottom").add_attribute(Attribute::Bold),
        Cell::new("Badge").add_attribute(Attribute::Bold),
    ]);

    for step in steps {
        table.add_row(vec![
            Cell::new(step.at_ms.to_string()).set_alignment(CellAlignment::Right),
            Cell::new(step.event.to_string()),
            Cell::new(step.top_score.to_string()).set_alignment(CellAlignment::Right),
            Cell::new(step.bottom_score.to_string()).set_alignment(CellAlignment::Right),
            step.badge.map_or_else(|| Cell::new(""), badge_cell),
        ]);
    }

    println!("{table}");
}

// Matches the widget: positive values get an explicit '+', the sign picks
// the color, hidden badges render as empty cells.
fn badge_cell(display: SubtotalDisplay) -> Cell {
    if !display.visible {
        return Cell::new("");
    }
    let text = if display.value > 0 {
        format!("+{}", display.value)
    } else {
        display.value.to_string()
    };
    let color = if display.value >= 0 {
        Color::Green
    } else {
        Color::Red
    };
    Cell::new(text).fg(color)
}
