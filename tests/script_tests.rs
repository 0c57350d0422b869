use duelboard::board::Scoreboard;
use duelboard::error::DuelboardError;
use duelboard::events::BoardEvent;
use duelboard::script::{load_script, read_script};
use duelboard::store::Side;
use std::fs::File;
use std::io::{Cursor, Write};
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn write_script(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    writeln!(file, "at_ms,action,side,amount").unwrap();
    write!(file, "{}", body).unwrap();
    path
}

#[test]
fn test_load_script_from_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_script(
        &dir,
        "session.csv",
        "0,increment,top,5\n500,decrement,top,3\n600,use_coin,bottom,\n700,reset_all,,\n",
    );

    let events = load_script(&path).unwrap();
    assert_eq!(events.len(), 4);
    assert_eq!(
        events[0].event,
        BoardEvent::Increment {
            side: Side::Top,
            amount: 5
        }
    );
    assert_eq!(events[2].event, BoardEvent::UseCoin { side: Side::Bottom });
    assert_eq!(events[3].at_ms, 700);
    assert_eq!(events[3].event, BoardEvent::ResetAll);
}

#[test]
fn test_in_memory_script() {
    let data = "at_ms,action,side,amount\n0,increment,top,1\n100,increment,top,10\n";
    let events = read_script(Cursor::new(data)).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].at_ms, 100);
}

#[test]
fn test_replayed_script_drives_the_board() {
    let data = "at_ms,action,side,amount\n\
                0,increment,top,5\n\
                400,decrement,top,3\n\
                500,decrement,bottom,10\n\
                600,use_coin,top,\n";
    let events = read_script(Cursor::new(data)).unwrap();

    let epoch = Instant::now();
    let mut board = Scoreboard::default();
    for timed in &events {
        board.apply(timed.event, epoch + Duration::from_millis(timed.at_ms));
    }

    assert_eq!(board.store().player(Side::Top).score, 7);
    assert_eq!(board.store().player(Side::Bottom).score, 0);
    assert!(board.store().player(Side::Top).coin_used);
}

#[test]
fn test_unknown_action_is_rejected() {
    let data = "at_ms,action,side,amount\n0,explode,top,1\n";
    let err = read_script(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, DuelboardError::Validation(_)));
    assert!(err.to_string().contains("explode"));
}

#[test]
fn test_bad_side_is_rejected() {
    let data = "at_ms,action,side,amount\n0,increment,left,1\n";
    let err = read_script(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, DuelboardError::Validation(_)));
}

#[test]
fn test_missing_amount_is_rejected() {
    let data = "at_ms,action,side,amount\n0,increment,top,\n";
    let err = read_script(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, DuelboardError::Validation(_)));
}

#[test]
fn test_backwards_timestamps_are_rejected() {
    let data = "at_ms,action,side,amount\n500,increment,top,1\n100,increment,top,1\n";
    let err = read_script(Cursor::new(data)).unwrap_err();
    assert!(err.to_string().contains("backwards"));
}

#[test]
fn test_event_json_round_trip() {
    let event = BoardEvent::Decrement {
        side: Side::Bottom,
        amount: 3,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"action\":\"decrement\""));
    assert!(json.contains("\"side\":\"bottom\""));
    let back: BoardEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}
