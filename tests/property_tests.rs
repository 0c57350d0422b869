use duelboard::store::{ScoreStore, Side, START_SCORE};
use duelboard::subtotal::{Direction, SubtotalTracker};
use proptest::prelude::*;
use std::time::{Duration, Instant};

// --- STRATEGIES ---

#[derive(Debug, Clone, Copy)]
enum Op {
    Inc(Side, u32),
    Dec(Side, u32),
    UseCoin(Side),
    ResetCoin(Side),
    ResetAll,
}

fn arb_side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Top), Just(Side::Bottom)]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (arb_side(), 0u32..100).prop_map(|(s, n)| Op::Inc(s, n)),
        (arb_side(), 0u32..100).prop_map(|(s, n)| Op::Dec(s, n)),
        arb_side().prop_map(Op::UseCoin),
        arb_side().prop_map(Op::ResetCoin),
        Just(Op::ResetAll),
    ]
}

fn apply(store: &mut ScoreStore, op: Op) {
    match op {
        Op::Inc(side, n) => store.increment(side, n),
        Op::Dec(side, n) => store.decrement(side, n),
        Op::UseCoin(side) => store.use_coin(side),
        Op::ResetCoin(side) => store.reset_coin(side),
        Op::ResetAll => store.reset_all(),
    }
}

proptest! {
    // The store must track an unbounded signed model with max(0, ..)
    // applied on decrement; in particular the score can never go negative.
    #[test]
    fn score_matches_clamped_model(ops in proptest::collection::vec(arb_op(), 0..200)) {
        let mut store = ScoreStore::default();
        let mut scores = [i64::from(START_SCORE); 2];
        let mut coins = [false; 2];

        for &op in &ops {
            apply(&mut store, op);
            match op {
                Op::Inc(side, n) => scores[side.index()] += i64::from(n),
                Op::Dec(side, n) => {
                    scores[side.index()] = (scores[side.index()] - i64::from(n)).max(0)
                }
                Op::UseCoin(side) => coins[side.index()] = true,
                Op::ResetCoin(side) => coins[side.index()] = false,
                Op::ResetAll => {
                    scores = [i64::from(START_SCORE); 2];
                    coins = [false; 2];
                }
            }

            for side in [Side::Top, Side::Bottom] {
                prop_assert_eq!(i64::from(store.player(side).score), scores[side.index()]);
                prop_assert_eq!(store.player(side).coin_used, coins[side.index()]);
            }
        }
    }

    // No prior history survives a reset.
    #[test]
    fn reset_always_restores_defaults(ops in proptest::collection::vec(arb_op(), 0..100)) {
        let mut store = ScoreStore::default();
        for &op in &ops {
            apply(&mut store, op);
        }

        store.reset_all();

        for side in [Side::Top, Side::Bottom] {
            prop_assert_eq!(store.player(side).score, START_SCORE);
            prop_assert!(!store.player(side).coin_used);
        }
    }

    // Deltas spaced inside the burst gap always sum, whatever their values.
    #[test]
    fn tight_burst_sums_all_deltas(deltas in proptest::collection::vec(1i64..50, 1..20)) {
        let t0 = Instant::now();
        let mut tracker = SubtotalTracker::default();

        for (i, &delta) in deltas.iter().enumerate() {
            let now = t0 + Duration::from_millis(i as u64 * 100);
            tracker.record_delta(Side::Top, Direction::Increase, delta, now);
        }

        let last = t0 + Duration::from_millis((deltas.len() as u64 - 1) * 100);
        let display = tracker.current_display(Side::Top, Direction::Increase, last);
        prop_assert_eq!(display.value, deltas.iter().sum::<i64>());
        prop_assert!(display.visible);
    }
}
