//! Property tests for penalty accounting and completion

use std::time::Duration;

use proptest::prelude::*;
use riddlerun::game::{
    format_hms, ManualClock, Outcome, PuzzleSession, Riddle, SessionPhase, SessionRules,
};

const CODES: [&str; 3] = ["12", "345", "6"];

#[derive(Debug, Clone)]
enum Op {
    Submit { riddle: usize, attempt: String },
    Hint,
    Wait(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..4, "[0-9]{0,4}").prop_map(|(riddle, attempt)| Op::Submit { riddle, attempt }),
        // Bias towards correct answers so sessions actually complete
        3 => (0usize..3).prop_map(|riddle| Op::Submit {
            riddle,
            attempt: CODES[riddle].to_string(),
        }),
        1 => Just(Op::Hint),
        2 => (0u64..5000).prop_map(Op::Wait),
    ]
}

fn session(clock: &ManualClock, penalty: u64) -> PuzzleSession<ManualClock> {
    let rules = SessionRules {
        penalty_per_fail: penalty,
        ..SessionRules::default()
    };
    let riddles = CODES.iter().map(|c| Riddle::new(*c)).collect();
    PuzzleSession::with_time_source(riddles, rules, clock.clone())
}

proptest! {
    #[test]
    fn penalty_moves_by_exactly_one_constant_per_failure(
        penalty in 1u64..1000,
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let clock = ManualClock::new();
        let mut session = session(&clock, penalty);
        let mut was_complete = false;

        for op in ops {
            let before = session.penalty_seconds();
            let solved_before = session.solved_flags();
            match op {
                Op::Submit { riddle, attempt } => {
                    let outcome = session.submit_code(riddle, &attempt);
                    let expected = if outcome.is_penalized() { penalty } else { 0 };
                    prop_assert_eq!(session.penalty_seconds(), before + expected);

                    // Solved flags only ever flip false -> true, and only on Correct
                    for (i, (was, now)) in solved_before.iter().zip(session.solved_flags()).enumerate() {
                        if i == riddle && outcome == Outcome::Correct {
                            prop_assert!(!was && now);
                        } else {
                            prop_assert_eq!(*was, now);
                        }
                    }
                }
                Op::Hint => {
                    session.use_hint();
                    prop_assert_eq!(session.penalty_seconds(), before + penalty);
                }
                Op::Wait(ms) => {
                    clock.advance(Duration::from_millis(ms));
                    prop_assert_eq!(session.penalty_seconds(), before);
                }
            }

            let complete = session.is_complete();
            prop_assert_eq!(complete, session.solved_flags().iter().all(|s| *s));
            prop_assert!(!was_complete || complete);
            was_complete = complete;
        }
    }

    #[test]
    fn finish_total_is_elapsed_plus_penalty(
        failures in 0u64..20,
        wait_secs in 0u64..400_000,
    ) {
        let clock = ManualClock::new();
        let mut session = session(&clock, 120);
        for _ in 0..failures {
            session.submit_code(0, "00");
        }
        for (i, code) in CODES.iter().enumerate() {
            session.submit_code(i, code);
        }
        clock.advance(Duration::from_secs(wait_secs));

        let summary = session.finish().expect("every riddle solved");
        prop_assert_eq!(summary.elapsed_seconds, wait_secs);
        prop_assert_eq!(summary.penalty_seconds, failures * 120);
        prop_assert_eq!(summary.total_seconds, wait_secs + failures * 120);
        prop_assert_eq!(summary.total, format_hms(summary.total_seconds));
        prop_assert_eq!(session.phase(), SessionPhase::Finished);
    }

    #[test]
    fn hms_fields_recombine(secs in 0u64..1_000_000) {
        let text = format_hms(secs);
        let parts: Vec<u64> = text.split(':').map(|p| p.parse().unwrap()).collect();
        prop_assert_eq!(parts.len(), 3);
        prop_assert!(parts[1] < 60 && parts[2] < 60);
        prop_assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], secs);
    }
}
