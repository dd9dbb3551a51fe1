//! Property-based tests for the shuffle and the quiz state machine.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_tui::session::{Phase, QuizSession};
use quiz_tui::shuffle::shuffle;

#[derive(Debug, Clone)]
enum Op {
    Select(usize),
    SelectForeign,
    Advance,
    Restart,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..6).prop_map(Op::Select),
        1 => Just(Op::SelectForeign),
        4 => Just(Op::Advance),
        1 => Just(Op::Restart),
    ]
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(items in prop::collection::vec(any::<i32>(), 0..64), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = shuffle(&items, &mut rng);

        prop_assert_eq!(out.len(), items.len());
        let mut a = items.clone();
        let mut b = out;
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn session_invariants_hold_under_any_input(seed in any::<u64>(), ops in prop::collection::vec(op(), 0..40)) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = QuizSession::load(&mut rng);

        for op in ops {
            let score_before = session.score();
            let index_before = session.current_index();
            let phase_before = session.phase();

            match op {
                Op::Select(i) => {
                    session.select_option(i);
                }
                Op::SelectForeign => {
                    session.select_answer("none of the above");
                }
                Op::Advance => {
                    let _ = session.advance();
                }
                Op::Restart => {
                    session.restart(&mut rng);
                    prop_assert_eq!(session.current_index(), 0);
                    prop_assert_eq!(session.score(), 0);
                    prop_assert!(session.selected_answer().is_none());
                    prop_assert!(!session.is_completed());
                    continue;
                }
            }

            // Score never decreases and moves by at most one, only on a first selection.
            prop_assert!(session.score() >= score_before);
            prop_assert!(session.score() - score_before <= 1);
            if session.score() > score_before {
                prop_assert_eq!(phase_before, Phase::AwaitingAnswer);
            }

            // Index moves forward one step at a time, only out of an answered question.
            prop_assert!(session.current_index() >= index_before);
            prop_assert!(session.current_index() - index_before <= 1);
            if session.current_index() > index_before {
                prop_assert_eq!(phase_before, Phase::AnswerShown);
            }
            prop_assert!(session.current_index() < session.total());
            prop_assert!(session.score() <= session.total());

            // Feedback is present exactly when an answer is.
            prop_assert_eq!(session.feedback().is_some(), session.selected_answer().is_some());
        }
    }

    #[test]
    fn double_selection_scores_at_most_once(seed in any::<u64>(), first in 0usize..4, second in 0usize..4) {
        let mut session = QuizSession::load(&mut StdRng::seed_from_u64(seed));
        session.select_option(first);
        let after_first = session.score();
        session.select_option(second);
        prop_assert_eq!(session.score(), after_first);
    }
}
