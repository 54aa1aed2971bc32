//! Match resolution
//!
//! Two policies share the session bookkeeping. Overlap-and-flag (pointer
//! shooter): a projectile hit succeeds iff the struck target carries the
//! round's correctness flag. Progressive typed match (typing defense): the
//! externally owned input buffer is compared against the locked target's
//! answer after every change; a complete-but-wrong word is a wasted shot that
//! keeps the target alive and costs no life.

use super::spawn::spawn_round;
use super::state::{GameEvent, GamePhase, GameState};
use super::targeting::reacquire_lock;

/// How a player action resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The target was resolved; score awarded
    Hit,
    /// Pointer variant: a flagged-incorrect target was struck; life lost
    WrongTarget,
    /// Typing variant: complete but wrong word; feedback only
    WastedShot,
    /// Typing variant: partial input, keep typing
    Pending,
    /// No valid lock / terminal phase; normal idle input
    Ignored,
}

/// Deduct a life and handle the terminal transition
pub(crate) fn apply_miss(state: &mut GameState) {
    if state.session.on_miss() {
        state.enter_game_over();
    } else {
        state.push_event(GameEvent::LifeLost {
            remaining: state.session.lives,
        });
    }
}

/// Resolve a projectile-target overlap (pointer variant). The caller has
/// already consumed the projectile.
pub fn resolve_overlap(state: &mut GameState, target_id: u32) -> MatchOutcome {
    if state.session.phase != GamePhase::Playing {
        return MatchOutcome::Ignored;
    }
    let Some(target) = state.target(target_id).filter(|t| t.alive) else {
        return MatchOutcome::Ignored;
    };

    if target.is_correct {
        state.session.on_success();
        state.remove_target(target_id);
        state.push_event(GameEvent::TargetDestroyed { id: target_id });
        // A resolved round immediately presents the next question
        spawn_round(state);
        MatchOutcome::Hit
    } else {
        // Only the struck target is removed; the round continues
        state.remove_target(target_id);
        state.push_event(GameEvent::WrongTarget { id: target_id });
        apply_miss(state);
        MatchOutcome::WrongTarget
    }
}

/// Resolve an input-buffer change (typing variant). `raw` is the full buffer
/// content; the core only normalizes, it never stores the buffer.
pub fn on_input_change(state: &mut GameState, raw: &str) -> MatchOutcome {
    if state.session.phase != GamePhase::Playing {
        return MatchOutcome::Ignored;
    }
    let Some(locked) = state.locked_target() else {
        return MatchOutcome::Ignored;
    };
    let target_id = locked.id;
    let answer = locked.answer.clone();

    let typed = raw.trim().to_lowercase();
    if typed == answer {
        state.remove_target(target_id);
        state.session.on_success();
        state.push_event(GameEvent::TargetDestroyed { id: target_id });
        state.push_event(GameEvent::InputCleared);
        // Re-target immediately, not on the next tick
        reacquire_lock(state);
        MatchOutcome::Hit
    } else if typed.chars().count() >= answer.chars().count() {
        // Wasted shot: feedback only, the target stays and no life is lost
        log::debug!("wasted shot at target {target_id}: typed '{typed}'");
        state.push_event(GameEvent::WastedShot { id: target_id });
        state.push_event(GameEvent::InputCleared);
        MatchOutcome::WastedShot
    } else {
        MatchOutcome::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{spawn_one, spawn_round};
    use crate::tuning::Variant;
    use crate::words::{WordBank, WordPair};
    use proptest::prelude::*;

    fn typing_state_with_lock(answer: &str) -> GameState {
        let mut state = GameState::new(Variant::TypeDefense, 21);
        state.load_words(WordBank::from_pairs(vec![WordPair::new(answer, "词")]));
        spawn_one(&mut state);
        reacquire_lock(&mut state);
        state.take_events();
        state
    }

    fn shooter_state() -> GameState {
        let mut state = GameState::new(Variant::PointerShooter, 22);
        state.load_words(WordBank::from_pairs(vec![
            WordPair::new("fox", "狐狸"),
            WordPair::new("cat", "猫"),
            WordPair::new("dog", "狗"),
        ]));
        spawn_round(&mut state);
        state.take_events();
        state
    }

    #[test]
    fn test_progressive_match_cat_cot() {
        // "c" -> "ca" -> "cot": pending, pending, wasted shot (len 3 >= 3, unequal)
        let mut state = typing_state_with_lock("cat");
        assert_eq!(on_input_change(&mut state, "c"), MatchOutcome::Pending);
        assert_eq!(on_input_change(&mut state, "ca"), MatchOutcome::Pending);
        assert_eq!(on_input_change(&mut state, "cot"), MatchOutcome::WastedShot);

        // The target survives and no life was lost
        assert_eq!(state.alive_target_count(), 1);
        assert_eq!(state.lives(), 5);
        let events = state.take_events();
        assert!(events.iter().any(|e| matches!(e, GameEvent::WastedShot { .. })));
        assert!(events.contains(&GameEvent::InputCleared));
    }

    #[test]
    fn test_exact_match_succeeds_after_partials() {
        let mut state = typing_state_with_lock("cat");
        on_input_change(&mut state, "c");
        on_input_change(&mut state, "ca");
        assert_eq!(on_input_change(&mut state, "cat"), MatchOutcome::Hit);
        assert_eq!(state.score(), 10);
        assert_eq!(state.alive_target_count(), 0);
    }

    #[test]
    fn test_match_normalizes_case_and_whitespace() {
        let mut state = typing_state_with_lock("cat");
        assert_eq!(on_input_change(&mut state, "  CaT "), MatchOutcome::Hit);
    }

    #[test]
    fn test_overlong_buffer_is_wasted_shot() {
        let mut state = typing_state_with_lock("cat");
        assert_eq!(on_input_change(&mut state, "cats"), MatchOutcome::WastedShot);
        assert_eq!(state.alive_target_count(), 1);
    }

    #[test]
    fn test_success_relocks_immediately() {
        let mut state = GameState::new(Variant::TypeDefense, 23);
        state.load_words(WordBank::from_pairs(vec![WordPair::new("cat", "猫")]));
        spawn_one(&mut state);
        spawn_one(&mut state);
        reacquire_lock(&mut state);
        state.take_events();

        assert_eq!(on_input_change(&mut state, "cat"), MatchOutcome::Hit);
        let survivor = state.locked_target().expect("lock moved to the survivor");
        assert!(survivor.alive);
        assert!(state
            .take_events()
            .iter()
            .any(|e| matches!(e, GameEvent::LockAcquired { .. })));
    }

    #[test]
    fn test_input_without_lock_is_ignored() {
        let mut state = GameState::new(Variant::TypeDefense, 24);
        assert_eq!(on_input_change(&mut state, "cat"), MatchOutcome::Ignored);

        state.session.phase = GamePhase::GameOver;
        assert_eq!(on_input_change(&mut state, "cat"), MatchOutcome::Ignored);
    }

    #[test]
    fn test_overlap_on_correct_target_spawns_next_round() {
        let mut state = shooter_state();
        let correct_id = state
            .alive_targets()
            .find(|t| t.is_correct)
            .map(|t| t.id)
            .expect("round has a correct target");

        assert_eq!(resolve_overlap(&mut state, correct_id), MatchOutcome::Hit);
        assert_eq!(state.score(), 10);
        assert_eq!(state.lives(), 3);
        // A fresh round replaced the old one
        assert_eq!(state.alive_target_count(), 8);
        assert!(state.target(correct_id).is_none());
    }

    #[test]
    fn test_overlap_on_wrong_target_removes_only_it() {
        let mut state = shooter_state();
        let before = state.alive_target_count();
        let wrong_id = state
            .alive_targets()
            .find(|t| !t.is_correct)
            .map(|t| t.id)
            .expect("round has distractors");

        assert_eq!(
            resolve_overlap(&mut state, wrong_id),
            MatchOutcome::WrongTarget
        );
        assert_eq!(state.lives(), 2);
        assert_eq!(state.alive_target_count(), before - 1);
        assert!(state.target(wrong_id).is_none());
        // The correct target is untouched
        assert_eq!(state.alive_targets().filter(|t| t.is_correct).count(), 1);
    }

    #[test]
    fn test_overlap_on_dead_target_is_ignored() {
        let mut state = shooter_state();
        let id = state.alive_targets().next().map(|t| t.id).unwrap();
        state.remove_target(id);
        assert_eq!(resolve_overlap(&mut state, id), MatchOutcome::Ignored);
    }

    #[test]
    fn test_final_wrong_hit_ends_the_run() {
        let mut state = shooter_state();
        state.session.lives = 1;
        let wrong_id = state
            .alive_targets()
            .find(|t| !t.is_correct)
            .map(|t| t.id)
            .unwrap();
        resolve_overlap(&mut state, wrong_id);
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert_eq!(state.alive_target_count(), 0);
        assert!(state
            .take_events()
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. })));
    }

    proptest! {
        /// Arbitrary typed buffers never raise lives, never lower score, and
        /// fail at most once per distinct buffer event.
        #[test]
        fn prop_typed_input_bookkeeping(buffers in proptest::collection::vec("[a-z]{0,6}", 0..32)) {
            let mut state = typing_state_with_lock("cat");
            for raw in buffers {
                let lives_before = state.lives();
                let score_before = state.score();
                let outcome = on_input_change(&mut state, &raw);
                prop_assert_eq!(state.lives(), lives_before);
                prop_assert!(state.score() >= score_before);
                if outcome == MatchOutcome::WastedShot {
                    // Wasted shots never remove the target
                    prop_assert_eq!(state.alive_target_count(), 1);
                }
            }
        }
    }
}
