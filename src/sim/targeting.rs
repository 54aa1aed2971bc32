//! Target acquisition (typing variant)
//!
//! The lock is sticky: it is re-evaluated only when empty or when the locked
//! target died, never because a closer target appeared later. Nearest alive
//! target to the turret wins; ties go to registry scan order. Whenever the
//! lock changes the external input buffer must be cleared, so every change
//! emits `InputCleared`.
//!
//! The pointer variant keeps no lock; each projectile is tested for circle
//! overlap against every alive target during the tick.

use super::state::{GameEvent, GameState};
use crate::turret_pos;

/// Ensure the lock names an alive target, acquiring the nearest one when it
/// does not. Returns the locked id, if any.
pub fn reacquire_lock(state: &mut GameState) -> Option<u32> {
    if let Some(current) = state.locked_target() {
        return Some(current.id);
    }

    let had_lock = state.lock.is_some();
    state.lock = None;

    let origin = turret_pos();
    let nearest = state
        .alive_targets()
        .min_by(|a, b| {
            let da = a.pos.distance_squared(origin);
            let db = b.pos.distance_squared(origin);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|t| t.id);

    match nearest {
        Some(id) => {
            for t in &mut state.targets {
                t.locked = t.id == id;
            }
            state.lock = Some(id);
            log::debug!("lock acquired on target {id}");
            state.push_event(GameEvent::LockAcquired { id });
            state.push_event(GameEvent::InputCleared);
            Some(id)
        }
        None => {
            if had_lock {
                state.push_event(GameEvent::LockLost);
                state.push_event(GameEvent::InputCleared);
            }
            None
        }
    }
}

/// Drop the lock (escaped or destroyed target) without acquiring a new one
pub fn clear_lock(state: &mut GameState) {
    if state.lock.take().is_some() {
        for t in &mut state.targets {
            t.locked = false;
        }
        state.push_event(GameEvent::LockLost);
        state.push_event(GameEvent::InputCleared);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn_one;
    use crate::tuning::Variant;
    use crate::words::{WordBank, WordPair};
    use glam::Vec2;

    fn typing_state() -> GameState {
        let mut state = GameState::new(Variant::TypeDefense, 11);
        state.load_words(WordBank::from_pairs(vec![
            WordPair::new("cat", "猫"),
            WordPair::new("dog", "狗"),
            WordPair::new("fox", "狐狸"),
        ]));
        state
    }

    #[test]
    fn test_acquires_nearest_target() {
        let mut state = typing_state();
        spawn_one(&mut state);
        spawn_one(&mut state);
        // Pin positions: second target far closer to the turret
        state.targets[0].pos = Vec2::new(400.0, 100.0);
        state.targets[1].pos = Vec2::new(400.0, 500.0);
        let near_id = state.targets[1].id;

        assert_eq!(reacquire_lock(&mut state), Some(near_id));
        assert!(state.target(near_id).unwrap().locked);
        assert_eq!(state.alive_targets().filter(|t| t.locked).count(), 1);
    }

    #[test]
    fn test_lock_is_sticky() {
        let mut state = typing_state();
        spawn_one(&mut state);
        state.targets[0].pos = Vec2::new(400.0, 100.0);
        let first_id = state.targets[0].id;
        reacquire_lock(&mut state);

        // A closer target appears; the existing lock must persist
        spawn_one(&mut state);
        state.targets[1].pos = Vec2::new(400.0, 540.0);
        assert_eq!(reacquire_lock(&mut state), Some(first_id));
        assert!(!state.targets[1].locked);
    }

    #[test]
    fn test_reacquires_when_locked_target_dies() {
        let mut state = typing_state();
        spawn_one(&mut state);
        spawn_one(&mut state);
        let first_id = state.targets[0].id;
        let second_id = state.targets[1].id;
        reacquire_lock(&mut state);
        state.take_events();

        state.remove_target(state.lock.unwrap_or(first_id));
        let relocked = reacquire_lock(&mut state).expect("relock on survivor");
        assert!(relocked == first_id || relocked == second_id);
        let events = state.take_events();
        assert!(events.contains(&GameEvent::LockAcquired { id: relocked }));
        assert!(events.contains(&GameEvent::InputCleared));
    }

    #[test]
    fn test_lock_change_clears_input_buffer() {
        let mut state = typing_state();
        spawn_one(&mut state);
        reacquire_lock(&mut state);
        let events = state.take_events();
        assert!(events.contains(&GameEvent::InputCleared));

        clear_lock(&mut state);
        let events = state.take_events();
        assert!(events.contains(&GameEvent::LockLost));
        assert!(events.contains(&GameEvent::InputCleared));
        assert!(state.locked_target().is_none());
    }

    #[test]
    fn test_no_targets_means_no_lock() {
        let mut state = typing_state();
        assert_eq!(reacquire_lock(&mut state), None);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_tie_breaks_by_registry_order() {
        let mut state = typing_state();
        spawn_one(&mut state);
        spawn_one(&mut state);
        let same = Vec2::new(300.0, 300.0);
        state.targets[0].pos = same;
        state.targets[1].pos = same;
        let first_id = state.targets[0].id;
        assert_eq!(reacquire_lock(&mut state), Some(first_id));
    }
}
