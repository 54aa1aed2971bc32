//! Headless demo driver
//!
//! Plays one scripted session of each variant to exercise the tick/spawn/
//! input contract. The real game embeds the core behind a renderer and an
//! input loop; this binary stands in for both.

use vocab_blast::consts::SIM_DT;
use vocab_blast::sim::{on_fire, on_input_change, spawn_one, spawn_round, tick};
use vocab_blast::{GameEvent, GamePhase, GameState, Variant, WordBank, turret_pos};

fn main() {
    env_logger::init();

    run_typing_session();
    run_shooter_session();
}

/// Type-defense: spawn on a 2s cadence, type the locked word one character
/// per tick, let every third word escape.
fn run_typing_session() {
    let mut game = GameState::new(Variant::TypeDefense, 42);
    game.load_words(WordBank::fallback());

    let spawn_every = (2.0 / SIM_DT) as u32;
    let mut buffer = String::new();
    let mut resolved = 0u32;

    for frame in 0..20_000u32 {
        if frame % spawn_every == 0 {
            spawn_one(&mut game);
        }
        tick(&mut game, SIM_DT);

        for event in game.take_events() {
            if matches!(event, GameEvent::InputCleared) {
                buffer.clear();
            }
            log::debug!("event: {event:?}");
        }

        // Skip typing every third word so boundary escapes happen too
        let skip = resolved % 3 == 2;
        if let Some(locked) = game.locked_target()
            && !skip
        {
            let answer = locked.answer.clone();
            if let Some(next) = answer.chars().nth(buffer.chars().count()) {
                buffer.push(next);
                on_input_change(&mut game, &buffer);
                if buffer == answer {
                    resolved += 1;
                }
            }
        }

        if game.phase() == GamePhase::GameOver {
            break;
        }
    }
    log::info!(
        "typing session done: score {}, lives {}",
        game.score(),
        game.lives()
    );
}

/// Pointer-shooter: fire at the correct bubble of each round, missing into a
/// distractor now and then.
fn run_shooter_session() {
    let mut game = GameState::new(Variant::PointerShooter, 7);
    game.load_words(WordBank::fallback());
    spawn_round(&mut game);

    let mut rounds = 0u32;
    for frame in 0..20_000u32 {
        tick(&mut game, SIM_DT);

        if game.phase() == GamePhase::GameOver {
            break;
        }

        // Shoot roughly twice a second
        if frame % 30 == 0 {
            let aim_wrong = rounds % 4 == 3;
            let aim = game
                .alive_targets()
                .find(|t| t.is_correct != aim_wrong)
                .map(|t| t.pos);
            if let Some(pos) = aim {
                on_fire(&mut game, turret_pos(), pos - turret_pos());
            }
        }

        for event in game.take_events() {
            if matches!(event, GameEvent::RoundSpawned { .. }) {
                rounds += 1;
            }
            log::debug!("event: {event:?}");
        }
    }
    log::info!(
        "shooter session done: {rounds} rounds, score {}, lives {}",
        game.score(),
        game.lives()
    );
}
