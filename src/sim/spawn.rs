//! Target creation
//!
//! Positions draw uniformly within the variant's spawn window with no overlap
//! avoidance between fresh targets; collisions between targets are accepted.
//! Radii derive from an estimated label extent and are clamped so overlap
//! math stays well-defined for any label length - oversized labels shrink
//! visually instead of growing the circle.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GamePhase, GameState, Target};

/// Nominal glyph sizes for the 20px bold label font
const GLYPH_HEIGHT: f32 = 22.0;
const GLYPH_WIDTH_WIDE: f32 = 20.0;
const GLYPH_WIDTH_NARROW: f32 = 11.0;

/// Inner margin kept between a shrunk label and the clamped circle edge
const LABEL_FIT_MARGIN: f32 = 20.0;

/// Estimated rendered extent of a label. The renderer owns real text metrics;
/// this keeps radius derivation deterministic and headless-testable.
pub fn label_extent(text: &str) -> Vec2 {
    let width: f32 = text
        .chars()
        .map(|c| {
            if c.is_ascii() {
                GLYPH_WIDTH_NARROW
            } else {
                GLYPH_WIDTH_WIDE
            }
        })
        .sum();
    Vec2::new(width, GLYPH_HEIGHT)
}

/// Derive the clamped collision radius and the label render scale
pub fn derive_radius(extent: Vec2, clamp: (f32, f32), pad: f32, rescale: bool) -> (f32, f32) {
    let raw = extent.max_element() / 2.0 + pad;
    let radius = raw.clamp(clamp.0, clamp.1);
    let scale = if rescale && raw > clamp.1 {
        (2.0 * clamp.1 - LABEL_FIT_MARGIN) / extent.max_element()
    } else {
        1.0
    };
    (radius, scale)
}

fn make_target(state: &mut GameState, label: String, answer: String, is_correct: bool) -> Target {
    let tuning = state.tuning;
    let (radius, label_scale) = derive_radius(
        label_extent(&label),
        tuning.radius_clamp,
        tuning.label_pad,
        tuning.rescale_labels,
    );
    let pos = Vec2::new(
        sample_range(state, tuning.spawn_x),
        sample_range(state, tuning.spawn_y),
    );
    let vel = Vec2::new(
        sample_range(state, tuning.drift_x),
        sample_range(state, tuning.drift_y),
    );
    Target {
        id: state.next_entity_id(),
        pos,
        vel,
        label,
        answer,
        is_correct,
        radius,
        label_scale,
        locked: false,
        alive: true,
    }
}

fn sample_range(state: &mut GameState, (lo, hi): (f32, f32)) -> f32 {
    if lo < hi {
        state.rng.random_range(lo..hi)
    } else {
        lo
    }
}

/// Spawn a full round (pointer variant): clear the field, pick a question,
/// place one correct target and the configured distractors. No-op while the
/// run has ended or the bank is empty.
pub fn spawn_round(state: &mut GameState) {
    if state.session.phase != GamePhase::Playing || state.bank.is_empty() {
        return;
    }

    let Some(question) = state.bank.pick(&mut state.rng).cloned() else {
        return;
    };
    let distractors =
        state
            .bank
            .distractors(&question, state.tuning.distractors_per_round, &mut state.rng);

    state.targets.clear();
    state.lock = None;

    let correct = make_target(state, question.native.clone(), question.native.clone(), true);
    state.targets.push(correct);
    for pair in distractors {
        let target = make_target(state, pair.native.clone(), pair.native, false);
        state.targets.push(target);
    }

    let count = state.targets.len();
    log::debug!("round spawned: question '{}', {count} targets", question.foreign);
    state.question = Some(question);
    state.push_event(GameEvent::RoundSpawned { count });
}

/// Spawn a single descending target (typing variant). Refuses silently at
/// the live-target cap, while the run has ended, or on an empty bank.
pub fn spawn_one(state: &mut GameState) {
    if state.session.phase != GamePhase::Playing || state.bank.is_empty() {
        return;
    }
    if let Some(max) = state.tuning.max_live_targets
        && state.alive_target_count() >= max
    {
        return;
    }

    let Some(pair) = state.bank.pick(&mut state.rng).cloned() else {
        return;
    };
    let answer = pair.foreign.to_lowercase();
    let target = make_target(state, pair.native, answer, false);
    let id = target.id;
    state.targets.push(target);
    log::debug!("target {id} spawned");
    state.push_event(GameEvent::TargetSpawned { id });
}
