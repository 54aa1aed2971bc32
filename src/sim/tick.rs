//! Per-tick advance and fire handling
//!
//! Order within one tick is fixed: motion, projectile expiry, boundary-escape
//! checks, overlap resolution, then lock re-evaluation. A target removed for
//! escaping can never also be matched in the same tick, and the renderer
//! computes its lock-line hints only after the tick returns.
//!
//! Removal decisions are collected during each scan and applied afterwards;
//! nothing mutates the registries mid-iteration.

use glam::Vec2;

use super::resolve::{apply_miss, resolve_overlap};
use super::state::{GamePhase, GameState};
use super::targeting::{clear_lock, reacquire_lock};
use crate::consts::*;
use crate::tuning::Variant;

/// Advance the session by `dt` seconds. No-op once the run has ended.
pub fn tick(state: &mut GameState, dt: f32) {
    if state.session.phase != GamePhase::Playing {
        return;
    }

    move_targets(state, dt);
    move_projectiles(state, dt);
    handle_boundary_escapes(state);
    if state.session.phase != GamePhase::Playing {
        return;
    }
    handle_overlaps(state);

    if state.tuning.variant == Variant::TypeDefense {
        reacquire_lock(state);
    }
}

/// Fire a projectile from `origin` toward `dir` (pointer variant). Reuses an
/// inactive pool slot; silently refused when the pool is exhausted, the
/// direction is degenerate, or the run has ended.
pub fn on_fire(state: &mut GameState, origin: Vec2, dir: Vec2) {
    if state.session.phase != GamePhase::Playing {
        return;
    }
    let Some(dir) = dir.try_normalize() else {
        return;
    };
    let Some(slot) = state.projectiles.iter_mut().find(|p| !p.active) else {
        log::debug!("projectile pool exhausted, shot dropped");
        return;
    };
    slot.pos = origin;
    slot.vel = dir * PROJECTILE_SPEED;
    slot.active = true;
}

fn move_targets(state: &mut GameState, dt: f32) {
    let bounce = state.tuning.bounce_walls;
    for t in &mut state.targets {
        t.pos += t.vel * dt;
        if bounce {
            if t.pos.x - t.radius < 0.0 {
                t.pos.x = t.radius;
                t.vel.x = t.vel.x.abs();
            } else if t.pos.x + t.radius > FIELD_WIDTH {
                t.pos.x = FIELD_WIDTH - t.radius;
                t.vel.x = -t.vel.x.abs();
            }
            if t.pos.y - t.radius < 0.0 {
                t.pos.y = t.radius;
                t.vel.y = t.vel.y.abs();
            } else if t.pos.y + t.radius > FIELD_HEIGHT {
                t.pos.y = FIELD_HEIGHT - t.radius;
                t.vel.y = -t.vel.y.abs();
            }
        }
    }
}

fn move_projectiles(state: &mut GameState, dt: f32) {
    for p in &mut state.projectiles {
        if !p.active {
            continue;
        }
        p.pos += p.vel * dt;
        let out = p.pos.y < PROJECTILE_MIN_Y
            || p.pos.y > PROJECTILE_MAX_Y
            || p.pos.x < PROJECTILE_MIN_X
            || p.pos.x > PROJECTILE_MAX_X;
        if out {
            p.active = false;
        }
    }
}

/// Targets crossing the exit boundary unresolved each cost a life
fn handle_boundary_escapes(state: &mut GameState) {
    let exit_y = state.tuning.exit_y;
    let escaped: Vec<u32> = state
        .alive_targets()
        .filter(|t| t.pos.y > exit_y)
        .map(|t| t.id)
        .collect();

    for id in escaped {
        if state.lock == Some(id) {
            clear_lock(state);
        }
        state.remove_target(id);
        log::debug!("target {id} escaped");
        apply_miss(state);
        if state.session.phase != GamePhase::Playing {
            return;
        }
    }
}

/// Pointer variant: test every active projectile against every alive target;
/// the first overlap consumes the projectile. Pairs are snapshotted first and
/// resolved after the scan.
fn handle_overlaps(state: &mut GameState) {
    if state.tuning.variant != Variant::PointerShooter {
        return;
    }

    let mut hits: Vec<(u32, u32)> = Vec::new();
    for p in state.active_projectiles() {
        if let Some(t) = state
            .alive_targets()
            .find(|t| t.overlaps_circle(p.pos, p.radius))
        {
            hits.push((p.id, t.id));
        }
    }

    for (projectile_id, target_id) in hits {
        if let Some(p) = state.projectiles.iter_mut().find(|p| p.id == projectile_id) {
            p.active = false;
        }
        // The target may already be gone (round reset by an earlier hit)
        resolve_overlap(state, target_id);
        if state.session.phase != GamePhase::Playing {
            return;
        }
    }
}
