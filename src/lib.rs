//! Vocab Blast - gameplay core for a vocabulary-training arcade shooter
//!
//! Transient on-screen targets carry a translation pair; the player eliminates
//! a target by firing a projectile that overlaps it (pointer-shooter variant)
//! or by typing its paired word while it is locked (type-defense variant).
//!
//! Core modules:
//! - `sim`: deterministic gameplay simulation (targets, lock-on, match
//!   resolution, session state machine)
//! - `words`: word-pair feed with JSON decoding and a built-in fallback bank
//! - `tuning`: per-variant balance tables
//!
//! Rendering, raw input capture, the frame loop, and the network fetch of
//! word pairs live outside this crate; the core consumes decoded events and
//! exposes observable state.

pub mod sim;
pub mod tuning;
pub mod words;

pub use sim::{GameEvent, GamePhase, GameState, MatchOutcome, Projectile, Session, Target};
pub use tuning::{Tuning, Variant};
pub use words::{WordBank, WordPair};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Turret position - the distance reference for lock-on targeting
    pub const TURRET_X: f32 = 400.0;
    pub const TURRET_Y: f32 = 550.0;

    /// Points awarded per resolved target
    pub const HIT_SCORE: u64 = 10;

    /// Projectile defaults
    pub const PROJECTILE_POOL_SIZE: usize = 30;
    pub const PROJECTILE_SPEED: f32 = 700.0;
    pub const PROJECTILE_RADIUS: f32 = 5.0;

    /// Projectiles past these bounds are expired and returned to the pool
    pub const PROJECTILE_MIN_Y: f32 = -50.0;
    pub const PROJECTILE_MAX_Y: f32 = 650.0;
    pub const PROJECTILE_MIN_X: f32 = -50.0;
    pub const PROJECTILE_MAX_X: f32 = 850.0;
}

/// Turret position as a vector
#[inline]
pub fn turret_pos() -> Vec2 {
    Vec2::new(consts::TURRET_X, consts::TURRET_Y)
}

/// True when two circles overlap (strict, touching circles do not count)
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a_pos.distance_squared(b_pos) < reach * reach
}
