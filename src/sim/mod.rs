//! Deterministic gameplay simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Fixed ordering within a tick (motion, escapes, overlaps, lock)
//! - No rendering, input capture, or network dependencies
//!
//! The embedding app drives it with `tick` plus the externally scheduled
//! entry points (`spawn_round`/`spawn_one` from its spawn timer, `on_fire`
//! and `on_input_change` from its decoded input events) and observes state
//! through the accessors and the drained event queue.

pub mod resolve;
pub mod spawn;
pub mod state;
pub mod targeting;
pub mod tick;

pub use resolve::{MatchOutcome, on_input_change, resolve_overlap};
pub use spawn::{spawn_one, spawn_round};
pub use state::{GameEvent, GamePhase, GameState, Projectile, Session, Target};
pub use targeting::{clear_lock, reacquire_lock};
pub use tick::{on_fire, tick};
