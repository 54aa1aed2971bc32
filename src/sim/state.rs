//! Game state and core entity types
//!
//! The session (score, lives, phase) is an explicit struct with defined
//! mutation operations; nothing else writes those fields. The target registry
//! exclusively owns target instances, and the lock is a non-owning id that
//! must be liveness-checked on every use.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::{Tuning, Variant};
use crate::words::{WordBank, WordPair};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; terminal until an explicit restart
    GameOver,
}

/// A word-bearing target entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Displayed text (the native translation)
    pub label: String,
    /// The word the player must match
    pub answer: String,
    /// Pointer variant: whether this target holds the round's correct answer
    pub is_correct: bool,
    /// Collision radius, always within the variant's clamp bounds
    pub radius: f32,
    /// Render scale for the label; < 1.0 when a long label was shrunk to fit
    pub label_scale: f32,
    /// Typing variant: true for at most one target at a time
    pub locked: bool,
    pub alive: bool,
}

impl Target {
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        crate::circles_overlap(self.pos, self.radius, center, radius)
    }
}

/// A pooled projectile (pointer variant)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl Projectile {
    fn inactive(id: u32) -> Self {
        Self {
            id,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: PROJECTILE_RADIUS,
            active: false,
        }
    }
}

/// Score, lives, and phase - owned here exclusively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub score: u64,
    pub lives: u8,
    pub phase: GamePhase,
}

impl Session {
    pub fn new(lives: u8) -> Self {
        Self {
            score: 0,
            lives,
            phase: GamePhase::Playing,
        }
    }

    /// Award points for a resolved target. No-op once the run has ended.
    pub fn on_success(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.score += HIT_SCORE;
    }

    /// Deduct a life; returns true when this miss ended the run.
    pub fn on_miss(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            return true;
        }
        false
    }

    pub fn reset(&mut self, lives: u8) {
        *self = Self::new(lives);
    }
}

/// Feedback signals for the rendering collaborator, drained per frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A full round of targets was spawned (pointer variant)
    RoundSpawned { count: usize },
    /// A single target entered the field (typing variant)
    TargetSpawned { id: u32 },
    /// A target was resolved and removed
    TargetDestroyed { id: u32 },
    /// A projectile hit a target that was not the round's answer
    WrongTarget { id: u32 },
    /// A complete-but-wrong word was typed at the locked target
    WastedShot { id: u32 },
    LifeLost { remaining: u8 },
    LockAcquired { id: u32 },
    LockLost,
    /// The external input buffer should be cleared
    InputCleared,
    GameOver { score: u64 },
    Restarted,
}

/// Complete gameplay state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub session: Session,
    pub tuning: Tuning,
    /// The target registry; exclusive owner of all live targets
    pub targets: Vec<Target>,
    /// Fixed projectile pool (pointer variant; empty otherwise)
    pub projectiles: Vec<Projectile>,
    /// Current lock as a registry id, never an owning reference
    pub(crate) lock: Option<u32>,
    /// The round's question pair (pointer variant)
    pub(crate) question: Option<WordPair>,
    pub(crate) bank: WordBank,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a session for the given variant with a seeded RNG. The word
    /// bank starts as the fallback list until `load_words` is called.
    pub fn new(variant: Variant, seed: u64) -> Self {
        let tuning = variant.tuning();
        let projectiles = match variant {
            Variant::PointerShooter => (0..PROJECTILE_POOL_SIZE as u32)
                .map(Projectile::inactive)
                .collect(),
            Variant::TypeDefense => Vec::new(),
        };
        log::info!("new {variant:?} session, seed {seed}");
        Self {
            session: Session::new(tuning.starting_lives),
            tuning,
            targets: Vec::new(),
            projectiles,
            lock: None,
            question: None,
            bank: WordBank::fallback(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Swap in a freshly fetched word bank. Feed failures were already
    /// absorbed into the fallback bank upstream.
    pub fn load_words(&mut self, bank: WordBank) {
        self.bank = bank;
    }

    pub fn score(&self) -> u64 {
        self.session.score
    }

    pub fn lives(&self) -> u8 {
        self.session.lives
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// The round's question pair, if one is presented
    pub fn question(&self) -> Option<&WordPair> {
        self.question.as_ref()
    }

    /// Allocate a new entity id, unique within the session
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// All currently alive targets, in registry order
    pub fn alive_targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter().filter(|t| t.alive)
    }

    pub fn alive_target_count(&self) -> usize {
        self.alive_targets().count()
    }

    pub fn target(&self, id: u32) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }

    pub(crate) fn target_mut(&mut self, id: u32) -> Option<&mut Target> {
        self.targets.iter_mut().find(|t| t.id == id)
    }

    /// Mark a target not-alive and evict it. Idempotent.
    pub fn remove_target(&mut self, id: u32) {
        if let Some(t) = self.target_mut(id) {
            t.alive = false;
        }
        self.targets.retain(|t| t.alive);
        if self.lock == Some(id) {
            self.lock = None;
        }
    }

    pub fn active_projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter().filter(|p| p.active)
    }

    /// The locked target, liveness-checked
    pub fn locked_target(&self) -> Option<&Target> {
        self.lock
            .and_then(|id| self.target(id))
            .filter(|t| t.alive)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain queued feedback events for the rendering collaborator
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// End the run: clear the field so late events cannot touch stale
    /// entities, keep score for the game-over screen.
    pub(crate) fn enter_game_over(&mut self) {
        self.targets.clear();
        for p in &mut self.projectiles {
            p.active = false;
        }
        self.lock = None;
        self.question = None;
        self.push_event(GameEvent::GameOver {
            score: self.session.score,
        });
        log::info!("game over, final score {}", self.session.score);
    }

    /// Re-initialize the session: fresh score/lives/phase, empty registries.
    /// The word bank is retained; the embedding app re-triggers the fetch and
    /// calls `load_words` when it lands.
    pub fn restart(&mut self) {
        self.session.reset(self.tuning.starting_lives);
        self.targets.clear();
        for p in &mut self.projectiles {
            p.active = false;
        }
        self.lock = None;
        self.question = None;
        self.events.clear();
        self.push_event(GameEvent::Restarted);
        log::info!("session restarted");
    }
}
