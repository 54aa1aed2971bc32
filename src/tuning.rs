//! Per-variant gameplay balance
//!
//! The game ships in two builds sharing one core: a pointer-aim shooter
//! (click the bubble holding the right translation) and a typing defense
//! (type the word of the locked, descending target). Everything that differs
//! between them is a number in this table, not a code path.

use serde::{Deserialize, Serialize};

/// Which match policy and balance table a session uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Click-to-shoot: projectile overlap + correctness flag
    PointerShooter,
    /// Lock-on typing: progressive typed match against the locked target
    TypeDefense,
}

/// Balance knobs for one variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub variant: Variant,
    /// Lives at session start (and after restart)
    pub starting_lives: u8,
    /// Uniform spawn window, x then y
    pub spawn_x: (f32, f32),
    pub spawn_y: (f32, f32),
    /// Drift velocity ranges
    pub drift_x: (f32, f32),
    pub drift_y: (f32, f32),
    /// Admissible radius range derived from label extent
    pub radius_clamp: (f32, f32),
    /// Padding added around the label before clamping
    pub label_pad: f32,
    /// Shrink oversized labels to fit the clamped circle (radius never grows)
    pub rescale_labels: bool,
    /// Targets bounce off the playfield edges instead of drifting out
    pub bounce_walls: bool,
    /// Targets crossing this y unresolved count as a miss
    pub exit_y: f32,
    /// Spawn refusal threshold; `None` means round-based spawning
    pub max_live_targets: Option<usize>,
    /// Distractor targets per round (pointer variant)
    pub distractors_per_round: usize,
    /// Suggested spawn cadence for the external timer, in milliseconds
    pub spawn_interval_hint_ms: u32,
}

impl Variant {
    pub fn tuning(self) -> Tuning {
        match self {
            Self::PointerShooter => Tuning {
                variant: self,
                starting_lives: 3,
                spawn_x: (100.0, 700.0),
                spawn_y: (50.0, 350.0),
                drift_x: (-100.0, 100.0),
                drift_y: (-60.0, 60.0),
                radius_clamp: (30.0, 120.0),
                label_pad: 15.0,
                rescale_labels: true,
                bounce_walls: true,
                exit_y: 650.0,
                max_live_targets: None,
                distractors_per_round: 7,
                spawn_interval_hint_ms: 0,
            },
            Self::TypeDefense => Tuning {
                variant: self,
                starting_lives: 5,
                spawn_x: (50.0, 750.0),
                spawn_y: (-50.0, -50.0),
                drift_x: (0.0, 0.0),
                drift_y: (30.0, 60.0),
                radius_clamp: (25.0, 60.0),
                label_pad: 10.0,
                rescale_labels: false,
                bounce_walls: false,
                exit_y: 580.0,
                max_live_targets: Some(5),
                distractors_per_round: 0,
                spawn_interval_hint_ms: 2000,
            },
        }
    }
}
