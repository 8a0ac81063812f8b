//! Immutable game configuration, constructed once at startup.
//!
//! Defaults come from `constants::*`; an optional `config.json` next to
//! the binary overrides them. Every randomized timer is described here as
//! a `{min, max}` range and sampled through the one injected rng, so the
//! whole simulation is deterministic under a fixed seed.
//!
//! A malformed configuration (e.g. a path that doesn't end at a door) is a
//! programmer/config error and fatal at initialization.

use std::path::Path;

use rand::Rng;
use serde::Deserialize;

use crate::constants::*;
use crate::location::Location;

/// Power budget tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PowerConfig {
    pub max: f32,
    pub drain_base: f32,
    pub drain_camera: f32,
    pub drain_door: f32,
    pub drain_light: f32,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            max: POWER_MAX,
            drain_base: POWER_DRAIN_BASE,
            drain_camera: POWER_DRAIN_CAMERA,
            drain_door: POWER_DRAIN_DOOR,
            drain_light: POWER_DRAIN_LIGHT,
        }
    }
}

/// Night clock and terminal-sequence tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NightConfig {
    pub hour_duration: f32,
    pub total_hours: u32,
    pub starting_night: u32,
    pub light_max_duration: f32,
    pub jumpscare_duration: f32,
    pub power_out_duration: f32,
}

impl Default for NightConfig {
    fn default() -> Self {
        Self {
            hour_duration: HOUR_DURATION,
            total_hours: TOTAL_HOURS,
            starting_night: STARTING_NIGHT,
            light_max_duration: LIGHT_MAX_DURATION,
            jumpscare_duration: JUMPSCARE_DURATION,
            power_out_duration: POWER_OUT_DURATION,
        }
    }
}

/// An inclusive `{min, max}` range for a randomized duration.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TimerRange {
    pub min: f32,
    pub max: f32,
}

impl TimerRange {
    pub const fn new(range: (f32, f32)) -> Self {
        Self {
            min: range.0,
            max: range.1,
        }
    }

    /// Draw a duration from this range.
    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// All randomized timer ranges, one per event type.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimerRanges {
    /// First move interval drawn at night start
    pub initial_move_interval: TimerRange,
    /// Move interval redrawn after every attempt
    pub move_interval: TimerRange,
    /// Static burst length after a camera switch
    pub static_duration: TimerRange,
}

impl Default for TimerRanges {
    fn default() -> Self {
        Self {
            initial_move_interval: TimerRange::new(INITIAL_MOVE_INTERVAL),
            move_interval: TimerRange::new(MOVE_INTERVAL),
            static_duration: TimerRange::new(STATIC_DURATION),
        }
    }
}

/// Shared AI tuning applied to every animatronic.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub move_chance: f64,
    pub aggression_per_night: f32,
    pub low_power_aggression_mult: f32,
    pub low_power_threshold: f32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            move_chance: MOVE_CHANCE,
            aggression_per_night: AGGRESSION_PER_NIGHT,
            low_power_aggression_mult: LOW_POWER_AGGRESSION_MULT,
            low_power_threshold: LOW_POWER_THRESHOLD,
        }
    }
}

/// Surveillance camera tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub static_chance: f64,
    pub default_feed: Location,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            static_chance: STATIC_CHANCE,
            default_feed: Location::ShowStage,
        }
    }
}

/// How a character advances toward the office.
#[derive(Debug, Clone, Deserialize)]
pub enum BehaviorConfig {
    /// Probabilistic linear walk along the path
    PathWalk,
    /// Ambush variant: leaves `home` for the staging location (the second
    /// path entry) after going unwatched for `unwatched_threshold` seconds
    AttentionRush {
        home: Location,
        unwatched_threshold: f32,
    },
}

/// One character's identity, route and temperament.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimatronicConfig {
    pub name: String,
    /// Ordered route; the final entry must be a door endpoint
    pub path: Vec<Location>,
    pub base_aggression: f32,
    pub behavior: BehaviorConfig,
}

/// The full immutable configuration, threaded through every component.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    pub power: PowerConfig,
    pub night: NightConfig,
    pub timers: TimerRanges,
    pub ai: AiConfig,
    pub camera: CameraConfig,
    pub roster: Vec<AnimatronicConfig>,
}

/// The stock cast of four.
pub fn default_roster() -> Vec<AnimatronicConfig> {
    use Location::*;
    vec![
        AnimatronicConfig {
            name: "freddy".to_string(),
            path: vec![ShowStage, DiningArea, EastHall, RightDoor],
            base_aggression: 1.0,
            behavior: BehaviorConfig::PathWalk,
        },
        AnimatronicConfig {
            name: "bonnie".to_string(),
            path: vec![ShowStage, DiningArea, Backstage, SupplyCloset, WestHall, LeftDoor],
            base_aggression: 1.0,
            behavior: BehaviorConfig::PathWalk,
        },
        AnimatronicConfig {
            name: "chica".to_string(),
            path: vec![ShowStage, DiningArea, Kitchen, EastHall, RightDoor],
            base_aggression: 1.0,
            behavior: BehaviorConfig::PathWalk,
        },
        AnimatronicConfig {
            name: "foxy".to_string(),
            path: vec![PirateCove, WestHall, LeftDoor],
            base_aggression: 1.0,
            behavior: BehaviorConfig::AttentionRush {
                home: PirateCove,
                unwatched_threshold: RUSH_UNWATCHED_THRESHOLD,
            },
        },
    ]
}

impl GameConfig {
    /// Build the stock configuration.
    pub fn standard() -> Self {
        let config = Self {
            roster: default_roster(),
            ..Self::default()
        };
        config.validate().expect("invalid built-in game config");
        config
    }

    /// Load configuration from `path` if it exists, falling back to the
    /// stock configuration. A file that exists but fails to parse or
    /// validate is fatal.
    pub fn load_or_standard(path: &Path) -> Self {
        if !path.exists() {
            return Self::standard();
        }
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
        let mut config: GameConfig = serde_json::from_str(&text)
            .unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()));
        if config.roster.is_empty() {
            config.roster = default_roster();
        }
        config
            .validate()
            .unwrap_or_else(|e| panic!("invalid config in {}: {e}", path.display()));
        config
    }

    /// Check internal consistency. Violations are config errors, fatal at
    /// initialization.
    pub fn validate(&self) -> Result<(), String> {
        for range in [
            &self.timers.initial_move_interval,
            &self.timers.move_interval,
            &self.timers.static_duration,
        ] {
            if !(range.min > 0.0 && range.min <= range.max) {
                return Err(format!(
                    "timer range {:?} must satisfy 0 < min <= max",
                    range
                ));
            }
        }

        if self.night.total_hours == 0 || self.night.hour_duration <= 0.0 {
            return Err("night must have positive hours and hour duration".to_string());
        }

        if !self.camera.default_feed.has_camera() {
            return Err(format!(
                "default feed {:?} has no camera",
                self.camera.default_feed
            ));
        }

        for character in &self.roster {
            if character.path.len() < 2 {
                return Err(format!(
                    "{}: path must have at least a start and a door",
                    character.name
                ));
            }
            let last = *character.path.last().unwrap();
            if !last.is_door() {
                return Err(format!(
                    "{}: path must end at a door endpoint, got {:?}",
                    character.name, last
                ));
            }
            if character.path[..character.path.len() - 1]
                .iter()
                .any(|loc| loc.is_door())
            {
                return Err(format!(
                    "{}: only the final path entry may be a door",
                    character.name
                ));
            }
            if character.base_aggression <= 0.0 {
                return Err(format!("{}: aggression must be positive", character.name));
            }
            if let BehaviorConfig::AttentionRush {
                home,
                unwatched_threshold,
            } = &character.behavior
            {
                if *home != character.path[0] {
                    return Err(format!(
                        "{}: rush home {:?} must be the path start {:?}",
                        character.name, home, character.path[0]
                    ));
                }
                if *unwatched_threshold <= 0.0 {
                    return Err(format!(
                        "{}: unwatched threshold must be positive",
                        character.name
                    ));
                }
            }
        }

        Ok(())
    }
}
