//! Animatronic path walkers and the AI director.
//!
//! Each character is a single data-driven walker built from an
//! `AnimatronicConfig`: an ordered path over locations ending at a door
//! endpoint, a temperament scalar, and a behavior variant. Three walk the
//! path probabilistically; the ambush variant is gated on player camera
//! attention instead.

use rand::Rng;

use crate::config::{AiConfig, AnimatronicConfig, BehaviorConfig, TimerRanges};
use crate::events::{EventQueue, GameEvent};
use crate::location::{DoorSide, Location};

/// One adversary character walking its route toward the office.
pub struct Animatronic {
    config: AnimatronicConfig,
    current_location: Location,
    path_index: usize,
    move_timer: f32,
    move_interval: f32,
    /// Continuous seconds the ambush variant has gone unobserved
    unwatched_timer: f32,
    /// Whether the ambush rush already fired this night
    rushed: bool,
}

impl Animatronic {
    pub fn new(config: AnimatronicConfig, timers: &TimerRanges, rng: &mut impl Rng) -> Self {
        let start = config.path[0];
        Self {
            config,
            current_location: start,
            path_index: 0,
            move_timer: 0.0,
            move_interval: timers.initial_move_interval.sample(rng),
            unwatched_timer: 0.0,
            rushed: false,
        }
    }

    /// Put the character back at its path start for a fresh night.
    pub fn reset(&mut self, timers: &TimerRanges, rng: &mut impl Rng) {
        self.current_location = self.config.path[0];
        self.path_index = 0;
        self.move_timer = 0.0;
        self.move_interval = timers.initial_move_interval.sample(rng);
        self.unwatched_timer = 0.0;
        self.rushed = false;
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn location(&self) -> Location {
        self.current_location
    }

    pub fn path_index(&self) -> usize {
        self.path_index
    }

    /// Whether the character has reached its door endpoint.
    pub fn at_door(&self) -> bool {
        self.current_location.is_door()
    }

    /// Which office side the character threatens, once at a door.
    pub fn door_side(&self) -> Option<DoorSide> {
        match self.current_location {
            Location::LeftDoor => Some(DoorSide::Left),
            Location::RightDoor => Some(DoorSide::Right),
            _ => None,
        }
    }

    /// The home location the ambush variant wants watched, if any.
    pub fn watch_home(&self) -> Option<Location> {
        match self.config.behavior {
            BehaviorConfig::AttentionRush { home, .. } => Some(home),
            BehaviorConfig::PathWalk => None,
        }
    }

    /// Difficulty-scaled aggression. Scarce power makes the threat faster.
    pub fn effective_aggression(&self, night_number: u32, power_pct: f32, ai: &AiConfig) -> f32 {
        let mut aggression =
            self.config.base_aggression * (1.0 + night_number as f32 * ai.aggression_per_night);
        if power_pct < ai.low_power_threshold {
            aggression *= ai.low_power_aggression_mult;
        }
        aggression
    }

    /// Advance one tick. `watched` is the camera-attention predicate for
    /// the ambush variant, `None` for plain path walkers.
    pub fn update(
        &mut self,
        dt: f32,
        night_number: u32,
        power_pct: f32,
        watched: Option<bool>,
        ai: &AiConfig,
        timers: &TimerRanges,
        rng: &mut impl Rng,
        events: &mut EventQueue,
    ) {
        if let BehaviorConfig::AttentionRush {
            unwatched_threshold,
            ..
        } = self.config.behavior
        {
            if watched.unwrap_or(false) {
                self.unwatched_timer = 0.0;
            } else {
                self.unwatched_timer += dt;
            }

            // The rush fires at most once per night, and only from home.
            if !self.rushed && self.path_index == 0 && self.unwatched_timer > unwatched_threshold {
                self.rushed = true;
                self.advance_to(1, events);
                events.push(GameEvent::AnimatronicRushed {
                    name: self.config.name.clone(),
                });
            }
        }

        self.move_timer += dt;
        let due = self.move_interval / self.effective_aggression(night_number, power_pct, ai);
        if self.move_timer >= due {
            // Reset and redraw the interval on every attempt, success or not
            self.move_timer = 0.0;
            self.move_interval = timers.move_interval.sample(rng);
            if rng.gen_bool(ai.move_chance) {
                self.try_advance(events);
            }
        }
    }

    /// Advance the path cursor if this character's behavior permits it.
    fn try_advance(&mut self, events: &mut EventQueue) {
        let last = self.config.path.len() - 1;
        if self.path_index >= last {
            return; // stays at the door until the night consumes that fact
        }
        match self.config.behavior {
            BehaviorConfig::PathWalk => self.advance_to(self.path_index + 1, events),
            BehaviorConfig::AttentionRush { .. } => {
                // No probabilistic movement out of home; once rushing, the
                // next successful move goes straight to the door endpoint.
                if self.rushed {
                    self.advance_to(last, events);
                }
            }
        }
    }

    fn advance_to(&mut self, index: usize, events: &mut EventQueue) {
        debug_assert!(index > self.path_index && index < self.config.path.len());
        let from = self.current_location;
        self.path_index = index;
        self.current_location = self.config.path[index];
        events.push(GameEvent::AnimatronicMoved {
            name: self.config.name.clone(),
            from,
            to: self.current_location,
        });
    }
}

/// Owns all animatronic instances and orchestrates their per-tick updates.
pub struct AiDirector {
    animatronics: Vec<Animatronic>,
}

impl AiDirector {
    pub fn new(roster: &[AnimatronicConfig], timers: &TimerRanges, rng: &mut impl Rng) -> Self {
        let animatronics = roster
            .iter()
            .map(|config| Animatronic::new(config.clone(), timers, rng))
            .collect();
        Self { animatronics }
    }

    /// Reset every character for a fresh night.
    pub fn reset(&mut self, timers: &TimerRanges, rng: &mut impl Rng) {
        for animatronic in &mut self.animatronics {
            animatronic.reset(timers, rng);
        }
    }

    /// Fan the tick out to every character. The watched predicate is
    /// supplied only to the ambush variant.
    pub fn update(
        &mut self,
        dt: f32,
        night_number: u32,
        power_pct: f32,
        camera_target: Option<Location>,
        ai: &AiConfig,
        timers: &TimerRanges,
        rng: &mut impl Rng,
        events: &mut EventQueue,
    ) {
        for animatronic in &mut self.animatronics {
            let watched = animatronic
                .watch_home()
                .map(|home| camera_target == Some(home));
            animatronic.update(
                dt,
                night_number,
                power_pct,
                watched,
                ai,
                timers,
                rng,
                events,
            );
        }
    }

    /// Which character (if any) occupies the given door.
    pub fn at_door(&self, side: DoorSide) -> Option<&Animatronic> {
        let door = side.location();
        self.animatronics
            .iter()
            .find(|a| a.location() == door)
    }

    /// All characters currently at the given location.
    pub fn at_location(&self, location: Location) -> Vec<&Animatronic> {
        self.animatronics
            .iter()
            .filter(|a| a.location() == location)
            .collect()
    }

    pub fn all(&self) -> &[Animatronic] {
        &self.animatronics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn walker(config: &GameConfig, rng: &mut StdRng) -> Animatronic {
        Animatronic::new(config.roster[0].clone(), &config.timers, rng)
    }

    fn ambusher(config: &GameConfig, rng: &mut StdRng) -> Animatronic {
        let foxy = config
            .roster
            .iter()
            .find(|c| matches!(c.behavior, BehaviorConfig::AttentionRush { .. }))
            .expect("standard roster has an ambush character");
        Animatronic::new(foxy.clone(), &config.timers, rng)
    }

    #[test]
    fn test_cursor_monotonic_and_bounded() {
        let config = GameConfig::standard();
        let mut rng = StdRng::seed_from_u64(42);
        let mut events = EventQueue::new();
        let mut a = walker(&config, &mut rng);
        let last = config.roster[0].path.len() - 1;

        let mut previous = a.path_index();
        for _ in 0..20_000 {
            a.update(
                0.1,
                3,
                100.0,
                None,
                &config.ai,
                &config.timers,
                &mut rng,
                &mut events,
            );
            assert!(a.path_index() >= previous);
            assert!(a.path_index() <= last);
            previous = a.path_index();
        }
        // Plenty of simulated time at night 3; the walker must have arrived
        assert_eq!(a.path_index(), last);
        assert!(a.at_door());
    }

    #[test]
    fn test_effective_aggression_scales_with_night() {
        let config = GameConfig::standard();
        let mut rng = StdRng::seed_from_u64(1);
        let a = walker(&config, &mut rng);
        let n1 = a.effective_aggression(1, 100.0, &config.ai);
        let n2 = a.effective_aggression(2, 100.0, &config.ai);
        let n5 = a.effective_aggression(5, 100.0, &config.ai);
        assert!(n2 > n1);
        assert!(n5 > n2);
    }

    #[test]
    fn test_effective_aggression_low_power_boost() {
        let config = GameConfig::standard();
        let mut rng = StdRng::seed_from_u64(1);
        let a = walker(&config, &mut rng);
        let healthy = a.effective_aggression(1, 20.0, &config.ai);
        let scarce = a.effective_aggression(1, 19.9, &config.ai);
        // Boundary is exclusive: exactly 20% gets no boost
        assert!((healthy - a.effective_aggression(1, 100.0, &config.ai)).abs() < f32::EPSILON);
        assert!(scarce > healthy);
        assert!((scarce / healthy - config.ai.low_power_aggression_mult).abs() < 1e-5);
    }

    #[test]
    fn test_unwatched_timer_resets_when_watched() {
        let config = GameConfig::standard();
        let mut rng = StdRng::seed_from_u64(9);
        let mut events = EventQueue::new();
        let mut foxy = ambusher(&config, &mut rng);
        let start = foxy.location();

        // Alternate 4s unwatched / one watched tick: never rushes
        for _ in 0..20 {
            for _ in 0..40 {
                foxy.update(
                    0.1,
                    1,
                    100.0,
                    Some(false),
                    &config.ai,
                    &config.timers,
                    &mut rng,
                    &mut events,
                );
            }
            foxy.update(
                0.1,
                1,
                100.0,
                Some(true),
                &config.ai,
                &config.timers,
                &mut rng,
                &mut events,
            );
        }
        assert_eq!(foxy.location(), start);
        assert!(!events.drain().any(|e| matches!(e, GameEvent::AnimatronicRushed { .. })));
    }

    #[test]
    fn test_rush_fires_exactly_once() {
        let config = GameConfig::standard();
        let mut rng = StdRng::seed_from_u64(3);
        let mut events = EventQueue::new();
        let mut foxy = ambusher(&config, &mut rng);
        let staging = config.roster[3].path[1];

        // 60 seconds never watched: rush must fire, and only once
        for _ in 0..600 {
            foxy.update(
                0.1,
                1,
                100.0,
                Some(false),
                &config.ai,
                &config.timers,
                &mut rng,
                &mut events,
            );
        }
        let rushes = events
            .drain()
            .filter(|e| matches!(e, GameEvent::AnimatronicRushed { .. }))
            .count();
        assert_eq!(rushes, 1);
        // After rushing it is at the staging location or already at the door
        assert!(foxy.location() == staging || foxy.at_door());
    }

    #[test]
    fn test_ambusher_never_walks_out_of_home() {
        let config = GameConfig::standard();
        let mut rng = StdRng::seed_from_u64(11);
        let mut events = EventQueue::new();
        let mut foxy = ambusher(&config, &mut rng);
        let home = foxy.location();

        // Watched forever: the probabilistic walk alone must never move it
        for _ in 0..20_000 {
            foxy.update(
                0.1,
                5,
                100.0,
                Some(true),
                &config.ai,
                &config.timers,
                &mut rng,
                &mut events,
            );
        }
        assert_eq!(foxy.location(), home);
        assert_eq!(foxy.path_index(), 0);
    }

    #[test]
    fn test_director_door_queries() {
        let config = GameConfig::standard();
        let mut rng = StdRng::seed_from_u64(21);
        let mut events = EventQueue::new();
        let mut director = AiDirector::new(&config.roster, &config.timers, &mut rng);

        assert!(director.at_door(DoorSide::Left).is_none());
        assert!(director.at_door(DoorSide::Right).is_none());
        // All four start on stage or in the cove
        assert_eq!(director.at_location(Location::ShowStage).len(), 3);
        assert_eq!(director.at_location(Location::PirateCove).len(), 1);

        // Run a long, never-watched night 5: someone reaches a door
        for _ in 0..50_000 {
            director.update(
                0.1,
                5,
                100.0,
                None,
                &config.ai,
                &config.timers,
                &mut rng,
                &mut events,
            );
        }
        let left = director.at_door(DoorSide::Left).is_some();
        let right = director.at_door(DoorSide::Right).is_some();
        assert!(left || right);
    }

    #[test]
    fn test_reset_returns_everyone_home() {
        let config = GameConfig::standard();
        let mut rng = StdRng::seed_from_u64(5);
        let mut events = EventQueue::new();
        let mut director = AiDirector::new(&config.roster, &config.timers, &mut rng);

        for _ in 0..50_000 {
            director.update(
                0.1,
                5,
                10.0,
                None,
                &config.ai,
                &config.timers,
                &mut rng,
                &mut events,
            );
        }
        director.reset(&config.timers, &mut rng);
        for animatronic in director.all() {
            assert_eq!(animatronic.path_index(), 0);
            assert!(!animatronic.at_door());
        }
    }
}
