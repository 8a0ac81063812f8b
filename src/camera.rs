//! Surveillance camera console.
//!
//! Tracks whether the console is raised and which feed is selected, plus a
//! transient static-interference burst triggered probabilistically on feed
//! switches. Static is purely cosmetic; the ambush logic only ever reads
//! the selected-feed predicate.

use rand::Rng;

use crate::config::CameraConfig;
use crate::config::TimerRanges;
use crate::events::{EventQueue, GameEvent};
use crate::location::Location;

pub struct CameraSystem {
    is_up: bool,
    current: Option<Location>,
    static_timer: f32,
    static_duration: f32,
    show_static: bool,
}

impl CameraSystem {
    pub fn new() -> Self {
        Self {
            is_up: false,
            current: None,
            static_timer: 0.0,
            static_duration: 0.0,
            show_static: false,
        }
    }

    pub fn is_up(&self) -> bool {
        self.is_up
    }

    /// The feed the player is looking at, if the console is raised.
    pub fn current(&self) -> Option<Location> {
        self.current
    }

    /// Whether the feed is currently degraded by static.
    pub fn show_static(&self) -> bool {
        self.show_static
    }

    /// The location actually being observed right now: the selected feed,
    /// but only while the console is raised. This is the predicate the
    /// ambush logic consumes.
    pub fn target(&self) -> Option<Location> {
        if self.is_up {
            self.current
        } else {
            None
        }
    }

    /// Raise the console, always on its default feed.
    pub fn open(&mut self, config: &CameraConfig, events: &mut EventQueue) {
        self.is_up = true;
        self.current = Some(config.default_feed);
        events.push(GameEvent::CameraOpened {
            feed: config.default_feed,
        });
    }

    /// Lower the console, dropping the feed selection.
    pub fn close(&mut self, events: &mut EventQueue) {
        if self.is_up {
            self.is_up = false;
            self.current = None;
            events.push(GameEvent::CameraClosed);
        }
    }

    /// Switch to a different feed. Ignored when the console is down or the
    /// location has no camera.
    pub fn switch(
        &mut self,
        feed: Location,
        config: &CameraConfig,
        timers: &TimerRanges,
        rng: &mut impl Rng,
        events: &mut EventQueue,
    ) {
        if !self.is_up || !feed.has_camera() {
            return;
        }
        self.current = Some(feed);
        events.push(GameEvent::CameraSwitched { feed });

        if rng.gen_bool(config.static_chance) {
            self.show_static = true;
            self.static_duration = timers.static_duration.sample(rng);
            self.static_timer = 0.0;
            events.push(GameEvent::StaticBurst {
                duration: self.static_duration,
            });
        }
    }

    /// Time out a running static burst.
    pub fn update(&mut self, dt: f32) {
        if self.show_static {
            self.static_timer += dt;
            if self.static_timer >= self.static_duration {
                self.show_static = false;
                self.static_timer = 0.0;
            }
        }
    }

    /// Drop the feed entirely, e.g. when the power dies.
    pub fn force_down(&mut self) {
        self.is_up = false;
        self.current = None;
        self.show_static = false;
    }
}

impl Default for CameraSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_open_defaults_to_show_stage() {
        let config = GameConfig::standard();
        let mut events = EventQueue::new();
        let mut camera = CameraSystem::new();
        camera.open(&config.camera, &mut events);
        assert!(camera.is_up());
        assert_eq!(camera.current(), Some(Location::ShowStage));
    }

    #[test]
    fn test_switch_requires_raised_console_and_real_feed() {
        let config = GameConfig::standard();
        let mut events = EventQueue::new();
        let mut rng = StdRng::seed_from_u64(0);
        let mut camera = CameraSystem::new();

        // Console down: switch ignored
        camera.switch(
            Location::Kitchen,
            &config.camera,
            &config.timers,
            &mut rng,
            &mut events,
        );
        assert_eq!(camera.current(), None);

        camera.open(&config.camera, &mut events);
        // Doors have no feed
        camera.switch(
            Location::LeftDoor,
            &config.camera,
            &config.timers,
            &mut rng,
            &mut events,
        );
        assert_eq!(camera.current(), Some(Location::ShowStage));

        camera.switch(
            Location::Kitchen,
            &config.camera,
            &config.timers,
            &mut rng,
            &mut events,
        );
        assert_eq!(camera.current(), Some(Location::Kitchen));
    }

    #[test]
    fn test_static_burst_times_out() {
        let config = GameConfig::standard();
        let mut events = EventQueue::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut camera = CameraSystem::new();
        camera.open(&config.camera, &mut events);

        // Switch feeds until a burst triggers (30% per switch, seeded rng)
        for feed in Location::CAMERA_FEEDS.iter().cycle().take(64) {
            camera.switch(*feed, &config.camera, &config.timers, &mut rng, &mut events);
            if camera.show_static() {
                break;
            }
        }
        assert!(camera.show_static());

        // Bursts last at most the configured maximum
        camera.update(config.timers.static_duration.max + 0.01);
        assert!(!camera.show_static());
    }

    #[test]
    fn test_reopen_returns_to_default_feed() {
        let config = GameConfig::standard();
        let mut events = EventQueue::new();
        let mut rng = StdRng::seed_from_u64(2);
        let mut camera = CameraSystem::new();

        camera.open(&config.camera, &mut events);
        camera.switch(
            Location::PirateCove,
            &config.camera,
            &config.timers,
            &mut rng,
            &mut events,
        );
        camera.close(&mut events);
        assert!(!camera.is_up());
        assert_eq!(camera.current(), None);

        // Raising the console always starts on the default feed
        camera.open(&config.camera, &mut events);
        assert_eq!(camera.current(), Some(Location::ShowStage));
    }

    #[test]
    fn test_target_is_none_while_console_down() {
        let config = GameConfig::standard();
        let mut events = EventQueue::new();
        let mut camera = CameraSystem::new();

        camera.open(&config.camera, &mut events);
        assert_eq!(camera.target(), Some(Location::ShowStage));
        camera.close(&mut events);
        assert_eq!(camera.target(), None);
    }
}
