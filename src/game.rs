//! Night state machine - owns the whole simulation for one night.
//!
//! Per tick, in fixed order: drain power with the current control flags,
//! update the camera console, fan the tick out to the AI director, then
//! run the terminal-condition checks (doors, then the hour clock).

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animatronics::AiDirector;
use crate::camera::CameraSystem;
use crate::config::GameConfig;
use crate::events::{EventQueue, GameEvent};
use crate::location::{DoorSide, Location};
use crate::power::{ActiveSystems, PowerSystem};

/// Overall night outcome tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Playing,
    /// An animatronic got in; timed sequence before game over
    Jumpscare,
    /// The power died; timed dark sequence before game over
    PowerOut,
    GameOver,
    Victory,
}

/// Discrete player inputs the simulation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    ToggleDoor(DoorSide),
    ToggleLight(DoorSide),
    ToggleCamera,
    SelectCamera(Location),
    RestartNight,
    NextNight,
    Quit,
}

/// All simulation state for the current night.
pub struct GameState {
    config: GameConfig,
    rng: StdRng,

    power: PowerSystem,
    director: AiDirector,
    camera: CameraSystem,

    night_number: u32,
    hour: u32,
    hour_timer: f32,

    left_door_closed: bool,
    right_door_closed: bool,
    left_light_on: bool,
    right_light_on: bool,
    left_light_timer: f32,
    right_light_timer: f32,

    mode: GameMode,
    mode_timer: f32,
    jumpscare_by: Option<String>,

    pub should_quit: bool,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Build with an explicit rng so behavior is reproducible under a seed.
    pub fn from_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let power = PowerSystem::new(&config.power);
        let director = AiDirector::new(&config.roster, &config.timers, &mut rng);
        let night_number = config.night.starting_night;
        Self {
            config,
            rng,
            power,
            director,
            camera: CameraSystem::new(),
            night_number,
            hour: 0,
            hour_timer: 0.0,
            left_door_closed: false,
            right_door_closed: false,
            left_light_on: false,
            right_light_on: false,
            left_light_timer: 0.0,
            right_light_timer: 0.0,
            mode: GameMode::Playing,
            mode_timer: 0.0,
            jumpscare_by: None,
            should_quit: false,
        }
    }

    // --- read-only snapshot for collaborators ---

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn night_number(&self) -> u32 {
        self.night_number
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn power(&self) -> &PowerSystem {
        &self.power
    }

    pub fn director(&self) -> &AiDirector {
        &self.director
    }

    pub fn camera(&self) -> &CameraSystem {
        &self.camera
    }

    pub fn door_closed(&self, side: DoorSide) -> bool {
        match side {
            DoorSide::Left => self.left_door_closed,
            DoorSide::Right => self.right_door_closed,
        }
    }

    pub fn light_on(&self, side: DoorSide) -> bool {
        match side {
            DoorSide::Left => self.left_light_on,
            DoorSide::Right => self.right_light_on,
        }
    }

    /// Who triggered the jumpscare, once one has fired.
    pub fn jumpscare_by(&self) -> Option<&str> {
        self.jumpscare_by.as_deref()
    }

    // --- player input ---

    pub fn handle_action(&mut self, action: PlayerAction, events: &mut EventQueue) {
        match action {
            PlayerAction::Quit => {
                self.should_quit = true;
            }
            PlayerAction::RestartNight => {
                if self.mode == GameMode::GameOver {
                    self.reset_night();
                }
            }
            PlayerAction::NextNight => {
                if self.mode == GameMode::Victory {
                    self.night_number += 1;
                    self.reset_night();
                }
            }
            // Controls only respond while the night is live
            _ if self.mode != GameMode::Playing => {}
            PlayerAction::ToggleDoor(side) => {
                let closed = match side {
                    DoorSide::Left => {
                        self.left_door_closed = !self.left_door_closed;
                        self.left_door_closed
                    }
                    DoorSide::Right => {
                        self.right_door_closed = !self.right_door_closed;
                        self.right_door_closed
                    }
                };
                events.push(GameEvent::DoorToggled { side, closed });
            }
            PlayerAction::ToggleLight(side) => {
                let on = match side {
                    DoorSide::Left => {
                        self.left_light_on = !self.left_light_on;
                        self.left_light_timer = 0.0;
                        self.left_light_on
                    }
                    DoorSide::Right => {
                        self.right_light_on = !self.right_light_on;
                        self.right_light_timer = 0.0;
                        self.right_light_on
                    }
                };
                events.push(GameEvent::LightToggled { side, on });
            }
            PlayerAction::ToggleCamera => {
                if self.camera.is_up() {
                    self.camera.close(events);
                } else {
                    self.camera.open(&self.config.camera, events);
                }
            }
            PlayerAction::SelectCamera(feed) => {
                self.camera.switch(
                    feed,
                    &self.config.camera,
                    &self.config.timers,
                    &mut self.rng,
                    events,
                );
            }
        }
    }

    // --- simulation ---

    pub fn update(&mut self, dt: f32, events: &mut EventQueue) {
        puffin::profile_function!();
        match self.mode {
            GameMode::Playing => self.update_playing(dt, events),
            GameMode::Jumpscare => {
                self.mode_timer += dt;
                if self.mode_timer >= self.config.night.jumpscare_duration {
                    self.mode = GameMode::GameOver;
                }
            }
            GameMode::PowerOut => {
                self.mode_timer += dt;
                if self.mode_timer >= self.config.night.power_out_duration {
                    self.mode = GameMode::GameOver;
                }
            }
            GameMode::GameOver | GameMode::Victory => {}
        }
    }

    fn update_playing(&mut self, dt: f32, events: &mut EventQueue) {
        // Power first: scarcity feeds into aggression this same tick
        let active = self.active_systems();
        self.power.drain(dt, &active, &self.config.power);
        if self.power.is_out() {
            self.enter_power_out(events);
            return;
        }

        self.tick_lights(dt, events);
        self.camera.update(dt);

        let power_pct = self.power.percentage();
        self.director.update(
            dt,
            self.night_number,
            power_pct,
            self.camera.target(),
            &self.config.ai,
            &self.config.timers,
            &mut self.rng,
            events,
        );

        if self.check_doors(events) {
            return;
        }

        self.hour_timer += dt;
        if self.hour_timer >= self.config.night.hour_duration {
            self.hour_timer -= self.config.night.hour_duration;
            self.hour += 1;
            events.push(GameEvent::HourAdvanced { hour: self.hour });
            if self.hour >= self.config.night.total_hours {
                self.mode = GameMode::Victory;
                events.push(GameEvent::NightComplete {
                    night: self.night_number,
                });
            }
        }
    }

    /// The subsystems currently pulling power.
    fn active_systems(&self) -> ActiveSystems {
        ActiveSystems {
            camera_active: self.camera.is_up(),
            left_door_closed: self.left_door_closed,
            right_door_closed: self.right_door_closed,
            left_light_on: self.left_light_on,
            right_light_on: self.right_light_on,
        }
    }

    /// Door lights shut themselves off after their maximum duration.
    fn tick_lights(&mut self, dt: f32, events: &mut EventQueue) {
        let max = self.config.night.light_max_duration;
        if self.left_light_on {
            self.left_light_timer += dt;
            if self.left_light_timer >= max {
                self.left_light_on = false;
                self.left_light_timer = 0.0;
                events.push(GameEvent::LightExpired {
                    side: DoorSide::Left,
                });
            }
        }
        if self.right_light_on {
            self.right_light_timer += dt;
            if self.right_light_timer >= max {
                self.right_light_on = false;
                self.right_light_timer = 0.0;
                events.push(GameEvent::LightExpired {
                    side: DoorSide::Right,
                });
            }
        }
    }

    /// Terminal check: an animatronic at an unblocked door ends the night.
    /// A closed door leaves the character standing there; it never retreats.
    fn check_doors(&mut self, events: &mut EventQueue) -> bool {
        for side in DoorSide::BOTH {
            if let Some(animatronic) = self.director.at_door(side) {
                if !self.door_closed(side) {
                    let name = animatronic.name().to_string();
                    self.jumpscare_by = Some(name.clone());
                    self.mode = GameMode::Jumpscare;
                    self.mode_timer = 0.0;
                    events.push(GameEvent::Jumpscare { name });
                    return true;
                }
            }
        }
        false
    }

    fn enter_power_out(&mut self, events: &mut EventQueue) {
        // Everything electric dies with the budget
        self.left_door_closed = false;
        self.right_door_closed = false;
        self.left_light_on = false;
        self.right_light_on = false;
        self.camera.force_down();
        self.mode = GameMode::PowerOut;
        self.mode_timer = 0.0;
        events.push(GameEvent::PowerOut);
    }

    /// Fresh power, characters and clock for the current night number.
    fn reset_night(&mut self) {
        self.power = PowerSystem::new(&self.config.power);
        self.director.reset(&self.config.timers, &mut self.rng);
        self.camera = CameraSystem::new();
        self.hour = 0;
        self.hour_timer = 0.0;
        self.left_door_closed = false;
        self.right_door_closed = false;
        self.left_light_on = false;
        self.right_light_on = false;
        self.left_light_timer = 0.0;
        self.right_light_timer = 0.0;
        self.mode = GameMode::Playing;
        self.mode_timer = 0.0;
        self.jumpscare_by = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnimatronicConfig, BehaviorConfig};
    use crate::power::PowerStatus;

    fn seeded(config: GameConfig, seed: u64) -> GameState {
        GameState::from_rng(config, StdRng::seed_from_u64(seed))
    }

    /// A single sprinter two steps from the left door, for door tests.
    fn sprinter_config() -> GameConfig {
        let mut config = GameConfig::standard();
        config.roster = vec![AnimatronicConfig {
            name: "sprinter".to_string(),
            path: vec![Location::WestHall, Location::LeftDoor],
            base_aggression: 50.0,
            behavior: BehaviorConfig::PathWalk,
        }];
        config
    }

    fn run_until_at_door(game: &mut GameState, events: &mut EventQueue) {
        for _ in 0..200_000 {
            game.update(0.05, events);
            if game.director().at_door(DoorSide::Left).is_some() {
                return;
            }
            assert_eq!(game.mode(), GameMode::Playing);
        }
        panic!("sprinter never reached the door");
    }

    /// Config with nobody on the floor, for clock/power-only scenarios.
    fn empty_floor_config() -> GameConfig {
        GameConfig {
            roster: Vec::new(),
            ..GameConfig::standard()
        }
    }

    #[test]
    fn test_base_drain_scenario() {
        // Night 1, no subsystems active, 1000 ticks of 0.1s at 0.1/s
        let mut game = seeded(empty_floor_config(), 4);
        let mut events = EventQueue::new();
        for _ in 0..1000 {
            game.update(0.1, &mut events);
        }
        assert!((game.power().percentage() - 90.0).abs() < 1e-2);
        assert_eq!(game.power().status(), PowerStatus::Nominal);
        // 100 seconds in: the clock has rolled past 12 AM
        assert_eq!(game.hour(), 1);
    }

    #[test]
    fn test_closed_door_blocks_jumpscare() {
        let mut game = seeded(sprinter_config(), 7);
        let mut events = EventQueue::new();

        game.handle_action(PlayerAction::ToggleDoor(DoorSide::Left), &mut events);
        run_until_at_door(&mut game, &mut events);

        // Blocked: many more ticks, still playing, character stays put
        for _ in 0..100 {
            game.update(0.05, &mut events);
        }
        assert_eq!(game.mode(), GameMode::Playing);
        assert!(game.director().at_door(DoorSide::Left).is_some());

        // Opening the door gives the character its opening next check
        game.handle_action(PlayerAction::ToggleDoor(DoorSide::Left), &mut events);
        game.update(0.05, &mut events);
        assert_eq!(game.mode(), GameMode::Jumpscare);
        assert_eq!(game.jumpscare_by(), Some("sprinter"));
        assert!(events
            .drain()
            .any(|e| matches!(e, GameEvent::Jumpscare { .. })));
    }

    #[test]
    fn test_open_door_triggers_game_over_sequence() {
        let mut game = seeded(sprinter_config(), 13);
        let mut events = EventQueue::new();
        // Door stays open; reaching it fires the jumpscare on that tick
        for _ in 0..200_000 {
            game.update(0.05, &mut events);
            if game.mode() != GameMode::Playing {
                break;
            }
        }
        assert_eq!(game.mode(), GameMode::Jumpscare);

        // Jumpscare sequence runs its fixed course, then game over
        let duration = game.config().night.jumpscare_duration;
        game.update(duration + 0.01, &mut events);
        assert_eq!(game.mode(), GameMode::GameOver);
    }

    #[test]
    fn test_victory_and_next_night() {
        let mut config = empty_floor_config();
        config.night.hour_duration = 1.0; // fast clock for the test
        let mut game = seeded(config, 2);
        let mut events = EventQueue::new();

        let mut hours_seen = Vec::new();
        for _ in 0..1000 {
            game.update(0.01, &mut events);
            for event in events.drain() {
                if let GameEvent::HourAdvanced { hour } = event {
                    hours_seen.push(hour);
                }
            }
            if game.mode() != GameMode::Playing {
                break;
            }
        }
        assert_eq!(game.mode(), GameMode::Victory);
        assert_eq!(game.hour(), 6);
        assert_eq!(hours_seen, vec![1, 2, 3, 4, 5, 6]);

        game.handle_action(PlayerAction::NextNight, &mut events);
        assert_eq!(game.mode(), GameMode::Playing);
        assert_eq!(game.night_number(), 2);
        assert_eq!(game.hour(), 0);
        assert!((game.power().percentage() - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_restart_keeps_night_number() {
        let mut game = seeded(sprinter_config(), 13);
        let mut events = EventQueue::new();
        for _ in 0..200_000 {
            game.update(0.05, &mut events);
            if game.mode() == GameMode::GameOver {
                break;
            }
        }
        assert_eq!(game.mode(), GameMode::GameOver);

        let night = game.night_number();
        game.handle_action(PlayerAction::RestartNight, &mut events);
        assert_eq!(game.mode(), GameMode::Playing);
        assert_eq!(game.night_number(), night);
        assert_eq!(game.hour(), 0);
        assert!(game.director().at_door(DoorSide::Left).is_none());
    }

    #[test]
    fn test_power_out_sequence() {
        let mut config = GameConfig::standard();
        config.power.max = 0.01; // dies almost immediately
        let mut game = seeded(config, 1);
        let mut events = EventQueue::new();

        game.handle_action(PlayerAction::ToggleDoor(DoorSide::Left), &mut events);
        game.handle_action(PlayerAction::ToggleCamera, &mut events);
        game.update(1.0, &mut events);

        assert_eq!(game.mode(), GameMode::PowerOut);
        assert!(game.power().is_out());
        // Everything electric was forced off
        assert!(!game.door_closed(DoorSide::Left));
        assert!(!game.camera().is_up());
        assert!(events.drain().any(|e| e == GameEvent::PowerOut));

        // Controls are dead during the sequence
        game.handle_action(PlayerAction::ToggleDoor(DoorSide::Right), &mut events);
        assert!(!game.door_closed(DoorSide::Right));

        let duration = game.config().night.power_out_duration;
        game.update(duration + 0.01, &mut events);
        assert_eq!(game.mode(), GameMode::GameOver);
    }

    #[test]
    fn test_lights_expire_on_their_own() {
        let mut game = seeded(GameConfig::standard(), 3);
        let mut events = EventQueue::new();

        game.handle_action(PlayerAction::ToggleLight(DoorSide::Right), &mut events);
        assert!(game.light_on(DoorSide::Right));

        let max = game.config().night.light_max_duration;
        game.update(max + 0.01, &mut events);
        assert!(!game.light_on(DoorSide::Right));
        assert!(events.drain().any(|e| matches!(
            e,
            GameEvent::LightExpired {
                side: DoorSide::Right
            }
        )));
    }

    #[test]
    fn test_controls_ignored_after_victory() {
        let mut config = empty_floor_config();
        config.night.hour_duration = 0.1;
        let mut game = seeded(config, 2);
        let mut events = EventQueue::new();
        for _ in 0..100 {
            game.update(0.05, &mut events);
            if game.mode() == GameMode::Victory {
                break;
            }
        }
        assert_eq!(game.mode(), GameMode::Victory);

        game.handle_action(PlayerAction::ToggleDoor(DoorSide::Left), &mut events);
        assert!(!game.door_closed(DoorSide::Left));
        // Restart is a game-over action, not a victory action
        game.handle_action(PlayerAction::RestartNight, &mut events);
        assert_eq!(game.mode(), GameMode::Victory);
    }
}
