//! Power budget: a depleting resource consumed by active subsystems.
//!
//! Drain is base rate plus a surcharge per active subsystem. Once the
//! budget hits zero it latches there for the rest of the night.

use crate::config::PowerConfig;
use crate::constants::{POWER_NOMINAL_ABOVE, POWER_WARNING_ABOVE};

/// Which power-hungry subsystems are currently active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveSystems {
    pub camera_active: bool,
    pub left_door_closed: bool,
    pub right_door_closed: bool,
    pub left_light_on: bool,
    pub right_light_on: bool,
}

/// Presentation tier for the power readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerStatus {
    Nominal,
    Warning,
    Critical,
}

/// The night's power budget.
///
/// The balance accumulates in f64: a night is thousands of tiny per-frame
/// drains, and f32 accumulation visibly drifts over that many steps.
pub struct PowerSystem {
    current: f64,
    max: f64,
    is_out: bool,
}

impl PowerSystem {
    pub fn new(config: &PowerConfig) -> Self {
        Self {
            current: config.max as f64,
            max: config.max as f64,
            is_out: false,
        }
    }

    /// Consume `dt` seconds of power at the rate implied by `active`.
    /// No-op once the budget is depleted.
    pub fn drain(&mut self, dt: f32, active: &ActiveSystems, config: &PowerConfig) {
        if self.is_out {
            return;
        }

        let mut rate = config.drain_base as f64;
        if active.camera_active {
            rate += config.drain_camera as f64;
        }
        if active.left_door_closed {
            rate += config.drain_door as f64;
        }
        if active.right_door_closed {
            rate += config.drain_door as f64;
        }
        if active.left_light_on {
            rate += config.drain_light as f64;
        }
        if active.right_light_on {
            rate += config.drain_light as f64;
        }

        self.current -= rate * dt as f64;

        if self.current <= 0.0 {
            self.current = 0.0;
            self.is_out = true;
        }
    }

    /// Remaining power as a percentage of maximum.
    pub fn percentage(&self) -> f32 {
        ((self.current / self.max) * 100.0) as f32
    }

    /// Whether the budget has depleted (irreversible within a night).
    pub fn is_out(&self) -> bool {
        self.is_out
    }

    /// Three-tier readout classification, presentation only.
    pub fn status(&self) -> PowerStatus {
        let pct = self.percentage();
        if pct > POWER_NOMINAL_ABOVE {
            PowerStatus::Nominal
        } else if pct > POWER_WARNING_ABOVE {
            PowerStatus::Warning
        } else {
            PowerStatus::Critical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> PowerConfig {
        PowerConfig::default()
    }

    #[test]
    fn test_base_drain_only() {
        let config = test_config();
        let mut power = PowerSystem::new(&config);
        // 1000 ticks of 0.1s at the 0.1/s base rate
        for _ in 0..1000 {
            power.drain(0.1, &ActiveSystems::default(), &config);
        }
        assert!((power.percentage() - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_surcharges_sum() {
        let config = test_config();
        let mut power = PowerSystem::new(&config);
        let active = ActiveSystems {
            camera_active: true,
            left_door_closed: true,
            right_door_closed: true,
            left_light_on: true,
            right_light_on: true,
        };
        // rate = 0.1 + 0.2 + 0.5*2 + 0.3*2 = 1.9
        power.drain(10.0, &active, &config);
        assert!((power.percentage() - (100.0 - 19.0)).abs() < 1e-3);
    }

    #[test]
    fn test_depletion_latches() {
        let config = test_config();
        let mut power = PowerSystem::new(&config);
        power.drain(10_000.0, &ActiveSystems::default(), &config);
        assert!(power.is_out());
        assert_eq!(power.percentage(), 0.0);

        // Further drains have no effect and the flag never clears
        power.drain(1.0, &ActiveSystems::default(), &config);
        assert!(power.is_out());
        assert_eq!(power.percentage(), 0.0);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let config = test_config();
        let mut power = PowerSystem::new(&config);
        power.drain(0.0, &ActiveSystems::default(), &config);
        assert_eq!(power.percentage(), 100.0);
        assert!(!power.is_out());
    }

    #[test]
    fn test_status_tier_boundaries() {
        let config = test_config();
        let mut power = PowerSystem::new(&config);
        assert_eq!(power.status(), PowerStatus::Nominal);

        // Drain to exactly 50%: the upper tier excludes the boundary
        power.drain(500.0, &ActiveSystems::default(), &config);
        assert!((power.percentage() - 50.0).abs() < 1e-3);
        assert_eq!(power.status(), PowerStatus::Warning);

        // Drain to exactly 25%
        power.drain(250.0, &ActiveSystems::default(), &config);
        assert!((power.percentage() - 25.0).abs() < 1e-3);
        assert_eq!(power.status(), PowerStatus::Critical);
    }
}
