//! Leader movement: input to velocity, friction, speed cap and position.
//!
//! Opposing inputs on one axis are additive and cancel out, both in velocity and
//! in the facing vector. That axis then counts as released and friction applies.

use serde::{Deserialize, Serialize};

use super::facing::Facing;
use super::follow::Snapshot;
use super::input::InputState;
use super::params::Params;

/// The player-controlled entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leader {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position (grows downward).
    pub y: f32,
    /// Horizontal velocity, units per tick.
    pub xvel: f32,
    /// Vertical velocity, units per tick.
    pub yvel: f32,
    /// Facing used for the sprite. Kept from the last moving tick while idle.
    pub facing: Facing,
    /// Walk-cycle phase in `[0, anim_period)`.
    pub anim: u32,
    /// Whether a directional input produced a nonzero input vector this tick.
    pub moving: bool,
    /// Whether the run modifier was held this tick.
    pub running: bool,
}

impl Leader {
    /// Creates a leader at rest.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            xvel: 0.0,
            yvel: 0.0,
            facing: Facing::NEUTRAL,
            anim: 0,
            moving: false,
            running: false,
        }
    }

    /// Whether the leader has velocity on either axis.
    ///
    /// This is what advances follower history. It differs from [`Leader::moving`]:
    /// the leader keeps sliding for a few ticks after input is released.
    pub fn has_velocity(&self) -> bool {
        self.xvel != 0.0 || self.yvel != 0.0
    }

    /// Current position and facing, as recorded into follower history.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            x: self.x,
            y: self.y,
            facing: self.facing,
        }
    }

    /// Advances the leader by one tick.
    pub fn step(&mut self, input: &InputState, params: &Params) {
        let gait = params.gait(input.run);
        self.running = input.run;

        let raw = input_vector(input);
        self.xvel += f32::from(raw.x) * gait.speed;
        self.yvel += f32::from(raw.y) * gait.speed;
        self.moving = !raw.is_neutral();

        if raw.x == 0 {
            self.xvel = apply_friction(self.xvel, params.friction);
        }
        if raw.y == 0 {
            self.yvel = apply_friction(self.yvel, params.friction);
        }

        if self.moving {
            self.facing = raw;
            self.anim = advance_phase(self.anim, gait.anim_speed, params.anim_period);
        } else {
            self.anim = 0;
        }

        self.xvel = clamp_speed(self.xvel, gait.max_speed);
        self.yvel = clamp_speed(self.yvel, gait.max_speed);

        self.x += self.xvel;
        self.y += self.yvel;
    }
}

/// Net direction of the held arrow keys. Opposing keys cancel.
pub fn input_vector(input: &InputState) -> Facing {
    let mut x = 0;
    let mut y = 0;
    if input.up {
        y -= 1;
    }
    if input.down {
        y += 1;
    }
    if input.right {
        x += 1;
    }
    if input.left {
        x -= 1;
    }
    Facing::new(x, y)
}

/// Advances an animation phase by `step`, wrapping at `period`.
pub fn advance_phase(anim: u32, step: u32, period: u32) -> u32 {
    // widened so large configured periods cannot overflow
    ((u64::from(anim) + u64::from(step)) % u64::from(period)) as u32
}

/// Moves `vel` toward zero by `friction`, stopping at zero.
pub fn apply_friction(vel: f32, friction: f32) -> f32 {
    if vel > 0.0 {
        (vel - friction).max(0.0)
    } else if vel < 0.0 {
        (vel + friction).min(0.0)
    } else {
        vel
    }
}

/// Rescales `vel` to `max_speed` if its magnitude exceeds it, keeping the sign.
pub fn clamp_speed(vel: f32, max_speed: f32) -> f32 {
    if vel.abs() > max_speed {
        vel.signum() * max_speed
    } else {
        vel
    }
}
