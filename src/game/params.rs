use serde::{Deserialize, Serialize};

use super::error::{PartyError, Result};

/// Speed settings for one gait (walking or running).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gait {
    /// Velocity added per tick for each held direction.
    pub speed: f32,
    /// Velocity magnitude cap per axis.
    pub max_speed: f32,
    /// Animation phase advance per moving tick.
    pub anim_speed: u32,
}

/// A follower in the party roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSpec {
    /// Display name, used for logging and the debug overlay.
    pub name: String,
    /// Sprite sheet file, relative to `asset_dir`.
    pub sprite: String,
    /// Width of one sprite sheet cell.
    pub width: f32,
    /// Height of one sprite sheet cell.
    pub height: f32,
}

/// Game parameters, fixed for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Logical surface width everything is drawn into.
    pub game_width: f32,
    /// Logical surface height everything is drawn into.
    pub game_height: f32,
    /// Update rate of the fixed-step loop.
    pub tick_rate: f32,
    /// Maximum ticks run in a single displayed frame before backlog is dropped.
    pub max_catch_up_ticks: u32,
    /// Leader spawn point; also the position of the neutral history snapshots.
    pub start_x: f32,
    /// See `start_x`.
    pub start_y: f32,
    /// Gait used without the run modifier.
    pub walk: Gait,
    /// Gait used while the run modifier is held.
    pub run: Gait,
    /// Velocity removed per tick on an axis with no input.
    pub friction: f32,
    /// Animation phase wraps at this value.
    pub anim_period: u32,
    /// Movement ticks between consecutive party members.
    pub follow_distance: usize,
    /// Leader sprite sheet file, relative to `asset_dir`.
    pub leader_sprite: String,
    /// Width of one leader sprite cell.
    pub leader_width: f32,
    /// Height of one leader sprite cell.
    pub leader_height: f32,
    /// Shadow image file, relative to `asset_dir`.
    pub shadow_sprite: String,
    /// Shadow draw width.
    pub shadow_width: f32,
    /// Shadow draw height.
    pub shadow_height: f32,
    /// Shadow offset from the entity's floored position.
    pub shadow_offset_x: f32,
    /// See `shadow_offset_x`.
    pub shadow_offset_y: f32,
    /// Followers, nearest to the leader first.
    pub roster: Vec<MemberSpec>,
    /// Directory sprite files are loaded from.
    pub asset_dir: String,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            game_width: 640.0,
            game_height: 480.0,
            tick_rate: 60.0,
            max_catch_up_ticks: 5,
            start_x: 0.0,
            start_y: 50.0,
            walk: Gait {
                speed: 2.0,
                max_speed: 2.5,
                anim_speed: 2,
            },
            run: Gait {
                speed: 3.0,
                max_speed: 3.5,
                anim_speed: 3,
            },
            friction: 2.0,
            anim_period: 60,
            follow_distance: 12,
            leader_sprite: "joel.png".to_string(),
            leader_width: 23.0,
            leader_height: 39.0,
            shadow_sprite: "shadow.png".to_string(),
            shadow_width: 16.0,
            shadow_height: 3.0,
            shadow_offset_x: 4.0,
            shadow_offset_y: -2.0,
            roster: vec![
                MemberSpec {
                    name: "Cheryl".to_string(),
                    sprite: "cheryl.png".to_string(),
                    width: 24.0,
                    height: 75.0,
                },
                MemberSpec {
                    name: "Oliver".to_string(),
                    sprite: "oliver.png".to_string(),
                    width: 22.0,
                    height: 43.0,
                },
            ],
            asset_dir: "assets".to_string(),
        }
    }
}

impl Params {
    /// Gait for the current run-modifier state.
    pub fn gait(&self, running: bool) -> Gait {
        if running { self.run } else { self.walk }
    }

    /// History length of the party member at `index` (0 = nearest the leader).
    pub fn history_len(&self, index: usize) -> usize {
        self.follow_distance * (index + 1)
    }

    /// Checks that the parameters describe a runnable game.
    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: f32) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(PartyError::InvalidParams(format!(
                    "{name} must be positive, got {value}"
                )))
            }
        }

        fn non_negative(name: &str, value: f32) -> Result<()> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(PartyError::InvalidParams(format!(
                    "{name} must be zero or more, got {value}"
                )))
            }
        }

        fn finite(name: &str, value: f32) -> Result<()> {
            if value.is_finite() {
                Ok(())
            } else {
                Err(PartyError::InvalidParams(format!(
                    "{name} must be finite, got {value}"
                )))
            }
        }

        positive("game_width", self.game_width)?;
        positive("game_height", self.game_height)?;
        positive("tick_rate", self.tick_rate)?;
        positive("leader_width", self.leader_width)?;
        positive("leader_height", self.leader_height)?;
        non_negative("shadow_width", self.shadow_width)?;
        non_negative("shadow_height", self.shadow_height)?;
        finite("shadow_offset_x", self.shadow_offset_x)?;
        finite("shadow_offset_y", self.shadow_offset_y)?;
        finite("start_x", self.start_x)?;
        finite("start_y", self.start_y)?;
        non_negative("friction", self.friction)?;
        if self.anim_period == 0 {
            return Err(PartyError::InvalidParams(
                "anim_period must be at least 1".to_string(),
            ));
        }
        for (name, gait) in [("walk", self.walk), ("run", self.run)] {
            non_negative(&format!("{name} speed"), gait.speed)?;
            non_negative(&format!("{name} max_speed"), gait.max_speed)?;
            if gait.anim_speed >= self.anim_period {
                return Err(PartyError::InvalidParams(format!(
                    "{name} anim_speed must be below anim_period {}, got {}",
                    self.anim_period, gait.anim_speed
                )));
            }
        }
        if self.follow_distance == 0 {
            return Err(PartyError::InvalidParams(
                "follow_distance must be at least 1".to_string(),
            ));
        }
        for member in &self.roster {
            positive(&format!("{} width", member.name), member.width)?;
            positive(&format!("{} height", member.name), member.height)?;
        }
        Ok(())
    }

    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads and validates parameters from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }
}
