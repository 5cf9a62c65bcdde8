//! Whole-game state and the per-tick pipeline.

use serde::{Deserialize, Serialize};

use super::follow::{PartyMember, Snapshot};
use super::input::InputState;
use super::motion::Leader;
use super::params::Params;
use super::render::{self, Drawable, RenderSurface, SpriteId};

/// Everything that changes from tick to tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The player-controlled character.
    pub leader: Leader,
    /// Followers, nearest to the leader first.
    pub party: Vec<PartyMember>,
    /// Ticks run since creation.
    pub ticks: u64,
}

impl GameState {
    /// Creates the starting state for `params`.
    ///
    /// Member `i` gets a history of `follow_distance * (i + 1)` neutral snapshots
    /// at the start position, so nobody reacts to the first movement ticks.
    pub fn new(params: &Params) -> Self {
        let start = Snapshot::neutral(params.start_x, params.start_y);

        let party = params
            .roster
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let delay = params.history_len(i);
                tracing::debug!(member = %spec.name, delay, "party member created");
                PartyMember::new(
                    spec.name.clone(),
                    SpriteId::Member(i),
                    spec.width,
                    spec.height,
                    delay,
                    start,
                )
            })
            .collect();

        Self {
            leader: Leader::new(params.start_x, params.start_y),
            party,
            ticks: 0,
        }
    }

    /// Runs one update: integrate the leader, then advance every follower.
    pub fn tick(&mut self, input: &InputState, params: &Params) {
        self.leader.step(input, params);

        let moved = self.leader.has_velocity();
        let snapshot = self.leader.snapshot();
        for member in &mut self.party {
            member.follow(snapshot, moved);
        }

        self.ticks += 1;
    }

    /// Drawables for the current state, leader last.
    pub fn draw_list(&self, params: &Params) -> Vec<Drawable> {
        render::build_draw_list(&self.leader, &self.party, params)
    }

    /// Clears `surface` and draws every character in depth order.
    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S, params: &Params) {
        render::composite(surface, self.draw_list(params), self.leader.anim, params);
    }
}
