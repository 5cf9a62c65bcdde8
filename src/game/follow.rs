//! Party members trailing the leader through a fixed-length history.
//!
//! Each member owns a FIFO of past leader snapshots. Whenever the leader has
//! velocity, one snapshot enters at the back and the oldest leaves at the front
//! to become what the member displays. Ticks without velocity leave everything
//! untouched, so the trail delay is counted in movement ticks, not frames.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::facing::Facing;
use super::render::SpriteId;

/// Leader position and facing at some past tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Facing at that tick.
    pub facing: Facing,
}

impl Snapshot {
    /// A snapshot at `(x, y)` with no facing.
    pub fn neutral(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            facing: Facing::NEUTRAL,
        }
    }
}

/// Fixed-length FIFO of snapshots. Its length never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: VecDeque<Snapshot>,
}

impl History {
    /// Creates a history holding `len` copies of `fill`.
    pub fn filled(len: usize, fill: Snapshot) -> Self {
        let mut entries = VecDeque::with_capacity(len + 1);
        entries.extend(std::iter::repeat_n(fill, len));
        Self { entries }
    }

    /// Number of snapshots held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history holds no snapshots (zero follow delay).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest snapshot, next to be displayed.
    pub fn front(&self) -> Option<&Snapshot> {
        self.entries.front()
    }

    /// Newest snapshot.
    pub fn back(&self) -> Option<&Snapshot> {
        self.entries.back()
    }

    /// Snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }

    /// Appends `snapshot` and removes and returns the oldest entry.
    ///
    /// With an empty history the incoming snapshot is returned as-is.
    pub fn advance(&mut self, snapshot: Snapshot) -> Snapshot {
        self.entries.push_back(snapshot);
        self.entries.pop_front().unwrap_or(snapshot)
    }
}

/// A follower trailing the leader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyMember {
    /// Display name.
    pub name: String,
    /// Sprite sheet used to draw this member.
    pub sprite: SpriteId,
    /// Sprite cell width.
    pub width: f32,
    /// Sprite cell height.
    pub height: f32,
    /// What is drawn this tick.
    pub current: Snapshot,
    history: History,
}

impl PartyMember {
    /// Creates a member whose history is pre-filled with `delay` copies of `start`.
    ///
    /// The pre-fill keeps the member still for the first `delay` movement ticks.
    pub fn new(
        name: impl Into<String>,
        sprite: SpriteId,
        width: f32,
        height: f32,
        delay: usize,
        start: Snapshot,
    ) -> Self {
        Self {
            name: name.into(),
            sprite,
            width,
            height,
            current: start,
            history: History::filled(delay, start),
        }
    }

    /// The member's trail of pending leader snapshots.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Feeds the leader's state for this tick.
    ///
    /// `leader_moved` must be the leader's post-integration velocity check, not
    /// its raw input flag.
    pub fn follow(&mut self, leader: Snapshot, leader_moved: bool) {
        if leader_moved {
            self.current = self.history.advance(leader);
        }
    }
}
