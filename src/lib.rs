//! # Party - a trailing party on a 2D field
//!
//! A player character walks around a fixed-size surface while a party of
//! followers trails behind, each one replaying the leader's position from a
//! fixed number of movement ticks in the past.
//!
//! ## Features
//!
//! - Arrow-key movement with a run modifier, friction and a speed cap
//! - Follower history buffers, delay measured in movement ticks
//! - Eight-direction sprite sheets with a three-frame walk cycle
//! - Depth-sorted drawing with drop shadows
//! - Fixed 60 Hz update loop
//! - JSON parameter files
//! - egui debug overlay
//!
//! ## Core Modules
//!
//! - [`game::motion`] - Leader movement
//! - [`game::follow`] - Follower history
//! - [`game::anim`] - Sprite cell selection
//! - [`game::render`] - Depth sorting and draw calls
//! - [`game::state`] - Per-tick pipeline

/// Windowing-free game logic.
pub mod game {
    /// Sprite sheet cell selection from facing and walk-cycle phase.
    pub mod anim;
    /// Fixed-rate tick scheduling.
    pub mod clock;
    /// Configuration errors.
    pub mod error;
    /// Facing vectors.
    pub mod facing;
    /// Followers and their history buffers.
    pub mod follow;
    /// Held-key state.
    pub mod input;
    /// Leader movement integration.
    pub mod motion;
    /// Game parameters and party roster.
    pub mod params;
    /// Drawables, depth sorting and the render surface trait.
    ///
    /// The [`render::RenderSurface`] trait is implemented by the macroquad window
    /// surface in [`crate::graphics`] and by recording surfaces in tests.
    pub mod render;
    /// Game state and the tick pipeline.
    pub mod state;
}

/// macroquad bindings: textures, window surface, viewport fitting.
pub mod graphics;

/// egui debug overlay.
pub mod ui;
