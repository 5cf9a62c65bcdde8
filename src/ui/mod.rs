// UI module - egui debug overlay drawn over the game

mod overlay;
mod party;
mod velocity;

// Re-export the public interface
pub use overlay::{MAX_HISTORY_POINTS, OverlayState, build_overlay, draw_overlay, process_egui};
