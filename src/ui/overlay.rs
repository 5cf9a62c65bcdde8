use crate::game::anim;
use crate::game::input::{InputState, Key};
use crate::game::params::Params;
use crate::game::state::GameState;
use egui_macroquad::egui;
use std::collections::VecDeque;

/// Ticks of velocity history kept for the plot.
pub const MAX_HISTORY_POINTS: usize = 300;

/// Overlay visibility and the data it plots.
pub struct OverlayState {
    /// Toggled with F1.
    pub visible: bool,
    /// `(tick, xvel)` pairs, oldest first.
    pub xvel_history: VecDeque<(f64, f64)>,
    /// `(tick, yvel)` pairs, oldest first.
    pub yvel_history: VecDeque<(f64, f64)>,
    /// Ticks the clock discarded so far.
    pub dropped_ticks: u64,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayState {
    pub fn new() -> Self {
        Self {
            visible: false,
            xvel_history: VecDeque::with_capacity(MAX_HISTORY_POINTS),
            yvel_history: VecDeque::with_capacity(MAX_HISTORY_POINTS),
            dropped_ticks: 0,
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Records the leader's velocity after a tick.
    pub fn record_tick(&mut self, state: &GameState) {
        let t = state.ticks as f64;
        self.xvel_history.push_back((t, f64::from(state.leader.xvel)));
        self.yvel_history.push_back((t, f64::from(state.leader.yvel)));

        if self.xvel_history.len() > MAX_HISTORY_POINTS {
            self.xvel_history.pop_front();
        }
        if self.yvel_history.len() > MAX_HISTORY_POINTS {
            self.yvel_history.pop_front();
        }
    }
}

/// Runs the egui frame, adding the debug side panel when visible.
///
/// egui must run every frame, even with nothing to show, before
/// [`process_egui`] draws it.
pub fn draw_overlay(
    overlay: &OverlayState,
    state: &GameState,
    input: &InputState,
    params: &Params,
) {
    egui_macroquad::ui(|egui_ctx| build_overlay(egui_ctx, overlay, state, input, params));
}

/// Adds the overlay widgets to `egui_ctx` for the current frame.
pub fn build_overlay(
    egui_ctx: &egui::Context,
    overlay: &OverlayState,
    state: &GameState,
    input: &InputState,
    params: &Params,
) {
    if !overlay.visible {
        return;
    }

    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
    egui_ctx.set_visuals(visuals);

    egui::SidePanel::right("debug_panel")
        .default_width(280.0)
        .resizable(true)
        .show(egui_ctx, |ui| {
            let leader = &state.leader;
            let gait = params.gait(leader.running);
            let cell = anim::select_cell(leader.facing, leader.anim);

            ui.heading("Leader");
            ui.label(format!("Tick: {}", state.ticks));
            ui.label(format!("Position: ({:.1}, {:.1})", leader.x, leader.y));
            ui.label(format!(
                "Velocity: ({:.2}, {:.2}) / max {:.1}",
                leader.xvel, leader.yvel, gait.max_speed
            ));
            ui.label(format!("Facing: ({}, {})", leader.facing.x, leader.facing.y));
            ui.label(format!("Anim phase: {}", leader.anim));
            ui.label(format!("Cell: col {} row {}", cell.column, cell.row));
            ui.label(if leader.running { "Running" } else { "Walking" });
            let held: Vec<String> = Key::ALL
                .iter()
                .filter(|&&key| input.is_held(key))
                .map(|key| format!("{key:?}"))
                .collect();
            ui.label(format!("Held: {}", held.join(" ")));
            if overlay.dropped_ticks > 0 {
                ui.label(format!("Dropped ticks: {}", overlay.dropped_ticks));
            }

            ui.separator();
            super::velocity::draw_velocity_plot(
                ui,
                &overlay.xvel_history,
                &overlay.yvel_history,
            );

            ui.separator();
            super::party::draw_party_section(ui, &state.party);
        });
}

/// Flushes egui drawing for this frame.
pub fn process_egui() {
    egui_macroquad::draw();
}
