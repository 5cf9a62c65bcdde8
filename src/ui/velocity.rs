use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use std::collections::VecDeque;

pub(super) fn draw_velocity_plot(
    ui: &mut egui::Ui,
    xvel: &VecDeque<(f64, f64)>,
    yvel: &VecDeque<(f64, f64)>,
) {
    ui.heading("Velocity");

    if xvel.is_empty() && yvel.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("velocity_plot")
        .height(150.0)
        .show_axes([true, true])
        .include_y(-4.0)
        .include_y(4.0)
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nTick: {:.0}\nVel: {:.2}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            let x_points: PlotPoints = xvel.iter().map(|&(t, v)| [t, v]).collect();
            plot_ui.line(
                Line::new(x_points)
                    .color(egui::Color32::from_rgb(255, 120, 100))
                    .name("x"),
            );

            let y_points: PlotPoints = yvel.iter().map(|&(t, v)| [t, v]).collect();
            plot_ui.line(
                Line::new(y_points)
                    .color(egui::Color32::from_rgb(100, 150, 255))
                    .name("y"),
            );
        });
}
