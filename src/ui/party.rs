use crate::game::follow::PartyMember;
use egui_macroquad::egui;

pub(super) fn draw_party_section(ui: &mut egui::Ui, party: &[PartyMember]) {
    ui.heading("Party");

    if party.is_empty() {
        ui.label("Nobody is following");
        return;
    }

    for member in party {
        ui.collapsing(member.name.as_str(), |ui| {
            ui.label(format!(
                "Shown at: ({:.1}, {:.1})",
                member.current.x, member.current.y
            ));
            ui.label(format!(
                "Facing: ({}, {})",
                member.current.facing.x, member.current.facing.y
            ));
            ui.label(format!("Trail length: {}", member.history().len()));
            if let Some(next) = member.history().front() {
                ui.label(format!("Next: ({:.1}, {:.1})", next.x, next.y));
            }
        });
    }
}
