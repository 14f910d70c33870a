use egui::color_picker::{Alpha, color_edit_button_srgba};
use egui::Slider;

use crate::config::PadConfig;

/// Pen and eraser settings. Returns true when `config` was changed.
pub fn settings_panel(ui: &mut egui::Ui, config: &mut PadConfig) -> bool {
    let mut changed = false;

    egui::CollapsingHeader::new("Settings")
        .id_salt("pad_settings")
        .show(ui, |ui| {
            egui::Grid::new("pad_settings_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Pen color:");
                    changed |=
                        color_edit_button_srgba(ui, &mut config.pen_color, Alpha::Opaque).changed();
                    ui.end_row();

                    ui.label("Pen width:");
                    changed |= ui.add(Slider::new(&mut config.pen_width, 1.0..=50.0)).changed();
                    ui.end_row();

                    ui.label("Eraser width:");
                    changed |= ui
                        .add(Slider::new(&mut config.eraser_width, 1.0..=100.0))
                        .changed();
                    ui.end_row();
                });

            if ui.button("Reset to defaults").clicked() {
                *config = PadConfig::default();
                changed = true;
            }
        });

    changed
}
