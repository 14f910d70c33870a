use eframe::egui;

/// Square icon button used in the pad toolbar
pub struct ToolButton {
    pub icon: &'static str,
    pub tooltip: &'static str,
    pub selected: bool,
    /// Accent fill, used for the download button
    pub primary: bool,
}

impl ToolButton {
    pub fn new(icon: &'static str, tooltip: &'static str) -> Self {
        Self {
            icon,
            tooltip,
            selected: false,
            primary: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(32.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = match (self.primary, self.selected, response.hovered()) {
                (true, _, false) => egui::Color32::from_rgb(59, 130, 246),
                (true, _, true) => egui::Color32::from_rgb(37, 99, 235),
                (false, true, _) => egui::Color32::from_rgb(219, 234, 254),
                (false, false, true) => egui::Color32::from_gray(229),
                (false, false, false) => egui::Color32::from_gray(243),
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.primary {
                egui::Color32::WHITE
            } else if self.selected {
                egui::Color32::from_rgb(37, 99, 235)
            } else {
                egui::Color32::from_gray(75)
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.icon,
                egui::FontId::proportional(20.0),
                text_color,
            );
        }

        response.on_hover_text(self.tooltip)
    }
}
