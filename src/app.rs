use crate::canvas::CanvasSurface;
use crate::config::PadConfig;
use crate::panels::settings_panel;

/// We derive Deserialize/Serialize so we can persist the pad settings on shutdown.
/// The drawing itself is never persisted.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct DrawingPadApp {
    config: PadConfig,
    #[serde(skip)]
    canvas: Option<CanvasSurface>,
}

impl Default for DrawingPadApp {
    fn default() -> Self {
        Self {
            config: PadConfig::default(),
            canvas: None,
        }
    }
}

impl DrawingPadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.canvas = Some(CanvasSurface::new(app.config.clone()));
        app
    }

    fn canvas(&mut self) -> &mut CanvasSurface {
        let config = &self.config;
        self.canvas
            .get_or_insert_with(|| CanvasSurface::new(config.clone()))
    }

    /// Replace the settings and hand them to the pad
    pub fn apply_config(&mut self, config: PadConfig) {
        log::info!("Pad settings changed");
        self.config = config.clone();
        self.canvas().set_config(config);
    }
}

impl eframe::App for DrawingPadApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let panel_frame =
            egui::Frame::central_panel(&ctx.style()).fill(egui::Color32::from_gray(243));

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                egui::Frame::default()
                    .fill(egui::Color32::WHITE)
                    .rounding(8.0)
                    .inner_margin(16.0)
                    .show(ui, |ui| {
                        self.canvas().show(ui);
                        ui.add_space(8.0);

                        let mut config = self.config.clone();
                        if settings_panel(ui, &mut config) {
                            self.apply_config(config);
                        }
                    });
            });
    }
}
