use egui::{Color32, Rect, Sense, TextureHandle, TextureOptions, pos2};

use crate::components::ToolButton;
use crate::config::PadConfig;
use crate::controller::DrawingController;
use crate::export::ExportedImage;
use crate::input::{InputHandler, PadAction};
use crate::surface::{DrawingSurface, PixelSurface};
use crate::tool::ToolMode;

/// The pad widget: toolbar, drawing area and the texture mirroring the surface
pub struct CanvasSurface {
    controller: DrawingController<PixelSurface>,
    input: InputHandler,
    texture: Option<TextureHandle>,
    /// Surface version currently uploaded to `texture`
    uploaded_version: Option<u64>,
}

impl CanvasSurface {
    pub fn new(config: PadConfig) -> Self {
        Self {
            controller: DrawingController::new(config),
            input: InputHandler::new(),
            texture: None,
            uploaded_version: None,
        }
    }

    pub fn controller(&self) -> &DrawingController<PixelSurface> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DrawingController<PixelSurface> {
        &mut self.controller
    }

    /// New settings take effect from the next stroke or clear
    pub fn set_config(&mut self, config: PadConfig) {
        self.controller.set_config(config);
    }

    pub fn apply(&mut self, action: PadAction) {
        match action {
            PadAction::ToggleTool => self.controller.toggle_tool(),
            PadAction::Undo => self.controller.undo(),
            PadAction::Clear => self.controller.clear(),
            PadAction::Download => self.download(),
        }
    }

    fn download(&self) {
        match self.controller.export() {
            Ok(Some(image)) => self.deliver(&image),
            Ok(None) => log::warn!("Nothing to export, no surface mounted"),
            Err(err) => log::error!("Export failed: {}", err),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn deliver(&self, image: &ExportedImage) {
        if let Err(err) = image.save_to_dir(&self.controller.config().export_dir) {
            log::error!("Failed to save {}: {}", image.file_name(), err);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn deliver(&self, image: &ExportedImage) {
        if let Err(err) = image.offer_download() {
            log::error!("Failed to download {}: {}", image.file_name(), err);
        }
    }

    /// Size the surface to the area it was first laid out in
    fn mount(&mut self, rect: Rect) {
        let width = rect.width().round().max(0.0) as u32;
        let height = rect.height().round().max(0.0) as u32;
        match PixelSurface::new(width, height, self.controller.config().background) {
            Ok(surface) => {
                self.controller.mount(surface);
                self.uploaded_version = None;
            }
            // Layout has no room yet; try again next frame
            Err(err) => log::warn!("Surface not mounted: {}", err),
        }
    }

    fn toolbar(&self, ui: &mut egui::Ui) -> Vec<PadAction> {
        let mut actions = Vec::new();
        let erasing = self.controller.tool() == ToolMode::Eraser;

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ToolButton::new("💾", "Download").primary().show(ui).clicked() {
                actions.push(PadAction::Download);
            }
            if ToolButton::new("🗑", "Clear").show(ui).clicked() {
                actions.push(PadAction::Clear);
            }
            if ToolButton::new("⟲", "Undo").show(ui).clicked() {
                actions.push(PadAction::Undo);
            }
            let tooltip = if erasing { "Switch to Pen" } else { "Switch to Eraser" };
            if ToolButton::new("⌫", tooltip).selected(erasing).show(ui).clicked() {
                actions.push(PadAction::ToggleTool);
            }
        });

        actions
    }

    /// Re-upload the surface when its pixels changed since the last frame
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let Some(surface) = self.controller.surface() else {
            return;
        };
        let version = surface.version();
        if self.uploaded_version == Some(version) && self.texture.is_some() {
            return;
        }

        let image = surface.to_color_image();
        match &mut self.texture {
            Some(handle) => handle.set(image, TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("drawing_pad_surface", image, TextureOptions::NEAREST));
            }
        }
        self.uploaded_version = Some(version);
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.heading("Drawing Pad");
            actions.extend(self.toolbar(ui));
        });
        ui.add_space(8.0);

        let size = egui::vec2(ui.available_width(), self.controller.config().canvas_height);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        if !self.controller.is_mounted() {
            self.mount(rect);
        }
        self.controller.set_display_rect(rect);

        let events = ui.ctx().input(|i| i.raw.events.clone());
        actions.extend(InputHandler::shortcuts(&events));
        for event in self.input.translate(&events, rect) {
            self.controller.handle_event(&event);
        }
        for action in actions {
            self.apply(action);
        }

        self.sync_texture(ui.ctx());

        let painter = ui.painter_at(rect);
        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        painter.rect_stroke(rect, 8.0, egui::Stroke::new(2.0, Color32::from_gray(229)));

        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    }
}
