use egui::Rect;

use crate::config::PadConfig;
use crate::error::PadResult;
use crate::export::ExportedImage;
use crate::history::SnapshotHistory;
use crate::input::{InputEvent, SurfaceMapping};
use crate::stroke::StrokeState;
use crate::surface::DrawingSurface;
use crate::tool::{StrokeStyle, ToolMode};

/// Drawing state for one mounted surface: tool, in-progress stroke and
/// undo history.
///
/// Every operation is a silent no-op while no surface is mounted.
pub struct DrawingController<S: DrawingSurface> {
    surface: Option<S>,
    config: PadConfig,
    tool: ToolMode,
    style: StrokeStyle,
    stroke: StrokeState,
    history: SnapshotHistory,
    /// Where the surface is currently displayed, in viewport coordinates
    display_rect: Option<Rect>,
}

impl<S: DrawingSurface> DrawingController<S> {
    pub fn new(config: PadConfig) -> Self {
        let style = StrokeStyle::new(config.pen_color, config.base_width);
        Self {
            surface: None,
            config,
            tool: ToolMode::default(),
            style,
            stroke: StrokeState::new(),
            history: SnapshotHistory::new(),
            display_rect: None,
        }
    }

    /// Attach a surface, resetting stroke defaults and history
    pub fn mount(&mut self, surface: S) {
        let [width, height] = surface.size();
        log::info!("Mounted {}x{} drawing surface", width, height);
        self.surface = Some(surface);
        self.style = StrokeStyle::new(self.config.pen_color, self.config.base_width);
        self.stroke.end();
        self.history.clear();
    }

    /// Detach the surface; its history goes with it
    pub fn unmount(&mut self) -> Option<S> {
        self.stroke.end();
        self.history.clear();
        self.display_rect = None;
        self.surface.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Record where the surface is shown so events can be scaled into it
    pub fn set_display_rect(&mut self, rect: Rect) {
        self.display_rect = Some(rect);
    }

    fn mapping(&self) -> Option<SurfaceMapping> {
        let surface = self.surface.as_ref()?;
        let display = self.display_rect?;
        Some(SurfaceMapping::new(display, surface.size()))
    }

    pub fn begin_stroke(&mut self, event: &InputEvent) {
        let Some(point) = self.mapping().and_then(|m| m.resolve_event(event)) else {
            return;
        };
        let Some(surface) = self.surface.as_ref() else {
            return;
        };

        self.stroke.begin(point);
        self.style = self.tool.style(&self.config);
        self.history.capture(surface.snapshot());
    }

    pub fn continue_stroke(&mut self, event: &InputEvent) {
        if !self.stroke.is_active() {
            return;
        }
        let Some(point) = self.mapping().and_then(|m| m.resolve_event(event)) else {
            return;
        };
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        if let Some(last) = self.stroke.advance(point) {
            surface.stroke_segment(last, point, self.style);
        }
    }

    pub fn end_stroke(&mut self) {
        self.stroke.end();
    }

    /// Route a canvas input event to the matching stroke operation
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { .. } | InputEvent::TouchStart { .. } => {
                self.begin_stroke(event)
            }
            InputEvent::PointerMove { .. } | InputEvent::TouchMove { .. } => {
                self.continue_stroke(event)
            }
            InputEvent::PointerUp | InputEvent::PointerLeave | InputEvent::TouchEnd => {
                self.end_stroke()
            }
        }
    }

    /// Erase to the background. The pixels from before the clear are kept
    /// in history so the clear can be undone.
    pub fn clear(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        self.history.capture(surface.snapshot());
        surface.fill(self.config.background);
        log::info!("Surface cleared");
    }

    pub fn undo(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if let Some(snapshot) = self.history.step_back() {
            surface.restore(snapshot);
        }
    }

    /// Encode the surface as PNG under the configured file name.
    ///
    /// Returns `Ok(None)` while no surface is mounted.
    pub fn export(&self) -> PadResult<Option<ExportedImage>> {
        let Some(surface) = self.surface.as_ref() else {
            return Ok(None);
        };
        let png = surface.encode_png()?;
        Ok(Some(ExportedImage::new(self.config.export_file_name.clone(), png)))
    }

    /// Flip pen and eraser. Takes effect at the next stroke.
    pub fn toggle_tool(&mut self) {
        self.set_tool(self.tool.toggled());
    }

    pub fn set_tool(&mut self, tool: ToolMode) {
        if self.tool != tool {
            log::info!("Tool changed: {} -> {}", self.tool.name(), tool.name());
        }
        self.tool = tool;
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    /// Style applied to the stroke in progress (or the last one)
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_active()
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    /// Replace the settings. Applies from the next stroke or clear.
    pub fn set_config(&mut self, config: PadConfig) {
        self.config = config;
    }
}
