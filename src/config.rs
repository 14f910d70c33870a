use egui::Color32;

/// User-tunable pad settings.
///
/// Persisted through eframe storage between runs. Drawings themselves never are.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PadConfig {
    pub pen_color: Color32,
    pub pen_width: f32,
    pub eraser_color: Color32,
    pub eraser_width: f32,
    /// Line width applied when the surface is mounted, before any tool is used
    pub base_width: f32,
    /// Fill used for a fresh surface and by clear
    pub background: Color32,
    /// Height of the drawing area in points; width follows the container
    pub canvas_height: f32,
    pub export_file_name: String,
    /// Where native builds write exported images
    pub export_dir: std::path::PathBuf,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            pen_color: Color32::BLACK,
            pen_width: 2.0,
            eraser_color: Color32::WHITE,
            eraser_width: 20.0,
            base_width: 2.0,
            background: Color32::WHITE,
            canvas_height: 400.0,
            export_file_name: "drawing.png".to_owned(),
            export_dir: std::path::PathBuf::from("."),
        }
    }
}
