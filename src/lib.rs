#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod stroke;
pub mod surface;
pub mod tool;

pub use app::DrawingPadApp;
pub use canvas::CanvasSurface;
pub use config::PadConfig;
pub use controller::DrawingController;
pub use error::{PadError, PadResult};
pub use export::ExportedImage;
pub use history::SnapshotHistory;
pub use input::{InputEvent, InputHandler, InputLocation, PadAction, SurfaceMapping};
pub use stroke::StrokeState;
pub use surface::{DrawingSurface, PixelSurface, Snapshot};
pub use tool::{StrokeStyle, ToolMode};
