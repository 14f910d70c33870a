mod settings_panel;

pub use settings_panel::settings_panel;
