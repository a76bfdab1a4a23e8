pub mod overlay;
pub mod render_settings;
