pub mod engine;
pub mod overlay;

pub use engine::core::app_setup::create_app;
