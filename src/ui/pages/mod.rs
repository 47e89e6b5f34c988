pub mod estimate;
pub mod settings;

pub use estimate::EstimatePage;
pub use settings::SettingsPage;
