pub mod currency_toggle;
pub mod estimate_panel;
pub mod field_input;
pub mod toast;

pub use currency_toggle::CurrencyToggle;
pub use estimate_panel::EstimatePanel;
pub use field_input::FieldInput;
