pub mod predict;

pub use predict::{PredictionClient, PredictionService};
