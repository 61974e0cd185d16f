pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::model_store::{ConstantModel, FileModelSource, LinearRegressionModel};
pub use config::AppConfig;
pub use crate::core::predictor::PredictionService;
pub use utils::error::{ExplainerError, Result};
