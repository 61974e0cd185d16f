pub mod explain;
pub mod input;
pub mod messages;
pub mod predictor;

pub use crate::domain::model::{
    Coefficients, Explanation, Feature, FeatureVector, Locale, PredictionReport,
};
pub use crate::domain::ports::{ConfigProvider, ModelSource, RegressionModel};
pub use crate::utils::error::Result;
