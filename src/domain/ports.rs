use crate::domain::model::{Coefficients, FeatureVector, Locale};
use crate::utils::error::Result;
use std::sync::Arc;

pub trait RegressionModel: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64>;

    /// `None` when the model has no coefficient capability at all.
    fn coefficients(&self) -> Option<&Coefficients>;

    fn kind(&self) -> &'static str;
}

pub trait ModelSource: Send + Sync {
    fn load(&self) -> impl std::future::Future<Output = Result<Arc<dyn RegressionModel>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn model_path(&self) -> &str;
    fn locale(&self) -> Locale;
}
