use crate::core::explain;
use crate::core::input;
use crate::core::messages;
use crate::domain::model::{Explanation, FeatureVector, Locale, PredictionReport};
use crate::domain::ports::RegressionModel;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Runs the model on one feature vector and explains its coefficients.
#[derive(Clone)]
pub struct PredictionService {
    model: Arc<dyn RegressionModel>,
    locale: Locale,
}

impl PredictionService {
    pub fn new(model: Arc<dyn RegressionModel>, locale: Locale) -> Self {
        Self { model, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn predict_and_explain(&self, fields: &HashMap<String, String>) -> Result<PredictionReport> {
        let features = input::parse_form(fields)?;
        self.explain(&features)
    }

    pub fn explain(&self, features: &FeatureVector) -> Result<PredictionReport> {
        let prediction = self.model.predict(features)?;

        let row = match self.model.coefficients() {
            None => None,
            Some(coefficients) => match explain::coefficient_row(coefficients) {
                Ok(row) => Some(row),
                Err(e) => {
                    tracing::warn!("Falling back to unexplained prediction: {}", e);
                    None
                }
            },
        };

        let report = match row {
            Some(row) => {
                let pairs = explain::pair_coefficients(row);
                let explanations = explain::explain_features(self.locale, &pairs);
                let conclusion = explain::compose_conclusion(self.locale, &pairs);
                PredictionReport {
                    prediction,
                    coefficients: pairs,
                    explanation: Explanation::PerFeature(explanations),
                    conclusion,
                }
            }
            None => PredictionReport {
                prediction,
                coefficients: Vec::new(),
                explanation: Explanation::Unavailable(
                    messages::no_coefficients(self.locale).to_string(),
                ),
                conclusion: String::new(),
            },
        };

        tracing::debug!(
            "Predicted {} with {} explained coefficients",
            report.prediction,
            report.coefficients.len()
        );

        Ok(report)
    }
}
