use crate::core::{Coefficients, FeatureVector, ModelSource, RegressionModel};
use crate::utils::error::{ExplainerError, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    #[default]
    Linear,
    Constant,
}

/// On-disk JSON form of a trained model.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    #[serde(default)]
    pub kind: ModelKind,
    pub intercept: Option<Value>,
    pub coefficients: Option<Value>,
    pub value: Option<f64>,
    pub trained_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionModel {
    intercept: f64,
    coefficients: Coefficients,
}

impl LinearRegressionModel {
    pub fn new(intercept: f64, coefficients: Coefficients) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    fn dot(&self, weights: &[f64], features: &FeatureVector) -> Result<f64> {
        let x = features.as_slice();
        if weights.len() != x.len() {
            return Err(ExplainerError::model_invocation(format!(
                "X has {} features, but the model is expecting {} features as input",
                x.len(),
                weights.len()
            )));
        }
        let sum: f64 = weights.iter().zip(x).map(|(w, v)| w * v).sum();
        Ok(self.intercept + sum)
    }
}

impl RegressionModel for LinearRegressionModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        match &self.coefficients {
            Coefficients::Vector(weights) => self.dot(weights, features),
            Coefficients::Matrix(rows) => {
                let first = rows.first().ok_or_else(|| {
                    ExplainerError::model_invocation("2-D coefficients contain no rows")
                })?;
                self.dot(first, features)
            }
            // broadcast over every feature
            Coefficients::Scalar(weight) => {
                Ok(self.intercept + weight * features.as_slice().iter().sum::<f64>())
            }
        }
    }

    fn coefficients(&self) -> Option<&Coefficients> {
        Some(&self.coefficients)
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}

/// Predicts the same value for every input and has no coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantModel {
    value: f64,
}

impl ConstantModel {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl RegressionModel for ConstantModel {
    fn predict(&self, _features: &FeatureVector) -> Result<f64> {
        Ok(self.value)
    }

    fn coefficients(&self) -> Option<&Coefficients> {
        None
    }

    fn kind(&self) -> &'static str {
        "constant"
    }
}

/// Runs once at model load; an artifact with an unrecognized shape never starts serving.
pub fn coefficients_from_value(value: &Value) -> Result<Coefficients> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(Coefficients::Scalar)
            .ok_or_else(|| shape_error(value)),
        Value::Array(items) => {
            if let Some(row) = number_row(items) {
                return Ok(Coefficients::Vector(row));
            }
            let rows = items
                .iter()
                .map(|item| match item {
                    Value::Array(inner) => number_row(inner),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| shape_error(value))?;
            Ok(Coefficients::Matrix(rows))
        }
        _ => Err(shape_error(value)),
    }
}

fn number_row(items: &[Value]) -> Option<Vec<f64>> {
    items.iter().map(Value::as_f64).collect()
}

fn shape_error(value: &Value) -> ExplainerError {
    let mut rendered = value.to_string();
    if rendered.len() > 80 {
        let mut cut = 77;
        while !rendered.is_char_boundary(cut) {
            cut -= 1;
        }
        rendered.truncate(cut);
        rendered.push_str("...");
    }
    ExplainerError::CoefficientShape {
        message: format!(
            "expected a number, a list of numbers or a list of number lists, got {}",
            rendered
        ),
    }
}

fn intercept_from_value(value: Option<&Value>) -> Result<f64> {
    let invalid = |v: &Value| ExplainerError::ConfigValidationError {
        field: "intercept".to_string(),
        message: format!("expected a number or a list of numbers, got {}", v),
    };
    match value {
        None | Some(Value::Null) => Ok(0.0),
        Some(v @ Value::Number(n)) => n.as_f64().ok_or_else(|| invalid(v)),
        Some(v @ Value::Array(items)) => match number_row(items) {
            Some(row) => Ok(row.first().copied().unwrap_or(0.0)),
            None => Err(invalid(v)),
        },
        Some(v) => Err(invalid(v)),
    }
}

impl ModelArtifact {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn into_model(self) -> Result<Arc<dyn RegressionModel>> {
        match self.kind {
            ModelKind::Linear => {
                let raw = self.coefficients.as_ref().ok_or_else(|| {
                    ExplainerError::MissingConfigError {
                        field: "coefficients".to_string(),
                    }
                })?;
                let coefficients = coefficients_from_value(raw)?;
                let intercept = intercept_from_value(self.intercept.as_ref())?;
                Ok(Arc::new(LinearRegressionModel::new(intercept, coefficients)))
            }
            ModelKind::Constant => {
                let value = self.value.ok_or_else(|| ExplainerError::MissingConfigError {
                    field: "value".to_string(),
                })?;
                Ok(Arc::new(ConstantModel::new(value)))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileModelSource {
    path: PathBuf,
}

impl FileModelSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ModelSource for FileModelSource {
    async fn load(&self) -> Result<Arc<dyn RegressionModel>> {
        tracing::debug!("Reading model artifact from {}", self.path().display());
        let bytes = tokio::fs::read(self.path()).await?;
        let artifact = ModelArtifact::from_slice(&bytes)?;

        if let Some(trained_at) = artifact.trained_at {
            tracing::info!("Model trained at {}", trained_at.to_rfc3339());
        }

        let model = artifact.into_model()?;
        match model.coefficients() {
            Some(coefficients) => tracing::info!(
                "Loaded {} model with {} coefficients",
                model.kind(),
                coefficients.shape_name()
            ),
            None => tracing::info!("Loaded {} model without coefficients", model.kind()),
        }
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn vector() -> FeatureVector {
        FeatureVector::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0])
    }

    #[test]
    fn test_coefficient_shapes_from_json() {
        assert_eq!(
            coefficients_from_value(&json!(2.5)).unwrap(),
            Coefficients::Scalar(2.5)
        );
        assert_eq!(
            coefficients_from_value(&json!([1, 2.5, -3])).unwrap(),
            Coefficients::Vector(vec![1.0, 2.5, -3.0])
        );
        assert_eq!(
            coefficients_from_value(&json!([[1, 2], [3, 4]])).unwrap(),
            Coefficients::Matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]])
        );
    }

    #[test]
    fn test_unrecognized_coefficient_shapes_are_rejected() {
        for bad in [
            json!("text"),
            json!([1, "two"]),
            json!([[[1.0]]]),
            json!({"a": 1}),
            json!(true),
        ] {
            assert!(
                matches!(
                    coefficients_from_value(&bad),
                    Err(ExplainerError::CoefficientShape { .. })
                ),
                "expected shape error for {}",
                bad
            );
        }
    }

    #[test]
    fn test_linear_prediction_is_intercept_plus_dot_product() {
        let model = LinearRegressionModel::new(
            10.0,
            Coefficients::Vector(vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0]),
        );
        assert_eq!(model.predict(&vector()).unwrap(), 10.0 + 1.0 + 14.0);
    }

    #[test]
    fn test_matrix_prediction_uses_first_row() {
        let model = LinearRegressionModel::new(
            0.0,
            Coefficients::Matrix(vec![vec![1.0; 7], vec![100.0; 7]]),
        );
        assert_eq!(model.predict(&vector()).unwrap(), 28.0);
    }

    #[test]
    fn test_scalar_prediction_broadcasts() {
        let model = LinearRegressionModel::new(1.0, Coefficients::Scalar(2.0));
        assert_eq!(model.predict(&vector()).unwrap(), 1.0 + 2.0 * 28.0);
    }

    #[test]
    fn test_length_mismatch_is_model_invocation_error() {
        let model = LinearRegressionModel::new(0.0, Coefficients::Vector(vec![1.0, 2.0]));
        let err = model.predict(&vector()).unwrap_err();
        assert!(matches!(err, ExplainerError::ModelInvocation { .. }));
        assert!(err.to_string().contains("expecting 2 features"));
    }

    #[test]
    fn test_artifact_kinds() {
        let linear = ModelArtifact::from_slice(
            br#"{"intercept": [5.0], "coefficients": [1, 1, 1, 1, 1, 1, 1]}"#,
        )
        .unwrap()
        .into_model()
        .unwrap();
        assert_eq!(linear.kind(), "linear");
        assert_eq!(linear.predict(&vector()).unwrap(), 33.0);

        let constant = ModelArtifact::from_slice(br#"{"kind": "constant", "value": 99.5}"#)
            .unwrap()
            .into_model()
            .unwrap();
        assert_eq!(constant.kind(), "constant");
        assert!(constant.coefficients().is_none());
        assert_eq!(constant.predict(&vector()).unwrap(), 99.5);
    }

    #[test]
    fn test_linear_artifact_requires_coefficients() {
        let result = ModelArtifact::from_slice(br#"{"kind": "linear", "intercept": 3}"#)
            .unwrap()
            .into_model();
        assert!(matches!(
            result,
            Err(ExplainerError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_intercept_is_rejected() {
        let result = ModelArtifact::from_slice(br#"{"intercept": "x", "coefficients": 1}"#)
            .unwrap()
            .into_model();
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_file_model_source_loads_artifact() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let artifact = json!({
            "kind": "linear",
            "intercept": 1200.0,
            "coefficients": [[1500000.0, 500.0, -2000000.0, 0.0, 300.0, -100.0, 10.0]],
            "trained_at": "2024-05-01T00:00:00Z"
        });
        temp_file
            .write_all(artifact.to_string().as_bytes())
            .unwrap();

        let source = FileModelSource::new(temp_file.path());
        assert_eq!(source.path(), temp_file.path());
        let model = source.load().await.unwrap();

        assert!(matches!(
            model.coefficients(),
            Some(Coefficients::Matrix(rows)) if rows.len() == 1
        ));
    }

    #[tokio::test]
    async fn test_file_model_source_missing_file() {
        let source = FileModelSource::new("does/not/exist.json");
        let result = source.load().await;
        assert!(matches!(result, Err(ExplainerError::IoError(_))));
    }
}
