use crate::domain::model::{Feature, FeatureVector};
use crate::utils::error::{ExplainerError, Result};
use std::collections::HashMap;

pub fn parse_value(feature: Feature, raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        ExplainerError::invalid_input(format!(
            "could not convert string to float: '{}' (field '{}')",
            raw,
            feature.form_field()
        ))
    })
}

/// Reads the seven form fields into a vector; the first missing or
/// unparseable field aborts the whole request.
pub fn parse_form(fields: &HashMap<String, String>) -> Result<FeatureVector> {
    let mut values = [0.0; Feature::COUNT];
    for (slot, feature) in values.iter_mut().zip(Feature::ALL) {
        let raw = fields.get(feature.form_field()).ok_or_else(|| {
            ExplainerError::invalid_input(format!(
                "missing form field '{}'",
                feature.form_field()
            ))
        })?;
        *slot = parse_value(feature, raw)?;
    }
    Ok(FeatureVector::new(values))
}
