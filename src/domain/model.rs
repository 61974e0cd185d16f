use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Input features in the order the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Price,
    Cost,
    UnitsSold,
    Profit,
    Stock,
    Discount,
    ShippingDays,
}

impl Feature {
    pub const COUNT: usize = 7;

    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::Price,
        Feature::Cost,
        Feature::UnitsSold,
        Feature::Profit,
        Feature::Stock,
        Feature::Discount,
        Feature::ShippingDays,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Feature::Price => "price",
            Feature::Cost => "cost",
            Feature::UnitsSold => "units_sold",
            Feature::Profit => "profit",
            Feature::Stock => "stock",
            Feature::Discount => "discount",
            Feature::ShippingDays => "shipping_days",
        }
    }

    /// Name of the HTML form field carrying this feature.
    pub fn form_field(&self) -> &'static str {
        match self {
            Feature::Price => "harga",
            Feature::Cost => "biaya",
            Feature::UnitsSold => "produk_terjual",
            Feature::Profit => "keuntungan",
            Feature::Stock => "stok_barang",
            Feature::Discount => "diskon",
            Feature::ShippingDays => "hari_pengiriman",
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Id, Feature::Price) => "Harga",
            (Locale::Id, Feature::Cost) => "Biaya",
            (Locale::Id, Feature::UnitsSold) => "Produk Terjual",
            (Locale::Id, Feature::Profit) => "Keuntungan",
            (Locale::Id, Feature::Stock) => "Stok Barang",
            (Locale::Id, Feature::Discount) => "Diskon",
            (Locale::Id, Feature::ShippingDays) => "Hari Pengiriman",
            (Locale::En, Feature::Price) => "Price",
            (Locale::En, Feature::Cost) => "Cost",
            (Locale::En, Feature::UnitsSold) => "Units Sold",
            (Locale::En, Feature::Profit) => "Profit",
            (Locale::En, Feature::Stock) => "Stock",
            (Locale::En, Feature::Discount) => "Discount",
            (Locale::En, Feature::ShippingDays) => "Shipping Days",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Language of the rendered explanations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Id,
    En,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Id => "id",
            Locale::En => "en",
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Locale::Id),
            "en" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{}', expected 'id' or 'en'", other)),
        }
    }
}

/// One row of model input, values stored in `Feature::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; Feature::COUNT],
}

impl FeatureVector {
    pub fn new(values: [f64; Feature::COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature as usize]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.iter().copied().zip(self.values.iter().copied())
    }
}

/// Coefficient capability of a trained model, resolved when the model is loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum Coefficients {
    Vector(Vec<f64>),
    /// Multi-output regression, one row per target.
    Matrix(Vec<Vec<f64>>),
    Scalar(f64),
}

impl Coefficients {
    pub fn shape_name(&self) -> &'static str {
        match self {
            Coefficients::Vector(_) => "1-D",
            Coefficients::Matrix(_) => "2-D",
            Coefficients::Scalar(_) => "scalar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Influence {
    StrongPositive,
    Positive,
    Neutral,
    Negative,
    StrongNegative,
}

/// Per-feature explanation sentences, iterated in feature order.
pub type FeatureExplanation = BTreeMap<Feature, String>;

#[derive(Debug, Clone, PartialEq)]
pub enum Explanation {
    PerFeature(FeatureExplanation),
    /// The model exposes no usable coefficients; carries the informational marker.
    Unavailable(String),
}

impl Explanation {
    pub fn for_feature(&self, feature: Feature) -> Option<&str> {
        match self {
            Explanation::PerFeature(map) => map.get(&feature).map(String::as_str),
            Explanation::Unavailable(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureCoefficient {
    pub feature: Feature,
    pub coefficient: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    pub prediction: f64,
    pub coefficients: Vec<FeatureCoefficient>,
    pub explanation: Explanation,
    pub conclusion: String,
}
