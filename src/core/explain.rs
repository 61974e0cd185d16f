use crate::core::messages;
use crate::domain::model::{
    Coefficients, Feature, FeatureCoefficient, FeatureExplanation, Influence, Locale,
};
use crate::utils::error::{ExplainerError, Result};

/// Magnitude above which a coefficient counts as a large influence.
pub const LARGE_INFLUENCE: f64 = 1_000_000.0;

pub fn classify(coefficient: f64) -> Influence {
    if coefficient > 0.0 {
        if coefficient > LARGE_INFLUENCE {
            Influence::StrongPositive
        } else {
            Influence::Positive
        }
    } else if coefficient < 0.0 {
        if coefficient < -LARGE_INFLUENCE {
            Influence::StrongNegative
        } else {
            Influence::Negative
        }
    } else {
        // zero and NaN
        Influence::Neutral
    }
}

/// The coefficient sequence used for explanations: row 0 of a matrix, a
/// vector as-is, or a scalar as a one-element sequence.
pub fn coefficient_row(coefficients: &Coefficients) -> Result<&[f64]> {
    match coefficients {
        Coefficients::Vector(values) => Ok(values.as_slice()),
        Coefficients::Matrix(rows) => rows
            .first()
            .map(Vec::as_slice)
            .ok_or_else(|| ExplainerError::CoefficientShape {
                message: "2-D coefficients contain no rows".to_string(),
            }),
        Coefficients::Scalar(value) => Ok(std::slice::from_ref(value)),
    }
}

/// Pairs features with coefficients by position; only the overlapping prefix survives.
pub fn pair_coefficients(row: &[f64]) -> Vec<FeatureCoefficient> {
    Feature::ALL
        .iter()
        .zip(row.iter())
        .map(|(&feature, &coefficient)| FeatureCoefficient {
            feature,
            coefficient,
        })
        .collect()
}

pub fn explain_features(locale: Locale, pairs: &[FeatureCoefficient]) -> FeatureExplanation {
    let mut explanations = FeatureExplanation::new();
    for pair in pairs {
        let sentence =
            messages::influence_sentence(locale, pair.feature, classify(pair.coefficient));
        explanations.insert(pair.feature, sentence);
    }
    explanations
}

/// Pair with the greatest coefficient, where non-positive coefficients rank as
/// negative infinity. Ties keep the earliest pair, so when nothing is positive
/// the first pair is returned.
pub fn strongest_positive(pairs: &[FeatureCoefficient]) -> Option<FeatureCoefficient> {
    let rank = |c: f64| if c > 0.0 { c } else { f64::NEG_INFINITY };
    let mut iter = pairs.iter().copied();
    let mut best = iter.next()?;
    for pair in iter {
        if rank(pair.coefficient) > rank(best.coefficient) {
            best = pair;
        }
    }
    Some(best)
}

/// Mirror of [`strongest_positive`]: non-negative coefficients rank as positive infinity.
pub fn strongest_negative(pairs: &[FeatureCoefficient]) -> Option<FeatureCoefficient> {
    let rank = |c: f64| if c < 0.0 { c } else { f64::INFINITY };
    let mut iter = pairs.iter().copied();
    let mut best = iter.next()?;
    for pair in iter {
        if rank(pair.coefficient) < rank(best.coefficient) {
            best = pair;
        }
    }
    Some(best)
}

pub fn compose_conclusion(locale: Locale, pairs: &[FeatureCoefficient]) -> String {
    let mut conclusion = String::new();

    if let Some(top) = strongest_positive(pairs) {
        if top.coefficient > 0.0 {
            conclusion.push_str(&messages::strongest_positive_sentence(locale, top.feature));
        }
    }

    if let Some(bottom) = strongest_negative(pairs) {
        if bottom.coefficient < 0.0 {
            conclusion.push_str(&messages::strongest_negative_sentence(
                locale,
                bottom.feature,
            ));
        }
    }

    conclusion
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(values: &[f64]) -> Vec<FeatureCoefficient> {
        pair_coefficients(values)
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(1_500_000.0), Influence::StrongPositive);
        assert_eq!(classify(1_000_000.0), Influence::Positive);
        assert_eq!(classify(0.0001), Influence::Positive);
        assert_eq!(classify(0.0), Influence::Neutral);
        assert_eq!(classify(-0.0), Influence::Neutral);
        assert_eq!(classify(-1_000_000.0), Influence::Negative);
        assert_eq!(classify(-1_000_000.5), Influence::StrongNegative);
        assert_eq!(classify(f64::NAN), Influence::Neutral);
    }

    #[test]
    fn test_coefficient_row_shapes() {
        let vector = Coefficients::Vector(vec![1.0, 2.0]);
        assert_eq!(coefficient_row(&vector).unwrap(), &[1.0, 2.0]);

        let matrix = Coefficients::Matrix(vec![vec![3.0, 4.0], vec![5.0, 6.0]]);
        assert_eq!(coefficient_row(&matrix).unwrap(), &[3.0, 4.0]);

        let scalar = Coefficients::Scalar(7.5);
        assert_eq!(coefficient_row(&scalar).unwrap(), &[7.5]);

        let empty = Coefficients::Matrix(vec![]);
        assert!(matches!(
            coefficient_row(&empty),
            Err(ExplainerError::CoefficientShape { .. })
        ));
    }

    #[test]
    fn test_pairing_truncates_to_shorter_side() {
        assert_eq!(pairs(&[1.0, 2.0, 3.0]).len(), 3);
        assert_eq!(pairs(&[1.0; 9]).len(), Feature::COUNT);
        assert_eq!(pairs(&[1.0, 2.0, 3.0])[2].feature, Feature::UnitsSold);
    }

    #[test]
    fn test_extremes_pick_largest_magnitudes() {
        let p = pairs(&[1_500_000.0, 500.0, -2_000_000.0, 0.0, 300.0, -100.0, 10.0]);
        assert_eq!(strongest_positive(&p).unwrap().feature, Feature::Price);
        assert_eq!(strongest_negative(&p).unwrap().feature, Feature::UnitsSold);
    }

    #[test]
    fn test_extremes_tie_break_keeps_first_pair() {
        let all_non_positive = pairs(&[0.0, -5.0, -1.0, 0.0, -3.0, 0.0, -2.0]);
        let top = strongest_positive(&all_non_positive).unwrap();
        assert_eq!(top.feature, Feature::Price);

        let all_non_negative = pairs(&[4.0, 0.0, 2.0, 9.0, 0.0, 1.0, 3.0]);
        let bottom = strongest_negative(&all_non_negative).unwrap();
        assert_eq!(bottom.feature, Feature::Price);

        let equal = pairs(&[2.0, 5.0, 5.0]);
        assert_eq!(strongest_positive(&equal).unwrap().feature, Feature::Cost);
    }

    #[test]
    fn test_extremes_on_empty_input() {
        assert!(strongest_positive(&[]).is_none());
        assert!(strongest_negative(&[]).is_none());
        assert_eq!(compose_conclusion(Locale::Id, &[]), "");
    }

    #[test]
    fn test_conclusion_only_positive() {
        let p = pairs(&[0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let conclusion = compose_conclusion(Locale::En, &p);
        assert_eq!(
            conclusion,
            "The factor with the most positive influence on revenue is Cost. It should be optimized to increase revenue. "
        );
    }

    #[test]
    fn test_conclusion_only_negative() {
        let p = pairs(&[0.0, 0.0, 0.0, 0.0, 0.0, -4.0, 0.0]);
        let conclusion = compose_conclusion(Locale::Id, &p);
        assert_eq!(
            conclusion,
            "Faktor yang paling berpengaruh negatif terhadap pendapatan adalah Diskon. Ini harus diminimalkan untuk menghindari penurunan pendapatan."
        );
    }

    #[test]
    fn test_explain_features_keys_each_pair() {
        let p = pairs(&[1.0, -1.0]);
        let explanations = explain_features(Locale::En, &p);
        assert_eq!(explanations.len(), 2);
        assert!(explanations[&Feature::Price].starts_with("Price has a positive"));
        assert!(explanations[&Feature::Cost].starts_with("Cost has a negative"));
    }
}
