use crate::domain::model::{Feature, Influence, Locale};

pub fn influence_sentence(locale: Locale, feature: Feature, influence: Influence) -> String {
    let f = feature.label(locale);
    match (locale, influence) {
        (Locale::Id, Influence::StrongPositive) => format!(
            "{} memiliki pengaruh besar terhadap pendapatan dan perlu dioptimalkan.",
            f
        ),
        (Locale::Id, Influence::Positive) => format!(
            "{} memiliki pengaruh positif terhadap pendapatan. Meningkatkan {} akan meningkatkan pendapatan.",
            f, f
        ),
        (Locale::Id, Influence::StrongNegative) => format!(
            "{} memiliki pengaruh besar dan negatif terhadap pendapatan, sehingga harus diminimalkan.",
            f
        ),
        (Locale::Id, Influence::Negative) => format!(
            "{} memiliki pengaruh negatif terhadap pendapatan. Meningkatkan {} akan menurunkan pendapatan.",
            f, f
        ),
        (Locale::Id, Influence::Neutral) => format!(
            "{} tidak memiliki pengaruh signifikan terhadap pendapatan.",
            f
        ),
        (Locale::En, Influence::StrongPositive) => format!(
            "{} has a large influence on revenue and should be optimized.",
            f
        ),
        (Locale::En, Influence::Positive) => format!(
            "{} has a positive influence on revenue. Increasing {} will increase revenue.",
            f, f
        ),
        (Locale::En, Influence::StrongNegative) => format!(
            "{} has a large negative influence on revenue and must be minimized.",
            f
        ),
        (Locale::En, Influence::Negative) => format!(
            "{} has a negative influence on revenue. Increasing {} will decrease revenue.",
            f, f
        ),
        (Locale::En, Influence::Neutral) => {
            format!("{} has no significant influence on revenue.", f)
        }
    }
}

// Trailing space is intentional: the negative sentence is appended directly.
pub fn strongest_positive_sentence(locale: Locale, feature: Feature) -> String {
    let f = feature.label(locale);
    match locale {
        Locale::Id => format!(
            "Faktor yang paling berpengaruh positif terhadap pendapatan adalah {}. Ini harus dioptimalkan untuk meningkatkan pendapatan. ",
            f
        ),
        Locale::En => format!(
            "The factor with the most positive influence on revenue is {}. It should be optimized to increase revenue. ",
            f
        ),
    }
}

pub fn strongest_negative_sentence(locale: Locale, feature: Feature) -> String {
    let f = feature.label(locale);
    match locale {
        Locale::Id => format!(
            "Faktor yang paling berpengaruh negatif terhadap pendapatan adalah {}. Ini harus diminimalkan untuk menghindari penurunan pendapatan.",
            f
        ),
        Locale::En => format!(
            "The factor with the most negative influence on revenue is {}. It should be minimized to avoid a decrease in revenue.",
            f
        ),
    }
}

pub fn no_coefficients(locale: Locale) -> &'static str {
    match locale {
        Locale::Id => "Model tidak memiliki koefisien",
        Locale::En => "The model has no coefficients",
    }
}

pub fn error_prefix(locale: Locale) -> &'static str {
    match locale {
        Locale::Id => "Terjadi kesalahan: ",
        Locale::En => "An error occurred: ",
    }
}

/// Static text used by the HTML views.
pub struct PageText {
    pub title: &'static str,
    pub heading: &'static str,
    pub submit: &'static str,
    pub result_heading: &'static str,
    pub prediction_label: &'static str,
    pub coefficients_heading: &'static str,
    pub feature_column: &'static str,
    pub coefficient_column: &'static str,
    pub explanation_heading: &'static str,
    pub conclusion_heading: &'static str,
    pub back_link: &'static str,
}

pub fn page_text(locale: Locale) -> PageText {
    match locale {
        Locale::Id => PageText {
            title: "Prediksi Pendapatan",
            heading: "Prediksi Pendapatan Furnitur",
            submit: "Prediksi",
            result_heading: "Hasil Prediksi",
            prediction_label: "Prediksi pendapatan",
            coefficients_heading: "Koefisien Model",
            feature_column: "Fitur",
            coefficient_column: "Koefisien",
            explanation_heading: "Penjelasan",
            conclusion_heading: "Kesimpulan",
            back_link: "Kembali",
        },
        Locale::En => PageText {
            title: "Revenue Prediction",
            heading: "Furniture Revenue Prediction",
            submit: "Predict",
            result_heading: "Prediction Result",
            prediction_label: "Predicted revenue",
            coefficients_heading: "Model Coefficients",
            feature_column: "Feature",
            coefficient_column: "Coefficient",
            explanation_heading: "Explanation",
            conclusion_heading: "Conclusion",
            back_link: "Back",
        },
    }
}
