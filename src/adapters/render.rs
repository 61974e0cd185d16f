use crate::core::messages::{self, PageText};
use crate::core::{Explanation, Feature, Locale, PredictionReport};

fn html_escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

fn page_head(html: &mut String, locale: Locale, text: &PageText) {
    html.push_str(&format!(
        "<!doctype html>\n<html lang=\"{}\">\n<head>\n  <meta charset=\"utf-8\">\n  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        locale.code()
    ));
    html.push_str(&format!("  <title>{}</title>\n", html_escape(text.title)));
    html.push_str(
        "  <style>\n    body { font-family: ui-sans-serif, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 24px auto; max-width: 720px; color: #1d2330; }\n    label { display: block; margin: 10px 0 4px; }\n    input { width: 100%; padding: 6px; box-sizing: border-box; }\n    button { margin-top: 16px; padding: 8px 20px; }\n    table { border-collapse: collapse; width: 100%; }\n    th, td { border: 1px solid #d0d6e2; padding: 6px 10px; text-align: left; }\n    .prediction { font-size: 22px; margin: 12px 0 20px; }\n  </style>\n</head>\n<body>\n",
    );
}

pub fn index_page(locale: Locale) -> String {
    let text = messages::page_text(locale);
    let mut html = String::new();
    page_head(&mut html, locale, &text);

    html.push_str(&format!("<h1>{}</h1>\n", html_escape(text.heading)));
    html.push_str("<form action=\"/predict\" method=\"post\">\n");
    for feature in Feature::ALL {
        html.push_str(&format!(
            "  <label for=\"{field}\">{label}</label>\n  <input type=\"text\" inputmode=\"decimal\" id=\"{field}\" name=\"{field}\" required>\n",
            field = feature.form_field(),
            label = html_escape(feature.label(locale))
        ));
    }
    html.push_str(&format!(
        "  <button type=\"submit\">{}</button>\n</form>\n</body>\n</html>\n",
        html_escape(text.submit)
    ));

    html
}

pub fn result_page(report: &PredictionReport, locale: Locale) -> String {
    let text = messages::page_text(locale);
    let mut html = String::new();
    page_head(&mut html, locale, &text);

    html.push_str(&format!("<h1>{}</h1>\n", html_escape(text.result_heading)));
    html.push_str(&format!(
        "<div class=\"prediction\">{}: <strong>{:.2}</strong></div>\n",
        html_escape(text.prediction_label),
        report.prediction
    ));

    if !report.coefficients.is_empty() {
        html.push_str(&format!(
            "<h2>{}</h2>\n<table>\n<tr><th>{}</th><th>{}</th></tr>\n",
            html_escape(text.coefficients_heading),
            html_escape(text.feature_column),
            html_escape(text.coefficient_column)
        ));
        for pair in &report.coefficients {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                html_escape(pair.feature.label(locale)),
                pair.coefficient
            ));
        }
        html.push_str("</table>\n");
    }

    html.push_str(&format!(
        "<h2>{}</h2>\n",
        html_escape(text.explanation_heading)
    ));
    match &report.explanation {
        Explanation::PerFeature(map) => {
            html.push_str("<ul>\n");
            for (feature, sentence) in map {
                html.push_str(&format!(
                    "<li><strong>{}</strong>: {}</li>\n",
                    html_escape(feature.label(locale)),
                    html_escape(sentence)
                ));
            }
            html.push_str("</ul>\n");
        }
        Explanation::Unavailable(marker) => {
            html.push_str(&format!("<p>{}</p>\n", html_escape(marker)));
        }
    }

    if !report.conclusion.is_empty() {
        html.push_str(&format!(
            "<h2>{}</h2>\n<p>{}</p>\n",
            html_escape(text.conclusion_heading),
            html_escape(&report.conclusion)
        ));
    }

    html.push_str(&format!(
        "<p><a href=\"/\">{}</a></p>\n</body>\n</html>\n",
        html_escape(text.back_link)
    ));

    html
}
