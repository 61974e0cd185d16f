use crate::adapters::render;
use crate::core::messages;
use crate::core::predictor::PredictionService;
use crate::core::{Explanation, FeatureVector, PredictionReport};
use crate::utils::error::{ErrorCategory, ExplainerError, Result};
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{Form, Json, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use tokio::net::TcpListener;

#[derive(Clone)]
struct AppState {
    service: PredictionService,
}

pub fn router(service: PredictionService) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict_form))
        .route("/api/predict", post(predict_json))
        .with_state(AppState { service })
}

pub async fn serve<F>(listener: TcpListener, service: PredictionService, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Listening on http://{}", addr);
    }
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render::index_page(state.service.locale()))
}

// Failures stay HTTP 200 with a plain-text body; the form page relies on it.
async fn predict_form(
    State(state): State<AppState>,
    form: std::result::Result<Form<HashMap<String, String>>, FormRejection>,
) -> Response {
    let locale = state.service.locale();
    let result = form
        .map_err(|rejection| ExplainerError::invalid_input(rejection.body_text()))
        .and_then(|Form(fields)| state.service.predict_and_explain(&fields));

    match result {
        Ok(report) => Html(render::result_page(&report, locale)).into_response(),
        Err(e) => {
            tracing::warn!("Prediction request failed ({}): {}", e.category().as_str(), e);
            (
                StatusCode::OK,
                format!("{}{}", messages::error_prefix(locale), e),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PredictRequest {
    pub harga: f64,
    pub biaya: f64,
    pub produk_terjual: f64,
    pub keuntungan: f64,
    pub stok_barang: f64,
    pub diskon: f64,
    pub hari_pengiriman: f64,
}

impl From<PredictRequest> for FeatureVector {
    fn from(r: PredictRequest) -> Self {
        FeatureVector::new([
            r.harga,
            r.biaya,
            r.produk_terjual,
            r.keuntungan,
            r.stok_barang,
            r.diskon,
            r.hari_pengiriman,
        ])
    }
}

#[derive(Debug, Serialize)]
pub struct CoefficientView {
    pub feature: &'static str,
    pub label: &'static str,
    pub coefficient: f64,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: f64,
    pub coefficients: Vec<CoefficientView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanations: Option<BTreeMap<&'static str, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation_unavailable: Option<String>,
    pub conclusion: String,
}

impl PredictResponse {
    fn from_report(report: PredictionReport, service: &PredictionService) -> Self {
        let locale = service.locale();
        let coefficients = report
            .coefficients
            .iter()
            .map(|pair| CoefficientView {
                feature: pair.feature.key(),
                label: pair.feature.label(locale),
                coefficient: pair.coefficient,
            })
            .collect();
        let (explanations, explanation_unavailable) = match report.explanation {
            Explanation::PerFeature(map) => (
                Some(
                    map.into_iter()
                        .map(|(feature, sentence)| (feature.key(), sentence))
                        .collect(),
                ),
                None,
            ),
            Explanation::Unavailable(marker) => (None, Some(marker)),
        };

        Self {
            prediction: report.prediction,
            coefficients,
            explanations,
            explanation_unavailable,
            conclusion: report.conclusion,
        }
    }
}

fn error_status(error: &ExplainerError) -> StatusCode {
    match error.category() {
        ErrorCategory::Input => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCategory::Model | ErrorCategory::Configuration | ErrorCategory::System => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn predict_json(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PredictRequest>, JsonRejection>,
) -> Response {
    let result = payload
        .map_err(|rejection| ExplainerError::invalid_input(rejection.body_text()))
        .and_then(|Json(request)| state.service.explain(&FeatureVector::from(request)));

    match result {
        Ok(report) => Json(PredictResponse::from_report(report, &state.service)).into_response(),
        Err(e) => {
            tracing::warn!("API prediction failed ({}): {}", e.category().as_str(), e);
            (
                error_status(&e),
                Json(json!({
                    "error": e.to_string(),
                    "category": e.category().as_str(),
                })),
            )
                .into_response()
        }
    }
}
