use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use prometheus::{Encoder, TextEncoder};
use std::sync::Arc;

use super::Metrics;
use crate::domain::order::{review_order, Catalog, OrderForm, OrderSummary};
use crate::ui::{NumberPolicy, RejectReason, ReviewOutcome, ReviewPage};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub metrics: Arc<Metrics>,
    pub policy: NumberPolicy,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_handler))
        .route("/review", web::post().to(review_handler))
        .route("/api/review", web::post().to(api_review_handler))
        .route("/metrics", web::get().to(metrics_handler))
        .route("/health", web::get().to(health_handler));
}

/// Start the HTTP server hosting the review endpoints
pub async fn start_server(state: AppState, port: u16) -> std::io::Result<()> {
    tracing::info!("🍽️ Starting order review server on http://0.0.0.0:{}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

async fn index_handler() -> impl Responder {
    HttpResponse::Ok().body("👋 Table Order System is alive!")
}

/// Urlencoded order form, fields kept in submission order.
async fn review_handler(
    state: web::Data<AppState>,
    fields: web::Form<Vec<(String, String)>>,
) -> impl Responder {
    let mut page = ReviewPage::new();
    let mut alerts: Vec<String> = Vec::new();

    match page.on_review(&fields, &state.catalog, state.policy, &mut alerts) {
        ReviewOutcome::Rendered(summary) => {
            record_rendered(&state, &summary);
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(page.region().content.clone())
        }
        ReviewOutcome::Rejected(reason, message) => {
            state.metrics.record_rejected(reason.as_str());
            HttpResponse::UnprocessableEntity()
                .content_type("text/plain; charset=utf-8")
                .body(message)
        }
    }
}

async fn api_review_handler(state: web::Data<AppState>, form: web::Json<OrderForm>) -> impl Responder {
    match review_order(&form, &state.catalog) {
        Ok(summary) => {
            record_rendered(&state, &summary);
            HttpResponse::Ok().json(summary)
        }
        Err(e) => {
            let reason = RejectReason::from(&e);
            tracing::info!(reason = reason.as_str(), "Order review rejected: {}", e);
            state.metrics.record_rejected(reason.as_str());
            HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}

fn record_rendered(state: &AppState, summary: &OrderSummary) {
    let misses = summary
        .lines
        .iter()
        .filter(|line| !state.catalog.contains(line.item_id))
        .count();

    tracing::info!(
        table = %summary.table,
        lines = summary.lines.len(),
        items = summary.item_count(),
        subtotal = summary.subtotal,
        "Order summary rendered"
    );
    state.metrics.record_rendered(summary.lines.len(), misses);
}

async fn metrics_handler(state: web::Data<AppState>) -> impl Responder {
    let encoder = TextEncoder::new();
    let metric_families = state.metrics.registry().gather();

    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return HttpResponse::InternalServerError().finish();
    }

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer)
}

async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "table-order"
    }))
}
