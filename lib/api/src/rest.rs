use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use propx_core::{Error, Recommender};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Result count when the caller does not ask for one.
const DEFAULT_LIMIT: usize = 5;

#[derive(Deserialize)]
struct SimilarQuery {
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct NearbyQuery {
    radius_km: f32,
}

#[derive(Serialize)]
struct SimilarResult {
    id: String,
    score: f32,
    /// Score rounded to two decimals, as shown to users.
    display_score: f32,
}

#[derive(Serialize)]
struct NearbyResult {
    id: String,
    meters: f32,
    /// Distance in kilometers rounded to one decimal, as shown to users.
    kms: f32,
}

#[derive(Serialize)]
struct NearbyResponse {
    count: usize,
    results: Vec<NearbyResult>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    properties: usize,
    locations: usize,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(engine: Arc<Recommender>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(engine.clone()))
                .configure(routes)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/healthz", web::get().to(health))
        .route("/properties", web::get().to(list_properties))
        .route("/properties/{id}/similar", web::get().to(similar_properties))
        .route("/locations", web::get().to(list_locations))
        .route("/locations/{name}/nearby", web::get().to(nearby_properties));
}

async fn health(engine: web::Data<Arc<Recommender>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        properties: engine.item_count(),
        locations: engine.location_count(),
    }))
}

async fn list_properties(engine: web::Data<Arc<Recommender>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(engine.catalog().sorted_ids()))
}

async fn list_locations(engine: web::Data<Arc<Recommender>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(engine.distances().sorted_locations()))
}

async fn similar_properties(
    engine: web::Data<Arc<Recommender>>,
    path: web::Path<String>,
    query: web::Query<SimilarQuery>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    match engine.recommend_similar(&id, limit) {
        Ok(items) => {
            let results: Vec<SimilarResult> = items
                .into_iter()
                .map(|item| SimilarResult {
                    display_score: round_to(item.score, 100.0),
                    score: item.score,
                    id: item.id,
                })
                .collect();
            Ok(HttpResponse::Ok().json(results))
        }
        Err(e) => Ok(error_response(e)),
    }
}

async fn nearby_properties(
    engine: web::Data<Arc<Recommender>>,
    path: web::Path<String>,
    query: web::Query<NearbyQuery>,
) -> ActixResult<HttpResponse> {
    let name = path.into_inner();
    // The table is in meters; the query edge speaks kilometers.
    let radius_meters = query.radius_km * 1000.0;

    match engine.find_within_radius(&name, radius_meters) {
        Ok(items) => {
            let results: Vec<NearbyResult> = items
                .into_iter()
                .map(|item| NearbyResult {
                    kms: round_to(item.meters / 1000.0, 10.0),
                    meters: item.meters,
                    id: item.id,
                })
                .collect();
            Ok(HttpResponse::Ok().json(NearbyResponse {
                count: results.len(),
                results,
            }))
        }
        Err(e) => Ok(error_response(e)),
    }
}

fn round_to(value: f32, scale: f32) -> f32 {
    (value * scale).round() / scale
}

fn error_response(error: Error) -> HttpResponse {
    let body = serde_json::json!({ "error": error.to_string() });
    match error {
        Error::ItemNotFound(_) | Error::LocationNotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}
