use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use aromacraft_core::{Error, SensoryProfile};
use aromacraft_sources::AromaService;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, warn};

/// Pairing results returned when the request gives no limit
pub const DEFAULT_PAIRING_LIMIT: usize = 10;

#[derive(Deserialize)]
struct SimilarityRequest {
    a: String,
    b: String,
}

#[derive(Deserialize)]
struct PairingsRequest {
    base: String,
    candidates: Vec<String>,
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct RecipeSearchRequest {
    ingredients: Vec<String>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(service: Arc<AromaService>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(service.clone()))
                .configure(Self::routes)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    /// Route table, shared by the server and the handler tests
    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/health", web::get().to(health))
            .route("/ingredients/{name}/profile", web::get().to(get_profile))
            .route("/compounds/{id}", web::get().to(get_compound))
            .route("/similarity", web::post().to(similarity))
            .route("/pairings", web::post().to(pairings))
            .route("/recipes/search", web::post().to(search_recipes))
            .route("/recipes/{id}", web::get().to(get_recipe))
            .route("/users/{id}/profile", web::put().to(save_user_profile))
            .route("/users/{id}/history", web::get().to(get_history));
    }
}

/// Map a service error onto a status code with an `{"error": ...}` body
fn error_response(err: Error) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    match err {
        Error::InvalidInput(_) => HttpResponse::BadRequest().json(body),
        Error::Upstream { .. } => {
            warn!("Upstream failure: {}", err);
            HttpResponse::BadGateway().json(body)
        }
        _ => {
            error!("Request failed: {}", err);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

fn not_found(what: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": format!("{} not found", what)
    }))
}

async fn health(service: web::Data<Arc<AromaService>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "mode": service.mode().as_str(),
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

async fn get_profile(
    service: web::Data<Arc<AromaService>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let name = path.into_inner();

    match service.profile(&name).await {
        Ok(profile) => Ok(HttpResponse::Ok().json(profile)),
        Err(e) => Ok(error_response(e)),
    }
}

async fn get_compound(
    service: web::Data<Arc<AromaService>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();

    match service.compound(&id).await {
        Ok(Some(compound)) => Ok(HttpResponse::Ok().json(compound)),
        Ok(None) => Ok(not_found("Compound")),
        Err(e) => Ok(error_response(e)),
    }
}

async fn similarity(
    service: web::Data<Arc<AromaService>>,
    req: web::Json<SimilarityRequest>,
) -> ActixResult<HttpResponse> {
    match service.similarity_between(&req.a, &req.b).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => Ok(error_response(e)),
    }
}

async fn pairings(
    service: web::Data<Arc<AromaService>>,
    req: web::Json<PairingsRequest>,
) -> ActixResult<HttpResponse> {
    let limit = req.limit.unwrap_or(DEFAULT_PAIRING_LIMIT);

    match service.pairings(&req.base, &req.candidates, limit).await {
        Ok(ranked) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "base": req.base,
            "result": ranked
        }))),
        Err(e) => Ok(error_response(e)),
    }
}

async fn search_recipes(
    service: web::Data<Arc<AromaService>>,
    req: web::Json<RecipeSearchRequest>,
) -> ActixResult<HttpResponse> {
    match service.search_recipes(&req.ingredients).await {
        Ok(recipes) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": recipes
        }))),
        Err(e) => Ok(error_response(e)),
    }
}

async fn get_recipe(
    service: web::Data<Arc<AromaService>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();

    match service.recipe(&id).await {
        Ok(Some(recipe)) => Ok(HttpResponse::Ok().json(recipe)),
        Ok(None) => Ok(not_found("Recipe")),
        Err(e) => Ok(error_response(e)),
    }
}

async fn save_user_profile(
    service: web::Data<Arc<AromaService>>,
    path: web::Path<String>,
    req: web::Json<SensoryProfile>,
) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();

    match service.save_user_profile(&user_id, &req).await {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": true
        }))),
        Err(e) => Ok(error_response(e)),
    }
}

async fn get_history(
    service: web::Data<Arc<AromaService>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();

    match service.cooking_history(&user_id).await {
        Ok(history) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": history
        }))),
        Err(e) => Ok(error_response(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Arc::new(AromaService::sample())))
                    .configure(RestApi::routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health_reports_mode() {
        let app = app!();
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["mode"], "sample");
    }

    #[actix_web::test]
    async fn test_profile_endpoint() {
        let app = app!();
        let req = test::TestRequest::get().uri("/ingredients/basil/profile").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["name"], "basil");
        let ids: Vec<&str> = body["molecules"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["mol_001", "mol_002", "mol_003"]);
    }

    #[actix_web::test]
    async fn test_encoded_ingredient_name() {
        let app = app!();
        let req = test::TestRequest::get().uri("/ingredients/olive%20oil/profile").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "olive oil");
        assert_eq!(body["molecules"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_missing_compound_is_404() {
        let app = app!();
        let req = test::TestRequest::get().uri("/compounds/mol_999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_similarity_endpoint() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/similarity")
            .set_json(json!({ "a": "basil", "b": "lemon" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert!((body["score"].as_f64().unwrap() - 0.5).abs() < 1e-6);
        assert_eq!(body["sharedCompounds"], json!(["mol_001", "mol_003"]));
    }

    #[actix_web::test]
    async fn test_blank_name_is_400() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/similarity")
            .set_json(json!({ "a": "basil", "b": "  " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("ingredient name"));
    }

    #[actix_web::test]
    async fn test_pairings_endpoint() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/pairings")
            .set_json(json!({ "base": "basil", "candidates": ["tomato", "lemon", "garlic"], "limit": 2 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let result = body["result"].as_array().unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0]["ingredient"], "lemon");
        assert_eq!(result[1]["ingredient"], "tomato");
    }

    #[actix_web::test]
    async fn test_recipe_search_and_lookup() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/recipes/search")
            .set_json(json!({ "ingredients": ["tomato", "basil", "garlic"] }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["result"][0]["id"], "recipe_001");
        assert_eq!(body["result"][0]["ingredients"], json!(["tomato", "basil", "garlic"]));

        let req = test::TestRequest::get().uri("/recipes/crispy-chicken").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "Texture-Enhanced Crispy Chicken");

        let req = test::TestRequest::get().uri("/recipes/recipe_404").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_empty_search_is_400() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/recipes/search")
            .set_json(json!({ "ingredients": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_user_endpoints() {
        let app = app!();
        let profile = serde_json::to_value(SensoryProfile::default()).unwrap();
        let req = test::TestRequest::put()
            .uri("/users/user_123/profile")
            .set_json(&profile)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let mut too_sweet = profile.clone();
        too_sweet["taste"]["sweet"] = json!(11);
        let req = test::TestRequest::put()
            .uri("/users/user_123/profile")
            .set_json(&too_sweet)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/users/user_123/history").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["result"].as_array().unwrap().len(), 5);
    }

    #[actix_web::test]
    async fn test_error_status_mapping() {
        let cases = [
            (Error::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (Error::upstream("flavordb", "HTTP 503"), StatusCode::BAD_GATEWAY),
            (Error::InvalidConfig("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(error_response(err).status(), status);
        }
    }
}
