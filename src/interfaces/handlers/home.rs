use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Portfolio Content API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/projects",
            "/api/skills",
            "/api/contact",
            "/api/blog",
            "/api/blog/categories",
            "/api/comments",
            "/api/services",
            "/api/social",
            "/api/health"
        ]
    }))
}
