use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Portfolio Web API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "experiences": "/api/v1/experiences",
            "projects": "/api/v1/projects",
            "contact": "/api/v1/contact",
            "resume": "/api/v1/resume"
        }
    }))
}
