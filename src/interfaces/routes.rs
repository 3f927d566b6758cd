use actix_web::web;

use crate::handlers::{home::home, json_error::not_found, system::health_check};

mod contact;
mod experiences;
mod json_error;
mod projects;
mod resume;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .service(health_check)
            .configure(experiences::config_routes)
            .configure(projects::config_routes)
            .configure(contact::config_routes)
            .configure(resume::config_routes)
    );

    cfg.configure(json_error::config_routes);
    cfg.default_service(web::to(not_found));
}
