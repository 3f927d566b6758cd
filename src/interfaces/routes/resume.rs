use actix_web::web;

use crate::handlers::resume;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/resume")
            .service(
                web::resource("")
                    .route(web::get().to(resume::get_resume_document))
            )
            .service(
                web::resource("/download")
                    .route(web::get().to(resume::download_resume))
            )
    );
}
