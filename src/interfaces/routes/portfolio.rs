use actix_web::web;

use crate::handlers::{contact, projects, services, skills, social_posts};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .service(
                web::resource("")
                    .route(web::get().to(projects::list_projects))
            )
            .service(
                web::resource("/{project_id}")
                    .route(web::get().to(projects::get_project))
            )
    );

    cfg.service(web::resource("/skills").route(web::get().to(skills::list_skills)));
    cfg.service(web::resource("/services").route(web::get().to(services::list_services)));
    cfg.service(web::resource("/social").route(web::get().to(social_posts::list_social_posts)));
    cfg.service(web::resource("/contact").route(web::post().to(contact::create_contact)));
}
