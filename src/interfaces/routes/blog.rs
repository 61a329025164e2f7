use actix_web::web;

use crate::handlers::{blog_posts, comments};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/blog")
            .service(
                web::resource("")
                    .route(web::get().to(blog_posts::list_blog_posts))
            )
            // registered ahead of the slug catch-all
            .service(
                web::resource("/categories")
                    .route(web::get().to(blog_posts::list_blog_categories))
            )
            .service(
                web::resource("/{slug}")
                    .route(web::get().to(blog_posts::get_blog_post))
            )
    );

    cfg.service(
        web::resource("/comments")
            .route(web::post().to(comments::create_comment))
    );
}
