use actix_web::web;

pub mod auth;
pub mod book;
pub mod comment;
pub mod health;
pub mod post;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(web::scope("/health").service(health::health))
            .service(
                web::scope("/auth")
                    .service(auth::signup::signup)
                    .service(auth::login::login)
                    .service(auth::verify_email::verify_email)
                    .service(auth::check_email::check_email)
                    .service(auth::check_nickname::check_nickname)
                    .service(auth::me::me),
            )
            .service(
                web::scope("/books")
                    .service(book::search::search)
                    .service(book::lookup::lookup),
            )
            .service(
                web::scope("/posts")
                    .service(post::create::create)
                    .service(post::list::list)
                    .service(post::get::get_post)
                    .service(post::update::update)
                    .service(post::delete::delete)
                    .service(post::toggle_like::toggle_like)
                    .service(post::upload_images::upload_images)
                    .service(comment::create::create)
                    .service(comment::list::list),
            )
            .service(
                web::scope("/comments")
                    .service(comment::update::update)
                    .service(comment::delete::delete),
            ),
    );
}
