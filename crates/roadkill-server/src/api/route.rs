use actix_web::{Scope, web};

pub fn install_routes() -> Scope {
    web::scope("/install")
        .service(super::install::status)
        .service(super::install::run)
}

pub fn site_routes() -> Scope {
    web::scope("")
        .service(super::health::health)
        .service(super::settings::current)
}
