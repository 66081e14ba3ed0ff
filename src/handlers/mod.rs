pub mod health_handler;
pub mod user_handler;

use actix_web::web;

pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use user_handler::{list_users, verify_token};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(verify_token)
        .service(health_check)
        .service(health_check_live)
        .service(health_check_ready);
}
