use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::ServiceError;
use crate::services::main::show_home as show_home_service;

#[get("/")]
pub async fn home(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_home_service(repo.get_ref()) {
        Ok(rows) => {
            let mut context = base_context(&flash_messages, "home");
            context.insert("rows", &rows);
            render_template(&tera, "home.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to render home page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
