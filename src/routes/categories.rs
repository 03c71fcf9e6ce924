use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::videos::AddVideoForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::categories::{
    add_video as add_video_service, show_category as show_category_service,
};

#[get("/category/{name}")]
pub async fn show_category(
    name: web::Path<String>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_category_service(&name, repo.get_ref()) {
        Ok((category, rows)) => {
            let mut context = base_context(&flash_messages, "category");
            context.insert("category", &category);
            context.insert("rows", &rows);
            render_template(&tera, "category.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to render category page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/category/{name}")]
pub async fn add_video(
    name: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddVideoForm>,
) -> impl Responder {
    let name = name.into_inner();

    match add_video_service(&name, form, repo.get_ref()) {
        Ok(_) => FlashMessage::success("Video added.").send(),
        Err(ServiceError::NotFound) => return HttpResponse::NotFound().finish(),
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(err) => {
            log::error!("Failed to add video: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect(&format!("/category/{name}"))
}

#[get("/category/{name}/add-form")]
pub async fn add_video_form(
    name: web::Path<String>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_category_service(&name, repo.get_ref()) {
        Ok((category, _)) => {
            let mut context = base_context(&flash_messages, "category");
            context.insert("category", &category);
            render_template(&tera, "partials/add_video_form.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to render add-video form: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/category/{name}/add-link")]
pub async fn add_video_link(
    name: web::Path<String>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_category_service(&name, repo.get_ref()) {
        Ok((category, _)) => {
            let mut context = base_context(&flash_messages, "category");
            context.insert("category", &category);
            render_template(&tera, "partials/add_video_link.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to render add-video link: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
