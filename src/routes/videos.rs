use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::ServiceError;
use crate::services::videos::show_video as show_video_service;

#[get("/video/{video_id}")]
pub async fn play_video(
    video_id: web::Path<i32>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_video_service(video_id.into_inner(), repo.get_ref()) {
        Ok(video) => {
            let mut context = base_context(&flash_messages, "feed");
            context.insert("video", &video);
            render_template(&tera, "play_video.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to render playback page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
