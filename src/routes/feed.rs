use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, is_htmx, render_template};
use crate::services::feed::show_feed as show_feed_service;

#[derive(Deserialize)]
struct FeedQueryParams {
    page: Option<i64>,
}

#[get("/feed")]
pub async fn feed(
    req: HttpRequest,
    params: web::Query<FeedQueryParams>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);

    match show_feed_service(page, repo.get_ref()) {
        Ok(paginated) => {
            let mut context = base_context(&flash_messages, "feed");
            context.insert("videos", &paginated.items);
            context.insert("more_videos", &paginated.has_next);
            context.insert("next_page", &paginated.next_page);

            let template = if is_htmx(&req) {
                "partials/feed_results.html"
            } else {
                "feed.html"
            };
            render_template(&tera, template, &context)
        }
        Err(err) => {
            log::error!("Failed to render feed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
