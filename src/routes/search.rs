use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, is_htmx, render_template};
use crate::services::search::show_search as show_search_service;

#[derive(Deserialize)]
struct SearchQueryParams {
    search_text: Option<String>,
}

#[get("/search")]
pub async fn search(
    req: HttpRequest,
    params: web::Query<SearchQueryParams>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let search_text = params.into_inner().search_text.unwrap_or_default();

    match show_search_service(&search_text, repo.get_ref()) {
        Ok(videos) => {
            let mut context = base_context(&flash_messages, "search");
            context.insert("search_text", &search_text);
            context.insert("videos", &videos);

            let template = if is_htmx(&req) {
                "partials/search_results.html"
            } else {
                "search.html"
            };
            render_template(&tera, template, &context)
        }
        Err(err) => {
            log::error!("Failed to render search results: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
