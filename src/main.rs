use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use tera::Tera;

use video_collector::db::establish_connection_pool;
use video_collector::models::config::ServerConfig;
use video_collector::repository::DieselRepository;
use video_collector::routes::categories::{
    add_video, add_video_form, add_video_link, show_category,
};
use video_collector::routes::feed::feed;
use video_collector::routes::main::home;
use video_collector::routes::search::search;
use video_collector::routes::videos::play_video;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings = config::Config::builder()
        .set_default("database_url", "videocollector.db")
        .map_err(std::io::Error::other)?
        .set_default("bind_address", "127.0.0.1:8080")
        .map_err(std::io::Error::other)?
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .map_err(std::io::Error::other)?;
    let server_config: ServerConfig = settings
        .try_deserialize()
        .map_err(std::io::Error::other)?;
    server_config.check_secret().map_err(std::io::Error::other)?;

    let pool =
        establish_connection_pool(&server_config.database_url).map_err(std::io::Error::other)?;
    let repo = DieselRepository::new(pool);

    let tera = Tera::new("templates/**/*.html").map_err(std::io::Error::other)?;

    let message_store =
        CookieMessageStore::builder(Key::derive_from(server_config.secret.as_bytes())).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let bind_address = server_config.bind_address.clone();
    log::info!("Starting video collector on {bind_address}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(message_framework.clone())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tera.clone()))
            .service(home)
            .service(feed)
            .service(search)
            .service(play_video)
            .service(add_video_form)
            .service(add_video_link)
            .service(show_category)
            .service(add_video)
            .service(Files::new("/static", "./static"))
    })
    .bind(bind_address)?
    .run()
    .await
}
