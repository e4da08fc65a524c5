use actix_cors::Cors;
use actix_web::{App, HttpServer, web, http};
use actix_web::middleware::Logger;
use env_logger::Env;
use log::info;
use std::sync::Arc;
use team_directory::dir_config;
use team_directory::dir_detail::detail_service::PageDocument;
use team_directory::dir_member::member_utils::CurlMemberSource;
use team_directory::dir_view::{self, view_service::DirectoryController};


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = dir_config::load_config()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;
    info!("Fetching team members from {}", config.users_url());

    let directory = DirectoryController::new(
        Arc::new(CurlMemberSource::new(config.users_url())),
        PageDocument::default(),
        &config.avatar_fallback_url,
    );

    let startup = directory.clone();
    actix_rt::spawn(async move {
        startup.start().await;
    });

    let allowed_origin = config.allowed_origin.clone();
    let directory = web::Data::new(directory);
    HttpServer::new(move || {
	let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![http::header::ACCEPT])
            .allowed_header(http::header::CONTENT_TYPE)
            .max_age(3600);

        App::new()
             .app_data(directory.clone())
             .wrap(Logger::new("%a %t %r %s %b %{Referer}i %{User-Agent}i %T"))
             .service(dir_view::index)
             .service(dir_view::retry)
             .service(dir_view::view_more)
             .service(dir_view::close_detail)
             .service(
                 web::scope("/api")
                .wrap(cors)
                .service(dir_view::state)
                .service(dir_view::events)
             )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await


}
