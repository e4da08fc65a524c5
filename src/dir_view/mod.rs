use actix_web::{
    error::ErrorInternalServerError,
    get, http::header, post,
    web::{self, Json},
    HttpResponse, Responder, Result,
};
pub mod view_model;
pub mod view_service;
pub mod view_utils;
use self::{view_model::UiEvent, view_service::DirectoryController};

fn see_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

#[get("/")]
pub async fn index(directory: web::Data<DirectoryController>) -> Result<impl Responder> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(directory.render()))
}

/**
 * fetch runs on its own task so a client hanging up cannot cancel it
 */
#[post("/retry")]
pub async fn retry(directory: web::Data<DirectoryController>) -> Result<impl Responder> {
    let directory = directory.get_ref().clone();
    actix_web::rt::spawn(async move { directory.retry().await })
        .await
        .map_err(ErrorInternalServerError)?;
    Ok(see_home())
}

#[post("/members/{id}/view")]
pub async fn view_more(
    directory: web::Data<DirectoryController>,
    path: web::Path<String>,
) -> Result<impl Responder> {
    directory.select(&path.into_inner())?;
    Ok(see_home())
}

#[post("/detail/close")]
pub async fn close_detail(directory: web::Data<DirectoryController>) -> Result<impl Responder> {
    directory.close_detail();
    Ok(see_home())
}

#[get("/state")]
pub async fn state(directory: web::Data<DirectoryController>) -> Result<impl Responder> {
    Ok(Json(directory.snapshot()))
}

#[post("/events")]
pub async fn events(
    directory: web::Data<DirectoryController>,
    event: Json<UiEvent>,
) -> Result<impl Responder> {
    let directory = directory.get_ref().clone();
    let event = event.into_inner();
    let snapshot = actix_web::rt::spawn(async move {
        directory.dispatch(event).await.map(|_| directory.snapshot())
    })
    .await
    .map_err(ErrorInternalServerError)??;
    Ok(Json(snapshot))
}
