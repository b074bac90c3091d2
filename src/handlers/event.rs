use actix_web::{Responder, web, get, post, put, HttpResponse};
use log::warn;
use crate::{db::EventStore, service, dto::{NewEventDto, RsvpDto, UpdateAnnouncementDto}, errors::MyError};
use super::{body_of, JsonOrForm};

fn log_rejection(route: &str, err: MyError) -> MyError {
   warn!("{} rejected: {}", route, err);
   err
}

#[post("")]
pub async fn create(new_event_dto: JsonOrForm<NewEventDto>, store: web::Data<EventStore>) -> Result<impl Responder, MyError> {
   let created = service::event::create(body_of(new_event_dto), store.get_ref())
      .await
      .map_err(|err| log_rejection("create event", err))?;
   Ok(HttpResponse::Created().json(created))
}

#[get("/{id}")]
pub async fn get_by_id(id: web::Path<String>, store: web::Data<EventStore>) -> Result<impl Responder, MyError> {
   let event = service::event::get_by_id(&id, store.get_ref())
      .await
      .map_err(|err| log_rejection("get event", err))?;
   Ok(HttpResponse::Ok().json(event))
}

#[put("/{id}/announcement")]
pub async fn update_announcement(
   id: web::Path<String>,
   dto: JsonOrForm<UpdateAnnouncementDto>,
   store: web::Data<EventStore>
) -> Result<impl Responder, MyError> {
   let updated = service::event::update_announcement(&id, body_of(dto), store.get_ref())
      .await
      .map_err(|err| log_rejection("update announcement", err))?;
   Ok(HttpResponse::Ok().json(updated))
}

#[post("/{id}/rsvp")]
pub async fn rsvp(
   id: web::Path<String>,
   dto: JsonOrForm<RsvpDto>,
   store: web::Data<EventStore>
) -> Result<impl Responder, MyError> {
   let recorded = service::event::rsvp(&id, body_of(dto), store.get_ref())
      .await
      .map_err(|err| log_rejection("rsvp", err))?;
   Ok(HttpResponse::Ok().json(recorded))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
   cfg.service(create)
      .service(get_by_id)
      .service(update_announcement)
      .service(rsvp);
}
