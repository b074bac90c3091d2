use chrono::Utc;
use log::{info, warn};
use uuid::Uuid;

use crate::{
   db::EventStore,
   dto::{AnnouncementUpdatedResponse, CreatedEventResponse, NewEventDto, RsvpDto, RsvpRecordedResponse, UpdateAnnouncementDto},
   errors::MyError,
   models::{Event, PublicEvent, Rsvp, RsvpStatus},
   MAX_ANNOUNCEMENT_LENGTH,
};

use super::crypto;

fn required(field: Option<String>) -> Option<String> {
   field.filter(|v| !v.is_empty())
}

// Length is measured in UTF-16 code units, matching what the browser counter shows.
fn announcement_length(announcement: &str) -> usize {
   announcement.encode_utf16().count()
}

fn validate_announcement(announcement: Option<String>) -> Result<String, MyError> {
   let announcement = announcement.unwrap_or_default();
   if announcement_length(&announcement) > MAX_ANNOUNCEMENT_LENGTH {
      return Err(MyError::bad_request(format!(
         "Announcement exceeds maximum length of {} characters",
         MAX_ANNOUNCEMENT_LENGTH
      )));
   }
   Ok(announcement)
}

pub fn create_invitation_link(event_id: &str) -> String {
   format!("/event.html?id={}", event_id)
}

pub async fn create(dto: NewEventDto, store: &EventStore) -> Result<CreatedEventResponse, MyError> {
   let NewEventDto { title, date, time, location, organizer_name, announcement } = dto;
   let (title, date, time, location, organizer_name) = match (
      required(title),
      required(date),
      required(time),
      required(location),
      required(organizer_name),
   ) {
      (Some(title), Some(date), Some(time), Some(location), Some(organizer_name)) => {
         (title, date, time, location, organizer_name)
      }
      _ => return Err(MyError::bad_request("Missing required fields")),
   };
   let announcement = validate_announcement(announcement)?;

   let organizer_token = crypto::new_organizer_token();
   let event = Event {
      id: Uuid::new_v4().to_string(),
      title,
      date,
      time,
      location,
      organizer_name,
      organizer_token_hash: crypto::get_sha3_256_hash(&organizer_token),
      announcement,
      created_at: Utc::now(),
      rsvps: Vec::new(),
   };
   let event = store.create(event).await;
   let stored = store.count().await;
   info!("event {} created by {} ({} stored)", event.id, event.organizer_name, stored);

   Ok(CreatedEventResponse {
      invite_link: create_invitation_link(&event.id),
      event,
      organizer_token,
   })
}

pub async fn get_by_id(id: &str, store: &EventStore) -> Result<PublicEvent, MyError> {
   store.get_by_id(id).await.ok_or_else(MyError::event_not_found)
}

pub async fn update_announcement(
   id: &str,
   dto: UpdateAnnouncementDto,
   store: &EventStore,
) -> Result<AnnouncementUpdatedResponse, MyError> {
   let UpdateAnnouncementDto { announcement, organizer_token } = dto;
   let res = store
      .modify(id, |event| {
         let authorized = organizer_token
            .as_deref()
            .map_or(false, |token| crypto::verify_token(token, &event.organizer_token_hash));
         if !authorized {
            warn!("rejected announcement update for event {}: bad organizer token", event.id);
            return Err(MyError::not_organizer());
         }
         event.announcement = validate_announcement(announcement)?;
         Ok(event.to_public())
      })
      .await
      .ok_or_else(MyError::event_not_found)?;
   let event = res?;
   info!("announcement updated for event {}", event.id);

   Ok(AnnouncementUpdatedResponse {
      message: "Announcement updated successfully",
      event,
   })
}

pub async fn rsvp(id: &str, dto: RsvpDto, store: &EventStore) -> Result<RsvpRecordedResponse, MyError> {
   let (player_name, status) = match (required(dto.player_name), required(dto.status)) {
      (Some(player_name), Some(status)) => (player_name, status),
      _ => return Err(MyError::bad_request("Missing playerName or status")),
   };
   let status: RsvpStatus = status
      .parse()
      .map_err(|_| MyError::bad_request("Status must be \"going\" or \"not_going\""))?;

   let rsvp = Rsvp {
      player_name,
      status,
      timestamp: Utc::now(),
   };
   let event = store
      .modify(id, |event| {
         event.upsert_rsvp(rsvp.clone());
         event.to_public()
      })
      .await
      .ok_or_else(MyError::event_not_found)?;
   info!("rsvp from {} for event {}: {}", rsvp.player_name, event.id, rsvp.status);

   Ok(RsvpRecordedResponse {
      message: "RSVP recorded successfully",
      rsvp,
      event,
   })
}
