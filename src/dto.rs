use serde::{Deserialize, Serialize};

use crate::models::{PublicEvent, Rsvp};

// Request fields are optional so that a missing field reaches validation
// and gets the same error as an empty one.

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewEventDto {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub organizer_name: Option<String>,
    pub announcement: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnouncementDto {
    pub announcement: Option<String>,
    pub organizer_token: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RsvpDto {
    pub player_name: Option<String>,
    pub status: Option<String>,
}

/// Returned once, to the creator. The only payload that carries the token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEventResponse {
    pub event: PublicEvent,
    pub organizer_token: String,
    pub invite_link: String,
}

#[derive(Debug, Serialize)]
pub struct AnnouncementUpdatedResponse {
    pub message: &'static str,
    pub event: PublicEvent,
}

#[derive(Debug, Serialize)]
pub struct RsvpRecordedResponse {
    pub message: &'static str,
    pub rsvp: Rsvp,
    pub event: PublicEvent,
}
