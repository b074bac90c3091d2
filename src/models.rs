use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    Going,
    NotGoing,
}

impl FromStr for RsvpStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "going" => Ok(RsvpStatus::Going),
            "not_going" => Ok(RsvpStatus::NotGoing),
            _ => Err(()),
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RsvpStatus::Going => write!(f, "going"),
            RsvpStatus::NotGoing => write!(f, "not_going"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub player_name: String,
    pub status: RsvpStatus,
    pub timestamp: DateTime<Utc>,
}

/// Stored event record. Holds the digest of the organizer token, so it is
/// never serialized directly; clients get a [`PublicEvent`].
#[derive(Debug, Clone)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub organizer_name: String,
    pub organizer_token_hash: String,
    pub announcement: String,
    pub created_at: DateTime<Utc>,
    pub rsvps: Vec<Rsvp>,
}

impl Event {
    /// Replaces the RSVP with the same player name in place, or appends it.
    pub fn upsert_rsvp(&mut self, rsvp: Rsvp) {
        match self
            .rsvps
            .iter_mut()
            .find(|r| r.player_name == rsvp.player_name)
        {
            Some(existing) => *existing = rsvp,
            None => self.rsvps.push(rsvp),
        }
    }

    pub fn to_public(&self) -> PublicEvent {
        PublicEvent::from(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicEvent {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub organizer_name: String,
    pub announcement: String,
    pub created_at: DateTime<Utc>,
    pub rsvps: Vec<Rsvp>,
}

impl From<&Event> for PublicEvent {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            location: event.location.clone(),
            organizer_name: event.organizer_name.clone(),
            announcement: event.announcement.clone(),
            created_at: event.created_at,
            rsvps: event.rsvps.clone(),
        }
    }
}
