use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::{seed_catalog, Activity};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadyEnrolled,

    #[error("Participant not found")]
    ParticipantNotFound,
}

impl RosterError {
    pub fn status(&self) -> http::StatusCode {
        match self {
            RosterError::ActivityNotFound => http::StatusCode::NOT_FOUND,
            RosterError::AlreadyEnrolled => http::StatusCode::BAD_REQUEST,
            RosterError::ParticipantNotFound => http::StatusCode::NOT_FOUND,
        }
    }
}

/// Shared in-memory catalog. The whole map sits behind one RwLock so that
/// two concurrent signups with the same email can't both see "absent" and
/// both insert. Operations are single fast mutations; the lock is never
/// held across an await point.
pub struct RosterStore {
    activities: RwLock<HashMap<String, Activity>>,
}

impl RosterStore {
    pub fn new(catalog: HashMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(catalog),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }

    /// Snapshot of the full catalog, participants included.
    pub fn list_activities(&self) -> HashMap<String, Activity> {
        self.activities
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Append `email` to the activity's roster. Duplicate emails within one
    /// activity are rejected; the same email may join other activities.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.write().unwrap_or_else(|e| e.into_inner());
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RosterError::AlreadyEnrolled);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the activity's roster.
    pub fn remove_participant(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.write().unwrap_or_else(|e| e.into_inner());
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        let pos = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RosterError::ParticipantNotFound)?;

        activity.participants.remove(pos);
        Ok(())
    }
}
