use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Activity not found: {activity}")]
    NotFound { activity: String },

    #[error("Student {participant} is already signed up for {activity}")]
    AlreadyEnrolled {
        activity: String,
        participant: String,
    },

    #[error("Student {participant} is not signed up for {activity}")]
    NotEnrolled {
        activity: String,
        participant: String,
    },

    #[error("Participant identifier must not be empty")]
    InvalidParticipant,

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl RosterError {
    pub fn not_found(activity: &str) -> Self {
        Self::NotFound {
            activity: activity.to_string(),
        }
    }

    pub fn already_enrolled(activity: &str, participant: &str) -> Self {
        Self::AlreadyEnrolled {
            activity: activity.to_string(),
            participant: participant.to_string(),
        }
    }

    pub fn not_enrolled(activity: &str, participant: &str) -> Self {
        Self::NotEnrolled {
            activity: activity.to_string(),
            participant: participant.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
