use tracing::{error, info, warn};

use crate::database::ActivityStore;
use crate::error::{Result, RosterError};
use crate::models::Activity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub availability: i64,
}

impl ActivityCardView {
    fn from_activity(name: String, activity: Activity) -> Self {
        let availability = activity.availability();
        Self {
            name,
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
            availability,
        }
    }

    pub fn is_over_capacity(&self) -> bool {
        self.availability < 0
    }

    pub fn over_capacity_by(&self) -> i64 {
        -self.availability
    }
}

pub async fn signup(store: &dyn ActivityStore, activity: &str, email: &str) -> Result<String> {
    require_participant(email)?;
    match store.enroll(activity, email).await {
        Ok(()) => {
            info!(activity = %activity, participant = %email, "participant enrolled");
            Ok(format!("Signed up {} for {}", email, activity))
        }
        Err(e) => Err(log_rejection("signup", e)),
    }
}

pub async fn unregister(store: &dyn ActivityStore, activity: &str, email: &str) -> Result<String> {
    require_participant(email)?;
    match store.withdraw(activity, email).await {
        Ok(()) => {
            info!(activity = %activity, participant = %email, "participant withdrawn");
            Ok(format!("Unregistered {} from {}", email, activity))
        }
        Err(e) => Err(log_rejection("unregister", e)),
    }
}

pub async fn load_activity_cards(store: &dyn ActivityStore) -> Result<Vec<ActivityCardView>> {
    let roster = store.list().await?;
    Ok(roster
        .into_iter()
        .map(|(name, activity)| ActivityCardView::from_activity(name, activity))
        .collect())
}

// Identifiers stay opaque; only the empty string is refused.
fn require_participant(email: &str) -> Result<()> {
    if email.is_empty() {
        warn!("rejected empty participant identifier");
        return Err(RosterError::InvalidParticipant);
    }
    Ok(())
}

fn log_rejection(action: &str, e: RosterError) -> RosterError {
    match &e {
        RosterError::Storage(cause) => error!(action, error = %cause, "roster storage failure"),
        other => warn!(action, error = %other, "roster transition rejected"),
    }
    e
}
