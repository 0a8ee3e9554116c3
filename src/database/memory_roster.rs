use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::ActivityStore;
use crate::error::{Result, RosterError};
use crate::models::{Membership, Roster};

/// In-process roster behind a single lock. Nothing inside the critical
/// sections awaits or does I/O.
#[derive(Debug, Default)]
pub struct MemoryRoster {
    activities: RwLock<Roster>,
}

impl MemoryRoster {
    pub fn new(seed: Roster) -> Self {
        Self {
            activities: RwLock::new(seed),
        }
    }
}

#[async_trait]
impl ActivityStore for MemoryRoster {
    async fn list(&self) -> Result<Roster> {
        Ok(self.activities.read().await.clone())
    }

    async fn enroll(&self, activity: &str, participant: &str) -> Result<()> {
        let mut activities = self.activities.write().await;
        let entry = activities
            .get_mut(activity)
            .ok_or_else(|| RosterError::not_found(activity))?;

        match entry.membership(participant) {
            Membership::Enrolled => Err(RosterError::already_enrolled(activity, participant)),
            Membership::NotEnrolled => {
                entry.participants.push(participant.to_string());
                Ok(())
            }
        }
    }

    async fn withdraw(&self, activity: &str, participant: &str) -> Result<()> {
        let mut activities = self.activities.write().await;
        let entry = activities
            .get_mut(activity)
            .ok_or_else(|| RosterError::not_found(activity))?;

        match entry.membership(participant) {
            Membership::NotEnrolled => Err(RosterError::not_enrolled(activity, participant)),
            Membership::Enrolled => {
                entry.participants.retain(|p| p != participant);
                Ok(())
            }
        }
    }
}
