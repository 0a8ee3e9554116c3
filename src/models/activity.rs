use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Activity name -> record, in seed order.
pub type Roster = IndexMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// Where a participant stands relative to one activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    NotEnrolled,
    Enrolled,
}

impl Activity {
    pub fn membership(&self, participant: &str) -> Membership {
        if self.participants.iter().any(|p| p == participant) {
            Membership::Enrolled
        } else {
            Membership::NotEnrolled
        }
    }

    /// Capacity minus current enrollment. Negative when over-enrolled,
    /// since signups never check capacity.
    pub fn availability(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}
