pub mod activities;
pub mod activity;
pub mod activity_participants;

pub use activities::ActivitiesRow;
pub use activity::{Activity, Membership, Roster};
pub use activity_participants::ActivityParticipantsRow;
