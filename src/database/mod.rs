use std::sync::Arc;

use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use tracing::info;

use crate::error::Result;
use crate::models::Roster;

pub mod activities_repo;
pub mod activity_participants_repo;
pub mod memory_roster;
pub mod sqlite_roster;

pub use memory_roster::MemoryRoster;
pub use sqlite_roster::SqliteRoster;

/// Authoritative roster of activities and their participants.
///
/// `enroll` and `withdraw` are atomic check-then-mutate operations: two
/// concurrent calls for the same (activity, participant) pair never both
/// succeed. Capacity is not checked.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Owned snapshot of every activity, including current participants.
    async fn list(&self) -> Result<Roster>;

    /// Fails with `NotFound` for an unknown activity and `AlreadyEnrolled`
    /// if the participant is already on the roster.
    async fn enroll(&self, activity: &str, participant: &str) -> Result<()>;

    /// Fails with `NotFound` for an unknown activity and `NotEnrolled` if
    /// the participant is not on the roster.
    async fn withdraw(&self, activity: &str, participant: &str) -> Result<()>;
}

/// Builds the process-wide store: SQLite when `database_url` is given,
/// otherwise an in-memory roster holding `seed`.
pub async fn open_store(database_url: Option<&str>, seed: Roster) -> Result<Arc<dyn ActivityStore>> {
    let Some(url) = database_url else {
        info!(activities = seed.len(), "using in-memory roster");
        return Ok(Arc::new(MemoryRoster::new(seed)));
    };

    info!("using sqlite roster at {}", url);
    let pool = SqlitePoolOptions::new().connect(url).await?;
    let store = SqliteRoster::new(pool);
    store.ensure_schema().await?;
    store.seed(&seed).await?;
    Ok(Arc::new(store))
}
