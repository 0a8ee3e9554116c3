use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::info;

use crate::database::{activities_repo, activity_participants_repo, ActivityStore};
use crate::error::{Result, RosterError};
use crate::models::{ActivitiesRow, Activity, Roster};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub activities: usize,
    pub inserted: usize,
    pub skipped: usize,
}

/// Roster persisted in SQLite.
///
/// Activities are never created or removed after seeding, so an existence
/// check followed by a single insert/delete is atomic with respect to other
/// enrollments: the `(activity_name, email)` unique constraint arbitrates
/// concurrent signups.
#[derive(Debug, Clone)]
pub struct SqliteRoster {
    pool: SqlitePool,
}

impl SqliteRoster {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result<()> {
        activities_repo::create_table(&self.pool).await?;
        activity_participants_repo::create_table(&self.pool).await?;
        Ok(())
    }

    /// Inserts every activity that is not stored yet, along with its seed
    /// participants. Activities already present keep their current roster.
    pub async fn seed(&self, roster: &Roster) -> Result<SeedReport> {
        let mut report = SeedReport {
            activities: roster.len(),
            ..Default::default()
        };

        let mut tx = self.pool.begin().await?;
        for (name, activity) in roster {
            let row = ActivitiesRow {
                name: name.clone(),
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                max_participants: activity.max_participants,
            };
            if activities_repo::insert_activity_if_absent(&mut *tx, &row).await? == 0 {
                report.skipped += 1;
                continue;
            }
            for participant in &activity.participants {
                activity_participants_repo::insert_participant(&mut *tx, name, participant)
                    .await?;
            }
            report.inserted += 1;
        }
        tx.commit().await?;

        info!(
            activities = report.activities,
            inserted = report.inserted,
            skipped = report.skipped,
            "roster seeded"
        );
        Ok(report)
    }

    async fn require_activity(&self, activity: &str) -> Result<()> {
        if activities_repo::activity_exists(&self.pool, activity).await? {
            Ok(())
        } else {
            Err(RosterError::not_found(activity))
        }
    }
}

#[async_trait]
impl ActivityStore for SqliteRoster {
    async fn list(&self) -> Result<Roster> {
        let mut tx = self.pool.begin().await?;
        let rows = activities_repo::list_activities(&mut *tx).await?;
        let participants = activity_participants_repo::list_participants(&mut *tx).await?;
        tx.commit().await?;

        let mut roster: Roster = rows
            .into_iter()
            .map(|row| {
                (
                    row.name,
                    Activity {
                        description: row.description,
                        schedule: row.schedule,
                        max_participants: row.max_participants,
                        participants: Vec::new(),
                    },
                )
            })
            .collect();

        for p in participants {
            if let Some(activity) = roster.get_mut(&p.activity_name) {
                activity.participants.push(p.email);
            }
        }
        Ok(roster)
    }

    async fn enroll(&self, activity: &str, participant: &str) -> Result<()> {
        self.require_activity(activity).await?;
        let inserted =
            activity_participants_repo::insert_participant(&self.pool, activity, participant)
                .await?;
        if inserted == 0 {
            return Err(RosterError::already_enrolled(activity, participant));
        }
        Ok(())
    }

    async fn withdraw(&self, activity: &str, participant: &str) -> Result<()> {
        self.require_activity(activity).await?;
        let deleted =
            activity_participants_repo::delete_participant(&self.pool, activity, participant)
                .await?;
        if deleted == 0 {
            return Err(RosterError::not_enrolled(activity, participant));
        }
        Ok(())
    }
}
