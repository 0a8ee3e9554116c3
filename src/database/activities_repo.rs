use sqlx::{Executor, Sqlite};

use crate::models::ActivitiesRow;

const SQL_CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  name TEXT PRIMARY KEY NOT NULL,
  description TEXT NOT NULL,
  schedule TEXT NOT NULL,
  max_participants INTEGER NOT NULL CHECK (max_participants > 0)
)
"#;

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT
  name,
  description,
  schedule,
  max_participants
FROM activities
ORDER BY rowid ASC
"#;

const SQL_ACTIVITY_EXISTS: &str = r#"
SELECT 1
FROM activities
WHERE name = ?
"#;

const SQL_INSERT_ACTIVITY_IF_ABSENT: &str = r#"
INSERT OR IGNORE INTO activities (
  name,
  description,
  schedule,
  max_participants
) VALUES (?, ?, ?, ?)
"#;

pub async fn create_table<'e, E>(executor: E) -> sqlx::Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(SQL_CREATE_ACTIVITIES).execute(executor).await?;
    Ok(())
}

pub async fn list_activities<'e, E>(executor: E) -> sqlx::Result<Vec<ActivitiesRow>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, ActivitiesRow>(SQL_LIST_ACTIVITIES)
        .fetch_all(executor)
        .await
}

pub async fn activity_exists<'e, E>(executor: E, name: &str) -> sqlx::Result<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query(SQL_ACTIVITY_EXISTS)
        .bind(name)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}

/// Returns 0 when an activity with that name is already stored.
pub async fn insert_activity_if_absent<'e, E>(executor: E, row: &ActivitiesRow) -> sqlx::Result<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let res = sqlx::query(SQL_INSERT_ACTIVITY_IF_ABSENT)
        .bind(&row.name)
        .bind(&row.description)
        .bind(&row.schedule)
        .bind(row.max_participants)
        .execute(executor)
        .await?;
    Ok(res.rows_affected())
}
