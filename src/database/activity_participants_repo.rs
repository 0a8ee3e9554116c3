use sqlx::{Executor, Sqlite};

use crate::models::ActivityParticipantsRow;

const SQL_CREATE_ACTIVITY_PARTICIPANTS: &str = r#"
CREATE TABLE IF NOT EXISTS activity_participants (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  activity_name TEXT NOT NULL REFERENCES activities (name),
  email TEXT NOT NULL,
  UNIQUE (activity_name, email)
)
"#;

const SQL_LIST_PARTICIPANTS: &str = r#"
SELECT
  id,
  activity_name,
  email
FROM activity_participants
ORDER BY id ASC
"#;

// The unique constraint turns a duplicate signup into a no-op we can count.
const SQL_INSERT_PARTICIPANT: &str = r#"
INSERT OR IGNORE INTO activity_participants (
  activity_name,
  email
) VALUES (?, ?)
"#;

const SQL_DELETE_PARTICIPANT: &str = r#"
DELETE FROM activity_participants
WHERE activity_name = ?
  AND email = ?
"#;

pub async fn create_table<'e, E>(executor: E) -> sqlx::Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(SQL_CREATE_ACTIVITY_PARTICIPANTS)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn list_participants<'e, E>(executor: E) -> sqlx::Result<Vec<ActivityParticipantsRow>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, ActivityParticipantsRow>(SQL_LIST_PARTICIPANTS)
        .fetch_all(executor)
        .await
}

/// Returns 0 when the participant was already enrolled.
pub async fn insert_participant<'e, E>(
    executor: E,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let res = sqlx::query(SQL_INSERT_PARTICIPANT)
        .bind(activity_name)
        .bind(email)
        .execute(executor)
        .await?;
    Ok(res.rows_affected())
}

/// Returns 0 when the participant was not enrolled.
pub async fn delete_participant<'e, E>(
    executor: E,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let res = sqlx::query(SQL_DELETE_PARTICIPANT)
        .bind(activity_name)
        .bind(email)
        .execute(executor)
        .await?;
    Ok(res.rows_affected())
}
