#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivitiesRow {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
}
