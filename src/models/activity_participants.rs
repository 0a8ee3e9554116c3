// One enrollment; `id` keeps signup order.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityParticipantsRow {
    pub id: i64,
    pub activity_name: String,
    pub email: String,
}
