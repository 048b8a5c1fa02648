use sqlx::PgPool;

use super::filter::{AttendeeFilter, FilterValue};
use super::types::Attendee;

/// Run the filter as a single parameterized query.
pub async fn find_filtered(pool: &PgPool, filter: &AttendeeFilter) -> Result<Vec<Attendee>, sqlx::Error> {
    let (sql, values) = filter.to_select();
    let mut query = sqlx::query_as::<_, Attendee>(&sql);
    for value in values {
        query = match value {
            FilterValue::Text(s) => query.bind(s),
            FilterValue::Code(c) => query.bind(c),
        };
    }
    query.fetch_all(pool).await
}

/// Fetch every row, then filter in memory.
pub async fn find_matching(pool: &PgPool, filter: &AttendeeFilter) -> Result<Vec<Attendee>, sqlx::Error> {
    let all = sqlx::query_as::<_, Attendee>("SELECT * FROM attendees ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(all.into_iter().filter(|a| filter.matches(a)).collect())
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Attendee>, sqlx::Error> {
    sqlx::query_as::<_, Attendee>("SELECT * FROM attendees WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Delete in one statement. Returns false when no row had that id.
pub async fn delete_by_id(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let deleted: Option<i64> = sqlx::query_scalar("DELETE FROM attendees WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(deleted.is_some())
}
