use crate::{db::DbPool, error::Result, profile::models::ProfileSummary};

/// Read access to public profile data. The messaging core only consumes
/// profiles; account management lives elsewhere.
#[derive(Clone)]
pub struct ProfileRepository {
    pool: DbPool,
}

impl ProfileRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        first_name: &str,
        last_name: &str,
        user_name: &str,
        avatar: &str,
    ) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO profiles (first_name, last_name, user_name, avatar)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(user_name)
        .bind(avatar)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_summary(&self, profile_id: i64) -> Result<Option<ProfileSummary>> {
        let summary = sqlx::query_as::<_, ProfileSummary>(
            "SELECT first_name, last_name, user_name, avatar
             FROM profiles
             WHERE id = ?1",
        )
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(summary)
    }
}
