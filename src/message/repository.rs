use crate::{
    db::DbPool,
    error::{AppError, Result},
    message::models::Message,
};

/// Durable access to the messages table. Constructed once and injected into
/// the service; all reads and writes go through parameterized queries.
#[derive(Clone)]
pub struct MessageRepository {
    pool: DbPool,
}

impl MessageRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Store health check. Any driver failure is reported as
    /// `StorageUnavailable`; the caller decides whether to retry the request.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Message store health check failed");
                AppError::StorageUnavailable
            })?;

        Ok(())
    }

    /// Persists a fully-populated message. The primary key on `id` is the
    /// uniqueness backstop for concurrent senders; a violation surfaces as
    /// `DuplicateId` so the service can regenerate and retry.
    pub async fn insert(&self, message: &Message) -> Result<()> {
        sqlx::query(
            "INSERT INTO messages (id, sender_id, recipient_id, body, sent_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&message.id)
        .bind(message.sender_id)
        .bind(message.recipient_id)
        .bind(&message.body)
        .bind(message.sent_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let unique_violation = e
                .as_database_error()
                .map(|db| matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation))
                .unwrap_or(false);
            if unique_violation {
                AppError::DuplicateId
            } else {
                AppError::from(e)
            }
        })?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Message>> {
        let message = sqlx::query_as::<_, Message>(
            "SELECT id, sender_id, recipient_id, body, sent_at
             FROM messages
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(message)
    }

    pub async fn exists_by_id(&self, id: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE id = ?1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Ids of messages the given sender addressed to the given recipient,
    /// newest first. Strictly directional; the service-level conversation
    /// read uses `find_conversation_ids` instead.
    pub async fn find_sent_ids(&self, sender_id: i64, recipient_id: i64) -> Result<Vec<String>> {
        let ids = sqlx::query_scalar(
            "SELECT id FROM messages
             WHERE sender_id = ?1 AND recipient_id = ?2
             ORDER BY sent_at DESC",
        )
        .bind(sender_id)
        .bind(recipient_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// Ids of all messages exchanged between the two users, in either
    /// direction, newest first.
    pub async fn find_conversation_ids(&self, user_id: i64, other_user_id: i64) -> Result<Vec<String>> {
        let ids = sqlx::query_scalar(
            "SELECT id FROM messages
             WHERE (sender_id = ?1 AND recipient_id = ?2)
                OR (sender_id = ?2 AND recipient_id = ?1)
             ORDER BY sent_at DESC",
        )
        .bind(user_id)
        .bind(other_user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// One message id per distinct recipient the viewer has sent to: the
    /// newest message of each pairing, groups ordered by that last contact,
    /// oldest first.
    pub async fn find_peer_summary_ids(&self, viewer_id: i64) -> Result<Vec<String>> {
        let ids = sqlx::query_scalar(
            "SELECT id FROM (
                 SELECT id, MAX(sent_at) AS last_sent
                 FROM messages
                 WHERE sender_id = ?1
                 GROUP BY recipient_id
             )
             ORDER BY last_sent ASC",
        )
        .bind(viewer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }
}
