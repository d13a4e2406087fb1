use async_trait::async_trait;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::{
    error::{AppError, Result},
    message::repository::MessageRepository,
};

const ID_BYTES: usize = 20;

/// Source of message identifiers for the send path.
///
/// The production implementation draws random ids and screens them against
/// the store; substituting another source lets tests present colliding ids
/// at insert time and drive the recovery deterministically.
#[async_trait]
pub trait IdGenerator: Send + Sync {
    async fn generate(&self, repo: &MessageRepository) -> Result<String>;
}

/// Allocates message identifiers: cryptographically random bytes, hex
/// encoded, checked against the store before first use. The existence check
/// keeps the id space clean in the common case; the insert-time uniqueness
/// constraint covers the remaining race between concurrent senders.
#[derive(Clone)]
pub struct MessageIdGenerator {
    max_attempts: u32,
}

impl MessageIdGenerator {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    async fn generate_with<F>(&self, repo: &MessageRepository, mut next: F) -> Result<String>
    where
        F: FnMut() -> String,
    {
        for _ in 0..self.max_attempts {
            let id = next();
            if !repo.exists_by_id(&id).await? {
                return Ok(id);
            }
        }

        tracing::warn!(
            attempts = self.max_attempts,
            "Message id generation produced only collisions"
        );
        Err(AppError::GenerationExhausted)
    }
}

#[async_trait]
impl IdGenerator for MessageIdGenerator {
    async fn generate(&self, repo: &MessageRepository) -> Result<String> {
        self.generate_with(repo, random_id).await
    }
}

/// 20 random bytes as 40 lowercase hex characters.
pub fn random_id() -> String {
    let mut bytes = [0u8; ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
