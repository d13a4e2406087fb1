use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, ErrorList, Result},
    message::dto::SendMessageRequest,
    message::id::IdGenerator,
    message::models::{ConversationPayload, Message, MessageView},
    message::repository::MessageRepository,
    message::sanitize,
    profile::{PeerProfile, ProfileRepository},
};

/// Orchestrates the messaging operations: validates inputs, allocates ids,
/// writes through the repository and shapes viewer-facing payloads.
#[derive(Clone)]
pub struct MessageService {
    repo: MessageRepository,
    profiles: ProfileRepository,
    id_gen: Arc<dyn IdGenerator>,
    default_avatar: String,
}

impl MessageService {
    pub fn new(
        repo: MessageRepository,
        profiles: ProfileRepository,
        id_gen: impl IdGenerator + 'static,
        default_avatar: String,
    ) -> Self {
        Self {
            repo,
            profiles,
            id_gen: Arc::new(id_gen),
            default_avatar,
        }
    }

    /// Creates a message from `sender_id` to the requested recipient and
    /// returns it as the sender would see it.
    ///
    /// Validation runs in groups: the identity group blocks the body group,
    /// and only a fully valid request reaches the store. Nothing is persisted
    /// on any failure path.
    pub async fn send_message(
        &self,
        sender_id: i64,
        payload: SendMessageRequest,
    ) -> Result<MessageView, ErrorList> {
        self.repo.ping().await?;

        let mut errors = ErrorList::new();
        if sender_id == 0 || payload.recipient_id == 0 {
            errors.push(AppError::InvalidIdentity);
            return Err(errors);
        }

        let body = payload.body.trim();
        if payload.validate().is_err() || body.is_empty() {
            errors.push(AppError::EmptyBody);
            return Err(errors);
        }
        let body = sanitize::escape_markup(body);

        let message = Message {
            id: self.id_gen.generate(&self.repo).await?,
            sender_id,
            recipient_id: payload.recipient_id,
            body,
            sent_at: Utc::now(),
        };

        let id = match self.repo.insert(&message).await {
            Ok(()) => message.id,
            // Lost the generate-then-insert race against a concurrent sender:
            // regenerate once, then give up as exhausted.
            Err(AppError::DuplicateId) => {
                tracing::warn!(id = %message.id, "Message id collided at insert, regenerating");
                let retry = Message {
                    id: self.id_gen.generate(&self.repo).await?,
                    ..message
                };
                self.repo.insert(&retry).await.map_err(|e| match e {
                    AppError::DuplicateId => AppError::GenerationExhausted,
                    other => other,
                })?;
                retry.id
            }
            Err(other) => return Err(other.into()),
        };

        tracing::debug!(id = %id, sender_id, "Message persisted");
        Ok(self.resolve_view(&id, sender_id).await?)
    }

    /// All messages exchanged between the viewer and one peer, newest first,
    /// together with the peer's public profile.
    pub async fn get_conversation(
        &self,
        viewer_id: i64,
        peer_id: i64,
    ) -> Result<ConversationPayload, ErrorList> {
        self.repo.ping().await?;

        if viewer_id == 0 || peer_id == 0 {
            return Err(AppError::InvalidIdentity.into());
        }

        let summary = self
            .profiles
            .find_summary(peer_id)
            .await
            .map_err(ErrorList::from)?
            .ok_or_else(|| ErrorList::from(AppError::NotFound(format!("profile {peer_id}"))))?;
        let peer = PeerProfile::from_summary(summary, &self.default_avatar);

        let ids = self.repo.find_conversation_ids(viewer_id, peer_id).await?;
        let mut messages = Vec::with_capacity(ids.len());
        for id in &ids {
            messages.push(self.resolve_view(id, viewer_id).await?);
        }

        Ok(ConversationPayload { peer, messages })
    }

    /// One message per distinct peer the viewer has sent to, for the message
    /// list overview. Groups are ordered by last contact, oldest first.
    pub async fn get_peer_summaries(&self, viewer_id: i64) -> Result<Vec<MessageView>, ErrorList> {
        self.repo.ping().await?;

        if viewer_id == 0 {
            return Err(AppError::InvalidIdentity.into());
        }

        let ids = self.repo.find_peer_summary_ids(viewer_id).await?;
        let mut views = Vec::with_capacity(ids.len());
        for id in &ids {
            views.push(self.resolve_view(id, viewer_id).await?);
        }

        Ok(views)
    }

    /// Direct lookup of a single message, formatted for the viewer.
    pub async fn fetch_message(&self, id: &str, viewer_id: i64) -> Result<MessageView> {
        self.repo
            .find_by_id(id)
            .await?
            .map(|message| MessageView::of(message, viewer_id))
            .ok_or_else(|| AppError::NotFound(format!("message {id}")))
    }

    /// Resolves an id that came out of a just-executed store query. A miss
    /// here is a race or corruption, not a routine not-found.
    async fn resolve_view(&self, id: &str, viewer_id: i64) -> Result<MessageView> {
        match self.repo.find_by_id(id).await? {
            Some(message) => Ok(MessageView::of(message, viewer_id)),
            None => Err(AppError::DataIntegrity(format!(
                "message {id} vanished between query and fetch"
            ))),
        }
    }
}
