//! Direct-messaging core: creates messages between two identified users,
//! assigns each one a collision-checked identifier, and reads them back as
//! single messages, two-party conversations, or per-peer summaries.
//!
//! The crate owns persistence and the messaging rules only. Transport,
//! authentication and request parsing belong to the embedding application,
//! which hands the service an already-authorized viewer id and decoded
//! parameters.

pub mod config;
pub mod db;
pub mod error;
pub mod message;
pub mod profile;

pub use config::Config;
pub use db::{create_pool, run_migrations, DbPool};
pub use error::{AppError, ErrorList, Result};
pub use message::{
    ConversationPayload, IdGenerator, Message, MessageIdGenerator, MessageRepository,
    MessageService, MessageView, SendMessageRequest,
};
pub use profile::{PeerProfile, ProfileRepository, ProfileSummary};
