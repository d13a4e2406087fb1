pub mod dto;
pub mod id;
pub mod models;
pub mod repository;
pub mod sanitize;
pub mod service;

pub use dto::SendMessageRequest;
pub use id::{IdGenerator, MessageIdGenerator};
pub use models::{ConversationPayload, Message, MessageView};
pub use repository::MessageRepository;
pub use service::MessageService;
