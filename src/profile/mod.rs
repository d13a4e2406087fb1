pub mod models;
pub mod repository;

pub use models::{PeerProfile, ProfileSummary};
pub use repository::ProfileRepository;
