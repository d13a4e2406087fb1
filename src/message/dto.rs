use serde::Deserialize;
use validator::Validate;

/// Send parameters as handed over by the embedding request layer; the sender
/// id comes separately from the authenticated session.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    /// Zero is the reserved "absent" value and is rejected.
    pub recipient_id: i64,
    #[validate(length(min = 1))]
    pub body: String,
}
