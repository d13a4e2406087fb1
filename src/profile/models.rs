use serde::Serialize;
use sqlx::FromRow;

/// Public profile fields as stored. An empty avatar means none was uploaded.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileSummary {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub avatar: String,
}

/// Profile of the conversation peer as shipped to the viewer, with the
/// default avatar substituted when none is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerProfile {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub avatar: String,
}

impl PeerProfile {
    pub fn from_summary(summary: ProfileSummary, default_avatar: &str) -> Self {
        let avatar = if summary.avatar.is_empty() {
            default_avatar.to_string()
        } else {
            summary.avatar
        };

        Self {
            first_name: summary.first_name,
            last_name: summary.last_name,
            user_name: summary.user_name,
            avatar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(avatar: &str) -> ProfileSummary {
        ProfileSummary {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            user_name: "ada".to_string(),
            avatar: avatar.to_string(),
        }
    }

    #[test]
    fn missing_avatar_falls_back_to_default() {
        let peer = PeerProfile::from_summary(summary(""), "img/profile/default.png");
        assert_eq!(peer.avatar, "img/profile/default.png");
    }

    #[test]
    fn stored_avatar_is_kept() {
        let peer = PeerProfile::from_summary(summary("img/ada.png"), "img/profile/default.png");
        assert_eq!(peer.avatar, "img/ada.png");
    }
}
