#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Avatar reference substituted when a profile has none stored.
    pub default_avatar: String,
    /// Upper bound on message id generation attempts per send.
    pub id_max_attempts: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            default_avatar: std::env::var("DEFAULT_AVATAR")
                .unwrap_or_else(|_| "img/profile/default.png".to_string()),
            id_max_attempts: std::env::var("ID_GENERATION_ATTEMPTS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("ID_GENERATION_ATTEMPTS must be a number"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_applies_defaults() {
        std::env::set_var("DATABASE_URL", "sqlite::memory:");
        std::env::remove_var("DEFAULT_AVATAR");
        std::env::remove_var("ID_GENERATION_ATTEMPTS");

        let config = Config::from_env();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.default_avatar, "img/profile/default.png");
        assert_eq!(config.id_max_attempts, 10);
    }
}
