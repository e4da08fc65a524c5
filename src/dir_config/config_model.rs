use serde::Deserialize;

pub const ENV_PREFIX: &str = "DIRECTORY_";

#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
    #[serde(default = "default_avatar_fallback_url")]
    pub avatar_fallback_url: String,
}

impl DirectoryConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env()
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.api_base_url.trim_end_matches('/'))
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        DirectoryConfig {
            host: default_host(),
            port: default_port(),
            api_base_url: default_api_base_url(),
            allowed_origin: default_allowed_origin(),
            avatar_fallback_url: default_avatar_fallback_url(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3002
}

fn default_api_base_url() -> String {
    "https://9e06da9a-97cf-4701-adfc-9b9a5713bbb9.mock.pstmn.io".to_string()
}

fn default_allowed_origin() -> String {
    "http://localhost:4200".to_string()
}

fn default_avatar_fallback_url() -> String {
    "https://via.placeholder.com/150x150?text=No+Image".to_string()
}
