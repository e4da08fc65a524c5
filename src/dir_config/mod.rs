pub mod config_model;

use log::info;

use self::config_model::DirectoryConfig;

/**
 * reads .env (if any) before the process environment
 */
pub fn load_config() -> Result<DirectoryConfig, envy::Error> {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded environment overrides from {}", path.display());
    }
    DirectoryConfig::from_env()
}
