pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::path::PathBuf;
use std::env;


pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// Directory from `env_key` if set, else from the platform strategy,
/// else a per-app folder under the temp dir.
pub fn resolve_dir<S, F>(env_key: &str, strategy: &S, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> Option<PathBuf>,
{
    env::var_os(env_key)
        .map(PathBuf::from)
        .or_else(|| strategy_fn(strategy))
        .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME))
}

/// Config file location, honouring `CONFIG_DIRECTORY`.
pub fn config_file<S: AppStrategy>(strategy: &S) -> PathBuf {
    resolve_dir("CONFIG_DIRECTORY", strategy, |s| Some(s.config_dir()))
        .join(constants::SITE_CONFIG_FILE_NAME)
}

/// Where data files and the cart live, honouring `DATA_DIRECTORY`.
pub fn data_dir<S: AppStrategy>(strategy: &S) -> PathBuf {
    resolve_dir("DATA_DIRECTORY", strategy, |s| Some(s.data_dir()))
}
