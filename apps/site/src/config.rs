use crate::error::{Result, WrapErr};
use config::{constants, create_strategy};
use serde::{Deserialize, Serialize};
use std::env;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::info;
use url::Url;

const EXAMPLE_CONFIG: &str = r#"# Bugambilia site configuration
#
# Created on first run. Relative data paths are resolved against data-dir.

# Where posts.json, productos.json and the wishlist live
# data-dir = "/srv/bugambilia/data"

# posts-path = "posts.json"
# products-path = "productos.json"

# Listing page size and paginator width
# page-size = 6
# max-visible-pages = 5

# Used in page titles and structured data
# site-name = "Bugambilia"
# base-url = "https://bugambilia.co/blog/"

# Sent with job applications
# time-zone = "America/Bogota"

# Job applications are POSTed here as JSON; without it they are only logged
# apply-endpoint = "https://bugambilia.co/api/postulaciones"
"#;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    pub data_dir: PathBuf,
    pub posts_path: PathBuf,
    pub products_path: PathBuf,
    pub page_size: NonZeroUsize,
    pub max_visible_pages: usize,
    pub site_name: String,
    pub base_url: Option<String>,
    pub time_zone: String,
    pub apply_endpoint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = match create_strategy() {
            Ok(strategy) => config::data_dir(&strategy),
            Err(_) => env::var_os("DATA_DIRECTORY")
                .map(PathBuf::from)
                .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME)),
        };

        Self {
            data_dir,
            posts_path: PathBuf::from(constants::POSTS_FILE_NAME),
            products_path: PathBuf::from(constants::PRODUCTS_FILE_NAME),
            page_size: NonZeroUsize::new(6).unwrap_or(NonZeroUsize::MIN),
            max_visible_pages: 5,
            site_name: "Bugambilia".to_string(),
            base_url: None,
            time_zone: "America/Bogota".to_string(),
            apply_endpoint: None,
        }
    }
}

impl Config {
    pub fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    /// Load `path`, or the platform config file when none is given.
    ///
    /// A missing platform config file is replaced by a commented example.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let (config_path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (config::config_file(&create_strategy()?), false),
        };

        match std::fs::read_to_string(&config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str)
                .wrap_err_with(|| format!("Invalid configuration in {}", config_path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => {
                Self::create_example_config(&config_path)?;
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, EXAMPLE_CONFIG)?;
        info!("created example configuration at {}", config_path.display());
        Ok(())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }

    pub fn posts_file(&self) -> PathBuf {
        self.resolve(&self.posts_path)
    }

    pub fn products_file(&self) -> PathBuf {
        self.resolve(&self.products_path)
    }

    pub fn cart_file(&self) -> PathBuf {
        self.data_dir.join(constants::CART_FILE_NAME)
    }

    pub fn base_url(&self) -> Result<Option<Url>> {
        parse_url("base-url", self.base_url.as_deref())
    }

    pub fn apply_endpoint(&self) -> Result<Option<Url>> {
        parse_url("apply-endpoint", self.apply_endpoint.as_deref())
    }
}

fn parse_url(key: &str, value: Option<&str>) -> Result<Option<Url>> {
    value
        .filter(|u| !u.trim().is_empty())
        .map(|u| Url::parse(u).wrap_err_with(|| format!("Invalid {} {:?}", key, u)))
        .transpose()
}
