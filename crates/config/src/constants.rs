pub const TOP_LEVEL_DOMAIN: &str = "co";
pub const AUTHOR: &str = "Bugambilia";
pub const APP_NAME: &str = "bugambilia";

pub const SITE_CONFIG_FILE_NAME: &str = "site.toml";
pub const POSTS_FILE_NAME: &str = "posts.json";
pub const PRODUCTS_FILE_NAME: &str = "productos.json";
pub const CART_FILE_NAME: &str = "buga-cart.json";
