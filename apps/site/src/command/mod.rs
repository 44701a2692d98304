pub mod apply;
pub mod blog;
pub mod cart;
pub mod catalog;
pub mod post;
pub mod tags;

use crate::error::{Result, error};
use crate::loader;
use listing::Record;
use std::path::Path;

pub use apply::ApplyCommand;
pub use blog::BlogCommand;
pub use cart::CartCommand;
pub use catalog::CatalogCommand;
pub use post::PostCommand;
pub use tags::TagsCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// Load a data file, printing `failure` for the user when it cannot be used.
async fn load_or_report(path: &Path, failure: &str) -> Result<Vec<Record>> {
    let outcome = loader::load(path).await;
    if outcome.ok {
        return Ok(outcome.records);
    }
    eprintln!("{}", failure);
    Err(error!(
        "{}",
        outcome.error.unwrap_or_else(|| format!("cannot load {}", path.display()))
    ))
}
