use super::{Command, load_or_report};
use crate::config::Config;
use crate::error::Result;

pub struct TagsCommand {
    config: Config,
    catalog: bool,
}

impl TagsCommand {
    pub fn new(config: Config, catalog: bool) -> Self {
        Self { config, catalog }
    }
}

#[async_trait::async_trait]
impl Command for TagsCommand {
    async fn execute(&self) -> Result<()> {
        let path = if self.catalog {
            self.config.products_file()
        } else {
            self.config.posts_file()
        };
        let records = load_or_report(&path, "No se pudieron cargar los datos.").await?;
        for tag in listing::distinct_tags(&records) {
            println!("{}", tag);
        }
        Ok(())
    }
}
