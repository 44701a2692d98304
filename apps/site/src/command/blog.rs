use super::{Command, load_or_report};
use crate::cli::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::render;
use listing::{Query, SortKey};

pub struct BlogCommand {
    config: Config,
    query: Query,
}

impl BlogCommand {
    pub fn new(config: Config, list: ListArgs, tag: Option<String>, sort: &str) -> Self {
        let query = Query::new(config.page_size)
            .with_term(list.q)
            .with_tag(tag)
            .with_sort(SortKey::lenient(sort))
            .with_page(list.page);
        Self { config, query }
    }
}

#[async_trait::async_trait]
impl Command for BlogCommand {
    async fn execute(&self) -> Result<()> {
        let posts = load_or_report(
            &self.config.posts_file(),
            "No se pudieron cargar los artículos.",
        )
        .await?;

        let view = listing::run(&posts, &self.query, self.config.max_visible_pages);
        if view.items.is_empty() {
            println!("Sin resultados.");
            println!("Prueba con otras palabras clave o limpia los filtros.");
        }
        for post in &view.items {
            println!("{}\n", render::post_card(post));
        }
        println!("{}", render::blog_status(&view));
        println!("{}", render::pager(&view));
        Ok(())
    }
}
