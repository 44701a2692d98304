use super::{Command, load_or_report};
use crate::cli::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::render;
use listing::{Query, SortKey};

pub struct CatalogCommand {
    config: Config,
    query: Query,
}

impl CatalogCommand {
    pub fn new(
        config: Config,
        list: ListArgs,
        cat: Option<String>,
        max_price: Option<f64>,
        sort: &str,
    ) -> Self {
        let query = Query::new(config.page_size)
            .with_term(list.q)
            .with_tag(cat)
            .with_max_price(max_price)
            .with_sort(SortKey::lenient_or(sort, SortKey::Relevance))
            .with_page(list.page);
        Self { config, query }
    }
}

#[async_trait::async_trait]
impl Command for CatalogCommand {
    async fn execute(&self) -> Result<()> {
        let products = load_or_report(
            &self.config.products_file(),
            "No se pudieron cargar los productos. Intenta más tarde.",
        )
        .await?;

        let view = listing::run(&products, &self.query, self.config.max_visible_pages);
        for product in &view.items {
            println!("{}\n", render::product_card(product));
        }
        println!("{}", render::catalog_status(&view));
        println!("{}", render::pager(&view));
        Ok(())
    }
}
