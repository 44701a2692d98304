use super::{Command, load_or_report};
use crate::config::Config;
use crate::error::Result;
use crate::render;
use listing::{DEFAULT_SUGGESTIONS, SeoMeta, find_by_slug, suggestions};
use tracing::info;

pub struct PostCommand {
    config: Config,
    slug: String,
}

impl PostCommand {
    pub fn new(config: Config, slug: String) -> Self {
        Self { config, slug }
    }
}

#[async_trait::async_trait]
impl Command for PostCommand {
    async fn execute(&self) -> Result<()> {
        let base_url = self.config.base_url()?;
        // A post page still renders its not-found view when the data is missing.
        let posts = load_or_report(&self.config.posts_file(), "No se pudo cargar el artículo.")
            .await
            .unwrap_or_default();

        let Some(post) = find_by_slug(&posts, &self.slug) else {
            info!("no post with slug {:?}", self.slug);
            println!("No encontramos este artículo");
            println!("Es posible que el enlace haya cambiado o el artículo haya sido movido.");
            let recent = suggestions(&posts, DEFAULT_SUGGESTIONS);
            if !recent.is_empty() {
                println!("\nQuizás te interese\n");
                for post in recent {
                    println!("{}\n", render::post_card(post));
                }
            }
            return Ok(());
        };

        let seo = SeoMeta::for_record(post, &self.config.site_name, base_url.as_ref());
        println!("{}", render::post_card(post));
        println!();
        println!("{}", post.content);
        println!();
        println!("<title>{}</title>", render::escape_attribute(&seo.title));
        for (attribute, name, content) in &seo.meta {
            println!(
                "<meta {}=\"{}\" content=\"{}\">",
                attribute,
                name,
                render::escape_attribute(content)
            );
        }
        println!("{}", serde_json::to_string_pretty(&seo.json_ld)?);
        Ok(())
    }
}
