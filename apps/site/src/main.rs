mod application;
mod cart;
mod cli;
mod command;
mod config;
mod error;
mod loader;
mod render;

use application::ApplicationForm;
use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;
use tracing::Level;

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;
    let command_line = cli::Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(log_level(command_line.verbose))
        .with_writer(std::io::stderr)
        .init();

    let cfg = config::Config::load(command_line.config.as_deref())
        .context("Load configuration error")?;

    if let Some(command) = command_line.command {
        let cmd: Box<dyn command::Command> = match command {
            cli::Commands::Blog { list, tag, sort } => {
                Box::new(command::BlogCommand::new(cfg, list, tag, &sort))
            }
            cli::Commands::Catalog { list, cat, max_price, sort } => {
                Box::new(command::CatalogCommand::new(cfg, list, cat, max_price, &sort))
            }
            cli::Commands::Post { slug } => Box::new(command::PostCommand::new(cfg, slug)),
            cli::Commands::Tags { catalog } => Box::new(command::TagsCommand::new(cfg, catalog)),
            cli::Commands::Apply { nombre, email, vacante, telefono, mensaje, empresa } => {
                let form = ApplicationForm { nombre, email, vacante, telefono, mensaje, empresa };
                Box::new(command::ApplyCommand::new(cfg, form))
            }
            cli::Commands::Cart { action } => Box::new(command::CartCommand::new(cfg, action)),
        };
        cmd.execute().await?;
    } else {
        cli::Cli::command().print_help()?;
    }

    Ok(())
}
