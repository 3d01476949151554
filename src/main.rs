use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use topics::app::App;
use topics::catalog::Catalog;
use topics::config::{CliOverrides, Config};
use topics::{listing, ui};

/// Default config file location (~/.config/topics/config.toml)
fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("topics")
            .join("config.toml"),
    )
}

#[derive(Parser, Debug)]
#[command(
    name = "topics",
    version,
    about = "Browse and search a catalog of learning topics in the terminal"
)]
struct Args {
    /// Start in this theme (overrides config)
    #[arg(long, value_parser = ["dark", "light"])]
    theme: Option<String>,

    /// Config file (default: ~/.config/topics/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// TOML catalog of [[topic]] entries replacing the built-in topics
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Disable card fade-in and the rainbow border
    #[arg(long)]
    no_animation: bool,

    /// Print matching topics and exit instead of starting the TUI
    #[arg(long)]
    list: bool,

    /// Initial search text (with --list: the query to filter by)
    #[arg(long, value_name = "TEXT")]
    query: Option<String>,

    /// Initial category (with --list: the category to filter by)
    #[arg(long, value_name = "NAME")]
    category: Option<String>,

    /// Print --list output as JSON
    #[arg(long, requires = "list")]
    json: bool,
}

fn load_config(args: &Args) -> Result<Config> {
    let path = match &args.config {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            path.clone()
        }
        None => match default_config_path() {
            Some(path) => path,
            None => {
                tracing::warn!("HOME not set, using default configuration");
                return Ok(Config::default());
            }
        },
    };

    Config::load(&path).with_context(|| format!("Failed to load config: {}", path.display()))
}

fn print_listing(catalog: &Catalog, args: &Args) -> Result<()> {
    let items = listing::list(
        catalog,
        args.query.as_deref().unwrap_or(""),
        args.category.as_deref(),
    )?;

    if args.json {
        println!("{}", listing::render_json(&items)?);
    } else {
        print!("{}", listing::render_text(&items));
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so they never paint over the TUI
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = load_config(&args)?;
    let cli = CliOverrides {
        theme: args.theme.clone(),
        no_animation: args.no_animation,
        catalog_path: args.catalog.clone(),
    };
    let options = config.app_options(&cli)?;

    let catalog = match config.resolve_catalog_path(&cli) {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?,
        None => Catalog::builtin(),
    };

    if args.list {
        return print_listing(&catalog, &args);
    }

    let mut app = App::new(catalog, options);

    for warning in app.keybindings.apply_overrides(&config.keybindings) {
        tracing::warn!(warning = %warning, "Keybinding override skipped");
        app.set_status(warning);
    }

    if let Some(category) = &args.category {
        if !app.select_category_by_name(category) {
            anyhow::bail!(
                "Unknown category '{}' (available: {})",
                category,
                app.categories().join(", ")
            );
        }
    }
    if let Some(query) = &args.query {
        app.set_query(query);
    }

    ui::run(&mut app).await?;

    Ok(())
}
