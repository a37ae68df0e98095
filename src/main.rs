use clap::{Parser, Subcommand};
use recipe_site::{config, output, pipeline, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-site")]
#[command(about = "Static site generator for a folder of recipes")]
#[command(long_about = "\
Static site generator for a folder of recipes

Every recipe document becomes a page; the landing page searches them all
and filters by tag.

Content structure:

  recipes/
  ├── config.toml                  # Site config (optional)
  ├── Tomato Soup.recipe           # Plain recipe document
  └── Banana Bread.recipepackage/  # Recipe package
      ├── Banana Bread.recipe      # Document, named after the package
      └── Photos/                  # Photos, copied next to the page
          └── loaf.webp            # Referenced as ![](loaf.webp)

Document format:

  # Tomato Soup                    <- title (falls back to file name)
  > Quick and warming #easy #soup  <- description; #words become tags
  - 1kg tomatoes                   <- list item
  Simmer for twenty minutes.       <- paragraph

Run 'recipe-site gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Recipes directory
    #[arg(long, default_value = "recipes", global = true)]
    source: PathBuf,

    /// Output directory (deleted and recreated on build)
    #[arg(long, default_value = "site", global = true)]
    output: PathBuf,

    /// Directory holding styles.css and search.js
    #[arg(long, default_value = "static", global = true)]
    static_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full build: asset build → pages → index → static files
    Build {
        /// Skip the external search asset build step
        #[arg(long)]
        no_asset_build: bool,
    },
    /// List the recipes that would be built, without writing anything
    Scan,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build { no_asset_build } => {
            let options = pipeline::BuildOptions {
                source: cli.source.clone(),
                output: cli.output.clone(),
                static_dir: cli.static_dir,
                asset_build: !no_asset_build,
            };
            println!("==> Building {} → {}", cli.source.display(), cli.output.display());
            let report = pipeline::build(&options)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Scan => {
            println!("==> Scanning {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let sources = scan::scan(&cli.source, &site_config)?;
            let recipes = pipeline::preview(&sources, &site_config)?;
            output::print_scan_output(&recipes);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
