// Sortiment - command line interface

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use sortiment::{
    group_order, load_order_lines, render_packing_slip, Catalog, Category, ClassifiableItem,
    TracingObserver,
};
use std::path::{Path, PathBuf};

/// sortiment - product category classification for beverage orders
#[derive(Parser)]
#[command(name = "sortiment", version)]
#[command(about = "Classify products and group orders by category", long_about = None)]
struct Cli {
    /// JSON file with extra catalog products and keywords
    #[arg(long, global = true)]
    overrides: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single product name
    Classify {
        name: String,

        /// Volume or pack size, e.g. "24x33cl"
        #[arg(long)]
        volume: Option<String>,

        /// Category code already assigned upstream
        #[arg(long)]
        preset: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Group the lines of an order CSV and print a packing slip
    Group {
        csv: PathBuf,

        /// Order reference printed on the packing slip
        #[arg(long, default_value = "-")]
        reference: String,

        /// Print the grouped order as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the categories in render order
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    sortiment::init_tracing("info");

    let catalog = match &cli.overrides {
        Some(path) => Catalog::from_file(path)
            .with_context(|| format!("Failed to load catalog overrides: {:?}", path))?,
        None => Catalog::with_defaults(),
    };

    match cli.command {
        Commands::Classify { name, volume, preset, json } => {
            run_classify(&catalog, name, volume, preset, json)
        }
        Commands::Group { csv, reference, json } => run_group(&catalog, &csv, &reference, json),
        Commands::Categories => {
            run_categories();
            Ok(())
        }
    }
}

fn run_classify(
    catalog: &Catalog,
    name: String,
    volume: Option<String>,
    preset: Option<String>,
    json: bool,
) -> Result<()> {
    let mut item = ClassifiableItem::new(name);
    if let Some(volume) = volume {
        item = item.with_volume(volume);
    }
    if let Some(preset) = preset {
        item = item.with_preset(preset);
    }

    let result = catalog.classify_observed(&item, &TracingObserver);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} ({}) [{}]",
            result.category_name(),
            result.category_code,
            format!("{:?}", result.match_type).to_lowercase()
        );
    }

    Ok(())
}

fn run_group(catalog: &Catalog, csv: &Path, reference: &str, json: bool) -> Result<()> {
    let lines = load_order_lines(csv)?;
    let order = group_order(catalog, &lines)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&order)?);
    } else {
        print!("{}", render_packing_slip(&order, reference, Utc::now()));
    }

    Ok(())
}

fn run_categories() {
    for category in Category::ALL {
        println!("{:>3}  {}", category.code(), category.name());
    }
}
