use clap::{Parser, Subcommand};
use rustedex::models::color_for_type;
use rustedex::{Pokedex, DEFAULT_PAGE_SIZE};

#[derive(Parser)]
#[command(name = "rustedex-cli")]
#[command(about = "CLI for Rustedex - PokeAPI catalog browser", long_about = None)]
struct Cli {
    /// Flavor text language tag (can also be set via RUSTEDEX_LANG env var)
    #[arg(short, long, env = "RUSTEDEX_LANG", default_value = "en")]
    language: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of the catalog
    List {
        /// Number of entries to fetch
        #[arg(short = 'n', long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: u32,
    },
    /// Show full details for one Pokemon
    Show {
        /// Pokemon name (case-insensitive)
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut dex = Pokedex::new();
    dex.set_language(&cli.language);

    match &cli.command {
        Commands::List { limit } => {
            println!("Loading {} Pokemon...", limit);
            let summaries = dex.load_catalog(*limit).await?;

            for (i, summary) in summaries.iter().enumerate() {
                let badges = summary
                    .types
                    .iter()
                    .map(|t| format!("{} ({})", t, color_for_type(t)))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("{:>3}. {:<12} [{}]", i + 1, summary.display_name(), badges);
                if let Some(image) = &summary.image {
                    println!("     {}", image);
                }
            }
        }
        Commands::Show { name } => {
            let detail = dex.load_detail(name).await?;

            println!("{} {}", detail.formatted_id(), detail.display_name());
            println!("Height: {} m   Weight: {} kg", detail.height_m(), detail.weight_kg());
            println!(
                "Types: {}",
                detail
                    .types
                    .iter()
                    .map(|t| format!("{} ({})", t, color_for_type(t)))
                    .collect::<Vec<_>>()
                    .join(", ")
            );

            println!("\nBase Stats:");
            for stat in &detail.stats {
                let filled = (stat.ratio() * 20.0).round() as usize;
                println!(
                    "  {:<16} {:>3} {}{}",
                    stat.display_name(),
                    stat.value,
                    "#".repeat(filled),
                    "-".repeat(20 - filled)
                );
            }

            println!("\n{}", detail.description);
            if let Some(image) = &detail.image {
                println!("\nArtwork: {}", image);
            }
        }
    }

    Ok(())
}
