use anyhow::{anyhow, Context, Result};
use catalog::{Catalog, VideoKind};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{ActionOutput, Simulation};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// StreamSim - Streaming Catalog Simulator
#[derive(Parser)]
#[command(name = "streamsim")]
#[command(about = "Replays favorite/view/rate commands, queries and recommendations over a video catalog", long_about = None)]
struct Cli {
    /// Path to the JSON input document (catalog plus actions)
    #[arg(short, long)]
    input: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay every action and write one result per action
    Run {
        /// Write the JSON results here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Replay the actions, then show a user's final state
    User {
        #[arg(long)]
        username: String,
    },

    /// Replay the actions, then show a video's final state
    Video {
        #[arg(long)]
        title: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let mut simulation = Simulation::load_from_file(&cli.input)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;
    eprintln!(
        "{} Loaded {} actions in {:?}",
        "✓".green(),
        simulation.actions().len(),
        start.elapsed()
    );

    let outputs = simulation.run();

    match cli.command {
        Commands::Run { output, compact } => handle_run(&outputs, output, compact)?,
        Commands::User { username } => handle_user(simulation.catalog(), &username)?,
        Commands::Video { title } => handle_video(simulation.catalog(), &title)?,
    }

    Ok(())
}

/// Handle the 'run' command
fn handle_run(outputs: &[ActionOutput], path: Option<PathBuf>, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(outputs)?
    } else {
        serde_json::to_string_pretty(outputs)?
    };

    match path {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            let failed = outputs
                .iter()
                .filter(|output| output.message.starts_with("error"))
                .count();
            eprintln!(
                "{} Wrote {} results to {} ({} errors)",
                "✓".green(),
                outputs.len(),
                path.display(),
                failed.to_string().yellow()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Handle the 'user' command
fn handle_user(catalog: &Catalog, username: &str) -> Result<()> {
    let user = catalog
        .users
        .get(username)
        .ok_or_else(|| anyhow!("User {} not found", username))?;

    println!("{}", format!("User: {}", user.username).bold().blue());
    println!("{}Tier: {:?}", "• ".green(), user.tier);
    println!("{}Ratings given: {}", "• ".cyan(), user.rating_count);

    let mut favorites: Vec<&String> = user.favorites.iter().collect();
    favorites.sort();
    println!("Favorites:");
    for title in favorites {
        println!("  - {title}");
    }

    let mut viewed: Vec<(&String, &u32)> = user.viewed.iter().collect();
    viewed.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    println!("Viewed:");
    for (title, views) in viewed {
        println!("  - {title} ({views} views)");
    }
    Ok(())
}

/// Handle the 'video' command
fn handle_video(catalog: &Catalog, title: &str) -> Result<()> {
    let video = catalog
        .videos
        .get(title)
        .ok_or_else(|| anyhow!("Video {} not found", title))?;

    println!("{}", format!("{} ({})", video.title, video.year).bold().blue());

    let mut genres: Vec<&str> = video.genres.iter().map(|genre| genre.as_str()).collect();
    genres.sort();
    println!("{}Genres: {}", "• ".green(), genres.join(", "));
    println!("{}Duration: {} min", "• ".green(), video.duration);
    println!("{}Views: {}", "• ".cyan(), video.views);
    println!("{}Favorites: {}", "• ".cyan(), video.favorites);
    println!("{}Average rating: {:.2}", "• ".cyan(), video.average_rating());

    if let VideoKind::Show { seasons } = video.kind() {
        println!("Seasons:");
        for season in seasons {
            println!(
                "  - Season {}: {} min, {} ratings",
                season.number,
                season.duration,
                season.ratings.len()
            );
        }
    }
    Ok(())
}
