//! CLI entry point for posts-gen

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "posts-gen")]
#[command(version)]
#[command(about = "Generate synthetic markdown blog posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    cwd: Option<PathBuf>,

    /// Directory posts are written to, relative to the base directory
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate posts (the default)
    #[command(alias = "g")]
    Generate {
        /// Number of posts to write
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for reproducible titles and bodies
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the posts in the output directory
    #[command(alias = "ls")]
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "posts_gen=debug,info"
    } else {
        "posts_gen=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let mut config = posts_gen::config::GenConfig::load_or_default(&base_dir)?;
    if let Some(output) = cli.output {
        config.output_dir = output;
    }

    match cli.command.unwrap_or(Commands::Generate {
        count: None,
        seed: None,
    }) {
        Commands::Generate { count, seed } => {
            if let Some(count) = count {
                config.count = count;
            }
            if seed.is_some() {
                config.seed = seed;
            }

            let posts_gen = posts_gen::PostsGen::with_config(&base_dir, config);
            tracing::info!(
                "Generating {} posts into {:?}",
                posts_gen.config.count,
                posts_gen.output_dir
            );
            let written = posts_gen.generate()?;
            println!("Generated {} posts", written.len());
        }

        Commands::List => {
            let posts_gen = posts_gen::PostsGen::with_config(&base_dir, config);
            posts_gen.list()?;
        }
    }

    Ok(())
}
