// furncart_cli/src/main.rs

mod render;
mod shell;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use furncart::{RoomSize, RoomStyle, RoomType, ShopConfig, ShopSession, SubmissionOutcome};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "furncart")]
#[command(about = "FurnCart - furniture bundle recommendations and a shopping cart", long_about = None)]
struct Cli {
  /// Recommendation API base URL (overrides FURNCART_API_URL)
  #[arg(long, global = true)]
  api_url: Option<String>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Check whether the recommendation backend is reachable
  Status,
  /// Request one bundle and print it
  Recommend(RecommendArgs),
  /// Interactive session: edit preferences, submit, build a cart
  Shop,
}

#[derive(Args)]
struct RecommendArgs {
  #[arg(long, default_value_t = RoomType::LivingRoom)]
  room_type: RoomType,

  #[arg(long, default_value_t = RoomStyle::Modern)]
  style: RoomStyle,

  #[arg(long, default_value_t = RoomSize::Medium)]
  size: RoomSize,

  /// Defaults to FURNCART_DEFAULT_BUDGET
  #[arg(long)]
  budget: Option<u32>,

  #[arg(long, conflicts_with = "image_file")]
  image_url: Option<String>,

  /// Local picture, sent inline as a data URL
  #[arg(long)]
  image_file: Option<PathBuf>,

  /// Put every recommended product in the cart and print it
  #[arg(long)]
  add_all: bool,
}

async fn recommend(config: &ShopConfig, args: RecommendArgs) -> Result<ExitCode> {
  let mut session = ShopSession::from_config(config)?;
  session.form.room_type = args.room_type;
  session.form.style = args.style;
  session.form.size = args.size;
  if let Some(budget) = args.budget {
    session.form.set_budget(budget)?;
  }
  if let Some(url) = args.image_url {
    session.form.set_image_url(url);
  }
  if let Some(path) = args.image_file {
    session.form.set_image_file(path);
  }

  match session.submit().await {
    SubmissionOutcome::Applied => {
      if let Some(bundle) = session.recommendations() {
        println!("{}", render::bundle(bundle));
      }
      if args.add_all {
        session.add_all_to_cart();
        println!();
        println!("{}", render::cart(session.cart()));
      }
      Ok(ExitCode::SUCCESS)
    }
    _ => {
      eprintln!(
        "Failed to fetch recommendations: {}",
        session.error().unwrap_or("unknown error")
      );
      Ok(ExitCode::FAILURE)
    }
  }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  let mut config = ShopConfig::from_env()?;
  if let Some(url) = cli.api_url {
    config = config.with_api_base_url(url);
  }
  tracing::debug!(api_base_url = %config.api_base_url, "Using recommendation API.");

  match cli.command {
    Commands::Status => {
      let session = ShopSession::from_config(&config)?;
      if session.recommender().probe().await {
        println!("Server reachable at {}", config.api_base_url);
        Ok(ExitCode::SUCCESS)
      } else {
        println!("Cannot reach server at {}", config.api_base_url);
        Ok(ExitCode::FAILURE)
      }
    }
    Commands::Recommend(args) => recommend(&config, args).await,
    Commands::Shop => {
      shell::run(ShopSession::from_config(&config)?).await?;
      Ok(ExitCode::SUCCESS)
    }
  }
}
