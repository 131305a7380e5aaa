use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use veikkaus_rs::{BetDecision, BetTarget, Config, GameType, PlacementMode, VeikkausClient};

#[derive(Parser)]
#[command(name = "veikkaus")]
#[command(about = "Veikkaus betting API CLI", long_about = None)]
struct Cli {
    /// Path to config.toml (falls back to environment variables when missing)
    #[arg(short, long, default_value = "config.toml")]
    config: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show an account balance
    Balance {
        /// balance, usableBalance or frozenBalance
        #[arg(short, long, default_value = "usableBalance")]
        kind: String,
    },
    /// List upcoming EBET draws
    Draws {
        /// Look up the league of each draw (one extra request per event)
        #[arg(long)]
        leagues: bool,
    },
    /// Show the account transaction history
    History,
    /// Place a bet on an upcoming draw
    Bet {
        /// Row id of the draw
        row_id: String,
        /// HOME, X or AWAY
        target: String,
        /// Stake in cents
        stake: u64,
        /// Really place the bet instead of only validating it
        #[arg(long)]
        live: bool,
    },
    /// List available sports
    Sports,
    /// List categories of a sport
    Categories { sport: u32 },
    /// List tournaments of a sport category
    Tournaments { sport: u32, category: u32 },
    /// Show a single tournament
    Tournament {
        sport: u32,
        category: u32,
        tournament: u32,
    },
    /// Show league info of a sports event
    Event { event_id: String },
    /// Show league info of a draw
    Draw { draw_id: String },
}

fn init_tracing() {
    let default_level = if std::env::var_os("VEIKKAUS_DEBUG").is_some() {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(path: &str) -> Config {
    match Config::from_path(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Could not read {}: {}. Using environment variables.", path, e);
            Config::from_env()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli.config);

    let mut client = VeikkausClient::new(config)?;
    if !client.login().await {
        anyhow::bail!("Login failed");
    }

    match cli.command {
        Commands::Balance { kind } => {
            let balance = client.get_balance(&kind).await?;
            println!("{kind}: {balance} €");
        }
        Commands::Draws { leagues } => {
            let mut draws = client.upcoming_events(GameType::Ebet).await;
            if leagues {
                draws = client.annotate_leagues(draws).await;
            }
            for draw in &draws {
                println!("{draw}");
            }
            info!("{} draws", draws.len());
        }
        Commands::History => {
            for wager in client.get_betting_history().await? {
                println!(
                    "{} {:>5} {:>8} {} {} ({})",
                    wager.accounting_date.format("%d.%m.%Y %H:%M"),
                    wager.result,
                    wager.amount,
                    wager.product,
                    wager.external_id,
                    wager.id
                );
            }
        }
        Commands::Bet {
            row_id,
            target,
            stake,
            live,
        } => {
            let target: BetTarget = target.parse()?;
            let draws = client.upcoming_events(GameType::Ebet).await;
            let draw = draws
                .iter()
                .find(|draw| draw.row_id == row_id)
                .with_context(|| format!("No open draw with row id {row_id}"))?;

            let mode = if live {
                PlacementMode::Live
            } else {
                PlacementMode::Test
            };
            println!("placing bet for game:\n{draw}\n");

            if client
                .place_bet(draw, BetDecision::new(target, stake), mode)
                .await?
            {
                info!("SUCCESS bet placed ({:?})", mode);
            } else {
                anyhow::bail!("Bet was not accepted");
            }
        }
        Commands::Sports => print_json(&client.sport_types().await)?,
        Commands::Categories { sport } => print_json(&client.sport_categories(sport).await)?,
        Commands::Tournaments { sport, category } => {
            print_json(&client.sport_tournaments(sport, category).await)?
        }
        Commands::Tournament {
            sport,
            category,
            tournament,
        } => print_json(
            &client
                .sport_tournament_info(sport, category, tournament)
                .await,
        )?,
        Commands::Event { event_id } => match client.event_info(&event_id).await {
            Some(event) => println!("{event}"),
            None => warn!("No info for event {}", event_id),
        },
        Commands::Draw { draw_id } => match client.draw_info(&draw_id).await {
            Some(event) => println!("{event}"),
            None => warn!("No info for draw {}", draw_id),
        },
    }

    Ok(())
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
