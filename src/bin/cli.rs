//! Jobwatch CLI
//!
//! Command-line client for a running Jobwatch server:
//! - Trigger a data refresh
//! - Show statistics
//! - List and filter jobs
//! - Check server health

use clap::{Parser, Subcommand};
use jobwatch::config::{generate_default_config, Config};
use jobwatch::format::{format_number, format_relative_date};
use jobwatch::jobs::{parse_publish_time, JobFilter, JobType, Statistics};
use jobwatch::refresh::{
    DelayedReload, HttpRefreshClient, LoadingIndicator, RefreshController, RefreshOutcome,
    ToastBoard,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Parser)]
#[command(name = "jobwatch-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Client for the Jobwatch job listing monitor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (default: from config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Re-run the scraper on the server and show fresh statistics
    Refresh,

    /// Show job statistics
    Stats,

    /// List jobs of one channel
    Jobs {
        /// Channel: campus, intern or experienced
        job_type: String,
        /// Text to look for in title or description
        #[arg(short, long)]
        search: Option<String>,
        /// Exact city name
        #[arg(short, long)]
        city: Option<String>,
        /// Department name or part of it
        #[arg(short, long)]
        department: Option<String>,
        /// Show the available cities and departments instead
        #[arg(long)]
        facets: bool,
    },

    /// Check server health
    Health,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Terminal stand-in for the blocking overlay
struct TerminalOverlay;

impl LoadingIndicator for TerminalOverlay {
    fn show(&self) {
        eprintln!("⟳ Refreshing data, this can take a few minutes...");
    }

    fn hide(&self) {}
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load_default();
    jobwatch::logging::init(&config.logging);

    let api_url = cli
        .api_url
        .clone()
        .unwrap_or_else(|| config.client.api_url.clone());
    let client = HttpRefreshClient::new(api_url);
    let json = cli.format == "json";

    match cli.command {
        Commands::Refresh => {
            let reloaded = Arc::new(Notify::new());
            let reloader = {
                let reloaded = Arc::clone(&reloaded);
                DelayedReload::new(move || reloaded.notify_one())
            };
            let toasts = ToastBoard::new(config.client.toast_duration())
                .on_show(|t| println!("{} {}", t.kind.icon(), t.message));

            let controller = RefreshController::new(
                Arc::new(client.clone()),
                Arc::new(TerminalOverlay),
                Arc::new(toasts),
                Arc::new(reloader),
            )
            .reload_delay(config.client.reload_delay());

            match controller.refresh().await {
                RefreshOutcome::Succeeded => {
                    reloaded.notified().await;
                    let stats = client.fetch_stats().await?;
                    print_stats(&stats, json)?;
                }
                RefreshOutcome::Failed(_) => std::process::exit(1),
                RefreshOutcome::Skipped => {}
            }
        }

        Commands::Stats => {
            let stats = client.fetch_stats().await?;
            print_stats(&stats, json)?;
        }

        Commands::Jobs {
            job_type,
            search,
            city,
            department,
            facets,
        } => {
            let job_type: JobType = job_type.parse()?;

            if facets {
                let facets = client.fetch_facets(job_type).await?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&facets)?);
                } else {
                    println!("Cities: {}", facets.cities.join(", "));
                    println!("Departments: {}", facets.departments.join(", "));
                }
                return Ok(());
            }

            let filter = JobFilter {
                search,
                city,
                department,
            };
            let jobs = client.fetch_jobs(job_type, &filter).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&jobs)?);
                return Ok(());
            }

            let today = chrono::Local::now().date_naive();
            println!("{} ({} jobs)", job_type.display_name(), jobs.len());
            println!("{:<12} {:<24} {:<30} Title", "Published", "Department", "Cities");
            println!("{}", "-".repeat(100));
            for job in &jobs {
                let published = parse_publish_time(&job.publish_time)
                    .map(|t| format_relative_date(t.date(), today))
                    .unwrap_or_else(|| "-".to_string());
                let cities: Vec<&str> = job.city_names().collect();
                println!(
                    "{:<12} {:<24} {:<30} {}",
                    published,
                    truncate(&job.department, 24),
                    truncate(&cities.join(","), 30),
                    job.title
                );
            }
        }

        Commands::Health => {
            let health = client.health().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&health)?);
            } else {
                println!(
                    "Status: {}",
                    health["status"].as_str().unwrap_or("unknown")
                );
                println!("Uptime: {}s", health["uptime_seconds"]);
                println!("Version: {}", health["version"].as_str().unwrap_or("?"));
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_stats(stats: &Statistics, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("Total jobs:   {}", format_number(stats.total as u64));
    println!("Last 7 days:  {}", format_number(stats.recent_jobs as u64));
    for job_type in JobType::ALL {
        let count = stats.by_type.get(job_type.as_str()).copied().unwrap_or(0);
        println!("  {:<20} {}", job_type.display_name(), format_number(count as u64));
    }

    if !stats.top_cities.is_empty() {
        println!("\nTop cities:");
        for (city, count) in &stats.top_cities {
            println!("  {:<20} {}", city, count);
        }
    }

    if !stats.top_departments.is_empty() {
        println!("\nTop departments:");
        for (department, count) in &stats.top_departments {
            println!("  {:<30} {}", truncate(department, 30), count);
        }
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
