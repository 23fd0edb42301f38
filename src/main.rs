//! Chat Analyzer CLI
//!
//! Command-line front end for the chat analysis service:
//! - Upload a transcript and print its statistics
//! - Save the returned chart images
//! - Summarize a date range
//! - Send a recommendation

use anyhow::Context;
use chat_analyzer::config::{generate_default_config, Config, LoggingConfig};
use chat_analyzer::session::{
    self, AnalyzerSession, ChartSelection, LoadingTicker, LOADING_MESSAGE_INTERVAL,
};
use chat_analyzer::{AnalyzerClient, ChartDescriptor, ChatStats, RangeSummary, ALL_USERS_LABEL};
use clap::{Parser, Subcommand};
use std::future::Future;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chat-analyzer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Analyze exported chat transcripts")]
#[command(long_about = "Chat Analyzer uploads an exported chat transcript to the analysis \
service\nand shows the statistics, charts and summaries it returns.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Analysis service URL (overrides config and environment)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/chat-analyzer/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a transcript and show its statistics and charts
    Analyze {
        /// Exported chat transcript (.txt)
        file: PathBuf,
        /// Only analyze messages from this participant
        #[arg(short, long)]
        sender: Option<String>,
        /// Chart indices to show (comma-separated, default: all)
        #[arg(short, long, value_delimiter = ',')]
        charts: Vec<usize>,
        /// Summary start date (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// Summary end date (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<String>,
        /// Directory to write chart images to
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Summarize a date range of the chat last uploaded to the service
    Summary {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: String,
    },

    /// Send a recommendation to the service maintainers
    Recommend {
        /// Recommendation text
        text: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.server.url = url.clone();
    }

    init_logging(&config.logging);
    tracing::debug!("Chat Analyzer v{}", env!("CARGO_PKG_VERSION"));

    let json = cli.format == "json";
    let show_progress = !json && std::io::stderr().is_terminal();

    match cli.command {
        Commands::Analyze {
            file,
            sender,
            charts,
            from,
            to,
            out,
        } => {
            let client = AnalyzerClient::new(config.server.client_config())?;
            let mut state = AnalyzerSession::new();

            let contents = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "chat.txt".to_string());

            let upload = session::upload_chat(&client, &mut state, &file_name, contents);
            if with_progress(upload, progress_reporter(show_progress))
                .await
                .is_err()
            {
                exit_with_session_error(&state);
            }

            if let Some(user) = sender {
                if !state.users.contains(&user) {
                    tracing::warn!("{} is not a participant of this chat", user);
                }
                let change = session::change_user(&client, &mut state, &user);
                if with_progress(change, progress_reporter(show_progress))
                    .await
                    .is_err()
                {
                    exit_with_session_error(&state);
                }
            }

            if !charts.is_empty() {
                state.selection = ChartSelection::from_indices(charts, state.charts.len());
                if state.selection.is_empty() {
                    tracing::warn!("No requested chart index exists; showing all charts");
                }
            }

            if let (Some(from), Some(to)) = (from, to) {
                state.set_dates(from, to);
                let summarize = session::summarize_range(&client, &mut state);
                if with_progress(summarize, progress_reporter(show_progress))
                    .await
                    .is_err()
                {
                    exit_with_session_error(&state);
                }
            }

            let out_dir = out.or_else(|| config.output.chart_dir.as_ref().map(PathBuf::from));
            let saved = match out_dir {
                Some(dir) => save_charts(&dir, &state.visible_charts()).await?,
                None => Vec::new(),
            };

            if json {
                print_session_json(&state, &saved)?;
            } else {
                print_session(&state, &saved);
            }
        }

        Commands::Summary { from, to } => {
            let client = AnalyzerClient::new(config.server.client_config())?;
            let mut state = AnalyzerSession::new();
            state.set_dates(from, to);

            let summarize = session::summarize_range(&client, &mut state);
            if with_progress(summarize, progress_reporter(show_progress))
                .await
                .is_err()
            {
                exit_with_session_error(&state);
            }

            if let Some(summary) = &state.summary {
                if json {
                    println!("{}", serde_json::to_string_pretty(summary)?);
                } else {
                    print_summary(&state, summary);
                }
            }
        }

        Commands::Recommend { text } => {
            let client = AnalyzerClient::new(config.server.client_config())?;
            let mut state = AnalyzerSession::new();
            state.recommendation_text = text;

            let result = session::send_recommendation(&client, &mut state).await;
            let status = state.recommendation_status.unwrap_or_default();
            if result.is_err() {
                eprintln!("{}", status);
                std::process::exit(1);
            }
            println!("{}", status);
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Install the tracing subscriber; logs go to stderr so stdout stays parseable
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("chat_analyzer={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Drive `fut` to completion, reporting a rotating loading message meanwhile
///
/// The first message is reported as soon as `fut` turns out not to be ready.
async fn with_progress<F: Future>(fut: F, mut report: impl FnMut(&'static str)) -> F::Output {
    tokio::pin!(fut);
    let mut ticker = LoadingTicker::new();
    let mut interval = tokio::time::interval(LOADING_MESSAGE_INTERVAL);

    loop {
        tokio::select! {
            biased;
            output = &mut fut => return output,
            _ = interval.tick() => {
                report(ticker.message());
                ticker.advance();
            }
        }
    }
}

fn progress_reporter(enabled: bool) -> impl FnMut(&'static str) {
    move |message| {
        if enabled {
            eprintln!("{}…", message);
        }
    }
}

fn exit_with_session_error(state: &AnalyzerSession) -> ! {
    eprintln!(
        "Error: {}",
        state.error.as_deref().unwrap_or("Request failed")
    );
    std::process::exit(1);
}

/// Write the images of the given charts as `<index>_<title>.<ext>`
async fn save_charts(
    dir: &Path,
    charts: &[(usize, &ChartDescriptor)],
) -> anyhow::Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut saved = Vec::new();
    for (index, chart) in charts {
        let bytes = match chart.image_bytes() {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Skipping chart {} ({}): {}", index, chart.title, e);
                continue;
            }
        };

        let path = dir.join(format!(
            "{:02}_{}.{}",
            index,
            chart.file_stem(),
            extension_for(chart.media_type())
        ));
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        saved.push(path);
    }

    Ok(saved)
}

fn extension_for(media_type: Option<&str>) -> &'static str {
    match media_type {
        Some("image/png") => "png",
        Some("image/jpeg") => "jpg",
        Some("image/svg+xml") => "svg",
        Some("image/gif") => "gif",
        _ => "bin",
    }
}

fn print_session(state: &AnalyzerSession, saved: &[PathBuf]) {
    if let Some(name) = &state.file_name {
        println!("Chat: {}", name);
    }
    println!("Users ({}): {}", state.users.len(), state.users.join(", "));

    if let Some(stats) = &state.stats {
        println!();
        print_stats(stats);
    }

    let visible = state.visible_charts();
    if !state.charts.is_empty() {
        println!();
        println!("Charts ({} of {} shown):", visible.len(), state.charts.len());
        for (index, chart) in &visible {
            println!("  [{:>2}] {}", index, chart.title);
        }
    }

    if let Some(summary) = &state.summary {
        println!();
        print_summary(state, summary);
    }

    if !saved.is_empty() {
        println!();
        println!("Saved {} chart image(s):", saved.len());
        for path in saved {
            println!("  {}", path.display());
        }
    }
}

fn print_stats(stats: &ChatStats) {
    let label = if stats.sender.is_empty() {
        ALL_USERS_LABEL
    } else {
        stats.sender.as_str()
    };
    println!("Statistics ({}):", label);
    println!("  {:<12} {}", "Active Days", group_thousands(stats.total_days));
    println!("  {:<12} {}", "Messages", group_thousands(stats.total_messages));
    println!("  {:<12} {}", "Words", group_thousands(stats.total_words));
    println!("  {:<12} {}", "Avg Words", stats.average_words());
}

fn print_summary(state: &AnalyzerSession, summary: &RangeSummary) {
    println!("Summary ({} – {}):", state.from_date, state.to_date);
    println!("  Total Messages:   {}", summary.total_messages);
    println!(
        "  Top Sender:       {} ({} messages)",
        summary.top_sender.as_deref().unwrap_or("-"),
        summary.top_sender_count
    );
    match summary.most_active_hour {
        Some(hour) => println!("  Most Active Hour: {}:00", hour),
        None => println!("  Most Active Hour: -"),
    }
    println!("  Top Words:        {}", summary.top_words.join(", "));
}

fn print_session_json(state: &AnalyzerSession, saved: &[PathBuf]) -> anyhow::Result<()> {
    let charts: Vec<_> = state
        .visible_charts()
        .into_iter()
        .map(|(index, chart)| {
            serde_json::json!({
                "index": index,
                "id": chart.id,
                "title": chart.title,
            })
        })
        .collect();

    let body = serde_json::json!({
        "file": state.file_name,
        "users": state.users,
        "selected_user": state.sender_filter(),
        "stats": state.stats,
        "charts": charts,
        "summary": state.summary,
        "saved": saved,
    });

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

/// Format a count with thousands separators, e.g. `12,345`
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
