use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use matchday_core::{
    DEFAULT_CERTIFICATE, DEFAULT_URL, FixtureFilter, Schedule, ScheduleConfig, fetch_file, fetch_stdin, schedule_url,
    write_fixtures, write_standings,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use url::Url;

mod echo;

use echo::{format_size, print_banner, print_detail, print_info, print_step, print_success};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print the fixtures of an FFVB volleyball pool as "home vs away" lines
#[derive(Parser, Debug)]
#[command(name = "matchday")]
#[command(version)]
#[command(about = "Print the fixtures of an FFVB volleyball pool", long_about = None)]
struct Args {
    /// Read the schedule from a local HTML file, or "-" for stdin, instead of fetching it
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// Schedule page to fetch
    #[arg(long, value_name = "URL", default_value = DEFAULT_URL)]
    url: Url,

    /// Season of the pool to fetch, e.g. "2024/2025" (replaces --url)
    #[arg(long, value_name = "SEASON", requires_all = ["entity", "pool"], conflicts_with = "url")]
    season: Option<String>,

    /// League code of the pool, e.g. "LIIDF"
    #[arg(long, value_name = "CODE", requires_all = ["season", "pool"], conflicts_with = "url")]
    entity: Option<String>,

    /// Pool code, e.g. "PMA"
    #[arg(long, value_name = "CODE", requires_all = ["season", "entity"], conflicts_with = "url")]
    pool: Option<String>,

    /// PEM bundle trusted for the TLS connection
    #[arg(long, value_name = "PEM", default_value = DEFAULT_CERTIFICATE, conflicts_with = "system_roots")]
    cert: PathBuf,

    /// Trust the platform root certificates instead of a PEM bundle
    #[arg(long)]
    system_roots: bool,

    /// HTTP timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Only print fixtures involving this team
    #[arg(long, value_name = "NAME")]
    team: Option<String>,

    /// Leave out fixtures against the "xxxxx" bye placeholder
    #[arg(long)]
    skip_byes: bool,

    /// Print the pool standings instead of the fixtures
    #[arg(long)]
    standings: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// The page to fetch: built from --season/--entity/--pool when given, --url otherwise.
    fn page_url(&self) -> anyhow::Result<Url> {
        match (&self.season, &self.entity, &self.pool) {
            (Some(season), Some(entity), Some(pool)) => {
                schedule_url(season, entity, pool).context("Failed to build the pool URL")
            }
            _ => Ok(self.url.clone()),
        }
    }

    fn schedule_config(&self) -> anyhow::Result<ScheduleConfig> {
        Ok(ScheduleConfig::builder()
            .url(self.page_url()?)
            .certificate((!self.system_roots).then(|| self.cert.clone()))
            .timeout(self.timeout)
            .build())
    }

    fn fixture_filter(&self) -> FixtureFilter {
        FixtureFilter { team: self.team.clone(), skip_byes: self.skip_byes }
    }
}

/// Logs go to stderr so stdout only carries output lines.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "warn,matchday_core=debug,matchday=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn load_schedule(args: &Args, config: &ScheduleConfig) -> anyhow::Result<Schedule> {
    match args.input.as_deref() {
        Some("-") => {
            if args.verbose {
                print_step(1, 3, "Reading from stdin");
            }
            let html = fetch_stdin().context("Failed to read from stdin")?;
            if args.verbose {
                print_detail("Size", &format_size(html.len()));
            }
            Ok(Schedule::parse(&html))
        }
        Some(path) => {
            if args.verbose {
                print_step(1, 3, &format!("Reading from file {}", path.bright_white()));
            }
            let html = fetch_file(path).with_context(|| format!("Failed to read file: {}", path))?;
            if args.verbose {
                print_detail("Size", &format_size(html.len()));
            }
            Ok(Schedule::parse(&html))
        }
        None => {
            if args.verbose {
                print_step(1, 3, &format!("Fetching {}", config.url.bright_white().underline()));
                match &config.fetch.certificate {
                    Some(path) => print_detail("Trusted roots", &path.display().to_string()),
                    None => print_detail("Trusted roots", "platform store"),
                }
            }
            Schedule::fetch(config)
                .await
                .with_context(|| format!("Failed to fetch schedule from {}", config.url))
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let config = args.schedule_config()?;
    tracing::debug!(?config, "resolved configuration");

    let schedule = load_schedule(&args, &config).await?;

    if args.verbose {
        print_step(2, 3, "Parsing HTML document");
        if let Some(title) = schedule.document().title() {
            print_detail("Title", title.trim());
        }
        eprintln!();
    }

    let stdout = io::stdout().lock();

    let written = if args.standings {
        if args.verbose {
            print_step(3, 3, &format!("Reading standings from table {}", config.standings_table));
        }
        let standings = schedule
            .standings(config.standings_table)
            .context("Failed to read standings")?;
        write_standings(&standings, stdout).context("Failed to write standings")?
    } else {
        if args.verbose {
            print_step(3, 3, "Extracting fixtures");
        }
        write_fixtures(&schedule, &args.fixture_filter(), stdout).context("Failed to extract fixtures")?
    };

    if args.verbose {
        print_success(&format!("{} lines written", written));
    }

    Ok(())
}
