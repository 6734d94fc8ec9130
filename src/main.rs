//! Command line entry point.
//!
//! Prints the work-day report as CSV on stdout. Logs go to stderr and are
//! controlled with `RUST_LOG` (default `warn`).

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing::{Instrument, info, info_span};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use workday_report::calculation::load_exclude_list;
use workday_report::client::BambooHrClient;
use workday_report::config::ConfigLoader;
use workday_report::error::ReportResult;
use workday_report::org_chart::{OrgChart, discover_org_chart, load_org_chart};
use workday_report::report::{
    Orientation, ReportRequest, generate_report, render_report, under_user_from_input,
    week_start_from_input,
};

#[derive(Parser, Debug)]
#[command(name = "workday-report", version)]
#[command(about = "Weekly work days for everyone under a manager, as CSV")]
struct Args {
    /// What user to generate report under
    #[arg(short = 'u', long, value_name = "NAME")]
    under_user: Option<String>,

    /// People to ignore in the report, together with everyone under them
    #[arg(short, long, value_name = "NAME", value_delimiter = ',')]
    ignore: Vec<String>,

    /// Start date of the week to report on (YYYY-MM-DD); defaults to this week
    #[arg(short, long, value_name = "DATE")]
    start_date: Option<String>,

    /// Number of weeks to report on
    #[arg(short, long, value_name = "NUMBER", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..))]
    weeks: u32,

    /// Print one row per week instead of one row per person
    #[arg(short, long)]
    transpose: bool,

    /// YAML settings file locating the org chart and exclude list
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => return usage_exit(&e),
    };
    match run(args).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints a clap error or help text. Help and version exit 0, usage errors 1.
fn usage_exit(error: &clap::Error) -> ExitCode {
    let _ = error.print();
    if error.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn run(args: Args) -> ReportResult<String> {
    let under_user = under_user_from_input(args.under_user.as_deref())?;
    let start_date = week_start_from_input(args.start_date.as_deref(), Local::now().date_naive())?;

    let settings = ConfigLoader::load_settings(args.config.as_ref())?;
    let (org_chart_path, format) = discover_org_chart(&settings.org_chart_candidates())?;
    let chart = OrgChart::new(load_org_chart(&org_chart_path, format)?);
    let exclude = load_exclude_list(&settings.exclude_file)?;

    let credentials = ConfigLoader::bamboohr_from_env()?;
    let client = BambooHrClient::new(&credentials)?;

    let mut ignore = settings.default_ignore.clone();
    ignore.extend(args.ignore);

    let request = ReportRequest {
        under_user,
        ignore,
        exclude,
        start_date,
        weeks: args.weeks,
    };

    let run_id = Uuid::new_v4();
    info!(run_id = %run_id, root = %request.under_user, %start_date, "Starting report run");
    let report = generate_report(&chart, &client, &request)
        .instrument(info_span!("report", run_id = %run_id))
        .await?;

    let orientation = if args.transpose {
        Orientation::Transposed
    } else {
        Orientation::Normal
    };
    render_report(&report, orientation)
}
