// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Command-line self-test for the timetools helpers
use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};

use timetools::config::{Config, LogFormat};
use timetools::core::constants::arithmetic::CLI_DAY_OFFSET;
use timetools::core::constants::config::{
    DEFAULT_CLI_PERIOD, DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL, DEFAULT_ZONE,
};
use timetools::core::constants::format::DEFAULT_PART_PATTERN;
use timetools::core::constants::input::NOW_SENTINEL;
use timetools::{DateInput, Period};

#[derive(Parser, Debug)]
#[command(name = "timetools", version, about = "Run the timetools helpers against a date", long_about = None)]
struct Cli {
    /// Date to inspect, e.g. "1969-01-01 13:01:34" or "now" (default: now)
    date: Option<String>,

    /// Zone treated as local: "local", "UTC", an offset like "+05:30" or an IANA name
    #[arg(long, default_value = DEFAULT_ZONE, allow_hyphen_values = true)]
    zone: String,

    /// Token pattern for the extracted date part
    #[arg(long, default_value = DEFAULT_PART_PATTERN)]
    pattern: String,

    /// Granularity for the same-period check
    #[arg(long, default_value = DEFAULT_CLI_PERIOD)]
    period: String,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Log filter directive, e.g. "debug" or "timetools=trace"
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log format: "text" or "json"
    #[arg(long, default_value = DEFAULT_LOG_FORMAT)]
    log_format: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct Report {
    date: String,
    new_date: String,
    next: String,
    weekday: bool,
    part: String,
    period: Period,
    same_period: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    install_panic_hook();

    let config = Config::new(&cli.zone, &cli.log_level, &cli.log_format)
        .with_context(|| format!("invalid --zone '{}'", cli.zone))?;

    if let Err(e) = init_tracing(&config) {
        eprintln!("Failed to init tracing: {}", e);
    }

    let report = run(&cli, &config)?;

    match cli.output {
        OutputFormat::Text => {
            println!("Date : {}", report.date);
            println!("New Date : {}", report.new_date);
            println!("Next : {}", report.next);
            println!("Weekday : {}", report.weekday);
            println!("Part of date : {}", report.part);
            println!("Same {} : {}", report.period, report.same_period);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<Report> {
    let tools = config.tools();
    let period: Period = cli.period.parse()?;

    let (date, input) = match cli.date.as_deref() {
        None => (tools.now(), DateInput::Current),
        Some(s) if s == NOW_SENTINEL => (s.to_string(), DateInput::Current),
        Some(s) => (s.to_string(), DateInput::date_string(s)),
    };
    info!(date = %date, zone = %config.local_zone, "Running self-test");

    let epoch = tools
        .convert(&input)
        .with_context(|| format!("cannot convert '{}'", date))?;
    let new_date = tools.convert(&epoch.clone().into())?;
    debug!(epoch = %epoch, new_date = %new_date, "Round-tripped through epoch");

    let new_input: DateInput = new_date.clone().into();
    let next = tools.next_day(&new_input, CLI_DAY_OFFSET)?;
    let weekday = tools.is_week_day(&new_input)?;
    let part = tools
        .parse_date(&new_input, &cli.pattern)
        .with_context(|| format!("cannot format with pattern '{}'", cli.pattern))?;
    let same_period = tools.same(&input, &DateInput::date_string(next.as_str()), period)?;

    Ok(Report {
        date,
        new_date: new_date.to_string(),
        next,
        weekday,
        part,
        period,
        same_period,
    })
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("PANIC: {} at {}", message, location);
    }));
}

fn init_tracing(config: &Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Json => subscriber.json().try_init()?,
        _ => subscriber.try_init()?,
    }

    Ok(())
}
