//! Command line interface for uninews.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::warn;

use crate::datetime::{parse_user_date, DateRange};
use crate::news::{write_export, NewsService, SearchOutcome};
use crate::settings::{parse_list, Settings, SettingsStore};
use crate::Result;

/// University news scrap manager.
#[derive(Debug, Parser)]
#[command(name = "uninews", version, about)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect and filter news for the saved keywords and institutions.
    Run(RunArgs),
    /// Show or change keywords and institutions.
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
    /// Serve the Web API.
    Serve,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// First day to include (YYYY-MM-DD). Defaults to today minus the look-back window.
    #[arg(long, value_parser = parse_date_arg)]
    pub start: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date_arg)]
    pub end: Option<NaiveDate>,

    /// Write the result to a CSV report.
    #[arg(long)]
    pub export: bool,

    /// Directory for the CSV report (overrides the configuration).
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

fn parse_date_arg(s: &str) -> std::result::Result<NaiveDate, String> {
    parse_user_date(s).ok_or_else(|| format!("expected YYYY-MM-DD, got '{s}'"))
}

impl RunArgs {
    /// Resolve the date range, filling gaps from the default window.
    pub fn range(&self, default: DateRange) -> DateRange {
        DateRange::new(
            self.start.unwrap_or(default.start),
            self.end.unwrap_or(default.end),
        )
    }
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Print the current keywords and institutions.
    Show,
    /// Replace keywords and/or institutions and save them.
    Save {
        /// Comma-separated keywords.
        #[arg(long)]
        keywords: Option<String>,
        /// Comma-separated institution names.
        #[arg(long)]
        institutions: Option<String>,
    },
}

/// Run a search and print the outcome.
///
/// When `export` is given and the search found articles, the CSV report is
/// written to that directory using `today` in the file name.
pub async fn run_search<W: Write>(
    service: &NewsService,
    settings: &Settings,
    range: &DateRange,
    export: Option<(&Path, NaiveDate)>,
    out: &mut W,
) -> Result<SearchOutcome> {
    writeln!(out, "기간: {} ~ {}", range.start, range.end)?;
    let outcome = service.run(settings, range).await;
    render_outcome(&outcome, out)?;

    if let (Some((dir, today)), SearchOutcome::Found(items)) = (export, &outcome) {
        let path = write_export(dir, today, items)?;
        writeln!(out, "CSV 저장: {}", path.display())?;
    }

    Ok(outcome)
}

/// Print a search outcome.
pub fn render_outcome<W: Write>(outcome: &SearchOutcome, out: &mut W) -> Result<()> {
    writeln!(out, "{}", outcome.message())?;
    for item in outcome.items() {
        writeln!(out)?;
        writeln!(out, "## {}", item.title())?;
        writeln!(
            out,
            "   날짜: {} | 학교: {}",
            item.published_on(),
            item.institution
        )?;
        writeln!(out, "   {}", item.link())?;
    }
    Ok(())
}

/// Print the current settings.
pub fn show_settings<W: Write>(settings: &Settings, out: &mut W) -> Result<()> {
    writeln!(out, "검색 키워드: {}", settings.keywords_input())?;
    writeln!(out, "필터링 학교명: {}", settings.institutions_input())?;
    Ok(())
}

/// Apply the given inputs to `settings` and save them.
///
/// A failed save is printed as a warning; the updated settings are returned
/// either way.
pub fn save_settings<W: Write>(
    store: &SettingsStore,
    mut settings: Settings,
    keywords: Option<&str>,
    institutions: Option<&str>,
    out: &mut W,
) -> Result<Settings> {
    if let Some(keywords) = keywords {
        settings.keywords = parse_list(keywords);
    }
    if let Some(institutions) = institutions {
        settings.institutions = parse_list(institutions);
    }

    match store.save(&settings) {
        Ok(()) => writeln!(out, "설정이 저장되었습니다!")?,
        Err(e) => {
            warn!("failed to save settings: {}", e);
            writeln!(
                out,
                "경고: 설정 파일 저장 중 오류가 발생했습니다. (권한 문제일 수 있습니다)"
            )?;
        }
    }
    show_settings(&settings, out)?;
    Ok(settings)
}
