pub mod report;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::config::{ArenaConfig, ThemeChoice};
use crate::logging::init_cli_logger;
use crate::services::{load_days, ActivityGenerator, CalendarModel};
use crate::tui::{self, App, DaySource, Theme};
use crate::types::ActivityDay;

/// CAD Arena contribution calendar
#[derive(Parser)]
#[command(name = "cadarena")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for reproducible synthetic activity
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Last day of the calendar (YYYY-MM-DD, default: today)
    #[arg(long, global = true, value_name = "DATE")]
    today: Option<NaiveDate>,

    /// Recorded activity JSON to show instead of synthetic data
    #[arg(long, global = true, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Color scheme
    #[arg(long, global = true, value_enum)]
    theme: Option<ThemeChoice>,

    /// Config file (default: ~/.cadarena/config.json)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch interactive calendar (default)
    Tui,

    /// Print the day sequence
    Days {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the week grid
    Grid {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the month header labels
    Months {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the contribution summary
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Inputs shared by every command, after config and flags are merged
struct Resolved {
    config: ArenaConfig,
    today: NaiveDate,
    /// Generation time, stamped on grid padding
    stamp: NaiveDate,
    provided: Option<Vec<ActivityDay>>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let interactive = matches!(self.command, None | Some(Commands::Tui));
        // The TUI owns the terminal; log lines would corrupt it
        if !interactive {
            init_cli_logger(self.verbose);
        }

        let resolved = self.resolve()?;

        match self.command {
            None | Some(Commands::Tui) => run_tui(resolved),
            Some(Commands::Days { json }) => {
                let model = build_model(resolved);
                if json {
                    println!("{}", report::to_json(&model.days)?);
                } else {
                    println!("{}", report::days_text(&model.days));
                }
                Ok(())
            }
            Some(Commands::Grid { json }) => {
                let model = build_model(resolved);
                if json {
                    println!("{}", report::to_json(&model.weeks)?);
                } else {
                    println!("{}", report::grid_text(&model));
                }
                Ok(())
            }
            Some(Commands::Months { json }) => {
                let model = build_model(resolved);
                if json {
                    println!("{}", report::to_json(&model.months)?);
                } else {
                    println!("{}", report::months_text(&model));
                }
                Ok(())
            }
            Some(Commands::Summary { json }) => {
                let model = build_model(resolved);
                if json {
                    println!("{}", report::to_json(&model.summary)?);
                } else {
                    println!("{}", report::summary_text(&model.summary));
                }
                Ok(())
            }
        }
    }

    fn resolve(&self) -> anyhow::Result<Resolved> {
        let file_config = match &self.config {
            Some(path) => ArenaConfig::load_from(path)?,
            None => ArenaConfig::load().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring config file");
                ArenaConfig::default()
            }),
        };
        let config = file_config.merged(self.seed, self.theme, self.input.clone());

        let stamp = Local::now().date_naive();
        let today = self.today.unwrap_or(stamp);
        let provided = config.data_file.as_deref().map(load_days).transpose()?;

        Ok(Resolved {
            config,
            today,
            stamp,
            provided,
        })
    }
}

fn generator(seed: Option<u64>) -> ActivityGenerator {
    match seed {
        Some(seed) => ActivityGenerator::seeded(seed),
        None => ActivityGenerator::from_entropy(),
    }
}

fn build_model(resolved: Resolved) -> CalendarModel {
    let days = generator(resolved.config.seed).resolve(resolved.provided, resolved.today);
    CalendarModel::build(days, resolved.stamp)
}

fn run_tui(resolved: Resolved) -> anyhow::Result<()> {
    // Detect before raw mode
    let theme = Theme::from_choice(resolved.config.theme.unwrap_or_default());
    let source = match resolved.provided {
        Some(days) => DaySource::Provided(days),
        None => DaySource::Generated(generator(resolved.config.seed)),
    };
    let app = App::new(source, resolved.today, resolved.stamp, theme);
    tui::run(app)
}
