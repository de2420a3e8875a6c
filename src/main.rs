//! SyllabusSync CLI
//!
//! Terminal rendering of the dashboard views:
//! - Department overview and subject progress
//! - Syllabus mapping with prerequisite alerts
//! - Activity heatmap and coverage analytics
//! - Lecture logging and CSV export
//! - Simulated login session kept in a file

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use syllabus_sync::analytics::{Analytics, Period, SubjectFilter};
use syllabus_sync::config::{Config, LoggingConfig};
use syllabus_sync::export;
use syllabus_sync::heatmap::{Heatmap, Intensity, DAY_LABELS, MAX_WEEKS};
use syllabus_sync::logger::{recent_logs, LectureLogForm};
use syllabus_sync::notice::Notice;
use syllabus_sync::session::{FileStore, SessionGate};
use syllabus_sync::syllabus::{data_structures_syllabus, department_summary, subjects};

#[derive(Parser)]
#[command(name = "syllabus-sync")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Academic syllabus coverage tracking")]
#[command(long_about = "SyllabusSync tracks syllabus coverage per subject.\nMap units and topics, catch unmet prerequisites, and log lectures in seconds.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: searched in standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportKind {
    /// Weekly progress per subject
    Progress,
    /// Daily activity grid
    Heatmap,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Department summary and subject progress
    Overview,

    /// Unit and topic mapping with prerequisite alerts
    Syllabus {
        /// Only list topics with an unmet prerequisite
        #[arg(long)]
        alerts_only: bool,
    },

    /// Teaching activity heatmap
    Heatmap {
        /// Number of weeks (default: from config)
        #[arg(short, long, value_parser = weeks_parser())]
        weeks: Option<usize>,
        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Coverage analytics
    Analytics {
        /// Subject code or "all"
        #[arg(short, long, default_value = "all")]
        subject: String,
        /// Reporting period (week, month, semester, year)
        #[arg(short, long, default_value = "semester")]
        period: String,
    },

    /// Log a lecture
    Log {
        /// Subject code
        #[arg(short, long, default_value = "")]
        subject: String,
        /// Topic covered
        #[arg(short, long, default_value = "")]
        topic: String,
        /// Unit key (unit1..unit4)
        #[arg(short, long, default_value = "")]
        unit: String,
        /// Duration in minutes
        #[arg(short, long, default_value = "")]
        duration: String,
        /// Completion level label
        #[arg(long, default_value = "")]
        completion: String,
    },

    /// Recently logged lectures
    Recent,

    /// Export chart data as CSV
    Export {
        /// What to export
        #[arg(value_enum)]
        kind: ExportKind,
        /// Subject code or "all" (progress only)
        #[arg(short, long, default_value = "all")]
        subject: String,
        /// Number of weeks (heatmap only)
        #[arg(short, long, value_parser = weeks_parser())]
        weeks: Option<usize>,
        /// Seed (heatmap only)
        #[arg(long)]
        seed: Option<u64>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Sign in (any non-empty email and password)
    Login { email: String, password: String },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// `--weeks` accepts 1 to `MAX_WEEKS`
fn weeks_parser() -> clap::builder::RangedU64ValueParser<usize> {
    clap::builder::RangedU64ValueParser::new().range(1..=MAX_WEEKS as u64)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    match cli.command {
        Commands::Overview => {
            let summary = department_summary();
            let subjects = subjects();

            if cli.format == OutputFormat::Json {
                let body = serde_json::json!({ "summary": summary, "subjects": subjects });
                println!("{}", serde_json::to_string_pretty(&body)?);
                return Ok(());
            }

            println!("Total Subjects:   {}", summary.total_subjects);
            println!("Semesters:        {}", summary.semesters);
            println!("Behind Schedule:  {}", summary.behind_schedule);
            println!("Exam Readiness:   {}%", summary.exam_readiness);
            println!();
            println!(
                "{:<8} {:<32} {:>8} {:<10} {:<14} {}",
                "Code", "Subject", "Progress", "Status", "Units", "Next Deadline"
            );
            println!("{}", "-".repeat(92));
            for subject in &subjects {
                println!(
                    "{:<8} {:<32} {:>7}% {:<10} {:<14} {}",
                    subject.code,
                    subject.name,
                    subject.progress,
                    subject.status.label(),
                    subject.units_summary(),
                    subject.next_deadline.format("%Y-%m-%d")
                );
            }
        }

        Commands::Syllabus { alerts_only } => {
            let syllabus = data_structures_syllabus();
            let alerts = syllabus.prerequisite_alerts();
            let rollup = syllabus.rollup();

            if cli.format == OutputFormat::Json {
                let body = serde_json::json!({
                    "syllabus": syllabus,
                    "rollup": rollup,
                    "alerts": alerts,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
                return Ok(());
            }

            if alerts_only {
                if alerts.is_empty() {
                    println!("No prerequisite alerts");
                }
                for alert in &alerts {
                    let title = syllabus
                        .subtopics()
                        .find(|s| s.id == alert.subtopic)
                        .map(|s| s.title.as_str())
                        .unwrap_or("-");
                    println!("Topic {:<3} {:<32} {}", alert.subtopic, title, alert.message());
                }
                return Ok(());
            }

            println!("{} ({})", syllabus.subject, syllabus.code);
            println!(
                "Overall progress: {}%   Hours logged: {}h / {}h   Lectures: {}",
                rollup.overall_progress,
                rollup.hours_logged,
                rollup.hours_estimated,
                rollup.lectures_logged
            );

            for unit in &syllabus.units {
                println!();
                println!(
                    "Unit {}: {}  [{}% {}]  {}",
                    unit.id,
                    unit.title,
                    unit.progress,
                    unit.status.label(),
                    unit.hours_summary()
                );
                let drift = unit.progress_drift();
                if drift != 0 {
                    println!("  (topics suggest {}%)", unit.derived_progress());
                }

                for subtopic in &unit.subtopics {
                    let alert = alerts.iter().find(|a| a.subtopic == subtopic.id);
                    println!(
                        "  {:>3}. {:<32} {:<12} {} lectures{}",
                        subtopic.id,
                        subtopic.title,
                        subtopic.status.label(),
                        subtopic.lecture_count,
                        alert.map(|a| format!("  ! {}", a.message())).unwrap_or_default()
                    );
                    if let Some(prerequisite) = subtopic.prerequisite {
                        println!("       Depends on Topic {}", prerequisite);
                    }
                }
            }
        }

        Commands::Heatmap { weeks, seed } => {
            let weeks = weeks.unwrap_or(config.heatmap.weeks);
            let heatmap = Heatmap::generate(today(), weeks, &mut make_rng(seed));

            if cli.format == OutputFormat::Json {
                let body = serde_json::json!({ "heatmap": heatmap, "summary": heatmap.summary() });
                println!("{}", serde_json::to_string_pretty(&body)?);
                return Ok(());
            }

            print!("{:<5}", "");
            for label in DAY_LABELS {
                print!("{:<4}", label);
            }
            println!();

            for (index, week) in heatmap.weeks.iter().enumerate() {
                print!("{:<5}", heatmap.row_label(index));
                for day in &week.days {
                    print!("{:<4}", intensity_glyph(day.intensity));
                }
                println!();
            }

            println!();
            for intensity in Intensity::all() {
                print!("{} {}   ", intensity_glyph(*intensity), intensity.label());
            }
            println!();
            println!();

            for summary in heatmap.summary() {
                println!(
                    "{:<8} {:>3}%  {}",
                    summary.label,
                    summary.progress,
                    summary.trend.label()
                );
            }
        }

        Commands::Analytics { subject, period } => {
            let period = Period::from_key(&period).unwrap_or_default();
            let filter = SubjectFilter::from_key(&subject);
            let analytics = Analytics::sample();
            let metrics = analytics.key_metrics();

            if cli.format == OutputFormat::Json {
                let body = serde_json::json!({
                    "period": period,
                    "metrics": metrics,
                    "series": analytics.series(&filter),
                    "analytics": analytics,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
                return Ok(());
            }

            println!("Coverage Analytics ({})", period.label());
            println!();
            println!("Average Progress:   {}%", metrics.average_progress);
            println!("Teaching Velocity:  {} topics/week", metrics.teaching_velocity);
            println!("Exam Readiness:     {}%", metrics.exam_readiness);
            println!(
                "Risk Subjects:      {} ({})",
                metrics.risk_subjects,
                metrics.at_risk.join(", ")
            );

            println!();
            print!("{:<8}", "");
            for label in analytics.week_labels() {
                print!(" | {:<7}", label);
            }
            println!();
            for series in analytics.series(&filter) {
                print!("{:<8}", series.name);
                for point in &series.points {
                    print!(" | {:<7}", format!("{}%", point));
                }
                println!();
            }

            println!();
            println!("{:<8} {:>8} {:>10} {:<12} {}", "Subject", "Current", "Projected", "Exam", "Status");
            for readiness in &analytics.exam_readiness {
                println!(
                    "{:<8} {:>7}% {:>9}% {:<12} {}",
                    readiness.subject,
                    readiness.current,
                    readiness.projected,
                    readiness.exam_date.format("%Y-%m-%d"),
                    readiness.status.risk_label()
                );
            }

            println!();
            for item in &analytics.compliance {
                println!("{:<22} {:>3}%  {}", item.name, item.value, item.level.label());
            }
        }

        Commands::Log {
            subject,
            topic,
            unit,
            duration,
            completion,
        } => {
            let mut form = LectureLogForm {
                subject,
                unit,
                topic,
                duration,
                completion_level: completion,
                ..Default::default()
            };

            if !form.can_submit(false) {
                print_notice(&Notice::error("Cannot log lecture", "Subject and topic are required."));
                std::process::exit(1);
            }

            std::thread::sleep(Duration::from_millis(config.ui.simulated_latency_ms as u64));
            print_notice(&form.submit());
        }

        Commands::Recent => {
            let logs = recent_logs();

            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&logs)?);
                return Ok(());
            }

            for log in logs {
                println!(
                    "{:<17} {:<6} {:<34} {:>3} min  {:>3} students  {}",
                    log.timestamp,
                    log.subject,
                    log.topic,
                    log.duration,
                    log.students_present,
                    log.completion_level.label()
                );
            }
        }

        Commands::Export {
            kind,
            subject,
            weeks,
            seed,
            output,
        } => {
            let mut buffer = Vec::new();
            match kind {
                ExportKind::Progress => {
                    let filter = SubjectFilter::from_key(&subject);
                    export::weekly_progress_csv(&Analytics::sample(), &filter, &mut buffer)?;
                }
                ExportKind::Heatmap => {
                    let weeks = weeks.unwrap_or(config.heatmap.weeks);
                    let heatmap = Heatmap::generate(today(), weeks, &mut make_rng(seed));
                    export::heatmap_csv(&heatmap, &mut buffer)?;
                }
            }

            match output {
                Some(path) => {
                    std::fs::write(&path, &buffer)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Exported to {:?}", path);
                }
                None => {
                    print!("{}", String::from_utf8_lossy(&buffer));
                }
            }
        }

        Commands::Login { email, password } => {
            let mut gate = open_gate(&config);
            std::thread::sleep(Duration::from_millis(config.ui.simulated_latency_ms as u64));

            match gate.login(&email, &password) {
                Ok(user) => {
                    print_notice(&Notice::login_succeeded());
                    println!("{} ({})", user.name, user.subtitle());
                }
                Err(e) if e.is_rejection() => {
                    print_notice(&Notice::login_failed());
                    std::process::exit(1);
                }
                Err(e) => return Err(e).context("Failed to save session"),
            }
        }

        Commands::Logout => {
            let mut gate = open_gate(&config);
            gate.logout().context("Failed to clear session")?;
            println!("Signed out");
        }

        Commands::Whoami => {
            let gate = open_gate(&config);
            match gate.current_user() {
                Some(user) if cli.format == OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(user)?);
                }
                Some(user) => {
                    println!("{} <{}>", user.name, user.email);
                    println!("{}", user.subtitle());
                }
                None => {
                    println!("Not signed in");
                    println!();
                    println!("Sign in with:");
                    println!("  syllabus-sync login faculty@demo.com <password>");
                }
            }
        }

        Commands::Config { output } => {
            let config = syllabus_sync::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("syllabus_sync={}", config.level).into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn open_gate(config: &Config) -> SessionGate<FileStore> {
    let store = FileStore::new(&config.session.session_file);
    SessionGate::load(store, config.session.department.clone())
}

fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn intensity_glyph(intensity: Intensity) -> &'static str {
    match intensity {
        Intensity::None => "·",
        Intensity::Low => "░",
        Intensity::Medium => "▒",
        Intensity::High => "█",
    }
}

fn print_notice(notice: &Notice) {
    if notice.is_error() {
        eprintln!("{}", notice);
    } else {
        println!("{}", notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weeks_range() {
        let cli = Cli::try_parse_from(["syllabus-sync", "heatmap", "--weeks", "4"]).unwrap();
        assert!(matches!(cli.command, Commands::Heatmap { weeks: Some(4), .. }));

        assert!(Cli::try_parse_from(["syllabus-sync", "heatmap", "--weeks", "0"]).is_err());
        assert!(Cli::try_parse_from(["syllabus-sync", "heatmap", "--weeks", "40000000"]).is_err());
        assert!(
            Cli::try_parse_from(["syllabus-sync", "export", "heatmap", "--weeks", "40000000"]).is_err()
        );
    }
}
