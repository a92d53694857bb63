//! CLI entry point for the semester GPA calculator.
//!
//! Provides subcommands for grading a single score, computing the semester
//! GPA from a score sheet, listing the course catalog and writing a blank
//! score sheet.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gpa_calc::analyzers::aggregate::summarize;
use gpa_calc::analyzers::grade::map_score_with;
use gpa_calc::analyzers::types::{ParseMode, ReportRecord};
use gpa_calc::catalog::{COURSES, total_credit_hours};
use gpa_calc::output::{append_record, print_pretty, render_text, to_json, write_template};
use gpa_calc::parser::{parse_assignment, parse_scores_csv};
use gpa_calc::scores::ScoreSheet;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gpa_calc")]
#[command(about = "Semester GPA calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the letter grade and points for a single score
    Grade {
        /// Raw score, 0-100
        #[arg(value_name = "SCORE", allow_hyphen_values = true)]
        score: String,

        /// Require the whole input to be a number
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Compute the semester GPA from scores
    Calculate {
        /// Course score as CODE=SCORE (repeatable, overrides --file)
        #[arg(short, long = "score", value_name = "CODE=SCORE")]
        scores: Vec<String>,

        /// CSV score sheet with `code,score` columns
        #[arg(short, long)]
        file: Option<String>,

        /// Reject scores with trailing non-numeric text
        #[arg(long, default_value_t = false)]
        strict: bool,

        /// Print the summary as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Optional: CSV file to append a history record to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List the semester courses and credit hours
    Courses,
    /// Write a blank score sheet for every course
    Template {
        /// Where to write the sheet
        #[arg(short, long, default_value = "scores.csv")]
        output: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gpa_calc.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gpa_calc.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Grade { score, strict } => {
            let grade = map_score_with(Some(score.as_str()), parse_mode(strict));
            debug!(score = %score, letter = %grade.letter, points = grade.points, "Score graded");

            if grade.is_excluded() {
                println!("{}  (excluded)", grade.letter);
            } else {
                println!("{}  {:.1}", grade.letter, grade.points);
            }
        }
        Commands::Calculate {
            scores,
            file,
            strict,
            json,
            output,
        } => {
            calculate(&scores, file.as_deref(), strict, json, output.as_deref())?;
        }
        Commands::Courses => {
            for course in COURSES {
                println!(
                    "{:<8} {:<44} {}",
                    course.code, course.name, course.credit_hours
                );
            }
            println!("Total credit hours: {}", total_credit_hours(COURSES));
        }
        Commands::Template { output } => {
            write_template(&output, COURSES)
                .with_context(|| format!("failed to write template to '{output}'"))?;
            info!(path = %output, "Blank score sheet written");
        }
    }

    Ok(())
}

fn parse_mode(strict: bool) -> ParseMode {
    if strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    }
}

/// Builds a score sheet from the file and `--score` arguments, prints the
/// summary and optionally appends it to a history CSV.
#[tracing::instrument(skip(assignments))]
fn calculate(
    assignments: &[String],
    file: Option<&str>,
    strict: bool,
    json: bool,
    output: Option<&str>,
) -> Result<()> {
    let mut sheet = ScoreSheet::for_catalog(COURSES);

    if let Some(path) = file {
        let bytes =
            std::fs::read(path).with_context(|| format!("failed to read score sheet '{path}'"))?;
        let from_file = parse_scores_csv(&bytes)?;
        debug!(path, entries = from_file.len(), "Score sheet loaded");
        sheet.merge(from_file);
    }

    for arg in assignments {
        let (code, score) = parse_assignment(arg)?;
        sheet.set(code, score);
    }

    for code in sheet.unknown_codes(COURSES) {
        warn!(code, "Ignoring score for unknown course");
    }

    let summary = summarize(COURSES, sheet.scores(), parse_mode(strict));
    print_pretty(&summary);

    info!(
        gpa = summary.report.gpa,
        total_credits = summary.report.total_credits,
        total_points = summary.report.total_points,
        standing = summary.interpretation.label,
        "GPA computed"
    );

    if json {
        println!("{}", to_json(&summary)?);
    } else {
        print!("{}", render_text(&summary));
    }

    if let Some(path) = output {
        append_record(path, &ReportRecord::from(&summary))
            .with_context(|| format!("failed to append history to '{path}'"))?;
        info!(path, "History record appended");
    }

    Ok(())
}
