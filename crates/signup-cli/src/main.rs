//! `signup` — the training signup form on the command line.
//!
//! Stands in for the course page: `reserve` is the hero's "Direct aanmelden"
//! button, `submit` is the form itself. Both share a session directory so a
//! reserved date is picked up by the next `submit`, exactly once.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use signup_client::{ClientConfig, HttpSubmitter};
use signup_core::catalog::{COURSES, TRAINING_SCHEDULE, course_label, schedule_label};
use signup_core::hero::{hero_date_value, scroll_to_signup};
use signup_core::validation::validate;
use signup_core::{
    FileSessionStore, LeadForm, Province, SubmissionPayload, SubmissionStatus, Variant,
    VariantFields,
};

// ── ANSI color helpers ───────────────────────────────────────────────

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

// ── CLI structure ────────────────────────────────────────────────────

/// Signup — fill in and submit the training signup form.
#[derive(Parser)]
#[command(
    name = "signup",
    version,
    about = "Signup CLI — fill in and submit the training signup form",
    long_about = None,
    after_help = format!(
        "{DIM}Environment variables:{RESET}\n  \
         SIGNUP_BASE_URL      Site base URL (default: http://127.0.0.1:3000)\n  \
         SIGNUP_TIMEOUT_SECS  Request timeout in seconds (default: none)\n  \
         SIGNUP_SESSION_DIR   Session directory for the date handoff\n  \
         SIGNUP_LOG           Log filter (default: warn)\n\n\
         {DIM}Examples:{RESET}\n  \
         signup reserve --course-name \"Scrum Master\" --dates \"7 & 9 april\"\n  \
         signup submit --variant team --name \"Pieter Jansen\" --email pj@politie.nl \\\n    \
         --province Utrecht --phone \"06 1234 5678\" --eenheid \"Eenheid Midden-Nederland\" \\\n    \
         --team \"Team Alpha\" --accept-privacy"
    ),
)]
struct Cli {
    /// Site base URL; submissions go to `<base-url>/api/submit`.
    #[arg(long, env = "SIGNUP_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Request timeout in seconds (0 = transport default).
    #[arg(long, env = "SIGNUP_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Directory holding short-lived session values.
    #[arg(long, env = "SIGNUP_SESSION_DIR")]
    session_dir: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, default_value = "false")]
    log_json: bool,

    /// Disable colored output.
    #[arg(long, default_value = "false")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the signup form and submit it.
    Submit(SubmitArgs),
    /// Pick a training date from a hero card for the next `submit`.
    Reserve {
        /// Course name on the card, e.g. "Scrum Master".
        #[arg(long)]
        course_name: String,
        /// Dates on the card, e.g. "7 & 9 april".
        #[arg(long)]
        dates: String,
    },
    /// List provinces, trainings and scheduled dates.
    Options,
}

#[derive(Args)]
struct SubmitArgs {
    /// Which form to fill in: training or team.
    #[arg(long, default_value = "training")]
    variant: Variant,
    /// Preselected training (training form only).
    #[arg(long)]
    course: Option<String>,
    /// Full name.
    #[arg(long, default_value = "")]
    name: String,
    /// Email address.
    #[arg(long, default_value = "")]
    email: String,
    /// Province you are willing to travel to. Repeat to add more; naming a
    /// province twice deselects it.
    #[arg(long = "province")]
    provinces: Vec<Province>,
    /// Scheduled training date (training form only).
    #[arg(long)]
    training_date: Option<String>,
    /// Phone number (team form only).
    #[arg(long)]
    phone: Option<String>,
    /// Cost center (training form only).
    #[arg(long)]
    cost_center: Option<String>,
    /// Organisational unit.
    #[arg(long, default_value = "")]
    eenheid: String,
    /// Team name.
    #[arg(long, default_value = "")]
    team: String,
    /// Optional message.
    #[arg(long, default_value = "")]
    message: String,
    /// Accept the privacy statement.
    #[arg(long, default_value = "false")]
    accept_privacy: bool,
    /// Validate and print the payload without sending it.
    #[arg(long, default_value = "false")]
    dry_run: bool,
}

/// How a command ended, mapped to the process exit code.
enum Outcome {
    Done,
    Blocked,
    Failed,
}

struct Palette {
    color: bool,
}

impl Palette {
    fn paint(&self, codes: &str, text: &str) -> String {
        if self.color {
            format!("{codes}{text}{RESET}")
        } else {
            text.to_owned()
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json);
    let palette = Palette { color: !cli.no_color };

    match run(cli, &palette).await {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Failed) => ExitCode::FAILURE,
        Ok(Outcome::Blocked) => ExitCode::from(2),
        Err(e) => {
            eprintln!();
            eprintln!("  {} {e:#}", palette.paint(&format!("{RED}{BOLD}"), "✗ Error:"));
            eprintln!();
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_env("SIGNUP_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli, palette: &Palette) -> Result<Outcome> {
    let session_dir = cli
        .session_dir
        .unwrap_or_else(|| std::env::temp_dir().join("signup-session"));
    let mut store = FileSessionStore::new(session_dir);
    debug!(dir = %store.dir().display(), "using session directory");

    match cli.command {
        Commands::Submit(args) => {
            let config = ClientConfig {
                base_url: cli.base_url,
                timeout: cli
                    .timeout_secs
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs),
            };
            cmd_submit(config, &mut store, args, palette).await
        }
        Commands::Reserve { course_name, dates } => {
            cmd_reserve(&mut store, &course_name, &dates, palette)
        }
        Commands::Options => {
            cmd_options(palette);
            Ok(Outcome::Done)
        }
    }
}

// ── Submit ───────────────────────────────────────────────────────────

async fn cmd_submit(
    config: ClientConfig,
    store: &mut FileSessionStore,
    args: SubmitArgs,
    palette: &Palette,
) -> Result<Outcome> {
    let mut form = LeadForm::mount(args.variant, args.course.clone(), store);
    fill(&mut form, &args);

    let presentation = form.presentation();
    println!();
    println!("  {}", palette.paint(BOLD, presentation.heading));
    println!("  {}", palette.paint(DIM, presentation.intro));
    println!();
    if let VariantFields::Training(t) = &form.state().fields {
        if let Some(label) = course_label(&t.course) {
            println!("  {} {label}", palette.paint(DIM, "Training:"));
        }
        if let Some(label) = schedule_label(&t.training_date) {
            println!("  {} {label}", palette.paint(DIM, "Datum:"));
        }
    }

    if args.dry_run {
        return match validate(form.state()) {
            Ok(()) => {
                let payload = SubmissionPayload::from(form.state());
                let json =
                    serde_json::to_string_pretty(&payload).context("failed to encode payload")?;
                println!("{json}");
                Ok(Outcome::Done)
            }
            Err(err) => Ok(blocked(&err, palette)),
        };
    }

    let submitter = HttpSubmitter::new(config).context("invalid client configuration")?;
    println!("  {}", palette.paint(DIM, presentation.submit_label(true)));

    match form.submit(&submitter).await {
        Ok(SubmissionStatus::Success) => {
            print_banner(SubmissionStatus::Success, palette);
            Ok(Outcome::Done)
        }
        Ok(status) => {
            print_banner(status, palette);
            Ok(Outcome::Failed)
        }
        Err(err) => Ok(blocked(&err, palette)),
    }
}

fn fill(form: &mut LeadForm, args: &SubmitArgs) {
    let state = form.state_mut();
    state.set_name(args.name.as_str());
    state.set_email(args.email.as_str());
    for province in &args.provinces {
        state.toggle_province(*province);
    }
    if let Some(date) = &args.training_date {
        state.set_training_date(date.as_str());
    }
    if let Some(phone) = &args.phone {
        state.set_phone(phone.as_str());
    }
    if let Some(cost_center) = &args.cost_center {
        state.set_cost_center(cost_center.as_str());
    }
    state.set_eenheid(args.eenheid.as_str());
    state.set_team(args.team.as_str());
    state.set_message(args.message.as_str());
    state.set_privacy_accepted(args.accept_privacy);
}

fn blocked(err: &impl std::fmt::Display, palette: &Palette) -> Outcome {
    eprintln!("  {} {err}", palette.paint(&format!("{YELLOW}{BOLD}"), "⚠"));
    eprintln!();
    Outcome::Blocked
}

fn print_banner(status: SubmissionStatus, palette: &Palette) {
    let Some(text) = status.banner() else {
        return;
    };
    let codes = match status {
        SubmissionStatus::Success => GREEN,
        _ => RED,
    };
    println!("  {}", palette.paint(codes, text));
    println!();
}

// ── Reserve ──────────────────────────────────────────────────────────

fn cmd_reserve(
    store: &mut FileSessionStore,
    course_name: &str,
    dates: &str,
    palette: &Palette,
) -> Result<Outcome> {
    let value = hero_date_value(course_name, dates);
    let stored = scroll_to_signup(value, store).context("failed to store training date")?;

    println!();
    match value {
        Some(date) if stored => {
            println!("  {} {date}", palette.paint(GREEN, "✓ Datum gereserveerd:"));
        }
        _ => {
            println!(
                "  {} {course_name} · {dates}",
                palette.paint(YELLOW, "Geen geplande datum voor")
            );
        }
    }
    println!();
    Ok(Outcome::Done)
}

// ── Options ──────────────────────────────────────────────────────────

fn cmd_options(palette: &Palette) {
    println!();
    println!("  Provincies:");
    for province in Province::ALL {
        println!("    {province}");
    }
    println!();
    println!("  Trainingen:");
    for course in &COURSES {
        println!("    {:<45} {}", course.value, palette.paint(DIM, course.label));
    }
    println!();
    println!("  Beschikbare data:");
    for date in &TRAINING_SCHEDULE {
        println!("    {:<45} {}", date.value, palette.paint(DIM, date.label));
    }
    println!();
}
