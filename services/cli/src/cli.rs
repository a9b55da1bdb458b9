use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use eventwork::config::{AppConfig, StorageBackend};
use eventwork::error::AppError;
use eventwork::identity::AccountKind;
use eventwork::marketplace::{EventType, ReviewDecision, WorkType};
use eventwork::telemetry;
use tracing::info;

use crate::commands;
use crate::demo::run_demo;
use crate::infra::{parse_date, parse_time, AppContext};

#[derive(Parser, Debug)]
#[command(
    name = "EventWork",
    about = "Post catering jobs, apply for event work, and review applications",
    version
)]
struct Cli {
    /// Override the configured data directory for the file backend
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a worker or authoriser account and sign it in
    Signup(SignupArgs),
    /// Sign in with phone number and credential
    Login(LoginArgs),
    /// End the current session
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Post or browse job listings
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
    /// Apply to a job as the signed-in worker
    Apply {
        job_id: String,
    },
    /// List the signed-in worker's applications
    Applications,
    /// Accept or reject an application to one of your jobs
    Review {
        application_id: String,
        #[arg(value_enum)]
        decision: DecisionArg,
    },
    /// Show the dashboard for the signed-in account
    Dashboard,
    /// Run a scripted walkthrough against throwaway in-memory storage
    Demo,
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// Post a new job listing as the signed-in authoriser
    Post(PostJobArgs),
    /// List open jobs for the signed-in worker, local city first
    Browse,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum KindArg {
    Worker,
    Authoriser,
}

impl From<KindArg> for AccountKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Worker => AccountKind::Worker,
            KindArg::Authoriser => AccountKind::Authoriser,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum DecisionArg {
    Accept,
    Reject,
}

impl From<DecisionArg> for ReviewDecision {
    fn from(decision: DecisionArg) -> Self {
        match decision {
            DecisionArg::Accept => ReviewDecision::Accept,
            DecisionArg::Reject => ReviewDecision::Reject,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct SignupArgs {
    #[arg(long, value_enum)]
    pub(crate) kind: KindArg,
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) phone: String,
    #[arg(long)]
    pub(crate) credential: String,
    /// Must repeat the credential exactly
    #[arg(long)]
    pub(crate) confirm: String,
    /// Home city, one of the supported cities
    #[arg(long)]
    pub(crate) location: String,
    /// Business name, required for authorisers
    #[arg(long)]
    pub(crate) company: Option<String>,
    #[arg(long)]
    pub(crate) profile_photo: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct LoginArgs {
    #[arg(long, value_enum)]
    pub(crate) kind: KindArg,
    #[arg(long)]
    pub(crate) phone: String,
    #[arg(long)]
    pub(crate) credential: String,
}

#[derive(Args, Debug)]
pub(crate) struct PostJobArgs {
    /// wedding, reception, party, temple_function, corporate, or other
    #[arg(long)]
    pub(crate) event_type: EventType,
    /// serving, cleaning, table_setup, water_service, cooking_assist, or other
    #[arg(long)]
    pub(crate) work_type: WorkType,
    #[arg(long)]
    pub(crate) workers: u32,
    #[arg(long)]
    pub(crate) pay: u32,
    /// Event date (YYYY-MM-DD), today or later
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: chrono::NaiveDate,
    /// Start time (HH:MM)
    #[arg(long, value_parser = parse_time)]
    pub(crate) start: chrono::NaiveTime,
    /// End time (HH:MM)
    #[arg(long, value_parser = parse_time)]
    pub(crate) end: chrono::NaiveTime,
    #[arg(long)]
    pub(crate) location: String,
    #[arg(long, default_value = "")]
    pub(crate) description: String,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(data_dir) = cli.data_dir {
        config.storage.backend = StorageBackend::File;
        config.storage.data_dir = data_dir;
    }

    telemetry::init(&config.telemetry)?;

    if let Command::Demo = cli.command {
        return run_demo();
    }

    info!(?config.environment, backend = ?config.storage.backend, "opening eventwork stores");
    let mut context = AppContext::open(config.storage.open())?;

    match cli.command {
        Command::Signup(args) => commands::signup(&mut context, args),
        Command::Login(args) => commands::login(&mut context, args),
        Command::Logout => commands::logout(&mut context),
        Command::Whoami => commands::whoami(&context),
        Command::Jobs {
            command: JobsCommand::Post(args),
        } => commands::post_job(&mut context, args),
        Command::Jobs {
            command: JobsCommand::Browse,
        } => commands::browse(&context),
        Command::Apply { job_id } => commands::apply(&mut context, job_id),
        Command::Applications => commands::applications(&context),
        Command::Review {
            application_id,
            decision,
        } => commands::review(&mut context, application_id, decision.into()),
        Command::Dashboard => commands::dashboard(&context),
        Command::Demo => run_demo(),
    }
}
