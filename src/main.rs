use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use lae_automator::config;
use lae_automator::context::{RunContext, DEFAULT_REMOTE};
use lae_automator::exec::{CommandSink, DryRunSink, Executor, ShellSink};
use lae_automator::git::Workspace;
use lae_automator::procedure::{Orchestrator, Procedure};
use lae_automator::release::{self, RunSummary};
use lae_automator::ui::{self, TerminalPrompt};
use lae_automator::AutomatorError;

#[derive(clap::Parser)]
#[command(
    name = "lae-automator",
    about = "Branch, merge, tag and push LAE releases for each major version",
    version,
    after_help = Procedure::help_listing()
)]
struct Args {
    #[arg(help = "Release procedure to run")]
    command: Option<String>,

    #[arg(long, help = "Only process this major version (e.g. 39)")]
    major: Option<String>,

    #[arg(long, default_value = DEFAULT_REMOTE, help = "Git remote to push to")]
    remote: String,

    #[arg(long, help = "Ask before running every git command")]
    confirm_all: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Print commands without running them")]
    dry_run: bool,

    #[arg(long, help = "Show configured major versions and commands, then exit")]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&e.to_string());
        if e.is_usage() {
            Args::command().print_help()?;
        }
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: Args) -> lae_automator::Result<()> {
    if args.list {
        let config = config::load_config(args.config.as_deref())?;
        let procedures: Vec<(&str, &str)> = Procedure::ALL
            .iter()
            .map(|p| (p.name(), p.description()))
            .collect();
        ui::display_listing(&config.versions.majors(), &procedures);
        return Ok(());
    }

    let procedure: Procedure = match args.command.as_deref() {
        Some(name) => name.parse()?,
        None => return Err(AutomatorError::usage("Please provide a command!")),
    };

    let config = config::load_config(args.config.as_deref())?;
    let ctx = RunContext::new(Some(args.remote), args.major, args.confirm_all)
        .with_dry_run(args.dry_run);

    if ctx.dry_run {
        ui::display_message("Dry run: commands are printed but not executed");
        execute(DryRunSink, &config, &ctx, procedure)?;
    } else {
        let workspace = Workspace::discover(".")?;
        ui::display(&workspace.describe());
        execute(ShellSink::new(), &config, &ctx, procedure)?;
    }

    Ok(())
}

fn execute<S: CommandSink>(
    sink: S,
    config: &config::Config,
    ctx: &RunContext,
    procedure: Procedure,
) -> lae_automator::Result<RunSummary> {
    let executor = Executor::new(sink, TerminalPrompt, ctx.confirm_all);
    let mut orchestrator = Orchestrator::new(executor, ctx.remote.clone());
    let summary = release::run_release(config, ctx, procedure, &mut orchestrator)?;

    tracing::info!(
        majors = summary.runs.len(),
        stopped_early = summary.stopped_early,
        "release run finished"
    );
    Ok(summary)
}
