use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::logging;
use crate::selfcheck;
use crate::session::Session;

#[derive(Debug, Parser)]
#[command(
    name = "asciiart",
    about = "Menu-driven ASCII art editor with unlimited undo/redo",
    version
)]
pub struct Cli {
    /// Log filter directives (overrides ASCIIART_LOG).
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Emit logs as JSON lines (overrides ASCIIART_LOG_JSON).
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive editor (default).
    Run(RunArgs),

    /// Run the built-in checks and report failures.
    #[command(name = "self-check")]
    SelfCheck,
}

#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Do not print the menu before each command.
    #[arg(long)]
    pub no_menu: bool,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    let no_menu = match &cli.command {
        Some(Commands::Run(args)) => args.no_menu,
        _ => false,
    };
    let config =
        AppConfig::from_env().with_cli_overrides(cli.log_filter.clone(), cli.log_json, no_menu);
    logging::init(&config)?;
    run(cli.command, &config)
}

pub fn run(command: Option<Commands>, config: &AppConfig) -> Result<()> {
    match command {
        None | Some(Commands::Run(_)) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_session(stdin.lock(), stdout.lock(), config)
        }
        Some(Commands::SelfCheck) => run_self_check(&mut io::stdout().lock()),
    }
}

pub fn run_session<R, W>(input: R, output: W, config: &AppConfig) -> Result<()>
where
    R: io::BufRead,
    W: Write,
{
    let mut session = Session::new(input, output).with_menu(config.show_menu);
    session.run()
}

pub fn run_self_check<W: Write>(out: &mut W) -> Result<()> {
    let outcomes = selfcheck::run_checks(selfcheck::CHECKS);
    let fails = selfcheck::report(out, &outcomes)?;
    if fails > 0 {
        return Err(AppError::exit(1, format!("{fails} self-check(s) failed")));
    }
    Ok(())
}
