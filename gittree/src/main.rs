mod cli;
mod logging;

use clap::{Parser, Subcommand};
use cli::{CliError, CliResult};
use gittree_core::{
    action::Action,
    config::{self, Config},
    git::{CliGitProvider, GitProvider},
    picker::{CommandPicker, DirectoryPicker, NoPicker},
    state::AppState,
};
use gittree_tui::Theme;
use std::{path::PathBuf, process::ExitCode, sync::Arc};

#[derive(Parser)]
#[command(version, about = "Tabbed terminal browser for git repositories")]
struct Cli {
    /// Repositories to open, one tab each
    paths: Vec<String>,

    /// Override path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Level for the log file in the cache directory
    #[arg(long, default_value = logging::DEFAULT_LOG_LEVEL, value_parser = parse_log_level)]
    log_level: log::LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the branches of a repository
    Branches {
        path: String,
        #[arg(long)]
        json: bool,
    },
    /// Show the history of the checked-out branch, newest first
    Log {
        path: String,
        /// Maximum number of commits (defaults to history.max_commits)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_errors = command_wants_json(cli.command.as_ref());

    if let Err(error) = logging::setup_logging(cli.log_level) {
        eprintln!("Logging disabled: {error}");
    }

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            let cli_error = CliError::system(error.to_string());
            cli::print_error(&cli_error, json_errors);
            return ExitCode::from(2);
        }
    };

    let result = match cli.command {
        Some(Commands::Branches { path, json }) => {
            let git = CliGitProvider::new(config.history.max_commits);
            cli::cmd_branches(&git, &path, json)
        }
        Some(Commands::Log { path, limit, json }) => {
            let git = CliGitProvider::new(limit.unwrap_or(config.history.max_commits));
            cli::cmd_log(&git, &cli::LogArgs { path, limit, json })
        }
        None => run_tui(&config, &cli.paths),
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(error) => {
            log::error!("{error}");
            cli::print_error(&error, json_errors);
            let code: u8 = match error.code() {
                1 => 1,
                _ => 2,
            };
            ExitCode::from(code)
        }
    }
}

fn run_tui(config: &Config, paths: &[String]) -> CliResult<()> {
    // Bad paths are reported before the terminal is taken over.
    let paths = paths
        .iter()
        .map(|path| cli::resolve_path(path))
        .collect::<CliResult<Vec<_>>>()?;

    let git: Arc<dyn GitProvider> = Arc::new(CliGitProvider::new(config.history.max_commits));
    let command_picker = config
        .picker
        .command
        .as_deref()
        .and_then(CommandPicker::from_command);
    let mut state = AppState::new(command_picker.is_some());
    let picker: Arc<dyn DirectoryPicker> = match command_picker {
        Some(picker) => Arc::new(picker),
        None => Arc::new(NoPicker),
    };

    let theme = Theme::from_config(&config.theme);

    let mut terminal = ratatui::init();
    let result = gittree_tui::run(
        &mut terminal,
        &mut state,
        &git,
        &picker,
        &theme,
        startup_actions(paths),
    );
    ratatui::restore();

    result.map_err(CliError::from)
}

/// Open each path in its own tab, the first one in the initial tab, and leave the
/// first tab active.
fn startup_actions(paths: Vec<PathBuf>) -> Vec<Action> {
    let count = paths.len();
    let mut actions = Vec::new();
    for (i, path) in paths.into_iter().enumerate() {
        if i > 0 {
            actions.push(Action::NewTab);
            actions.push(Action::SelectTabPosition(i + 1));
        }
        actions.push(Action::OpenPath(path));
    }
    if count > 1 {
        actions.push(Action::SelectTabPosition(1));
    }
    actions
}

fn parse_log_level(value: &str) -> Result<log::LevelFilter, String> {
    value
        .parse()
        .map_err(|_| format!("unknown log level '{value}' (off, error, warn, info, debug, trace)"))
}

fn command_wants_json(command: Option<&Commands>) -> bool {
    match command {
        Some(Commands::Branches { json, .. } | Commands::Log { json, .. }) => *json,
        None => false,
    }
}
