//! rgbsync CLI - Apply one color or effect to every OpenRGB device at once.
//!
//! ## Features
//!
//! - Sync a color name or hex code across memory modules and motherboard
//! - List devices detected by OpenRGB (optionally as JSON)
//! - Interactive effect demo
//! - Shell completion generation
//! - Environment variable and config file support
//! - Internationalization (i18n) support

use anyhow::Result;
use clap::{FromArgMatches, Parser};
use clap_complete::Shell;
use env_logger::Env;
use log::debug;
use rgbsync::{CommandRunner, Confirmation, StdinConfirmation, SystemRunner, is_elevated};
use rust_i18n::t;
use std::env;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

mod commands;
mod config;
mod help;

use config::{Config, Settings};

// Initialize i18n with locale files from the locales directory
rust_i18n::i18n!("locales", fallback = "en");

/// Whether stderr is a terminal (set once at startup).
static STDERR_IS_TTY: AtomicBool = AtomicBool::new(true);

/// Check if emoji should be used (TTY and colors enabled).
fn use_fancy_output() -> bool {
    STDERR_IS_TTY.load(Ordering::Relaxed) && console::colors_enabled_stderr()
}

/// Pick the emoji or its plain-text stand-in.
pub(crate) fn icon(fancy: &'static str, plain: &'static str) -> &'static str {
    if use_fancy_output() { fancy } else { plain }
}

/// Errors that end the process with a non-zero status.
#[derive(Debug, Error)]
enum CliError {
    /// The process lacks the privileges OpenRGB needs for SMBus access.
    #[error("{0}")]
    NotElevated(String),
}

/// rgbsync - Apply one color or effect to every OpenRGB device at once.
///
/// Environment variables:
///   RGBSYNC_PROGRAM  - Path to the openrgb executable
///   RGBSYNC_LANG     - Language/locale (en, pt-BR)
#[derive(Parser, Debug)]
#[command(name = "rgbsync")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Color name or hex code to apply (e.g. red, '#FF6500').
    color: Option<String>,

    /// Lighting mode/effect [default: Static].
    #[arg(short, long)]
    mode: Option<String>,

    /// List devices detected by OpenRGB and exit.
    #[arg(long)]
    list: bool,

    /// Walk through the built-in effects and exit.
    #[arg(long)]
    demo: bool,

    /// Print the device list as JSON to stdout (with --list).
    #[arg(long, requires = "list")]
    json: bool,

    /// Path to the openrgb executable.
    #[arg(long, value_name = "PATH", env = "RGBSYNC_PROGRAM")]
    program: Option<String>,

    /// Path to a configuration file.
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,

    /// Language/locale for messages (e.g., en, pt-BR).
    #[arg(long, env = "RGBSYNC_LANG")]
    lang: Option<String>,

    /// Verbose output level (-v, -vv for increasing detail).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-essential output).
    #[arg(short, long)]
    quiet: bool,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

/// An action that talks to the devices and therefore needs privileges.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DeviceAction {
    List { json: bool },
    Demo,
    Sync { color: String },
}

impl Cli {
    /// Selected device action; `None` means there is nothing to do.
    ///
    /// `--list` wins over `--demo`, and both ignore the color and mode.
    fn device_action(&self) -> Option<DeviceAction> {
        if self.list {
            Some(DeviceAction::List { json: self.json })
        } else if self.demo {
            Some(DeviceAction::Demo)
        } else {
            self.color
                .clone()
                .map(|color| DeviceAction::Sync { color })
        }
    }
}

fn main() -> Result<()> {
    let raw_args: Vec<String> = env::args().collect();
    let locale = help::early_locale(&raw_args).unwrap_or_else(help::detect_locale);
    rust_i18n::set_locale(&locale);

    let stderr_is_tty = console::Term::stderr().is_term();
    STDERR_IS_TTY.store(stderr_is_tty, Ordering::Relaxed);

    if env::var("NO_COLOR").is_ok() || !stderr_is_tty {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let mut command = help::build_command();
    let matches = command.get_matches_mut();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let locale = cli.lang.as_deref().map_or(locale, help::match_locale);
    rust_i18n::set_locale(&locale);

    // Setup logging based on verbosity
    let log_level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_target(cli.verbose >= 2)
        .format_timestamp(if cli.verbose >= 2 {
            Some(env_logger::TimestampPrecision::Millis)
        } else {
            None
        })
        .init();

    debug!(
        "rgbsync v{} (locale: {locale}, verbose level: {})",
        env!("CARGO_PKG_VERSION"),
        cli.verbose
    );

    if let Some(shell) = cli.completions {
        commands::completions::cmd_completions(shell);
        return Ok(());
    }

    let Some(action) = cli.device_action() else {
        command.print_help()?;
        return Ok(());
    };

    let config = if let Some(ref path) = cli.config_path {
        Config::load_from_path(path)
    } else {
        Config::load()
    };
    let settings = Settings::resolve(&cli, &config);
    debug!("Using {settings:?}");

    let mut runner = SystemRunner;
    let mut confirm = StdinConfirmation::stdin();
    dispatch(
        &action,
        &settings,
        cli.quiet,
        is_elevated(),
        &mut runner,
        &mut confirm,
    )
}

/// Run a device action after checking privileges.
fn dispatch(
    action: &DeviceAction,
    settings: &Settings,
    quiet: bool,
    elevated: bool,
    runner: &mut dyn CommandRunner,
    confirm: &mut dyn Confirmation,
) -> Result<()> {
    if !elevated {
        return Err(CliError::NotElevated(t!("error.not_root").to_string()).into());
    }

    match action {
        DeviceAction::List { json } => commands::list::cmd_list(runner, settings, *json)?,
        DeviceAction::Demo => commands::demo::cmd_demo(runner, confirm, settings)?,
        DeviceAction::Sync { color } => {
            let any = commands::sync::cmd_sync(runner, settings, color, quiet);
            debug!("Sync finished, any device succeeded: {any}");
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rgbsync::CommandOutput;
    use std::io;

    #[derive(Default)]
    struct Recording {
        calls: Vec<Vec<String>>,
    }

    impl CommandRunner for Recording {
        fn run(&mut self, _program: &str, args: &[String]) -> io::Result<CommandOutput> {
            self.calls.push(args.to_vec());
            Ok(CommandOutput {
                code: Some(0),
                stdout: "0: Corsair Vengeance Pro RGB\n  Type: DRAM\n".to_string(),
                stderr: String::new(),
            })
        }
    }

    /// Fails the test if the demo ever blocks.
    struct NeverConfirm;

    impl Confirmation for NeverConfirm {
        fn wait_for_confirmation(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::UnexpectedEof.into())
        }
    }

    struct Always;

    impl Confirmation for Always {
        fn wait_for_confirmation(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["rgbsync"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    fn settings() -> Settings {
        Settings {
            program: "openrgb".to_string(),
            mode: "Static".to_string(),
            demo_color: "red".to_string(),
        }
    }

    #[test]
    fn test_cli_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse_color() {
        let cli = parse(&["blue"]);
        assert_eq!(
            cli.device_action(),
            Some(DeviceAction::Sync {
                color: "blue".to_string()
            })
        );
        assert!(cli.mode.is_none());
    }

    #[test]
    fn test_cli_parse_hex_color_and_mode() {
        let cli = parse(&["#ff6500", "--mode", "Breathing"]);
        assert_eq!(cli.color.as_deref(), Some("#ff6500"));
        assert_eq!(cli.mode.as_deref(), Some("Breathing"));
    }

    #[test]
    fn test_cli_no_args_has_no_action() {
        assert_eq!(parse(&[]).device_action(), None);
    }

    #[test]
    fn test_cli_list_ignores_color() {
        let cli = parse(&["red", "--list"]);
        assert_eq!(cli.device_action(), Some(DeviceAction::List { json: false }));
    }

    #[test]
    fn test_cli_demo_ignores_color_and_mode() {
        let cli = parse(&["red", "--mode", "Breathing", "--demo"]);
        assert_eq!(cli.device_action(), Some(DeviceAction::Demo));
    }

    #[test]
    fn test_cli_list_wins_over_demo() {
        let cli = parse(&["--demo", "--list"]);
        assert_eq!(cli.device_action(), Some(DeviceAction::List { json: false }));
    }

    #[test]
    fn test_cli_json_requires_list() {
        assert!(Cli::try_parse_from(["rgbsync", "--json"]).is_err());
        let cli = parse(&["--list", "--json"]);
        assert_eq!(cli.device_action(), Some(DeviceAction::List { json: true }));
    }

    #[test]
    fn test_cli_default_values() {
        let cli = parse(&[]);
        assert!(!cli.list);
        assert!(!cli.demo);
        assert!(!cli.quiet);
        assert!(cli.config_path.is_none());
        assert!(cli.completions.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_completions_shell() {
        let cli = parse(&["--completions", "bash"]);
        assert!(matches!(cli.completions, Some(Shell::Bash)));
    }

    #[test]
    fn test_dispatch_without_privilege_runs_nothing() {
        for action in [
            DeviceAction::Sync {
                color: "red".to_string(),
            },
            DeviceAction::List { json: false },
            DeviceAction::Demo,
        ] {
            let mut runner = Recording::default();
            let result = dispatch(
                &action,
                &settings(),
                true,
                false,
                &mut runner,
                &mut NeverConfirm,
            );
            let err = result.unwrap_err();
            assert!(err.downcast_ref::<CliError>().is_some());
            assert!(runner.calls.is_empty(), "{action:?} ran {:?}", runner.calls);
        }
    }

    #[test]
    fn test_dispatch_sync_invokes_each_device() {
        let mut runner = Recording::default();
        dispatch(
            &DeviceAction::Sync {
                color: "#00ff00".to_string(),
            },
            &settings(),
            true,
            true,
            &mut runner,
            &mut NeverConfirm,
        )
        .unwrap();

        assert_eq!(runner.calls.len(), 3);
        for (i, call) in runner.calls.iter().enumerate() {
            assert_eq!(
                *call,
                [
                    "--device".to_string(),
                    i.to_string(),
                    "--mode".to_string(),
                    "Static".to_string(),
                    "--color".to_string(),
                    "00FF00".to_string(),
                ]
            );
        }
    }

    #[test]
    fn test_dispatch_list_runs_listing_once() {
        let mut runner = Recording::default();
        dispatch(
            &DeviceAction::List { json: false },
            &settings(),
            true,
            true,
            &mut runner,
            &mut NeverConfirm,
        )
        .unwrap();
        assert_eq!(runner.calls, [vec!["--list-devices".to_string()]]);
    }

    #[test]
    fn test_dispatch_demo_runs_all_effects() {
        let mut runner = Recording::default();
        dispatch(
            &DeviceAction::Demo,
            &settings(),
            true,
            true,
            &mut runner,
            &mut Always,
        )
        .unwrap();
        assert_eq!(runner.calls.len(), 12);
    }

    #[test]
    fn test_dispatch_demo_stops_when_input_closes() {
        let mut runner = Recording::default();
        let result = dispatch(
            &DeviceAction::Demo,
            &settings(),
            true,
            true,
            &mut runner,
            &mut NeverConfirm,
        );
        assert!(result.is_err());
        // Only the first effect was applied.
        assert_eq!(runner.calls.len(), 3);
    }
}
