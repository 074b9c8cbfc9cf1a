//! Locale selection and localized help output for the CLI.

use clap::CommandFactory;
use rgbsync::ColorName;
use rust_i18n::t;

use crate::Cli;

/// Supported locales for i18n.
pub(crate) const SUPPORTED_LOCALES: &[&str] = &["en", "pt-BR"];

/// Modes listed in the help text. OpenRGB accepts any mode the device reports.
const KNOWN_MODES: &[&str] = &[
    "Static",
    "Breathing",
    "'Rainbow Wave'",
    "'Color Pulse'",
    "'Color Shift'",
];

/// Detect the best matching locale from system settings.
pub(crate) fn detect_locale() -> String {
    let system_locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    match_locale(&system_locale)
}

/// Map a system or user locale string onto a supported locale.
///
/// - `pt_BR.UTF-8` -> `pt-BR`
/// - `pt-PT` -> `pt-BR`
/// - `en_US.UTF-8` -> `en`
/// - `C` or `POSIX` -> `en`
pub(crate) fn match_locale(locale: &str) -> String {
    // Remove encoding suffix (e.g., .UTF-8)
    let locale = locale.split('.').next().unwrap_or(locale);
    let locale = locale.replace('_', "-");

    if SUPPORTED_LOCALES.contains(&locale.as_str()) {
        return locale;
    }

    let lang_code = locale.split('-').next().unwrap_or(&locale);
    match lang_code.to_lowercase().as_str() {
        "pt" => "pt-BR".to_string(),
        _ => "en".to_string(),
    }
}

/// Find `--lang` before clap runs so help text is already localized.
pub(crate) fn early_locale(raw_args: &[String]) -> Option<String> {
    let mut found = None;
    for (i, arg) in raw_args.iter().enumerate() {
        if let Some(val) = arg.strip_prefix("--lang=") {
            found = Some(val.to_string());
        } else if arg == "--lang" && i + 1 < raw_args.len() {
            found = Some(raw_args[i + 1].clone());
        }
    }
    found
        .or_else(|| std::env::var("RGBSYNC_LANG").ok())
        .map(|l| match_locale(&l))
}

/// Text printed after the option list: colors, modes and examples.
pub(crate) fn after_help() -> String {
    let colors: Vec<&str> = ColorName::all().map(ColorName::name).collect();
    format!(
        "{colors_h}:\n  {colors}\n  {hex}\n\n\
         {modes_h}:\n  {modes}\n\n\
         {examples_h}:\n  \
         sudo rgbsync blue\n  \
         sudo rgbsync red --mode Breathing\n  \
         sudo rgbsync '#FF6500'\n  \
         sudo rgbsync --list\n  \
         sudo rgbsync --demo",
        colors_h = t!("help.colors_heading"),
        colors = colors.join(", "),
        hex = t!("help.colors_hex"),
        modes_h = t!("help.modes_heading"),
        modes = KNOWN_MODES.join(", "),
        examples_h = t!("help.examples_heading"),
    )
}

/// Build the clap `Command` with localized about and epilog.
pub(crate) fn build_command() -> clap::Command {
    Cli::command()
        .about(t!("app.about").to_string())
        .after_help(after_help())
}
