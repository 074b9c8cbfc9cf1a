//! Sync command implementation and the shared device status printer.

use console::style;
use rgbsync::{
    CommandRunner, Device, DeviceKind, DeviceRegistry, DeviceResult, SyncOutcome, SyncRequest,
    resolve_color, sync_all,
};
use rust_i18n::t;

use crate::config::Settings;
use crate::icon;

/// Width of the separator lines around the sync banner.
const RULE_WIDTH: usize = 55;

/// Prints one status line per device, with a heading whenever the device
/// kind changes.
pub(crate) struct StatusPrinter {
    registry: DeviceRegistry,
    last_kind: Option<DeviceKind>,
    quiet: bool,
}

impl StatusPrinter {
    pub(crate) fn new(registry: DeviceRegistry, quiet: bool) -> Self {
        Self {
            registry,
            last_kind: None,
            quiet,
        }
    }

    pub(crate) fn device_done(&mut self, device: &Device, result: &DeviceResult) {
        if self.last_kind != Some(device.kind) {
            self.last_kind = Some(device.kind);
            if !self.quiet {
                let (glyph, heading) = match device.kind {
                    DeviceKind::Memory => (icon("🧠", "*"), t!("sync.memory_group")),
                    DeviceKind::Motherboard => (icon("🌪️ ", "*"), t!("sync.motherboard_group")),
                };
                eprintln!("{glyph} {heading}");
            }
        }

        let n = self.registry.ordinal_within_kind(device);
        let error = result.error.as_deref().unwrap_or("").trim();
        let line = match (device.kind, result.success) {
            (DeviceKind::Memory, true) => t!("sync.memory_ok", n = n),
            (DeviceKind::Memory, false) => t!("sync.memory_failed", n = n, error = error),
            (DeviceKind::Motherboard, true) => t!("sync.motherboard_ok"),
            (DeviceKind::Motherboard, false) => t!("sync.motherboard_failed", error = error),
        };

        if result.success {
            eprintln!("   {} {line}", style(icon("✅", "[ok]")).green());
        } else {
            eprintln!("   {} {}", style(icon("❌", "[fail]")).red(), style(line).red());
        }
    }

    pub(crate) fn summary(outcome: SyncOutcome) {
        match outcome {
            SyncOutcome::Complete => eprintln!(
                "{} {}",
                icon("🎉", "=>"),
                style(t!("sync.complete")).green().bold()
            ),
            SyncOutcome::Partial { succeeded, total } => eprintln!(
                "{} {}",
                icon("⚠️ ", "=>"),
                style(t!("sync.partial", succeeded = succeeded, total = total))
                    .yellow()
                    .bold()
            ),
            SyncOutcome::Failed => eprintln!(
                "{} {}",
                icon("❌", "=>"),
                style(t!("sync.failed")).red().bold()
            ),
        }
    }
}

pub(crate) fn print_rule(ch: char) {
    eprintln!("{}", style(ch.to_string().repeat(RULE_WIDTH)).dim());
}

/// Apply `color` with the configured mode to every device.
///
/// Returns whether at least one device accepted the change.
pub(crate) fn cmd_sync(
    runner: &mut dyn CommandRunner,
    settings: &Settings,
    color: &str,
    quiet: bool,
) -> bool {
    let mode = settings.mode.as_str();
    let registry = DeviceRegistry::default();
    let hex = resolve_color(color);

    if !quiet {
        eprintln!(
            "{} {}",
            icon("🌈", "#"),
            style(t!("sync.header")).bold()
        );
        print_rule('=');
        eprintln!("{} {}", icon("🎯", "-"), t!("sync.color", color = color));
        eprintln!("{} {}", icon("🎭", "-"), t!("sync.mode", mode = mode));
        print_rule('-');
    }

    let request = SyncRequest {
        program: &settings.program,
        hex_color: &hex,
        mode,
    };
    let mut printer = StatusPrinter::new(registry, quiet);
    let report = sync_all(runner, &registry, &request, &mut |device, result| {
        printer.device_done(device, result);
    });

    if !quiet {
        print_rule('-');
    }
    StatusPrinter::summary(report.outcome());

    report.any_succeeded()
}
