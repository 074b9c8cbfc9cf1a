//! Effect demo command implementation.

use anyhow::{Context, Result};
use console::style;
use rgbsync::{
    CommandRunner, Confirmation, DemoObserver, DemoSequencer, Device, DeviceRegistry,
    DeviceResult, EffectRun, SyncOutcome, resolve_color,
};
use rust_i18n::t;
use std::io::{self, Write as _};

use super::sync::{StatusPrinter, print_rule};
use crate::config::Settings;
use crate::icon;

/// Renders demo progress on stderr.
struct DemoPrinter {
    status: StatusPrinter,
}

impl DemoObserver for DemoPrinter {
    fn effect_started(&mut self, effect: &str) {
        eprintln!(
            "\n{} {}",
            icon("🎭", "#"),
            style(t!("demo.effect", effect = effect)).bold()
        );
        self.status = StatusPrinter::new(DeviceRegistry::default(), false);
    }

    fn device_done(&mut self, device: &Device, result: &DeviceResult) {
        self.status.device_done(device, result);
    }

    fn effect_finished(&mut self, _effect: &str, run: &EffectRun) {
        let outcome = match run {
            EffectRun::Synced(report) => report.outcome(),
            EffectRun::ModeOnly(results) => SyncOutcome::from_counts(
                results.iter().filter(|(_, r)| r.success).count(),
                results.len(),
            ),
        };
        StatusPrinter::summary(outcome);
    }

    fn awaiting_confirmation(&mut self, _effect: &str) {
        eprint!("   {} {}", icon("⌨️ ", ">"), t!("demo.next"));
        let _ = io::stderr().flush();
    }
}

/// Walk through the demo effects, pausing for Enter between them.
pub(crate) fn cmd_demo(
    runner: &mut dyn CommandRunner,
    confirm: &mut dyn Confirmation,
    settings: &Settings,
) -> Result<()> {
    let hex = resolve_color(&settings.demo_color);

    eprintln!("{} {}", icon("🎪", "#"), style(t!("demo.header")).bold());
    print_rule('=');

    let mut printer = DemoPrinter {
        status: StatusPrinter::new(DeviceRegistry::default(), false),
    };
    let mut demo = DemoSequencer::new(DeviceRegistry::default(), &settings.program, &hex);
    demo.run(runner, confirm, &mut printer)
        .context(t!("error.demo_aborted").to_string())?;

    eprintln!("\n{} {}", icon("✨", "=>"), t!("demo.finished"));
    Ok(())
}
