//! Device listing command implementation.

use anyhow::Result;
use console::style;
use log::debug;
use rgbsync::{CommandRunner, ListedDevice, list_devices};
use rust_i18n::t;

use crate::config::Settings;
use crate::icon;

/// List devices reported by the external tool.
///
/// Listing failures are reported on stderr and do not fail the process.
pub(crate) fn cmd_list(
    runner: &mut dyn CommandRunner,
    settings: &Settings,
    json: bool,
) -> Result<()> {
    let devices = match list_devices(runner, &settings.program) {
        Ok(devices) => devices,
        Err(e) => {
            debug!("Listing failed: {e}");
            eprintln!(
                "{} {}",
                style(icon("❌", "Error:")).red(),
                style(t!("list.failed")).red()
            );
            return Ok(());
        },
    };

    if json {
        let output = serde_json::json!({
            "ok": true,
            "data": {
                "devices": devices,
            }
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    eprintln!(
        "{} {}",
        icon("📋", "#"),
        style(t!("list.header")).bold().underlined()
    );
    eprintln!("{}", style("=".repeat(40)).dim());

    if devices.is_empty() {
        eprintln!("  {}", style(t!("list.empty")).dim());
    }
    for device in &devices {
        print_device(device);
    }

    Ok(())
}

fn print_device(device: &ListedDevice) {
    eprintln!(
        "\n{} {}",
        style(icon("🔸", "*")).yellow(),
        style(t!("list.device", index = &device.index, name = &device.name)).cyan()
    );
    for detail in &device.details {
        eprintln!("   {detail}");
    }
}
