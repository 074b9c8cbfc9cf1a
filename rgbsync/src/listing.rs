//! Device listing via `openrgb --list-devices`.
//!
//! The tool prints one block per device:
//!
//! ```text
//! 0: Corsair Vengeance Pro RGB
//!   Type:           DRAM
//!   Location:       I2C: /dev/i2c-1, address 0x5A
//! [i2c] bus scan finished
//! 1: B550M AORUS ELITE
//!   Type:           Motherboard
//! ```
//!
//! Bracketed lines are log noise from the tool and are ignored.

use log::trace;

use crate::error::{Error, Result};
use crate::host::CommandRunner;

/// Argument that makes the external tool list its devices.
pub const LIST_DEVICES_ARG: &str = "--list-devices";

/// One device block from the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ListedDevice {
    /// Index as printed by the tool.
    pub index: String,
    /// Device name.
    pub name: String,
    /// Detail lines that followed the header, trimmed.
    pub details: Vec<String>,
}

/// Parse `--list-devices` output into device blocks.
pub fn parse_device_list(output: &str) -> Vec<ListedDevice> {
    let mut devices: Vec<ListedDevice> = Vec::new();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('[') {
            continue;
        }

        if line.starts_with(|c: char| c.is_ascii_digit()) {
            match line.split_once(": ") {
                Some((index, name)) => devices.push(ListedDevice {
                    index: index.to_string(),
                    name: name.to_string(),
                    details: Vec::new(),
                }),
                None => trace!("Skipping malformed device header: {line}"),
            }
            continue;
        }

        match devices.last_mut() {
            Some(device) => device.details.push(line.to_string()),
            None => trace!("Skipping line before first device: {line}"),
        }
    }

    devices
}

/// Run the listing subcommand and parse its output.
pub fn list_devices<R: CommandRunner + ?Sized>(
    runner: &mut R,
    program: &str,
) -> Result<Vec<ListedDevice>> {
    let output = runner
        .run(program, &[LIST_DEVICES_ARG.to_string()])
        .map_err(|source| Error::Launch {
            program: program.to_string(),
            source,
        })?;

    if !output.success() {
        return Err(Error::ListFailed {
            status: output.code,
        });
    }

    Ok(parse_device_list(&output.stdout))
}
