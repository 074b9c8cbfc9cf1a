//! Single-device invocations of the external control program.

use log::debug;

use crate::host::CommandRunner;

/// Outcome of one device invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeviceResult {
    /// Device index that was addressed.
    pub index: u32,
    /// Whether the program exited with code zero.
    pub success: bool,
    /// Captured stderr on failure, or the launch error text.
    pub error: Option<String>,
}

/// Arguments for setting a mode, with an optional color.
pub fn device_args(index: u32, mode: &str, color: Option<&str>) -> Vec<String> {
    let mut args = vec![
        "--device".to_string(),
        index.to_string(),
        "--mode".to_string(),
        mode.to_string(),
    ];
    if let Some(color) = color {
        args.push("--color".to_string());
        args.push(color.to_string());
    }
    args
}

/// Apply `mode` with `hex_color` to one device.
pub fn control_device<R: CommandRunner + ?Sized>(
    runner: &mut R,
    program: &str,
    index: u32,
    hex_color: &str,
    mode: &str,
) -> DeviceResult {
    invoke(runner, program, index, &device_args(index, mode, Some(hex_color)))
}

/// Apply a color-independent `mode` to one device.
pub fn set_mode<R: CommandRunner + ?Sized>(
    runner: &mut R,
    program: &str,
    index: u32,
    mode: &str,
) -> DeviceResult {
    invoke(runner, program, index, &device_args(index, mode, None))
}

fn invoke<R: CommandRunner + ?Sized>(
    runner: &mut R,
    program: &str,
    index: u32,
    args: &[String],
) -> DeviceResult {
    match runner.run(program, args) {
        Ok(output) if output.success() => DeviceResult {
            index,
            success: true,
            error: None,
        },
        Ok(output) => {
            debug!("Device {index} failed with exit code {:?}", output.code);
            DeviceResult {
                index,
                success: false,
                error: Some(output.stderr),
            }
        },
        Err(e) => {
            debug!("Device {index}: could not launch {program}: {e}");
            DeviceResult {
                index,
                success: false,
                error: Some(e.to_string()),
            }
        },
    }
}
