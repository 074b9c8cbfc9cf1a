//! # rgbsync
//!
//! A library for applying one color or effect to every RGB device on a
//! machine by driving the [OpenRGB](https://openrgb.org) command-line tool.
//!
//! This crate provides:
//!
//! - Color name / hex code resolution
//! - The fixed device registry (two memory modules and the motherboard)
//! - Per-device invocation of `openrgb --device N --mode M --color RRGGBB`
//! - Sync-all orchestration with partial-failure reporting
//! - Parsing of `openrgb --list-devices` output
//! - An interactive effect demo
//!
//! All process launching and user interaction goes through the traits in
//! [`host`], so every operation can be exercised without OpenRGB installed.
//!
//! ## Features
//!
//! - `serde`: Serialization support for data types
//!
//! ## Example
//!
//! ```rust,no_run
//! use rgbsync::{DeviceRegistry, SyncRequest, SystemRunner, resolve_color, sync_all};
//!
//! let hex = resolve_color("purple");
//! let request = SyncRequest {
//!     program: "openrgb",
//!     hex_color: &hex,
//!     mode: "Static",
//! };
//! let report = sync_all(
//!     &mut SystemRunner,
//!     &DeviceRegistry::default(),
//!     &request,
//!     &mut |device, result| println!("{}: {}", device.name, result.success),
//! );
//! println!("{:?}", report.outcome());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod demo;
pub mod device;
pub mod error;
pub mod host;
pub mod invoke;
pub mod listing;
pub mod sync;

// Re-exports for convenience
pub use {
    color::{ColorName, ColorSpec, FALLBACK_HEX, HexColor, resolve_color},
    demo::{DEMO_EFFECTS, DemoObserver, DemoSequencer, DemoState, EffectRun},
    device::{Device, DeviceKind, DeviceRegistry},
    error::{Error, Result},
    host::{
        CommandOutput, CommandRunner, Confirmation, DEFAULT_PROGRAM, LineConfirmation,
        StdinConfirmation, SystemRunner, is_elevated,
    },
    invoke::{DeviceResult, control_device, set_mode},
    listing::{ListedDevice, list_devices, parse_device_list},
    sync::{SyncOutcome, SyncReport, SyncRequest, sync_all},
};
