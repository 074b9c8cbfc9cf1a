//! Apply one color and mode to every registered device.

use crate::device::{Device, DeviceRegistry};
use crate::host::CommandRunner;
use crate::invoke::{DeviceResult, control_device};

/// Aggregate result of a sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "outcome"))]
pub enum SyncOutcome {
    /// Every device accepted the change.
    Complete,
    /// Some devices accepted the change.
    Partial {
        /// Devices that succeeded.
        succeeded: usize,
        /// Devices attempted.
        total: usize,
    },
    /// No device accepted the change.
    Failed,
}

impl SyncOutcome {
    /// Classify a success count.
    pub fn from_counts(succeeded: usize, total: usize) -> Self {
        if succeeded == total && total > 0 {
            Self::Complete
        } else if succeeded > 0 {
            Self::Partial { succeeded, total }
        } else {
            Self::Failed
        }
    }
}

/// Per-device results of a sync run, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SyncReport {
    /// One entry per registered device.
    pub results: Vec<(Device, DeviceResult)>,
}

impl SyncReport {
    /// Number of devices that succeeded.
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.success).count()
    }

    /// Number of devices attempted.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Aggregate outcome.
    pub fn outcome(&self) -> SyncOutcome {
        SyncOutcome::from_counts(self.succeeded(), self.total())
    }

    /// True if at least one device succeeded.
    pub fn any_succeeded(&self) -> bool {
        self.succeeded() > 0
    }
}

/// What to apply during a sync run.
#[derive(Debug, Clone, Copy)]
pub struct SyncRequest<'a> {
    /// External program to invoke.
    pub program: &'a str,
    /// Resolved hex color.
    pub hex_color: &'a str,
    /// Mode/effect name.
    pub mode: &'a str,
}

/// Apply `request` to every device in `registry`, one at a time.
///
/// `on_device` is called after each device with its result. A failing device
/// never stops the loop.
pub fn sync_all<R: CommandRunner + ?Sized>(
    runner: &mut R,
    registry: &DeviceRegistry,
    request: &SyncRequest<'_>,
    on_device: &mut dyn FnMut(&Device, &DeviceResult),
) -> SyncReport {
    let mut results = Vec::with_capacity(registry.len());

    for device in registry.devices() {
        let result = control_device(
            runner,
            request.program,
            device.index,
            request.hex_color,
            request.mode,
        );
        on_device(device, &result);
        results.push((*device, result));
    }

    SyncReport { results }
}
