//! The fixed set of devices the tool drives.
//!
//! Indices are the ones `openrgb --list-devices` reports on the target
//! machine: two Corsair Vengeance Pro RGB modules and the B550M AORUS ELITE
//! header that the case fans hang off.

/// Category of a registered device, used to group status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeviceKind {
    /// RGB memory module.
    Memory,
    /// Motherboard RGB controller, including the fan headers.
    Motherboard,
}

/// A logical device and the index the external tool knows it by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Device {
    /// Logical name (`memory1`, `memory2`, `motherboard`).
    pub name: &'static str,
    /// Index passed to `--device`.
    pub index: u32,
    /// Device category.
    pub kind: DeviceKind,
}

/// Registered devices in update order: memory first, motherboard last.
const DEFAULT_DEVICES: &[Device] = &[
    Device {
        name: "memory1",
        index: 0,
        kind: DeviceKind::Memory,
    },
    Device {
        name: "memory2",
        index: 1,
        kind: DeviceKind::Memory,
    },
    Device {
        name: "motherboard",
        index: 2,
        kind: DeviceKind::Motherboard,
    },
];

/// Ordered, immutable name-to-index registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceRegistry {
    devices: &'static [Device],
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self {
            devices: DEFAULT_DEVICES,
        }
    }
}

impl DeviceRegistry {
    /// Build a registry over a static device table.
    pub const fn new(devices: &'static [Device]) -> Self {
        Self { devices }
    }

    /// Devices in update order.
    pub fn devices(&self) -> &'static [Device] {
        self.devices
    }

    /// Index of a device by logical name.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<u32> {
        self.devices
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.index)
    }

    /// Number of registered devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Position of a device among those of the same kind, starting at 1.
    ///
    /// Used for labels like "memory 2".
    pub fn ordinal_within_kind(&self, device: &Device) -> usize {
        self.devices
            .iter()
            .filter(|d| d.kind == device.kind)
            .position(|d| d == device)
            .map_or(0, |p| p + 1)
    }
}
