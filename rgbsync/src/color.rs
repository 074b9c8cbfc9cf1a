//! Color name and hex code resolution.
//!
//! Every color reaches the external tool as six uppercase hex digits without
//! a leading `#`. Input is either one of the [`ColorName`]s or a literal hex
//! code starting with `#`.
//!
//! Resolution never fails:
//!
//! - `#00ff00` -> `00FF00` (digits are not checked, the tool validates them)
//! - `Red` -> `FF0000` (names are case-insensitive)
//! - `mauve` -> `FFFFFF` (unknown names fall back to white)

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use log::debug;

/// Hex value used when a color name is not recognized.
pub const FALLBACK_HEX: &str = "FFFFFF";

/// Colors that can be requested by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorName {
    /// `FF0000`.
    Red,
    /// `00FF00`.
    Green,
    /// `0000FF`.
    Blue,
    /// `FFFFFF`.
    White,
    /// `800080`.
    Purple,
    /// `FFFF00`.
    Yellow,
    /// `00FFFF`.
    Cyan,
    /// `FF6500`.
    Orange,
    /// `FF69B4`.
    Pink,
    /// `000000`, lights off.
    Off,
}

/// Name/value table in the order the names are presented to users.
const COLOR_TABLE: &[(ColorName, &str, &str)] = &[
    (ColorName::Red, "red", "FF0000"),
    (ColorName::Green, "green", "00FF00"),
    (ColorName::Blue, "blue", "0000FF"),
    (ColorName::White, "white", "FFFFFF"),
    (ColorName::Purple, "purple", "800080"),
    (ColorName::Yellow, "yellow", "FFFF00"),
    (ColorName::Cyan, "cyan", "00FFFF"),
    (ColorName::Orange, "orange", "FF6500"),
    (ColorName::Pink, "pink", "FF69B4"),
    (ColorName::Off, "off", "000000"),
];

impl ColorName {
    /// All known names, in presentation order.
    pub fn all() -> impl Iterator<Item = ColorName> {
        COLOR_TABLE.iter().map(|(name, _, _)| *name)
    }

    /// Look up a name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        COLOR_TABLE
            .iter()
            .find(|(_, n, _)| *n == lower)
            .map(|(color, _, _)| *color)
    }

    /// Lowercase name as typed on the command line.
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    /// Six uppercase hex digits.
    pub fn hex(self) -> &'static str {
        self.entry().2
    }

    fn entry(self) -> &'static (ColorName, &'static str, &'static str) {
        // Rows are in declaration order.
        &COLOR_TABLE[self as usize]
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hex code given literally by the user, normalized to uppercase without `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Normalize a literal hex code. A single leading `#` is removed if present.
    pub fn new(raw: &str) -> Self {
        let digits = raw.strip_prefix('#').unwrap_or(raw);
        Self(digits.to_uppercase())
    }

    /// Normalized digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parsed color argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    /// One of the built-in names.
    Named(ColorName),
    /// A literal hex code.
    Hex(HexColor),
}

impl ColorSpec {
    /// Parse user input. Unknown names become [`ColorName::White`].
    pub fn parse(input: &str) -> Self {
        if input.starts_with('#') {
            return Self::Hex(HexColor::new(input));
        }

        match ColorName::from_name(input) {
            Some(name) => Self::Named(name),
            None => {
                debug!("Unknown color name {input:?}, using {FALLBACK_HEX}");
                Self::Named(ColorName::White)
            },
        }
    }

    /// Hex digits passed to `--color`.
    pub fn hex(&self) -> &str {
        match self {
            Self::Named(name) => name.hex(),
            Self::Hex(hex) => hex.as_str(),
        }
    }
}

impl FromStr for ColorSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// Resolve any color argument to the hex string the external tool expects.
pub fn resolve_color(input: &str) -> String {
    ColorSpec::parse(input).hex().to_string()
}
