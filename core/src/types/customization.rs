use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::str::FromStr;

use super::HexColor;

pub const DEFAULT_SIZE: NonZeroU32 = match NonZeroU32::new(200) {
    Some(size) => size,
    None => panic!("default size must be non-zero"),
};
pub const DEFAULT_MARGIN: u32 = 2;
pub const DEFAULT_DARK: HexColor = HexColor::rgb(0x1f, 0x29, 0x37);
pub const DEFAULT_LIGHT: HexColor = HexColor::WHITE;

/// Error correction level, from most capacity to most redundancy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EcLevel {
    /// ~7% recovery
    L,
    /// ~15% recovery
    #[default]
    M,
    /// ~25% recovery
    Q,
    /// ~30% recovery
    H,
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EcLevel::L => "L",
            EcLevel::M => "M",
            EcLevel::Q => "Q",
            EcLevel::H => "H",
        };
        f.write_str(s)
    }
}

impl FromStr for EcLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(EcLevel::L),
            "M" => Ok(EcLevel::M),
            "Q" => Ok(EcLevel::Q),
            "H" => Ok(EcLevel::H),
            _ => Err(format!("unknown error correction level: {s}")),
        }
    }
}

/// Shape used for data modules. Cosmetic only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModulePattern {
    #[default]
    Square,
    Circle,
    Rounded,
}

impl fmt::Display for ModulePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModulePattern::Square => write!(f, "square"),
            ModulePattern::Circle => write!(f, "circle"),
            ModulePattern::Rounded => write!(f, "rounded"),
        }
    }
}

impl FromStr for ModulePattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(ModulePattern::Square),
            "circle" => Ok(ModulePattern::Circle),
            "rounded" => Ok(ModulePattern::Rounded),
            _ => Err(format!("unknown module pattern: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub dark: HexColor,
    pub light: HexColor,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            dark: DEFAULT_DARK,
            light: DEFAULT_LIGHT,
        }
    }
}

/// Rendering options stored alongside every saved code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customization {
    /// Canvas side in pixels.
    pub size: NonZeroU32,
    pub error_correction_level: EcLevel,
    /// Quiet zone in modules.
    pub margin: u32,
    pub color: Colors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<PathBuf>,
    #[serde(default)]
    pub pattern: ModulePattern,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            error_correction_level: EcLevel::default(),
            margin: DEFAULT_MARGIN,
            color: Colors::default(),
            logo: None,
            pattern: ModulePattern::default(),
        }
    }
}
