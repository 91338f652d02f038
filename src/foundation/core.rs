use glam::Vec3;

/// Game ticks per second assumed by every per-tick speed in fieldfx.
pub const TICKS_PER_SECOND: u32 = 20;

/// Convert a tick count to seconds at [`TICKS_PER_SECOND`].
pub fn ticks_to_secs(ticks: u64) -> f64 {
    ticks as f64 / f64::from(TICKS_PER_SECOND)
}

/// World time in ticks, with a fractional `partial_tick` for render interpolation.
pub fn world_time(ticks: u64, partial_tick: f32) -> f32 {
    ticks as f32 + partial_tick.clamp(0.0, 1.0)
}

/// Lowercase a config identifier and drop `_`, `-`, `.` and spaces.
///
/// `"Ease-Out_Back"`, `"easeOutBack"` and `"EASE OUT BACK"` all normalize to `"easeoutback"`.
pub(crate) fn normalize_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | '.' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Principal axis used by rotational and directional channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Axis {
    /// World X.
    X,
    /// World Y.
    #[default]
    Y,
    /// World Z.
    Z,
}

impl Axis {
    /// Unit vector for this axis.
    pub fn vector(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }

    /// Two unit vectors spanning the plane perpendicular to this axis.
    ///
    /// The pair is right-handed: `a.cross(b) == self.vector()`.
    pub fn basis(self) -> (Vec3, Vec3) {
        match self {
            Self::X => (Vec3::Y, Vec3::Z),
            Self::Y => (Vec3::Z, Vec3::X),
            Self::Z => (Vec3::X, Vec3::Y),
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }

    /// Lenient lookup; unknown names fall back to [`Axis::Y`].
    pub fn from_name(raw: &str) -> Self {
        match normalize_name(raw).as_str() {
            "x" | "xaxis" => Self::X,
            "y" | "yaxis" => Self::Y,
            "z" | "zaxis" => Self::Z,
            _ => {
                tracing::warn!(value = raw, "unknown axis, falling back to y");
                Self::Y
            }
        }
    }
}

impl From<String> for Axis {
    fn from(raw: String) -> Self {
        Self::from_name(&raw)
    }
}

impl From<Axis> for String {
    fn from(axis: Axis) -> Self {
        axis.name().to_owned()
    }
}

/// Opaque 8-bit RGB color.
///
/// Serialized as `#rrggbb`. Unparseable strings fall back to white.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Build a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from `0xRRGGBB`.
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Pack into `0xRRGGBB`.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse `#rrggbb`, `rrggbb` or `0xrrggbb`.
    pub fn parse_hex(raw: &str) -> Option<Self> {
        let s = raw.trim();
        let s = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(s, 16).ok().map(Self::from_u32)
    }

    /// `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.to_u32())
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<String> for Rgb {
    fn from(raw: String) -> Self {
        Self::parse_hex(&raw).unwrap_or_else(|| {
            tracing::warn!(value = %raw, "unparseable color, falling back to white");
            Self::WHITE
        })
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
