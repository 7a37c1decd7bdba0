use serde::Serialize;
use tracing::debug;

use crate::error::ConvertError;

/// Number of hex digits in an RGB color code.
const CODE_LEN: usize = 6;

/// Decimal places kept when normalizing a channel to [0, 1].
const FLOAT_PRECISION: i32 = 5;

/// How channel values are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Integers in 0..=255.
    #[default]
    Decimal,
    /// Fractions in [0, 1], rounded to five places.
    Floating,
}

/// A validated `rrggbb` color code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColorCode {
    r: u8,
    g: u8,
    b: u8,
}

/// Channel values of a color, in the representation chosen by [`OutputMode`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Channels {
    Decimal { r: u8, g: u8, b: u8 },
    Floating { r: f64, g: f64, b: f64 },
}

impl HexColorCode {
    /// Parse a 6-digit hex code. Length is counted in characters.
    pub fn parse(code: &str) -> Result<Self, ConvertError> {
        let chars: Vec<char> = code.chars().collect();
        if chars.len() != CODE_LEN {
            return Err(ConvertError::InvalidLength { len: chars.len() });
        }

        let pairs: [String; 3] = [
            chars[0..2].iter().collect(),
            chars[2..4].iter().collect(),
            chars[4..6].iter().collect(),
        ];

        let mut bytes = [0u8; 3];
        for (index, pair) in pairs.iter().enumerate() {
            // from_str_radix alone would let a leading '+' through
            let byte = pair
                .chars()
                .all(|c| c.is_ascii_hexdigit())
                .then(|| u8::from_str_radix(pair, 16).ok())
                .flatten();
            match byte {
                Some(byte) => bytes[index] = byte,
                None => {
                    return Err(ConvertError::InvalidHexDigit {
                        index,
                        pairs: pairs.clone(),
                    });
                }
            }
        }

        let [r, g, b] = bytes;
        debug!(r, g, b, "parsed hex color code");
        Ok(Self { r, g, b })
    }

    /// Channel values in the given output mode.
    pub fn channels(&self, mode: OutputMode) -> Channels {
        match mode {
            OutputMode::Decimal => Channels::Decimal {
                r: self.r,
                g: self.g,
                b: self.b,
            },
            OutputMode::Floating => Channels::Floating {
                r: normalize(self.r),
                g: normalize(self.g),
                b: normalize(self.b),
            },
        }
    }
}

impl Channels {
    /// Render as `r, g, b`. Floating values carry an `f` suffix.
    pub fn to_line(&self) -> String {
        match *self {
            Channels::Decimal { r, g, b } => format!("{r}, {g}, {b}"),
            Channels::Floating { r, g, b } => [r, g, b]
                .iter()
                .map(|v| format!("{v:?}f"))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Scale a channel byte to [0, 1], rounded to five decimal places.
pub fn normalize(value: u8) -> f64 {
    let scale = 10f64.powi(FLOAT_PRECISION);
    (f64::from(value) / 255.0 * scale).round() / scale
}

/// Convert a hex color code to its comma-separated channel line.
pub fn convert(code: &str, floating: bool) -> Result<String, ConvertError> {
    let mode = if floating {
        OutputMode::Floating
    } else {
        OutputMode::Decimal
    };
    Ok(HexColorCode::parse(code)?.channels(mode).to_line())
}

/// Convert a hex color code to a single-line JSON object of its channels.
pub fn render_json(code: &str, mode: OutputMode) -> Result<String, ConvertError> {
    let channels = HexColorCode::parse(code)?.channels(mode);
    serde_json::to_string(&channels).map_err(|e| ConvertError::Serialize(e.to_string()))
}
