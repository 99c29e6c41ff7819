use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A solid RGB color.
///
/// This is the one color identity used everywhere: palette entries, progress
/// keys and recorded paint events. Alpha never participates in color
/// identity, so it is not part of the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }
}

/// The compact `"r,g,b"` form used as a key in the persisted progress map.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Error)]
#[error("invalid color key {0:?}, expected \"r,g,b\"")]
pub struct ParseColorError(String);

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parses the wire key form. Exactly three comma-separated byte values,
    /// nothing else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(|part| part.parse::<u8>());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) => Ok(Rgb::new(r, g, b)),
            _ => Err(ParseColorError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trip() {
        let color = Rgb::new(128, 0, 7);
        assert_eq!(color.to_string(), "128,0,7");
        assert_eq!("128,0,7".parse::<Rgb>().unwrap(), color);
    }

    #[test]
    fn rejects_malformed_keys() {
        for bad in ["", "1,2", "1,2,3,4", "256,0,0", "a,b,c", "1, 2, 3", "rgb(1,2,3)"] {
            assert!(bad.parse::<Rgb>().is_err(), "accepted {bad:?}");
        }
    }
}
