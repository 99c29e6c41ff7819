use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::color::Rgb;

/// Key the progress log is persisted under in the host key-value store.
pub const STORAGE_KEY: &str = "colorByNumberProgress";

/// Errors from the progress save/load round trip.
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("malformed saved progress: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to serialize progress: {0}")]
    Encode(serde_json::Error),
}

/// One recorded paint action: where, and which color went there.
///
/// In paint mode the color is the user's selection; in reveal mode it is the
/// original image's color at that pixel. On the wire this is the fixed-order
/// array `[x, y, r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintEvent {
    pub x: u32,
    pub y: u32,
    pub color: Rgb,
}

impl PaintEvent {
    pub fn new(x: u32, y: u32, color: Rgb) -> Self {
        Self { x, y, color }
    }
}

impl Serialize for PaintEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(5))?;
        seq.serialize_element(&self.x)?;
        seq.serialize_element(&self.y)?;
        seq.serialize_element(&self.color.r)?;
        seq.serialize_element(&self.color.g)?;
        seq.serialize_element(&self.color.b)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for PaintEvent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EventVisitor;

        impl<'de> Visitor<'de> for EventVisitor {
            type Value = PaintEvent;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array of five integers [x, y, r, g, b]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let x: u32 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let y: u32 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let r: u8 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;
                let g: u8 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(3, &self))?;
                let b: u8 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(4, &self))?;
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom("paint event has more than five fields"));
                }
                Ok(PaintEvent::new(x, y, Rgb::new(r, g, b)))
            }
        }

        deserializer.deserialize_seq(EventVisitor)
    }
}

/// Paint events grouped by the clicked region's color.
///
/// Groups keep first-recorded order and events keep insertion order within a
/// group, so replay is deterministic: per color, then per insertion. The wire
/// format is a JSON object mapping `"r,g,b"` keys to event arrays, and the
/// map preserves group order both ways.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressLog {
    entries: Vec<(Rgb, Vec<PaintEvent>)>,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded events across all groups.
    pub fn event_count(&self) -> usize {
        self.entries.iter().map(|(_, events)| events.len()).sum()
    }

    /// Appends an event under `target`, creating the group on first use.
    /// The group count stays small (one per distinct region color), so the
    /// linear scan is fine.
    pub fn record(&mut self, target: Rgb, event: PaintEvent) {
        if let Some((_, events)) = self.entries.iter_mut().find(|(color, _)| *color == target) {
            events.push(event);
        } else {
            self.entries.push((target, vec![event]));
        }
    }

    /// The events recorded under `target`, if any.
    pub fn events(&self, target: Rgb) -> Option<&[PaintEvent]> {
        self.entries
            .iter()
            .find(|(color, _)| *color == target)
            .map(|(_, events)| events.as_slice())
    }

    /// Groups in first-recorded order.
    pub fn iter(&self) -> impl Iterator<Item = (Rgb, &[PaintEvent])> {
        self.entries
            .iter()
            .map(|(color, events)| (*color, events.as_slice()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serializes the whole log to the persisted wire form.
    pub fn to_json(&self) -> Result<String, ProgressError> {
        serde_json::to_string(self).map_err(ProgressError::Encode)
    }

    /// Parses a persisted log, rejecting anything that does not match the
    /// wire format exactly. The caller replaces its log wholesale on success
    /// and keeps its previous state on failure.
    pub fn from_json(json: &str) -> Result<Self, ProgressError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Serialize for ProgressLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (color, events) in &self.entries {
            map.serialize_entry(&color.to_string(), events)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ProgressLog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LogVisitor;

        impl<'de> Visitor<'de> for LogVisitor {
            type Value = ProgressLog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from \"r,g,b\" color keys to arrays of paint events")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut log = ProgressLog::new();
                while let Some((key, events)) = access.next_entry::<String, Vec<PaintEvent>>()? {
                    let color: Rgb = key.parse().map_err(de::Error::custom)?;
                    if log.entries.iter().any(|(existing, _)| *existing == color) {
                        return Err(de::Error::custom(format!("duplicate color key \"{color}\"")));
                    }
                    log.entries.push((color, events));
                }
                Ok(log)
            }
        }

        deserializer.deserialize_map(LogVisitor)
    }
}
