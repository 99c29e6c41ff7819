use crate::buffer::PixelBuffer;

/// Bounds the UI enforces on the level-count control.
pub const MIN_LEVELS: u8 = 2;
pub const MAX_LEVELS: u8 = 32;
pub const DEFAULT_LEVELS: u8 = 6;

/// Quantizes every R, G and B sample down to `levels` evenly spaced values,
/// leaving alpha untouched.
///
/// Each channel value `v` becomes `(v / step) * step` with
/// `step = 256 / levels`. Deterministic and idempotent for a fixed `levels`.
/// `levels` must be positive; the session clamps the control to
/// [`MIN_LEVELS`]..=[`MAX_LEVELS`] before calling in.
pub fn posterize(buffer: &mut PixelBuffer, levels: u8) {
    debug_assert!(levels >= 1, "level count must be positive");
    let step = 256u16 / u16::from(levels);
    for px in buffer.as_rgba_bytes_mut().chunks_exact_mut(4) {
        for channel in &mut px[..3] {
            *channel = (u16::from(*channel) / step * step) as u8;
        }
    }
}
