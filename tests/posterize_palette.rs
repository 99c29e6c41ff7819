use color_by_number::palette::{extract_palette, PALETTE_CAP};
use color_by_number::posterize::posterize;
use color_by_number::{PixelBuffer, Rgb};

// Helper to build a buffer from an explicit pixel list (alpha 255)
fn buffer_from_pixels(width: u32, height: u32, pixels: &[(u8, u8, u8)]) -> PixelBuffer {
    assert_eq!(pixels.len(), (width * height) as usize);
    let mut data = Vec::with_capacity(pixels.len() * 4);
    for &(r, g, b) in pixels {
        data.extend_from_slice(&[r, g, b, 255]);
    }
    PixelBuffer::new(width, height, data)
}

fn sample_buffer() -> PixelBuffer {
    buffer_from_pixels(
        3,
        2,
        &[
            (200, 0, 0),
            (10, 10, 10),
            (255, 255, 255),
            (13, 77, 201),
            (128, 128, 128),
            (1, 254, 99),
        ],
    )
}

#[test]
fn posterize_is_idempotent() {
    for levels in [1, 2, 3, 6, 7, 32] {
        let mut once = sample_buffer();
        posterize(&mut once, levels);

        let mut twice = once.clone();
        posterize(&mut twice, levels);

        assert_eq!(once, twice, "levels = {levels}");
    }
}

#[test]
fn posterized_channels_sit_on_the_quantized_lattice() {
    for levels in 1..=32u8 {
        let mut buffer = sample_buffer();
        posterize(&mut buffer, levels);

        let step = 256u16 / u16::from(levels);
        for color in buffer.pixels() {
            for channel in [color.r, color.g, color.b] {
                assert_eq!(
                    u16::from(channel) % step,
                    0,
                    "channel {channel} off the lattice for levels = {levels}"
                );
            }
        }
    }
}

#[test]
fn two_pixel_worked_example() {
    // 2x1 image, L=2 (step = 128): (200,0,0) -> (128,0,0), (10,10,10) -> (0,0,0)
    let mut buffer = buffer_from_pixels(2, 1, &[(200, 0, 0), (10, 10, 10)]);
    posterize(&mut buffer, 2);

    assert_eq!(buffer.rgb_at(0, 0), Some(Rgb::new(128, 0, 0)));
    assert_eq!(buffer.rgb_at(1, 0), Some(Rgb::new(0, 0, 0)));

    let palette = extract_palette(&buffer, PALETTE_CAP);
    assert_eq!(palette, vec![Rgb::new(128, 0, 0), Rgb::new(0, 0, 0)]);
}

#[test]
fn posterize_leaves_alpha_alone() {
    let mut buffer = PixelBuffer::new(2, 1, vec![200, 150, 100, 7, 50, 60, 70, 200]);
    posterize(&mut buffer, 4);

    let bytes = buffer.as_rgba_bytes();
    assert_eq!(bytes[3], 7);
    assert_eq!(bytes[7], 200);
}

#[test]
fn palette_keeps_first_seen_order_without_duplicates() {
    let a = (10, 20, 30);
    let b = (40, 50, 60);
    let c = (70, 80, 90);
    let buffer = buffer_from_pixels(5, 1, &[a, b, a, c, b]);

    let palette = extract_palette(&buffer, PALETTE_CAP);
    assert_eq!(
        palette,
        vec![
            Rgb::new(10, 20, 30),
            Rgb::new(40, 50, 60),
            Rgb::new(70, 80, 90),
        ]
    );
}

#[test]
fn palette_is_capped_at_the_display_limit() {
    // 20 distinct colors; only the first 12 in row-major order survive
    let pixels: Vec<(u8, u8, u8)> = (0..20u8).map(|i| (i, 0, 0)).collect();
    let buffer = buffer_from_pixels(5, 4, &pixels);

    let palette = extract_palette(&buffer, PALETTE_CAP);
    assert_eq!(palette.len(), PALETTE_CAP);
    let expected: Vec<Rgb> = (0..PALETTE_CAP as u8).map(|i| Rgb::new(i, 0, 0)).collect();
    assert_eq!(palette, expected);
}
