const BASE_PALETTE: [(u8, u8, u8); 30] = [
    (31, 119, 180),
    (255, 127, 14),
    (44, 160, 44),
    (214, 39, 40),
    (148, 103, 189),
    (140, 86, 75),
    (227, 119, 194),
    (127, 127, 127),
    (188, 189, 34),
    (23, 190, 207),
    (174, 199, 232),
    (255, 187, 120),
    (152, 223, 138),
    (255, 152, 150),
    (197, 176, 213),
    (196, 156, 148),
    (247, 182, 210),
    (199, 199, 199),
    (219, 219, 141),
    (158, 218, 229),
    (255, 255, 51),
    (0, 128, 128),
    (128, 0, 128),
    (255, 165, 0),
    (0, 255, 0),
    (128, 128, 128),
    (255, 20, 147),
    (75, 0, 130),
    (255, 69, 0),
    (0, 191, 255),
];

/// Each pass over the base palette shifts every channel by this fraction of full scale.
const CYCLE_SHIFT: f64 = 0.2;

/// Default categorical color for the `index`-th item.
///
/// Indices past the base palette wrap around with every channel shifted (mod 256), so long
/// series keep distinct neighbours.
pub(crate) fn palette_color(index: usize) -> String {
    let (r, g, b) = BASE_PALETTE[index % BASE_PALETTE.len()];
    let cycle = (index / BASE_PALETTE.len()) as f64;
    let shift = |c: u8| ((f64::from(c) + cycle * CYCLE_SHIFT * 255.0) % 256.0) as u8;
    rgb_to_hex(shift(r), shift(g), shift(b))
}

fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}
