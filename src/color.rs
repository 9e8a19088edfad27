use egui::Color32;
use rand::Rng;

use crate::error::ColorParseError;

/// Near-black used by the pen.
pub const INK: Color32 = Color32::from_rgb(0x0b, 0x0b, 0x0b);

/// Near-white board background, also what the eraser paints.
pub const PAPER: Color32 = Color32::from_rgb(0xfa, 0xf9, 0xf9);

/// Exclusive upper bound of the rainbow sample.
const RAINBOW_SPAN: u32 = 0xFF_FFFF;

/// Pick a uniformly random opaque color from the 24-bit RGB space.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color32 {
    from_u24(rng.gen_range(0..RAINBOW_SPAN))
}

/// Interpret the low 24 bits of `value` as `0xRRGGBB`.
pub fn from_u24(value: u32) -> Color32 {
    let [_, r, g, b] = value.to_be_bytes();
    Color32::from_rgb(r, g, b)
}

/// Format as lowercase `#rrggbb`, always six digits.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Parse `#rrggbb` or the short `#rgb` form. The leading `#` is optional.
pub fn parse_hex(text: &str) -> Result<Color32, ColorParseError> {
    let err = || ColorParseError(text.to_owned());
    let digits = text.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(err());
    }

    match digits.len() {
        6 => {
            let value = u32::from_str_radix(digits, 16).map_err(|_| err())?;
            Ok(from_u24(value))
        }
        3 => {
            let mut channels = [0u8; 3];
            for (channel, c) in channels.iter_mut().zip(digits.chars()) {
                let nibble = c.to_digit(16).ok_or_else(err)? as u8;
                *channel = nibble * 0x11;
            }
            Ok(Color32::from_rgb(channels[0], channels[1], channels[2]))
        }
        _ => Err(err()),
    }
}

/// A timed blend from one color to another.
///
/// `duration` is the transition timing a cell carries; the eraser attaches
/// one and it stays with the cell for every later repaint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: Color32,
    pub started: f64,
    pub duration: f32,
}

impl Transition {
    /// Fraction of the transition elapsed at `now`, in `0.0..=1.0`.
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - self.started) as f32) / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Color shown at `now` while heading to `to`.
    pub fn sample(&self, to: Color32, now: f64) -> Color32 {
        let t = ease_in_out(self.progress(now));
        lerp(self.from, to, t)
    }
}

/// Cubic ease-in-out, close to the CSS `ease-in-out` curve.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

fn lerp(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}
