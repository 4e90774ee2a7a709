//! Per-phase RGB composition and the fused output stages.

use crate::kernel;
use crate::params::LumaCoefs;
use crate::sample::PixelFetch;

/// The four RGGB position classes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    Red,
    GreenInRedRow,
    GreenInBlueRow,
    Blue,
}

impl Phase {
    pub(crate) fn of(row: i32, col: i32) -> Self {
        match (row % 2, col % 2) {
            (0, 0) => Phase::Red,
            (0, _) => Phase::GreenInRedRow,
            (_, 0) => Phase::GreenInBlueRow,
            _ => Phase::Blue,
        }
    }
}

/// One interpolated pixel, composed on the stack per output position.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Rgb {
    pub(crate) red: u16,
    pub(crate) green: u16,
    pub(crate) blue: u16,
}

/// Fill the position's native channel from the raw sample and the other two
/// from the kernels selected for its phase.
pub(crate) fn compose<F: PixelFetch>(f: &F, row: i32, col: i32, max_val: i32) -> Rgb {
    match Phase::of(row, col) {
        Phase::Red => Rgb {
            red: f.at(row, col) as u16,
            green: kernel::green_at_nongreen(f, row, col, max_val),
            blue: kernel::red_blue_from_opposite(f, row, col, max_val),
        },
        Phase::GreenInRedRow => Rgb {
            red: kernel::red_blue_from_row(f, row, col, max_val),
            green: f.at(row, col) as u16,
            blue: kernel::red_blue_from_column(f, row, col, max_val),
        },
        Phase::GreenInBlueRow => Rgb {
            red: kernel::red_blue_from_column(f, row, col, max_val),
            green: f.at(row, col) as u16,
            blue: kernel::red_blue_from_row(f, row, col, max_val),
        },
        Phase::Blue => Rgb {
            red: kernel::red_blue_from_opposite(f, row, col, max_val),
            green: kernel::green_at_nongreen(f, row, col, max_val),
            blue: f.at(row, col) as u16,
        },
    }
}

/// Output stage writing one composed pixel into an output row.
pub(crate) trait Sink {
    /// Output values per pixel: 3 for RGB, 1 for mono.
    const CHANNELS: usize;
    type Out;
    fn put(&self, col: usize, rgb: Rgb, out: &mut [Self::Out]);
}

pub(crate) struct Rgb16Sink;

impl Sink for Rgb16Sink {
    const CHANNELS: usize = 3;
    type Out = u16;
    fn put(&self, col: usize, rgb: Rgb, out: &mut [u16]) {
        out[3 * col] = rgb.red;
        out[3 * col + 1] = rgb.green;
        out[3 * col + 2] = rgb.blue;
    }
}

/// 8-bit input to 8-bit output; `max_val <= 255` already checked.
pub(crate) struct Rgb8Sink;

impl Sink for Rgb8Sink {
    const CHANNELS: usize = 3;
    type Out = u8;
    fn put(&self, col: usize, rgb: Rgb, out: &mut [u8]) {
        out[3 * col] = rgb.red as u8;
        out[3 * col + 1] = rgb.green as u8;
        out[3 * col + 2] = rgb.blue as u8;
    }
}

/// 16-bit input to 8-bit output. Channels arrive saturated to `max_val`, so
/// only the shift remains; `max_val >> rshift` fits 8 bits by contract.
pub(crate) struct Rgb16To8Sink {
    pub(crate) rshift: u32,
}

impl Sink for Rgb16To8Sink {
    const CHANNELS: usize = 3;
    type Out = u8;
    fn put(&self, col: usize, rgb: Rgb, out: &mut [u8]) {
        out[3 * col] = (rgb.red >> self.rshift) as u8;
        out[3 * col + 1] = (rgb.green >> self.rshift) as u8;
        out[3 * col + 2] = (rgb.blue >> self.rshift) as u8;
    }
}

/// Round-half-up luma projection. No clamp afterwards: the weights sum to
/// under one, so the result stays below the channel ceiling.
fn luma(rgb: Rgb, coefs: &LumaCoefs) -> f64 {
    coefs.red * f64::from(rgb.red)
        + coefs.green * f64::from(rgb.green)
        + coefs.blue * f64::from(rgb.blue)
        + 0.5
}

/// Sinks carrying normalized luma coefficients; normalization happens in
/// the public entry points, once per call.
pub(crate) struct Mono16Sink {
    pub(crate) coefs: LumaCoefs,
}

impl Sink for Mono16Sink {
    const CHANNELS: usize = 1;
    type Out = u16;
    fn put(&self, col: usize, rgb: Rgb, out: &mut [u16]) {
        out[col] = luma(rgb, &self.coefs) as u16;
    }
}

pub(crate) struct Mono8Sink {
    pub(crate) coefs: LumaCoefs,
}

impl Sink for Mono8Sink {
    const CHANNELS: usize = 1;
    type Out = u8;
    fn put(&self, col: usize, rgb: Rgb, out: &mut [u8]) {
        out[col] = luma(rgb, &self.coefs) as u8;
    }
}

/// Depth reduction happens per channel before the projection, matching the
/// shifted RGB output of the 16-to-8 RGB path.
pub(crate) struct Mono16To8Sink {
    pub(crate) coefs: LumaCoefs,
    pub(crate) rshift: u32,
}

impl Sink for Mono16To8Sink {
    const CHANNELS: usize = 1;
    type Out = u8;
    fn put(&self, col: usize, rgb: Rgb, out: &mut [u8]) {
        let reduced = Rgb {
            red: rgb.red >> self.rshift,
            green: rgb.green >> self.rshift,
            blue: rgb.blue >> self.rshift,
        };
        out[col] = luma(reduced, &self.coefs) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::LumaCoefs;

    #[test]
    fn phase_follows_rggb_parity() {
        assert_eq!(Phase::of(0, 0), Phase::Red);
        assert_eq!(Phase::of(0, 1), Phase::GreenInRedRow);
        assert_eq!(Phase::of(1, 0), Phase::GreenInBlueRow);
        assert_eq!(Phase::of(1, 1), Phase::Blue);
        assert_eq!(Phase::of(6, 4), Phase::Red);
        assert_eq!(Phase::of(7, 3), Phase::Blue);
    }

    #[test]
    fn rgb16_to8_sink_shifts_every_channel() {
        let sink = Rgb16To8Sink { rshift: 4 };
        let mut out = [0u8; 6];
        let rgb = Rgb {
            red: 4095,
            green: 2048,
            blue: 15,
        };
        sink.put(1, rgb, &mut out);
        assert_eq!(&out, &[0, 0, 0, 255, 128, 0]);
    }

    #[test]
    fn mono_projection_rounds_half_up() {
        let coefs = LumaCoefs::REC601.normalized();
        let sink = Mono16Sink { coefs };
        let mut out = [0u16; 2];
        let rgb = Rgb {
            red: 4095,
            green: 0,
            blue: 0,
        };
        sink.put(0, rgb, &mut out);
        assert_eq!(out[0], 1224);
    }

    #[test]
    fn mono16_to8_shifts_before_projecting() {
        let coefs = LumaCoefs {
            red: 1.0,
            green: 0.0,
            blue: 0.0,
        }
        .normalized();
        let sink = Mono16To8Sink { coefs, rshift: 4 };
        let mut out = [0u8; 1];
        let rgb = Rgb {
            red: 4095,
            green: 4095,
            blue: 4095,
        };
        sink.put(0, rgb, &mut out);
        // 4095 >> 4 = 255, weighted by just under 1, plus 0.5, truncates
        // to 255.
        assert_eq!(out[0], 255);

        let rgb = Rgb {
            red: 1000,
            green: 0,
            blue: 0,
        };
        sink.put(0, rgb, &mut out);
        // 1000 >> 4 = 62; 62 * 0.999999 + 0.5 truncates to 62.
        assert_eq!(out[0], 62);
    }
}
