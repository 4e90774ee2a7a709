//! RGB demosaicing entry points.

use crate::compose::{Rgb16Sink, Rgb16To8Sink, Rgb8Sink};
use crate::contract;
use crate::driver;
use crate::params::DemosaicParams;

/// Demosaic one row of a 16-bit Bayer image into 16-bit interleaved RGB.
///
/// `out` must hold `3 * n_cols` values and is fully overwritten. The row
/// index selects red-green (even) or green-blue (odd) phasing, and whether
/// edge-safe sampling is needed. Published separately from [`rgb16`] so
/// that row-oriented consumers (e.g. streaming encoders) can demosaic
/// incrementally.
pub fn row_rgb16(bayer: &[u16], params: &DemosaicParams, row: usize, out: &mut [u16]) {
    contract::check_dimensions(params);
    contract::check_len("bayer", bayer.len(), params.n_rows * params.n_cols);
    contract::check_row(row, params.n_rows);
    contract::check_len("out", out.len(), 3 * params.n_cols);
    driver::fill_row(bayer, params, row, &Rgb16Sink, out);
}

/// Demosaic a 16-bit Bayer image into 16-bit interleaved RGB.
///
/// `out` must hold `3 * n_rows * n_cols` values and is fully overwritten.
pub fn rgb16(bayer: &[u16], params: &DemosaicParams, out: &mut [u16]) {
    contract::check_dimensions(params);
    contract::check_len("bayer", bayer.len(), params.n_rows * params.n_cols);
    contract::check_len("out", out.len(), 3 * params.n_rows * params.n_cols);
    driver::fill_image(bayer, params, &Rgb16Sink, out);
}

/// Demosaic one row of an 8-bit Bayer image into 8-bit interleaved RGB.
///
/// Requires `max_val <= 255`. `out` must hold `3 * n_cols` values.
pub fn row_rgb8(bayer: &[u8], params: &DemosaicParams, row: usize, out: &mut [u8]) {
    contract::check_dimensions(params);
    contract::check_ceiling(params.max_val, 0);
    contract::check_len("bayer", bayer.len(), params.n_rows * params.n_cols);
    contract::check_row(row, params.n_rows);
    contract::check_len("out", out.len(), 3 * params.n_cols);
    driver::fill_row(bayer, params, row, &Rgb8Sink, out);
}

/// Demosaic an 8-bit Bayer image into 8-bit interleaved RGB.
///
/// Requires `max_val <= 255`. `out` must hold `3 * n_rows * n_cols` values.
pub fn rgb8(bayer: &[u8], params: &DemosaicParams, out: &mut [u8]) {
    contract::check_dimensions(params);
    contract::check_ceiling(params.max_val, 0);
    contract::check_len("bayer", bayer.len(), params.n_rows * params.n_cols);
    contract::check_len("out", out.len(), 3 * params.n_rows * params.n_cols);
    driver::fill_image(bayer, params, &Rgb8Sink, out);
}

/// Demosaic one row of a 16-bit Bayer image into 8-bit interleaved RGB,
/// reducing depth by `params.rshift`.
///
/// Each channel saturates to `max_val` before the shift, so the reduced
/// ceiling is exactly `max_val >> rshift`, which must fit 8 bits.
pub fn row_rgb16_to8(bayer: &[u16], params: &DemosaicParams, row: usize, out: &mut [u8]) {
    contract::check_dimensions(params);
    contract::check_ceiling(params.max_val, params.rshift);
    contract::check_len("bayer", bayer.len(), params.n_rows * params.n_cols);
    contract::check_row(row, params.n_rows);
    contract::check_len("out", out.len(), 3 * params.n_cols);
    let sink = Rgb16To8Sink {
        rshift: params.rshift,
    };
    driver::fill_row(bayer, params, row, &sink, out);
}

/// Demosaic a 16-bit Bayer image into 8-bit interleaved RGB, reducing depth
/// by `params.rshift`.
pub fn rgb16_to8(bayer: &[u16], params: &DemosaicParams, out: &mut [u8]) {
    contract::check_dimensions(params);
    contract::check_ceiling(params.max_val, params.rshift);
    contract::check_len("bayer", bayer.len(), params.n_rows * params.n_cols);
    contract::check_len("out", out.len(), 3 * params.n_rows * params.n_cols);
    let sink = Rgb16To8Sink {
        rshift: params.rshift,
    };
    driver::fill_image(bayer, params, &sink, out);
}
