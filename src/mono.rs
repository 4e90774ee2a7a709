//! Monochrome demosaicing entry points.
//!
//! Each output value is the luma projection of the RGB pixel the
//! corresponding RGB operation would compose, using the caller's
//! coefficients normalized per call.

use crate::compose::{Mono16Sink, Mono16To8Sink, Mono8Sink};
use crate::contract;
use crate::driver;
use crate::params::DemosaicParams;

/// Demosaic one row of a 16-bit Bayer image into 16-bit mono.
///
/// Requires `params.luma`. `out` must hold `n_cols` values.
pub fn row_mono16(bayer: &[u16], params: &DemosaicParams, row: usize, out: &mut [u16]) {
    contract::check_dimensions(params);
    contract::check_len("bayer", bayer.len(), params.n_rows * params.n_cols);
    contract::check_row(row, params.n_rows);
    contract::check_len("out", out.len(), params.n_cols);
    let coefs = contract::check_luma(params).normalized();
    driver::fill_row(bayer, params, row, &Mono16Sink { coefs }, out);
}

/// Demosaic a 16-bit Bayer image into 16-bit mono.
///
/// Requires `params.luma`. `out` must hold `n_rows * n_cols` values.
pub fn mono16(bayer: &[u16], params: &DemosaicParams, out: &mut [u16]) {
    contract::check_dimensions(params);
    contract::check_len("bayer", bayer.len(), params.n_rows * params.n_cols);
    contract::check_len("out", out.len(), params.n_rows * params.n_cols);
    let coefs = contract::check_luma(params).normalized();
    driver::fill_image(bayer, params, &Mono16Sink { coefs }, out);
}

/// Demosaic one row of an 8-bit Bayer image into 8-bit mono.
///
/// Requires `params.luma` and `max_val <= 255`.
pub fn row_mono8(bayer: &[u8], params: &DemosaicParams, row: usize, out: &mut [u8]) {
    contract::check_dimensions(params);
    contract::check_ceiling(params.max_val, 0);
    contract::check_len("bayer", bayer.len(), params.n_rows * params.n_cols);
    contract::check_row(row, params.n_rows);
    contract::check_len("out", out.len(), params.n_cols);
    let coefs = contract::check_luma(params).normalized();
    driver::fill_row(bayer, params, row, &Mono8Sink { coefs }, out);
}

/// Demosaic an 8-bit Bayer image into 8-bit mono.
///
/// Requires `params.luma` and `max_val <= 255`.
pub fn mono8(bayer: &[u8], params: &DemosaicParams, out: &mut [u8]) {
    contract::check_dimensions(params);
    contract::check_ceiling(params.max_val, 0);
    contract::check_len("bayer", bayer.len(), params.n_rows * params.n_cols);
    contract::check_len("out", out.len(), params.n_rows * params.n_cols);
    let coefs = contract::check_luma(params).normalized();
    driver::fill_image(bayer, params, &Mono8Sink { coefs }, out);
}

/// Demosaic one row of a 16-bit Bayer image into 8-bit mono, reducing each
/// channel by `params.rshift` before the projection.
pub fn row_mono16_to8(bayer: &[u16], params: &DemosaicParams, row: usize, out: &mut [u8]) {
    contract::check_dimensions(params);
    contract::check_ceiling(params.max_val, params.rshift);
    contract::check_len("bayer", bayer.len(), params.n_rows * params.n_cols);
    contract::check_row(row, params.n_rows);
    contract::check_len("out", out.len(), params.n_cols);
    let coefs = contract::check_luma(params).normalized();
    let sink = Mono16To8Sink {
        coefs,
        rshift: params.rshift,
    };
    driver::fill_row(bayer, params, row, &sink, out);
}

/// Demosaic a 16-bit Bayer image into 8-bit mono, reducing each channel by
/// `params.rshift` before the projection.
pub fn mono16_to8(bayer: &[u16], params: &DemosaicParams, out: &mut [u8]) {
    contract::check_dimensions(params);
    contract::check_ceiling(params.max_val, params.rshift);
    contract::check_len("bayer", bayer.len(), params.n_rows * params.n_cols);
    contract::check_len("out", out.len(), params.n_rows * params.n_cols);
    let coefs = contract::check_luma(params).normalized();
    let sink = Mono16To8Sink {
        coefs,
        rshift: params.rshift,
    };
    driver::fill_image(bayer, params, &sink, out);
}
