//! Foreign function interface.
//!
//! C entry points for the six full-image operations, for embedding hosts
//! that link the dynamic library. Null pointers are reported and refused
//! with a nonzero return; every other precondition goes through the crate's
//! fault hook like the native API.

use std::slice;

use libc::{c_double, c_int, c_uint, size_t};

use crate::params::{DemosaicParams, LumaCoefs};

// Print with "file:line - " prefix, for more informative error messages.
macro_rules! printerrorln {
    ($e:expr) => {
        println!("{}:{} - {}", file!(), line!(), $e);
    };
}

fn luma_coefs(red: c_double, green: c_double, blue: c_double) -> LumaCoefs {
    LumaCoefs { red, green, blue }
}

/// Demosaic a 16-bit Bayer image into 16-bit interleaved RGB.
///
/// Returns 0 on success, -1 on null input.
#[no_mangle]
pub extern "C" fn malvar_rgb16(
    bayer: *const u16,
    n_rows: size_t,
    n_cols: size_t,
    max_val: u16,
    out: *mut u16,
) -> c_int {
    if bayer.is_null() || out.is_null() {
        printerrorln!("null buffer");
        return -1;
    }

    let params = DemosaicParams::new(n_rows, n_cols, max_val);
    let bayer = unsafe { slice::from_raw_parts(bayer, n_rows * n_cols) };
    let out = unsafe { slice::from_raw_parts_mut(out, 3 * n_rows * n_cols) };
    crate::rgb16(bayer, &params, out);
    0
}

/// Demosaic an 8-bit Bayer image into 8-bit interleaved RGB.
#[no_mangle]
pub extern "C" fn malvar_rgb8(
    bayer: *const u8,
    n_rows: size_t,
    n_cols: size_t,
    max_val: u16,
    out: *mut u8,
) -> c_int {
    if bayer.is_null() || out.is_null() {
        printerrorln!("null buffer");
        return -1;
    }

    let params = DemosaicParams::new(n_rows, n_cols, max_val);
    let bayer = unsafe { slice::from_raw_parts(bayer, n_rows * n_cols) };
    let out = unsafe { slice::from_raw_parts_mut(out, 3 * n_rows * n_cols) };
    crate::rgb8(bayer, &params, out);
    0
}

/// Demosaic a 16-bit Bayer image into 8-bit interleaved RGB, right-shifting
/// each channel by `rshift`.
#[no_mangle]
pub extern "C" fn malvar_rgb16_to8(
    bayer: *const u16,
    n_rows: size_t,
    n_cols: size_t,
    max_val: u16,
    rshift: c_uint,
    out: *mut u8,
) -> c_int {
    if bayer.is_null() || out.is_null() {
        printerrorln!("null buffer");
        return -1;
    }

    let params = DemosaicParams::new(n_rows, n_cols, max_val).with_rshift(rshift);
    let bayer = unsafe { slice::from_raw_parts(bayer, n_rows * n_cols) };
    let out = unsafe { slice::from_raw_parts_mut(out, 3 * n_rows * n_cols) };
    crate::rgb16_to8(bayer, &params, out);
    0
}

/// Demosaic a 16-bit Bayer image into 16-bit mono using the given luma
/// coefficients.
#[no_mangle]
pub extern "C" fn malvar_mono16(
    bayer: *const u16,
    n_rows: size_t,
    n_cols: size_t,
    max_val: u16,
    coef_red: c_double,
    coef_green: c_double,
    coef_blue: c_double,
    out: *mut u16,
) -> c_int {
    if bayer.is_null() || out.is_null() {
        printerrorln!("null buffer");
        return -1;
    }

    let params = DemosaicParams::new(n_rows, n_cols, max_val)
        .with_luma(luma_coefs(coef_red, coef_green, coef_blue));
    let bayer = unsafe { slice::from_raw_parts(bayer, n_rows * n_cols) };
    let out = unsafe { slice::from_raw_parts_mut(out, n_rows * n_cols) };
    crate::mono16(bayer, &params, out);
    0
}

/// Demosaic an 8-bit Bayer image into 8-bit mono using the given luma
/// coefficients.
#[no_mangle]
pub extern "C" fn malvar_mono8(
    bayer: *const u8,
    n_rows: size_t,
    n_cols: size_t,
    max_val: u16,
    coef_red: c_double,
    coef_green: c_double,
    coef_blue: c_double,
    out: *mut u8,
) -> c_int {
    if bayer.is_null() || out.is_null() {
        printerrorln!("null buffer");
        return -1;
    }

    let params = DemosaicParams::new(n_rows, n_cols, max_val)
        .with_luma(luma_coefs(coef_red, coef_green, coef_blue));
    let bayer = unsafe { slice::from_raw_parts(bayer, n_rows * n_cols) };
    let out = unsafe { slice::from_raw_parts_mut(out, n_rows * n_cols) };
    crate::mono8(bayer, &params, out);
    0
}

/// Demosaic a 16-bit Bayer image into 8-bit mono, right-shifting each
/// channel by `rshift` before the projection.
#[no_mangle]
pub extern "C" fn malvar_mono16_to8(
    bayer: *const u16,
    n_rows: size_t,
    n_cols: size_t,
    max_val: u16,
    rshift: c_uint,
    coef_red: c_double,
    coef_green: c_double,
    coef_blue: c_double,
    out: *mut u8,
) -> c_int {
    if bayer.is_null() || out.is_null() {
        printerrorln!("null buffer");
        return -1;
    }

    let params = DemosaicParams::new(n_rows, n_cols, max_val)
        .with_rshift(rshift)
        .with_luma(luma_coefs(coef_red, coef_green, coef_blue));
    let bayer = unsafe { slice::from_raw_parts(bayer, n_rows * n_cols) };
    let out = unsafe { slice::from_raw_parts_mut(out, n_rows * n_cols) };
    crate::mono16_to8(bayer, &params, out);
    0
}
