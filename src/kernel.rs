//! Malvar-He-Cutler interpolation kernels.
//!
//! Four fixed 5x5 integer stencils (Malvar, He, Cutler, ICASSP 2004) that
//! estimate a missing colour channel from same- and cross-colour
//! neighbours:
//!
//! ```text
//!   green_at_nongreen = (1 / 8) *
//!       [  0  0 -1  0  0
//!       ;  0  0  2  0  0
//!       ; -1  2  4  2 -1
//!       ;  0  0  2  0  0
//!       ;  0  0 -1  0  0 ];
//!
//!   red_blue_from_row = (1 / 16) *
//!       [  0  0  1  0  0
//!       ;  0 -2  0 -2  0
//!       ; -2  8 10  8 -2
//!       ;  0 -2  0 -2  0
//!       ;  0  0  1  0  0 ];
//!
//!   red_blue_from_column = (1 / 16) *
//!       [  0  0 -2  0  0
//!       ;  0 -2  8 -2  0
//!       ;  1  0 10  0  1
//!       ;  0 -2  8 -2  0
//!       ;  0  0 -2  0  0 ];
//!
//!   red_blue_from_opposite = (1 / 16) *
//!       [  0  0 -3  0  0
//!       ;  0  4  0  4  0
//!       ; -3  0 12  0 -3
//!       ;  0  4  0  4  0
//!       ;  0  0 -3  0  0 ];
//! ```
//!
//! Each kernel evaluates as an i32 dot product, divides by its power-of-two
//! divisor (truncating toward zero), then saturates to `[0, max_val]`. The
//! negative weights can push the sum past either end of the range, so
//! saturation is part of the kernel contract, not a safeguard. Worst case
//! the accumulator holds 24 * 65535, well inside i32.

use crate::sample::PixelFetch;

/// Estimate green at a red or blue site.
pub(crate) fn green_at_nongreen<F: PixelFetch>(f: &F, row: i32, col: i32, max_val: i32) -> u16 {
    let val = (f.at(row - 2, col) * -1
        + f.at(row - 1, col) * 2
        + f.at(row, col - 2) * -1
        + f.at(row, col - 1) * 2
        + f.at(row, col) * 4
        + f.at(row, col + 1) * 2
        + f.at(row, col + 2) * -1
        + f.at(row + 1, col) * 2
        + f.at(row + 2, col) * -1)
        / 8;
    val.clamp(0, max_val) as u16
}

/// Estimate red or blue at a green site whose same-colour neighbours lie in
/// the same row: red at green-in-red-row, blue at green-in-blue-row.
pub(crate) fn red_blue_from_row<F: PixelFetch>(f: &F, row: i32, col: i32, max_val: i32) -> u16 {
    let val = (f.at(row - 2, col)
        + f.at(row - 1, col - 1) * -2
        + f.at(row - 1, col + 1) * -2
        + f.at(row, col - 2) * -2
        + f.at(row, col - 1) * 8
        + f.at(row, col) * 10
        + f.at(row, col + 1) * 8
        + f.at(row, col + 2) * -2
        + f.at(row + 1, col - 1) * -2
        + f.at(row + 1, col + 1) * -2
        + f.at(row + 2, col))
        / 16;
    val.clamp(0, max_val) as u16
}

/// Estimate red or blue at a green site whose same-colour neighbours lie in
/// the same column: the transpose of [`red_blue_from_row`].
pub(crate) fn red_blue_from_column<F: PixelFetch>(f: &F, row: i32, col: i32, max_val: i32) -> u16 {
    let val = (f.at(row - 2, col) * -2
        + f.at(row - 1, col - 1) * -2
        + f.at(row - 1, col) * 8
        + f.at(row - 1, col + 1) * -2
        + f.at(row, col - 2)
        + f.at(row, col) * 10
        + f.at(row, col + 2)
        + f.at(row + 1, col - 1) * -2
        + f.at(row + 1, col) * 8
        + f.at(row + 1, col + 1) * -2
        + f.at(row + 2, col) * -2)
        / 16;
    val.clamp(0, max_val) as u16
}

/// Estimate red at a blue site or blue at a red site, from the diagonal
/// neighbours of the opposite colour.
pub(crate) fn red_blue_from_opposite<F: PixelFetch>(f: &F, row: i32, col: i32, max_val: i32) -> u16 {
    let val = (f.at(row - 2, col) * -3
        + f.at(row - 1, col - 1) * 4
        + f.at(row - 1, col + 1) * 4
        + f.at(row, col - 2) * -3
        + f.at(row, col) * 12
        + f.at(row, col + 2) * -3
        + f.at(row + 1, col - 1) * 4
        + f.at(row + 1, col + 1) * 4
        + f.at(row + 2, col) * -3)
        / 16;
    val.clamp(0, max_val) as u16
}
