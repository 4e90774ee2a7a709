//! Row and image traversal.
//!
//! One generic traversal serves every operation, parameterized by a
//! boundary-access policy ([`PixelFetch`]) and an output stage ([`Sink`]).
//! A row within two rows of the top or bottom edge runs entirely through
//! the reflecting fetch. An interior row runs its two outermost columns on
//! each side through the reflecting fetch and everything between through
//! the unchecked fetch, whose accesses compile down to plain loads. The
//! two paths must produce identical values for every pixel and channel;
//! the tests hold them to that.

use std::ops::Range;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::compose::{compose, Sink};
use crate::params::DemosaicParams;
use crate::sample::{BorderReflect, Interior, PixelFetch};


pub(crate) fn fill_span<F, S>(
    fetch: &F,
    sink: &S,
    row: usize,
    cols: Range<usize>,
    max_val: i32,
    out: &mut [S::Out],
) where
    F: PixelFetch,
    S: Sink,
{
    for col in cols {
        let rgb = compose(fetch, row as i32, col as i32, max_val);
        sink.put(col, rgb, out);
    }
}

/// Demosaic one row into `out`. The caller has already validated the
/// contract; `out` holds `S::CHANNELS * n_cols` values.
pub(crate) fn fill_row<T, S>(
    bayer: &[T],
    params: &DemosaicParams,
    row: usize,
    sink: &S,
    out: &mut [S::Out],
) where
    T: Copy + Into<i32>,
    S: Sink,
{
    let n_cols = params.n_cols;
    let max_val = i32::from(params.max_val);
    let safe = BorderReflect::new(bayer, params.n_rows, n_cols);

    // Kernel support reaches two rows and columns out.
    if row < 2 || row + 2 >= params.n_rows {
        fill_span(&safe, sink, row, 0..n_cols, max_val, out);
        return;
    }

    let fast = Interior::new(bayer, n_cols);
    fill_span(&safe, sink, row, 0..2, max_val, out);
    fill_span(&fast, sink, row, 2..n_cols - 2, max_val, out);
    fill_span(&safe, sink, row, n_cols - 2..n_cols, max_val, out);
}

/// Reference row: every access through the reflecting fetch. The dual-path
/// equivalence tests compare [`fill_row`] against this.
#[cfg(test)]
pub(crate) fn fill_row_reference<T, S>(
    bayer: &[T],
    params: &DemosaicParams,
    row: usize,
    sink: &S,
    out: &mut [S::Out],
) where
    T: Copy + Into<i32>,
    S: Sink,
{
    let safe = BorderReflect::new(bayer, params.n_rows, params.n_cols);
    fill_span(&safe, sink, row, 0..params.n_cols, i32::from(params.max_val), out);
}

/// Demosaic every row into contiguous output storage. Rows read only rows
/// `r - 2 ..= r + 2` and write disjoint output slices, so they may run in
/// any order or in parallel.
#[cfg(feature = "rayon")]
pub(crate) fn fill_image<T, S>(bayer: &[T], params: &DemosaicParams, sink: &S, out: &mut [S::Out])
where
    T: Copy + Into<i32> + Sync,
    S: Sink + Sync,
    S::Out: Send,
{
    let stride = S::CHANNELS * params.n_cols;
    out.par_chunks_mut(stride)
        .enumerate()
        .for_each(|(row, out_row)| fill_row(bayer, params, row, sink, out_row));
}

#[cfg(not(feature = "rayon"))]
pub(crate) fn fill_image<T, S>(bayer: &[T], params: &DemosaicParams, sink: &S, out: &mut [S::Out])
where
    T: Copy + Into<i32>,
    S: Sink,
{
    let stride = S::CHANNELS * params.n_cols;
    for (row, out_row) in out.chunks_mut(stride).enumerate() {
        fill_row(bayer, params, row, sink, out_row);
    }
}
