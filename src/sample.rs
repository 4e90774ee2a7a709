//! Bayer sample access policies.
//!
//! The kernels read a 5x5 neighbourhood around each output position, so near
//! the image edges their support crosses the border. Out-of-bounds
//! coordinates are reflected to the nearest in-bounds coordinate of the same
//! Bayer parity, not the geometric mirror, so every sampled neighbour keeps
//! the colour the kernels assume:
//!
//! ```text
//!   row < 0       =>  (-row) % 2
//!   row >= n_rows =>  n_rows - 2 + (row % 2)
//! ```
//!
//! and identically for columns.

/// Boundary-access policy used by the kernels and the pixel composer.
///
/// Samples widen to `i32` so the kernel accumulators take them directly.
pub(crate) trait PixelFetch {
    fn at(&self, row: i32, col: i32) -> i32;
}

/// Fetch that reflects out-of-bounds coordinates back into the image,
/// preserving row and column parity. Valid for any coordinate a 5x5 kernel
/// can reach from an in-bounds position.
pub(crate) struct BorderReflect<'a, T> {
    bayer: &'a [T],
    n_rows: i32,
    n_cols: i32,
}

impl<'a, T: Copy + Into<i32>> BorderReflect<'a, T> {
    pub(crate) fn new(bayer: &'a [T], n_rows: usize, n_cols: usize) -> Self {
        debug_assert_eq!(bayer.len(), n_rows * n_cols);
        BorderReflect {
            bayer,
            n_rows: n_rows as i32,
            n_cols: n_cols as i32,
        }
    }
}

impl<T: Copy + Into<i32>> PixelFetch for BorderReflect<'_, T> {
    fn at(&self, mut row: i32, mut col: i32) -> i32 {
        if row < 0 {
            row = (-row) % 2;
        }
        if row >= self.n_rows {
            row = self.n_rows - 2 + (row % 2);
        }
        if col < 0 {
            col = (-col) % 2;
        }
        if col >= self.n_cols {
            col = self.n_cols - 2 + (col % 2);
        }
        self.bayer[(row * self.n_cols + col) as usize].into()
    }
}

/// Unchecked fetch for the image interior, where the caller guarantees the
/// whole kernel support is in bounds.
pub(crate) struct Interior<'a, T> {
    bayer: &'a [T],
    n_cols: i32,
}

impl<'a, T: Copy + Into<i32>> Interior<'a, T> {
    pub(crate) fn new(bayer: &'a [T], n_cols: usize) -> Self {
        Interior {
            bayer,
            n_cols: n_cols as i32,
        }
    }
}

impl<T: Copy + Into<i32>> PixelFetch for Interior<'_, T> {
    #[inline]
    fn at(&self, row: i32, col: i32) -> i32 {
        let index = (row * self.n_cols + col) as usize;
        debug_assert!(row >= 0 && col >= 0 && col < self.n_cols && index < self.bayer.len());
        unsafe { (*self.bayer.get_unchecked(index)).into() }
    }
}
