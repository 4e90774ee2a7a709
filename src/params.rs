//! Demosaicing parameters.

/// Coefficients for projecting an RGB pixel to a single luma value.
///
/// Each coefficient must lie in [0, 1]. They are re-normalized on every
/// operation that uses them, so callers may pass unnormalized weights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LumaCoefs {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

// Keeps the normalizing division defined for all-zero coefficients.
const SUM_EPSILON: f64 = 1e-6;

impl LumaCoefs {
    /// ITU-R BT.601 luma weights.
    pub const REC601: LumaCoefs = LumaCoefs {
        red: 0.299,
        green: 0.587,
        blue: 0.114,
    };

    /// Scale the coefficients so that they sum to just under one.
    ///
    /// Derived again on every use; never cached.
    pub fn normalized(&self) -> LumaCoefs {
        let sum = self.red + self.green + self.blue + SUM_EPSILON;
        let normed = LumaCoefs {
            red: self.red / sum,
            green: self.green / sum,
            blue: self.blue / sum,
        };
        debug_assert!(normed.red + normed.green + normed.blue < 1.0);
        normed
    }
}

/// Arguments shared by all demosaicing operations.
///
/// Immutable and caller-owned; operations take it by reference and keep no
/// state across calls.
///
/// # Examples
///
/// ```
/// let params = malvar::DemosaicParams::new(480, 640, 0x0FFF)
///     .with_rshift(4)
///     .with_luma(malvar::LumaCoefs::REC601);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemosaicParams {
    /// Number of rows in the Bayer image. Must be even and at least 2.
    pub n_rows: usize,
    /// Number of columns in the Bayer image. Must be even and at least 2.
    pub n_cols: usize,
    /// The maximum permissible value of an input sample, e.g. `0x0FFF` for
    /// 12-bit data in 16-bit storage. Demosaicing produces no channel above
    /// this value, or above `max_val >> rshift` when reducing depth.
    pub max_val: u16,
    /// Right shift applied by the 16-to-8-bit operations, e.g. 4 for
    /// 12-bit input. Ignored by the depth-preserving operations.
    pub rshift: u32,
    /// Luma coefficients for the mono operations.
    pub luma: Option<LumaCoefs>,
}

impl DemosaicParams {
    /// Parameters for a depth-preserving RGB operation.
    pub fn new(n_rows: usize, n_cols: usize, max_val: u16) -> Self {
        DemosaicParams {
            n_rows,
            n_cols,
            max_val,
            rshift: 0,
            luma: None,
        }
    }

    /// Set the right shift used by the 16-to-8-bit operations.
    pub fn with_rshift(mut self, rshift: u32) -> Self {
        self.rshift = rshift;
        self
    }

    /// Set the luma coefficients used by the mono operations.
    pub fn with_luma(mut self, luma: LumaCoefs) -> Self {
        self.luma = Some(luma);
        self
    }
}
