//! Contract checking and fault reporting.
//!
//! Every public operation validates its full contract up front, before
//! touching any pixel. A failed check is a logic error in the caller, not a
//! recoverable condition: the structured [`Violation`] is handed to a single
//! pluggable [`FaultHandler`] which must not return. The default handler
//! logs the violation and panics; an embedding application may install its
//! own handler to halt or raise a platform fault instead.

use std::mem;
use std::sync::atomic::{AtomicUsize, Ordering};

use quick_error::quick_error;

use crate::params::{DemosaicParams, LumaCoefs};

quick_error! {
    /// A violated precondition, carrying the offending field and value.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Violation {
        /// An image dimension is odd or smaller than one 2x2 Bayer tile.
        Dimension { field: &'static str, value: usize } {
            display("{} = {} must be even and at least 2", field, value)
        }
        /// A caller-provided buffer does not match the image dimensions.
        BufferLen { field: &'static str, expected: usize, actual: usize } {
            display("{} holds {} values, expected {}", field, actual, expected)
        }
        /// A row index beyond the image.
        RowRange { row: usize, n_rows: usize } {
            display("row {} outside image of {} rows", row, n_rows)
        }
        /// `max_val >> rshift` does not fit the 8-bit output sample.
        Ceiling { max_val: u16, rshift: u32 } {
            display("max_val {:#x} >> {} does not fit 8 bits", max_val, rshift)
        }
        /// A luma coefficient outside [0, 1].
        Coefficient { field: &'static str, value: f64 } {
            display("luma coefficient {} = {} outside [0, 1]", field, value)
        }
        /// A mono operation was invoked without luma coefficients.
        MissingLuma {
            display("mono output requested without luma coefficients")
        }
    }
}

/// Receives a contract violation. Must not return; typical handlers log and
/// halt, or raise a platform fault.
pub type FaultHandler = fn(&Violation) -> !;

static HANDLER: AtomicUsize = AtomicUsize::new(0);

/// Install the handler invoked on contract violation, replacing the default
/// log-and-panic behaviour. Takes effect for all subsequent operations.
pub fn set_fault_handler(handler: FaultHandler) {
    HANDLER.store(handler as usize, Ordering::Release);
}

fn handler() -> FaultHandler {
    match HANDLER.load(Ordering::Acquire) {
        0 => default_handler,
        raw => unsafe { mem::transmute::<usize, FaultHandler>(raw) },
    }
}

fn default_handler(violation: &Violation) -> ! {
    log::error!("contract violation: {}", violation);
    panic!("contract violation: {}", violation);
}

pub(crate) fn fail(violation: Violation) -> ! {
    handler()(&violation)
}

pub(crate) fn check_dimensions(params: &DemosaicParams) {
    if params.n_rows < 2 || params.n_rows % 2 != 0 {
        fail(Violation::Dimension {
            field: "n_rows",
            value: params.n_rows,
        });
    }
    if params.n_cols < 2 || params.n_cols % 2 != 0 {
        fail(Violation::Dimension {
            field: "n_cols",
            value: params.n_cols,
        });
    }
}

pub(crate) fn check_len(field: &'static str, actual: usize, expected: usize) {
    if actual != expected {
        fail(Violation::BufferLen {
            field,
            expected,
            actual,
        });
    }
}

pub(crate) fn check_row(row: usize, n_rows: usize) {
    if row >= n_rows {
        fail(Violation::RowRange { row, n_rows });
    }
}

/// Checked on every path with an 8-bit output sample. Plain 8-bit targets
/// pass `rshift = 0`, reducing the check to `max_val <= 255`.
pub(crate) fn check_ceiling(max_val: u16, rshift: u32) {
    if rshift >= 16 || (max_val >> rshift) > 0xFF {
        fail(Violation::Ceiling { max_val, rshift });
    }
}

pub(crate) fn check_luma(params: &DemosaicParams) -> LumaCoefs {
    let coefs = match params.luma {
        Some(coefs) => coefs,
        None => fail(Violation::MissingLuma),
    };
    let fields = [
        ("red", coefs.red),
        ("green", coefs.green),
        ("blue", coefs.blue),
    ];
    for (field, value) in fields {
        if !(0.0..=1.0).contains(&value) {
            fail(Violation::Coefficient { field, value });
        }
    }
    coefs
}
