//! This crate provides Malvar-He-Cutler linear demosaicing of RGGB Bayer
//! raw images.
//!
//! Input images are flat row-major slices of 8- or 16-bit unsigned samples
//! in the fixed RGGB pattern; outputs are caller-allocated flat slices of
//! interleaved RGB or mono values. Six operations cover the combinations of
//! {8, 16}-bit input, {RGB, mono} output and 16-to-8-bit depth reduction,
//! each available per row and per image. The per-row entry points let
//! row-oriented consumers (like streaming encoders) demosaic incrementally.
//!
//! The core is written for embedded imaging pipelines: deterministic,
//! allocation-free, bounded-time over caller-owned buffers. Precondition
//! violations are logic errors and are routed through a pluggable fault
//! hook (see [`set_fault_handler`]) instead of being returned; kernel
//! overshoot is resolved by saturation as ordinary processing.
//!
//! Based on:
//! H. S. Malvar, Li-wei He and R. Cutler, "High-quality linear
//! interpolation for demosaicing of Bayer-patterned color images",
//! ICASSP 2004.
//!
//! # Examples
//!
//! ```
//! const IMG_W: usize = 4;
//! const IMG_H: usize = 4;
//! let bayer = [0u16; IMG_W * IMG_H];
//! let mut rgb = [0u16; 3 * IMG_W * IMG_H];
//!
//! let params = malvar::DemosaicParams::new(IMG_H, IMG_W, 0x0FFF);
//! malvar::rgb16(&bayer, &params, &mut rgb);
//! ```

pub use crate::contract::{set_fault_handler, FaultHandler, Violation};
pub use crate::mono::{mono16, mono16_to8, mono8, row_mono16, row_mono16_to8, row_mono8};
pub use crate::params::{DemosaicParams, LumaCoefs};
pub use crate::rgb::{rgb16, rgb16_to8, rgb8, row_rgb16, row_rgb16_to8, row_rgb8};

pub mod ffi;

mod compose;
mod contract;
mod driver;
mod kernel;
mod mono;
mod params;
mod rgb;
mod sample;
