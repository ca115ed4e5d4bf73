//! Package handling classification rule.
//!
//! Maps a package's physical measurements to exactly one handling
//! category using fixed dimensional and mass limits:
//!
//! - **Validation**: Per-field well-formedness checks on the four input
//!   measurements (numeric, finite, strictly positive, within the
//!   double-precision safe-integer bound). The first offending field
//!   aborts the call.
//! - **Classification**: A pure decision rule over validated
//!   measurements. Oversized or over-volume packages are *bulky* and
//!   over-mass packages are *heavy*; the combination of the two flags
//!   selects `STANDARD`, `SPECIAL`, or `REJECTED`.
//!
//! # Architecture
//!
//! This crate is a leaf decision rule intended to be embedded in a
//! larger intake pipeline. It performs no I/O and holds no state:
//! every entry point is a plain function over value types, safely
//! callable from any number of threads without synchronization.
//! Argument parsing, exit codes, and console output belong to callers
//! (a reference CLI ships behind the `cli` feature).
//!
//! # Examples
//!
//! ```
//! use u_parcel::classification::{classify, Category};
//!
//! let category = classify(30.0, 20.0, 10.0, 4.5).unwrap();
//! assert_eq!(category, Category::Standard);
//!
//! let category = classify(150.0, 20.0, 10.0, 4.5).unwrap();
//! assert_eq!(category, Category::Special);
//! ```

pub mod classification;
pub mod validation;
