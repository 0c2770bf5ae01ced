//! Pink - Image processing library for Rust
//!
//! This is a Rust port of the spline tools of the Pink image processing
//! library.
//!
//! # Overview
//!
//! - Point lists and vector lists in 2D and 3D
//! - Natural cubic spline fitting (`points2spline`)
//! - Spline evaluation and tangent sampling
//! - Pink text file I/O
//!
//! # Example
//!
//! ```
//! use pink::{Dim, ListKind, PointList, points2spline};
//!
//! let mut points = PointList::new(Dim::Two, ListKind::Binary);
//! points.push(&[0.0, 0.0]).unwrap();
//! points.push(&[2.0, 4.0]).unwrap();
//! let spline = points2spline(&points).unwrap();
//! assert_eq!(spline.eval(0.5), [1.0, 2.0, 0.0]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pink_core::*;

// Re-export the I/O crate as a module to avoid name conflicts
pub use pink_io as io;
