//! Matrix types module.
//!
//! This module provides row-major square matrix types:
//! - Matrix33F32 / Matrix33F64: 3x3 linear transforms (rotation, scale)
//! - Matrix44F32 / Matrix44F64: 4x4 affine and projective transforms

#[macro_use]
mod mat;

mod mat33;
mod mat44;

pub use {mat33::Matrix33F32, mat33::Matrix33F64};
pub use {mat44::Matrix44F32, mat44::Matrix44F64};
