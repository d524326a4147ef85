//! Small linear algebra primitives for camera and object transforms.
//!
//! This crate provides:
//! - Fixed-size vectors (`Vec2`, `Vec3`, `Vec4`) in single and double precision
//! - Row-major `Matrix33` and `Matrix44` with rotation, scale, translation, shear
//!   and perspective builders
//!
//! Matrices treat vectors as columns multiplied on the right, so `a * b` applied
//! to a vector applies `b` first and then `a`.

mod error;
mod matrix;
mod vector;

pub use error::AlgebraError;
pub use matrix::{Matrix33F32, Matrix33F64, Matrix44F32, Matrix44F64};
pub use vector::{Vec2F32, Vec2F64, Vec3F32, Vec3F64, Vec4F32, Vec4F64};

// Type aliases for the default (single) precision
pub type Vec2 = Vec2F32;
pub type Vec3 = Vec3F32;
pub type Vec4 = Vec4F32;
pub type Matrix33 = Matrix33F32;
pub type Matrix44 = Matrix44F32;

// Type aliases for double precision
pub type DVec2 = Vec2F64;
pub type DVec3 = Vec3F64;
pub type DVec4 = Vec4F64;
pub type DMatrix33 = Matrix33F64;
pub type DMatrix44 = Matrix44F64;
