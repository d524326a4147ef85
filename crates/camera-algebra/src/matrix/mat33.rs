//! 3x3 matrix (single and double precision).

use crate::{Vec3F32, Vec3F64};

define_matrix_type!(
    /// Row-major 3x3 matrix (single precision).
    Matrix33F32,
    f32,
    3,
    [f32; 9],
    Vec3F32,
    glam::Mat3
);

define_matrix_type!(
    /// Row-major 3x3 matrix (double precision).
    Matrix33F64,
    f64,
    3,
    [f64; 9],
    Vec3F64,
    glam::DMat3
);

macro_rules! impl_matrix33_builders {
    ($name:ident, $scalar:ty, $vec3:ident) => {
        impl $name {
            /// Rotation of `rad` radians around the x axis.
            ///
            /// The rotation is counter-clockwise when looking from the positive axis
            /// towards the origin.
            pub fn rotate_x(rad: $scalar) -> Self {
                let (s, c) = rad.sin_cos();
                Self::from_array([
                    1.0, 0.0, 0.0, //
                    0.0, c, -s, //
                    0.0, s, c,
                ])
            }

            /// Rotation of `rad` radians around the y axis.
            pub fn rotate_y(rad: $scalar) -> Self {
                let (s, c) = rad.sin_cos();
                Self::from_array([
                    c, 0.0, s, //
                    0.0, 1.0, 0.0, //
                    -s, 0.0, c,
                ])
            }

            /// Rotation of `rad` radians around the z axis.
            pub fn rotate_z(rad: $scalar) -> Self {
                let (s, c) = rad.sin_cos();
                Self::from_array([
                    c, -s, 0.0, //
                    s, c, 0.0, //
                    0.0, 0.0, 1.0,
                ])
            }

            /// Diagonal scale matrix.
            pub fn scale(vec: $vec3) -> Self {
                Self::from_array([
                    vec.x, 0.0, 0.0, //
                    0.0, vec.y, 0.0, //
                    0.0, 0.0, vec.z,
                ])
            }
        }
    };
}

impl_matrix33_builders!(Matrix33F32, f32, Vec3F32);
impl_matrix33_builders!(Matrix33F64, f64, Vec3F64);
