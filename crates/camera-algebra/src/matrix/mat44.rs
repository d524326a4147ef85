//! 4x4 matrix (single and double precision).

use super::mat33::{Matrix33F32, Matrix33F64};
use crate::{AlgebraError, Vec3F32, Vec3F64, Vec4F32, Vec4F64};

define_matrix_type!(
    /// Row-major 4x4 matrix (single precision) for homogeneous transforms.
    Matrix44F32,
    f32,
    4,
    [f32; 16],
    Vec4F32,
    glam::Mat4
);

define_matrix_type!(
    /// Row-major 4x4 matrix (double precision) for homogeneous transforms.
    Matrix44F64,
    f64,
    4,
    [f64; 16],
    Vec4F64,
    glam::DMat4
);

fn degenerate_projection(reason: String) -> AlgebraError {
    log::debug!("rejecting perspective projection: {}", reason);
    AlgebraError::DegenerateProjection(reason)
}

macro_rules! impl_matrix44_builders {
    ($name:ident, $scalar:ty, $mat33:ident, $vec3:ident, $vec4:ident, $pi:expr) => {
        impl $name {
            /// Embed a 3x3 linear transform in the upper-left block.
            ///
            /// The last row and column are those of the identity, so the result has
            /// no translation.
            pub fn from_matrix33(m33: &$mat33) -> Self {
                let mut m = Self::identity();
                for r in 0..3 {
                    for c in 0..3 {
                        m.data[r * 4 + c] = m33.data[r * 3 + c];
                    }
                }
                m
            }

            /// Translation by `vec`, stored in the last column of rows 0 to 2.
            pub fn translate(vec: $vec3) -> Self {
                let mut m = Self::identity();
                m.data[3] = vec.x;
                m.data[7] = vec.y;
                m.data[11] = vec.z;
                m
            }

            /// Shear of x and y along z: `x' = x + a * z`, `y' = y + b * z`.
            ///
            /// Used to offset a view horizontally (and vertically) proportionally to
            /// depth, e.g. for stereoscopic or parallax effects.
            pub fn shear(a: $scalar, b: $scalar) -> Self {
                let mut m = Self::identity();
                m.data[2] = a;
                m.data[6] = b;
                m
            }

            /// Shear of x along z only. Same as `shear(a, 0.0)`.
            pub fn shear_x(a: $scalar) -> Self {
                Self::shear(a, 0.0)
            }

            /// Right-handed OpenGL-style perspective projection.
            ///
            /// `fov_y` is the vertical field of view in radians and `aspect_ratio` is
            /// width over height. Maps view space (camera looking down `-z`) to clip
            /// space with `z_near` to `-1` and `z_far` to `1` after perspective
            /// division.
            ///
            /// Parameters are not validated: `z_near == z_far`, a zero aspect ratio or
            /// a field of view of `0` or `pi` produce non-finite cells. See
            /// [`Self::try_perspective`] for the checked variant.
            pub fn perspective(
                fov_y: $scalar,
                aspect_ratio: $scalar,
                z_near: $scalar,
                z_far: $scalar,
            ) -> Self {
                let f = 1.0 / (fov_y / 2.0).tan();
                let mut m = Self::ZERO;
                m.data[0] = f / aspect_ratio;
                m.data[5] = f;
                m.data[10] = (z_far + z_near) / (z_near - z_far);
                m.data[11] = (2.0 * z_far * z_near) / (z_near - z_far);
                m.data[14] = -1.0;
                m
            }

            /// Checked version of [`Self::perspective`].
            ///
            /// Fails with [`AlgebraError::DegenerateProjection`] when the field of view
            /// is outside `(0, pi)`, the aspect ratio is not a positive finite number,
            /// or the clip planes are non-finite or equal.
            pub fn try_perspective(
                fov_y: $scalar,
                aspect_ratio: $scalar,
                z_near: $scalar,
                z_far: $scalar,
            ) -> Result<Self, AlgebraError> {
                if !(fov_y > 0.0 && fov_y < $pi) {
                    return Err(degenerate_projection(format!(
                        "vertical field of view must be in (0, pi), got {}",
                        fov_y
                    )));
                }
                if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
                    return Err(degenerate_projection(format!(
                        "aspect ratio must be positive and finite, got {}",
                        aspect_ratio
                    )));
                }
                if !(z_near.is_finite() && z_far.is_finite()) || z_near == z_far {
                    return Err(degenerate_projection(format!(
                        "clip planes must be finite and distinct, got near {} and far {}",
                        z_near, z_far
                    )));
                }
                Ok(Self::perspective(fov_y, aspect_ratio, z_near, z_far))
            }

            /// Multiply by the homogeneous vector `(point, w)` and return the xyz part.
            ///
            /// No perspective division is performed.
            pub fn transform(&self, point: $vec3, w: $scalar) -> $vec3 {
                (*self * $vec4::from_vec3(point, w)).truncate()
            }
        }

        impl From<$mat33> for $name {
            #[inline]
            fn from(m33: $mat33) -> Self {
                Self::from_matrix33(&m33)
            }
        }
    };
}

impl_matrix44_builders!(
    Matrix44F32,
    f32,
    Matrix33F32,
    Vec3F32,
    Vec4F32,
    std::f32::consts::PI
);
impl_matrix44_builders!(
    Matrix44F64,
    f64,
    Matrix33F64,
    Vec3F64,
    Vec4F64,
    std::f64::consts::PI
);
