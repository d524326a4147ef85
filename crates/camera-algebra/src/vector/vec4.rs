//! 4D vector types (single and double precision).

use super::vec3::{Vec3F32, Vec3F64};

define_vector_type!(
    /// 4D vector (single precision).
    Vec4F32,
    glam::Vec4,
    f32,
    [f32; 4],
    [x => 0, y => 1, z => 2, w => 3]
);

define_vector_type!(
    /// 4D vector (double precision).
    Vec4F64,
    glam::DVec4,
    f64,
    [f64; 4],
    [x => 0, y => 1, z => 2, w => 3]
);

impl_elementwise_ops!(Vec4F32, glam::Vec4);
impl_elementwise_ops!(Vec4F64, glam::DVec4);

macro_rules! impl_vec4_homogeneous {
    ($name:ident, $vec3:ident, $scalar:ty) => {
        impl $name {
            /// Create a homogeneous vector from a 3D vector and a `w` component.
            #[inline]
            pub fn from_vec3(v: $vec3, w: $scalar) -> Self {
                Self::new(v.x, v.y, v.z, w)
            }

            /// Drop the `w` component.
            #[inline]
            pub fn truncate(self) -> $vec3 {
                $vec3::new(self.x, self.y, self.z)
            }
        }
    };
}

impl_vec4_homogeneous!(Vec4F32, Vec3F32, f32);
impl_vec4_homogeneous!(Vec4F64, Vec3F64, f64);
