//! 2D vector types (single and double precision).

define_vector_type!(
    /// 2D vector (single precision).
    Vec2F32,
    glam::Vec2,
    f32,
    [f32; 2],
    [x => 0, y => 1]
);

define_vector_type!(
    /// 2D vector (double precision).
    Vec2F64,
    glam::DVec2,
    f64,
    [f64; 2],
    [x => 0, y => 1]
);

macro_rules! impl_vec2_cross {
    ($name:ident, $scalar:ty) => {
        impl $name {
            /// Scalar cross product `x1 * y2 - y1 * x2`.
            ///
            /// This is the z component of the 3D cross product of both vectors
            /// embedded in the xy-plane.
            #[inline]
            pub fn cross(self, rhs: Self) -> $scalar {
                (self.x * rhs.y) - (self.y * rhs.x)
            }
        }
    };
}

impl_vec2_cross!(Vec2F32, f32);
impl_vec2_cross!(Vec2F64, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec2f32_basic() {
        let v = Vec2F32::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
    }

    #[test]
    fn test_vec2f32_index_aliases_fields() {
        let mut v = Vec2F32::ZERO;
        v[1] = 5.0;
        assert_eq!(v.y, 5.0);
        v.x = -3.0;
        assert_eq!(v[0], -3.0);
    }

    #[test]
    #[should_panic]
    fn test_vec2f32_index_out_of_bounds() {
        let v = Vec2F32::new(1.0, 2.0);
        let _ = v[2];
    }

    #[test]
    fn test_vec2f32_arithmetic() {
        let v1 = Vec2F32::new(1.0, 2.0);
        let v2 = Vec2F32::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2F32::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2F32::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vec2F32::new(2.0, 4.0));
        assert_eq!(2.0 * v1, Vec2F32::new(2.0, 4.0));
        assert_eq!(v2 / 2.0, Vec2F32::new(1.5, 2.0));
        assert_eq!(-v1, Vec2F32::new(-1.0, -2.0));
    }

    #[test]
    fn test_vec2f32_binary_ops_leave_operands_untouched() {
        let v1 = Vec2F32::new(1.0, 2.0);
        let v2 = Vec2F32::new(3.0, 4.0);
        let _ = v1 + v2;
        let _ = v1 * 3.0;
        assert_eq!(v1, Vec2F32::new(1.0, 2.0));
        assert_eq!(v2, Vec2F32::new(3.0, 4.0));
    }

    #[test]
    fn test_vec2f32_compound_assign() {
        let mut v = Vec2F32::new(1.0, 2.0);
        v += Vec2F32::new(1.0, 1.0);
        assert_eq!(v, Vec2F32::new(2.0, 3.0));
        v -= Vec2F32::new(2.0, 2.0);
        assert_eq!(v, Vec2F32::new(0.0, 1.0));
        v *= 4.0;
        assert_eq!(v, Vec2F32::new(0.0, 4.0));
        v /= 2.0;
        assert_eq!(v, Vec2F32::new(0.0, 2.0));
    }

    #[test]
    fn test_vec2f32_dot_cross() {
        let a = Vec2F32::new(1.0, 2.0);
        let b = Vec2F32::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(a.cross(b), -2.0);
        assert_eq!(a.cross(b), -b.cross(a));
        assert_eq!(Vec2F32::new(1.0, 0.0).cross(Vec2F32::new(0.0, 1.0)), 1.0);
    }

    #[test]
    fn test_vec2f32_length_normalized() {
        let v = Vec2F32::new(3.0, 4.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
        assert_relative_eq!(v.normalized(), Vec2F32::new(0.6, 0.8));
        assert_relative_eq!(v.normalized().length(), 1.0);
    }

    #[test]
    fn test_vec2f32_normalized_zero_is_nan() {
        let n = Vec2F32::ZERO.normalized();
        assert!(n.x.is_nan());
        assert!(n.y.is_nan());
    }

    #[test]
    fn test_vec2f32_conversion() {
        let v = Vec2F32::from_array([1.0, 2.0]);
        assert_eq!(v.to_array(), [1.0, 2.0]);
        let glam_v: glam::Vec2 = v.into();
        let back: Vec2F32 = glam_v.into();
        assert_eq!(v, back);
    }

    #[test]
    fn test_vec2f64_arithmetic() {
        let v1 = Vec2F64::new(1.0, 2.0);
        let v2 = Vec2F64::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2F64::new(4.0, 6.0));
        assert_eq!(v1 * 2.0, Vec2F64::new(2.0, 4.0));
        assert_eq!(v1.cross(v2), -2.0);
        assert_eq!(v1 + (-v1), Vec2F64::ZERO);
    }
}
