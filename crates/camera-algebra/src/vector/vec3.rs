//! 3D vector types (single and double precision).

define_vector_type!(
    /// 3D vector (single precision).
    Vec3F32,
    glam::Vec3,
    f32,
    [f32; 3],
    [x => 0, y => 1, z => 2]
);

define_vector_type!(
    /// 3D vector (double precision).
    Vec3F64,
    glam::DVec3,
    f64,
    [f64; 3],
    [x => 0, y => 1, z => 2]
);

impl_elementwise_ops!(Vec3F32, glam::Vec3);
impl_elementwise_ops!(Vec3F64, glam::DVec3);
