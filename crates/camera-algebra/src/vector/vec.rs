//! Macros to define the vector types.
//!
//! The generated types are plain `#[repr(C)]` structs with named fields. The array
//! view of the same components is exposed through `Index`/`IndexMut` and the array
//! conversions, so writing through one view is always visible through the other.
//!
//! # Arguments
//!
//! * `name` - The name of the vector type.
//! * `glam_type` - The glam type used for conversions and delegated arithmetic.
//! * `scalar` - The scalar type.
//! * `array` - The array type.
//! * `fields` - The fields of the vector, each paired with its array index.
//!
macro_rules! define_vector_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $glam_type:ty,
        $scalar:ty,
        $array:ty,
        [$($field:ident => $idx:literal),+]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name {
            $(pub $field: $scalar),+
        }

        impl $name {
            /// Create a new vector from its components.
            #[inline]
            pub const fn new($($field: $scalar),+) -> Self {
                Self { $($field),+ }
            }

            /// Create a vector with every component set to `v`.
            #[inline]
            pub const fn splat(v: $scalar) -> Self {
                Self { $($field: v),+ }
            }

            /// Create a vector from an array.
            #[inline]
            pub fn from_array(arr: $array) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }

            /// Convert the vector to an array.
            #[inline]
            pub fn to_array(self) -> $array {
                [$(self.$field),+]
            }

            /// Zero vector.
            pub const ZERO: Self = Self::splat(0.0);

            /// Dot product between two vectors.
            #[inline]
            pub fn dot(self, rhs: Self) -> $scalar {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                a.dot(b)
            }

            /// Squared Euclidean length of the vector.
            #[inline]
            pub fn length_squared(self) -> $scalar {
                self.dot(self)
            }

            /// Euclidean length (magnitude) of the vector.
            #[inline]
            pub fn length(self) -> $scalar {
                self.length_squared().sqrt()
            }

            /// Returns the vector scaled to unit length.
            ///
            /// The zero vector is not checked for: its components become NaN.
            #[inline]
            pub fn normalized(self) -> Self {
                self / self.length()
            }
        }

        // Conversions to and from the glam type.
        impl From<$glam_type> for $name {
            #[inline]
            fn from(v: $glam_type) -> Self {
                Self {
                    $($field: v.$field),+
                }
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(v: $name) -> Self {
                <$glam_type>::new($(v.$field),+)
            }
        }

        // Conversions to and from arrays.
        impl From<$array> for $name {
            #[inline]
            fn from(arr: $array) -> Self {
                Self::from_array(arr)
            }
        }

        impl From<$name> for $array {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = $scalar;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!("index out of bounds: {}", index),
                }
            }
        }

        impl std::ops::IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match index {
                    $($idx => &mut self.$field,)+
                    _ => panic!("index out of bounds: {}", index),
                }
            }
        }

        // Arithmetic operations implemented via glam.
        impl std::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                Self::from(a + b)
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                Self::from(a - b)
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl std::ops::Mul<$scalar> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $scalar) -> Self::Output {
                let a: $glam_type = self.into();
                Self::from(a * rhs)
            }
        }

        impl std::ops::Mul<$name> for $scalar {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                let b: $glam_type = rhs.into();
                $name::from(self * b)
            }
        }

        impl std::ops::MulAssign<$scalar> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: $scalar) {
                *self = *self * rhs;
            }
        }

        impl std::ops::Div<$scalar> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $scalar) -> Self::Output {
                let a: $glam_type = self.into();
                Self::from(a / rhs)
            }
        }

        impl std::ops::DivAssign<$scalar> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: $scalar) {
                *self = *self / rhs;
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                let a: $glam_type = self.into();
                Self::from(-a)
            }
        }

        #[cfg(any(test, feature = "approx"))]
        impl approx::AbsDiffEq for $name {
            type Epsilon = <$scalar as approx::AbsDiffEq>::Epsilon;

            #[inline]
            fn default_epsilon() -> Self::Epsilon {
                <$scalar as approx::AbsDiffEq>::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(<$scalar as approx::AbsDiffEq>::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        #[cfg(any(test, feature = "approx"))]
        impl approx::RelativeEq for $name {
            #[inline]
            fn default_max_relative() -> Self::Epsilon {
                <$scalar as approx::RelativeEq>::default_max_relative()
            }

            #[inline]
            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $(<$scalar as approx::RelativeEq>::relative_eq(
                    &self.$field,
                    &other.$field,
                    epsilon,
                    max_relative,
                ))&&+
            }
        }
    };
}

/// Elementwise `*` and `/` between two vectors of the same type.
macro_rules! impl_elementwise_ops {
    ($name:ident, $glam_type:ty) => {
        impl std::ops::Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                Self::from(a * b)
            }
        }

        impl std::ops::MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl std::ops::Div for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self::Output {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                Self::from(a / b)
            }
        }

        impl std::ops::DivAssign for $name {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }
    };
}
