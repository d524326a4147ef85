//! Macro to define a square matrix type.
//!
//! The generated types store their cells row-major in a flat `data` array: row `r`,
//! column `c` lives at `r * dim + c`. Vectors are treated as columns multiplied on
//! the right. `glam` stores column-major, so conversions to and from `glam` transpose.
//!
//! # Arguments
//!
//! * `name`        - The name of the matrix type.
//! * `scalar`      - The scalar type (e.g. `f32` or `f64`).
//! * `dim`         - The number of rows (and columns).
//! * `array`       - The row-major array type (e.g. `[f32; 9]` for 3x3).
//! * `vec_type`    - The vector type used for rows, columns and mat-vec mul.
//! * `glam_type`   - The `glam` matrix type used for conversions.
//!
macro_rules! define_matrix_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $scalar:ty,
        $dim:literal,
        $array:ty,
        $vec_type:ident,
        $glam_type:ty
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name {
            /// Row-major cells.
            pub data: $array,
        }

        impl $name {
            /// Number of rows and columns.
            pub const DIM: usize = $dim;

            /// Zero matrix.
            pub const ZERO: Self = Self {
                data: [0.0; $dim * $dim],
            };

            /// Identity matrix.
            #[inline]
            pub fn identity() -> Self {
                let mut m = Self::ZERO;
                for i in 0..$dim {
                    m.data[i * $dim + i] = 1.0;
                }
                m
            }

            /// Create a matrix from a row-major array.
            #[inline]
            pub const fn from_array(data: $array) -> Self {
                Self { data }
            }

            /// Convert the matrix to a row-major array.
            #[inline]
            pub fn to_array(self) -> $array {
                self.data
            }

            /// Create a matrix from row vectors.
            pub fn from_rows(rows: [$vec_type; $dim]) -> Self {
                let mut m = Self::ZERO;
                for (r, row) in rows.iter().enumerate() {
                    for c in 0..$dim {
                        m.data[r * $dim + c] = row[c];
                    }
                }
                m
            }

            /// Get a row as a vector.
            pub fn row(&self, r: usize) -> $vec_type {
                let mut v = $vec_type::ZERO;
                for c in 0..$dim {
                    v[c] = self[(r, c)];
                }
                v
            }

            /// Get a column as a vector.
            pub fn col(&self, c: usize) -> $vec_type {
                let mut v = $vec_type::ZERO;
                for r in 0..$dim {
                    v[r] = self[(r, c)];
                }
                v
            }

            /// Transpose the matrix.
            pub fn transpose(self) -> Self {
                let mut m = Self::ZERO;
                for r in 0..$dim {
                    for c in 0..$dim {
                        m.data[c * $dim + r] = self.data[r * $dim + c];
                    }
                }
                m
            }

            /// Set `result = a * b`.
            ///
            /// The product is accumulated in a temporary and written to `result` once
            /// every cell has been computed.
            pub fn multiply(a: &Self, b: &Self, result: &mut Self) {
                let mut out: $array = [0.0; $dim * $dim];
                for r in 0..$dim {
                    for c in 0..$dim {
                        let mut acc = 0.0;
                        for k in 0..$dim {
                            acc += a.data[r * $dim + k] * b.data[k * $dim + c];
                        }
                        out[r * $dim + c] = acc;
                    }
                }
                result.data = out;
            }

            /// Set `result = a * vec`, with `vec` taken as a column vector.
            pub fn multiply_vec(a: &Self, vec: &$vec_type, result: &mut $vec_type) {
                let mut out = $vec_type::ZERO;
                for r in 0..$dim {
                    let mut acc = 0.0;
                    for c in 0..$dim {
                        acc += a.data[r * $dim + c] * vec[c];
                    }
                    out[r] = acc;
                }
                *result = out;
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::identity()
            }
        }

        impl std::ops::Index<(usize, usize)> for $name {
            type Output = $scalar;

            #[inline]
            fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
                assert!(row < $dim && col < $dim, "index out of bounds: ({}, {})", row, col);
                &self.data[row * $dim + col]
            }
        }

        impl std::ops::IndexMut<(usize, usize)> for $name {
            #[inline]
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
                assert!(row < $dim && col < $dim, "index out of bounds: ({}, {})", row, col);
                &mut self.data[row * $dim + col]
            }
        }

        // Conversions to and from the column-major glam type.
        impl From<$glam_type> for $name {
            #[inline]
            fn from(m: $glam_type) -> Self {
                Self::from_array(m.transpose().to_cols_array())
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(m: $name) -> Self {
                <$glam_type>::from_cols_array(&m.data).transpose()
            }
        }

        // Conversions to and from row-major arrays.
        impl From<$array> for $name {
            #[inline]
            fn from(data: $array) -> Self {
                Self::from_array(data)
            }
        }

        impl From<$name> for $array {
            #[inline]
            fn from(m: $name) -> Self {
                m.data
            }
        }

        impl TryFrom<&[$scalar]> for $name {
            type Error = $crate::AlgebraError;

            fn try_from(slice: &[$scalar]) -> Result<Self, Self::Error> {
                let data: $array =
                    slice
                        .try_into()
                        .map_err(|_| $crate::AlgebraError::InvalidLength {
                            expected: $dim * $dim,
                            got: slice.len(),
                        })?;
                Ok(Self::from_array(data))
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
                self.data
                    .iter()
                    .zip(other.data.iter())
                    .all(|(ai, bi)| <$scalar as approx::AbsDiffEq>::abs_diff_eq(ai, bi, epsilon))
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
                self.data.iter().zip(other.data.iter()).all(|(ai, bi)| {
                    <$scalar as approx::RelativeEq>::relative_eq(ai, bi, epsilon, max_relative)
                })
            }
        }

        // Matrix-matrix multiplication.
        impl std::ops::Mul<$name> for $name {
            type Output = $name;

            #[inline]
            fn mul(mut self, rhs: $name) -> Self::Output {
                self *= rhs;
                self
            }
        }

        impl std::ops::MulAssign<$name> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: $name) {
                let lhs = *self;
                $name::multiply(&lhs, &rhs, self);
            }
        }

        // Matrix-vector multiplication.
        impl std::ops::Mul<$vec_type> for $name {
            type Output = $vec_type;

            #[inline]
            fn mul(self, rhs: $vec_type) -> Self::Output {
                let mut out = $vec_type::ZERO;
                $name::multiply_vec(&self, &rhs, &mut out);
                out
            }
        }
    };
}
