//! Closed arithmetic over truncated expansions.
//!
//! Checked operations (`try_add`, `try_sub`, `try_mul`, `try_pow`) report
//! [`AlgebraError::ShapeMismatch`] for incompatible operands; the operator
//! impls delegate to them and panic on misuse, the way dense numeric value
//! types conventionally do.
//!
//! Multiplication applies the per-axis product identity
//! T_m·T_n = ½(T_{m+n} + T_{|m−n|}) across all axes at once: each pair of
//! retained terms fans out into 2^dimension candidate terms, and every
//! candidate whose total degree exceeds the bound is discarded. Cost is
//! O(len² · 2^dimension · dimension).

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use chebra_basis::{MultiIndex, Scalar};

use crate::error::AlgebraError;
use crate::expansion::ChebyshevExpansion;

impl<T: Scalar> ChebyshevExpansion<T> {
    pub(crate) fn check_shape(&self, other: &Self) -> Result<(), AlgebraError> {
        if self.index_space() == other.index_space() {
            Ok(())
        } else {
            Err(AlgebraError::ShapeMismatch {
                left_dimension: self.dimension(),
                left_degree: self.degree(),
                right_dimension: other.dimension(),
                right_degree: other.degree(),
            })
        }
    }

    /// Adds two expansions coefficient-wise.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ShapeMismatch`] for operands with differing dimension
    /// or degree bound.
    pub fn try_add(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_shape(other)?;
        let coeffs = self
            .coeffs()
            .iter()
            .zip(other.coeffs())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Self::with_coeffs(self.index_space(), coeffs))
    }

    /// Subtracts two expansions coefficient-wise.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ShapeMismatch`] for operands with differing dimension
    /// or degree bound.
    pub fn try_sub(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_shape(other)?;
        let coeffs = self
            .coeffs()
            .iter()
            .zip(other.coeffs())
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Self::with_coeffs(self.index_space(), coeffs))
    }

    /// Multiplies two expansions, truncating at the shared degree bound.
    ///
    /// Over-degree product terms are silently dropped; this is the documented
    /// approximation of the algebra, not a fault.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ShapeMismatch`] for operands with differing dimension
    /// or degree bound.
    pub fn try_mul(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_shape(other)?;

        let space = self.index_space();
        let dimension = space.dimension();
        let degree = space.degree();
        let table: Vec<MultiIndex> = space.iter().collect();

        let mut out = vec![T::zero(); self.len()];
        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        let branch_scale = T::of(0.5_f64.powi(dimension as i32));
        let mut exps = vec![0u32; dimension];

        for (i, &ca) in self.coeffs().iter().enumerate() {
            if ca.is_zero() {
                continue;
            }
            for (j, &cb) in other.coeffs().iter().enumerate() {
                if cb.is_zero() {
                    continue;
                }

                let weight = ca * cb * branch_scale;
                let a = &table[i];
                let b = &table[j];

                // Each bit picks the sum or difference branch along one axis.
                'branch: for mask in 0u128..(1u128 << dimension) {
                    let mut total = 0u32;
                    for axis in 0..dimension {
                        let ea = a.exponent(axis);
                        let eb = b.exponent(axis);
                        let e = if (mask >> axis) & 1 == 1 {
                            ea + eb
                        } else {
                            ea.abs_diff(eb)
                        };
                        total += e;
                        if total > degree {
                            continue 'branch;
                        }
                        exps[axis] = e;
                    }

                    let position = space.position_of(&MultiIndex::from_exponents(&exps))?;
                    out[position] = out[position] + weight;
                }
            }
        }

        Ok(Self::with_coeffs(space, out))
    }

    /// Raises the expansion to a non-negative integer power by repeated
    /// truncated multiplication, left to right.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying multiplication.
    pub fn try_pow(&self, exp: u32) -> Result<Self, AlgebraError> {
        let mut result = Self::constant(self.dimension(), self.degree(), T::one())?;
        for _ in 0..exp {
            result = result.try_mul(self)?;
        }
        Ok(result)
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        let coeffs = self.coeffs().iter().map(|&c| -c).collect();
        Self::with_coeffs(self.index_space(), coeffs)
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, factor: T) -> Self {
        let coeffs = self.coeffs().iter().map(|&c| c * factor).collect();
        Self::with_coeffs(self.index_space(), coeffs)
    }

    /// Adds a scalar to the expansion's constant term.
    #[must_use]
    pub fn add_scalar(&self, value: T) -> Self {
        let mut out = self.clone();
        out.coeffs_mut()[0] += value;
        out
    }
}

macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $checked:ident) => {
        impl<T: Scalar> $op for &ChebyshevExpansion<T> {
            type Output = ChebyshevExpansion<T>;

            /// # Panics
            ///
            /// Panics on shape mismatch; use the checked method to handle it.
            fn $method(self, rhs: &ChebyshevExpansion<T>) -> ChebyshevExpansion<T> {
                match self.$checked(rhs) {
                    Ok(out) => out,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<T: Scalar> $op for ChebyshevExpansion<T> {
            type Output = ChebyshevExpansion<T>;

            fn $method(self, rhs: ChebyshevExpansion<T>) -> ChebyshevExpansion<T> {
                $op::$method(&self, &rhs)
            }
        }

        impl<T: Scalar> $op<&ChebyshevExpansion<T>> for ChebyshevExpansion<T> {
            type Output = ChebyshevExpansion<T>;

            fn $method(self, rhs: &ChebyshevExpansion<T>) -> ChebyshevExpansion<T> {
                $op::$method(&self, rhs)
            }
        }

        impl<T: Scalar> $op<ChebyshevExpansion<T>> for &ChebyshevExpansion<T> {
            type Output = ChebyshevExpansion<T>;

            fn $method(self, rhs: ChebyshevExpansion<T>) -> ChebyshevExpansion<T> {
                $op::$method(self, &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, try_add);
impl_binary_op!(Sub, sub, try_sub);
impl_binary_op!(Mul, mul, try_mul);

impl<T: Scalar> Neg for &ChebyshevExpansion<T> {
    type Output = ChebyshevExpansion<T>;

    fn neg(self) -> ChebyshevExpansion<T> {
        ChebyshevExpansion::neg(self)
    }
}

impl<T: Scalar> Neg for ChebyshevExpansion<T> {
    type Output = ChebyshevExpansion<T>;

    fn neg(self) -> ChebyshevExpansion<T> {
        ChebyshevExpansion::neg(&self)
    }
}

impl<T: Scalar> AddAssign<&ChebyshevExpansion<T>> for ChebyshevExpansion<T> {
    /// # Panics
    ///
    /// Panics on shape mismatch.
    fn add_assign(&mut self, rhs: &ChebyshevExpansion<T>) {
        if let Err(e) = self.check_shape(rhs) {
            panic!("{e}");
        }
        for (a, &b) in self.coeffs_mut().iter_mut().zip(rhs.coeffs()) {
            *a += b;
        }
    }
}

impl<T: Scalar> AddAssign for ChebyshevExpansion<T> {
    fn add_assign(&mut self, rhs: ChebyshevExpansion<T>) {
        *self += &rhs;
    }
}

impl<T: Scalar> SubAssign<&ChebyshevExpansion<T>> for ChebyshevExpansion<T> {
    /// # Panics
    ///
    /// Panics on shape mismatch.
    fn sub_assign(&mut self, rhs: &ChebyshevExpansion<T>) {
        if let Err(e) = self.check_shape(rhs) {
            panic!("{e}");
        }
        for (a, &b) in self.coeffs_mut().iter_mut().zip(rhs.coeffs()) {
            *a -= b;
        }
    }
}

impl<T: Scalar> SubAssign for ChebyshevExpansion<T> {
    fn sub_assign(&mut self, rhs: ChebyshevExpansion<T>) {
        *self -= &rhs;
    }
}

impl<T: Scalar> MulAssign<&ChebyshevExpansion<T>> for ChebyshevExpansion<T> {
    /// # Panics
    ///
    /// Panics on shape mismatch.
    fn mul_assign(&mut self, rhs: &ChebyshevExpansion<T>) {
        *self = &*self * rhs;
    }
}

impl<T: Scalar> MulAssign for ChebyshevExpansion<T> {
    fn mul_assign(&mut self, rhs: ChebyshevExpansion<T>) {
        *self *= &rhs;
    }
}

impl<T: Scalar> Add<T> for &ChebyshevExpansion<T> {
    type Output = ChebyshevExpansion<T>;

    fn add(self, rhs: T) -> ChebyshevExpansion<T> {
        self.add_scalar(rhs)
    }
}

impl<T: Scalar> Add<T> for ChebyshevExpansion<T> {
    type Output = ChebyshevExpansion<T>;

    fn add(self, rhs: T) -> ChebyshevExpansion<T> {
        self.add_scalar(rhs)
    }
}

impl<T: Scalar> Sub<T> for &ChebyshevExpansion<T> {
    type Output = ChebyshevExpansion<T>;

    fn sub(self, rhs: T) -> ChebyshevExpansion<T> {
        self.add_scalar(-rhs)
    }
}

impl<T: Scalar> Sub<T> for ChebyshevExpansion<T> {
    type Output = ChebyshevExpansion<T>;

    fn sub(self, rhs: T) -> ChebyshevExpansion<T> {
        self.add_scalar(-rhs)
    }
}

impl<T: Scalar> Mul<T> for &ChebyshevExpansion<T> {
    type Output = ChebyshevExpansion<T>;

    fn mul(self, rhs: T) -> ChebyshevExpansion<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Mul<T> for ChebyshevExpansion<T> {
    type Output = ChebyshevExpansion<T>;

    fn mul(self, rhs: T) -> ChebyshevExpansion<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Div<T> for &ChebyshevExpansion<T> {
    type Output = ChebyshevExpansion<T>;

    fn div(self, rhs: T) -> ChebyshevExpansion<T> {
        self.scale(T::one() / rhs)
    }
}

impl<T: Scalar> Div<T> for ChebyshevExpansion<T> {
    type Output = ChebyshevExpansion<T>;

    fn div(self, rhs: T) -> ChebyshevExpansion<T> {
        self.scale(T::one() / rhs)
    }
}

macro_rules! impl_commuted_scalar {
    ($t:ty) => {
        impl Add<&ChebyshevExpansion<$t>> for $t {
            type Output = ChebyshevExpansion<$t>;

            fn add(self, rhs: &ChebyshevExpansion<$t>) -> ChebyshevExpansion<$t> {
                rhs.add_scalar(self)
            }
        }

        impl Add<ChebyshevExpansion<$t>> for $t {
            type Output = ChebyshevExpansion<$t>;

            fn add(self, rhs: ChebyshevExpansion<$t>) -> ChebyshevExpansion<$t> {
                rhs.add_scalar(self)
            }
        }

        impl Sub<&ChebyshevExpansion<$t>> for $t {
            type Output = ChebyshevExpansion<$t>;

            fn sub(self, rhs: &ChebyshevExpansion<$t>) -> ChebyshevExpansion<$t> {
                rhs.neg().add_scalar(self)
            }
        }

        impl Sub<ChebyshevExpansion<$t>> for $t {
            type Output = ChebyshevExpansion<$t>;

            fn sub(self, rhs: ChebyshevExpansion<$t>) -> ChebyshevExpansion<$t> {
                rhs.neg().add_scalar(self)
            }
        }

        impl Mul<&ChebyshevExpansion<$t>> for $t {
            type Output = ChebyshevExpansion<$t>;

            fn mul(self, rhs: &ChebyshevExpansion<$t>) -> ChebyshevExpansion<$t> {
                rhs.scale(self)
            }
        }

        impl Mul<ChebyshevExpansion<$t>> for $t {
            type Output = ChebyshevExpansion<$t>;

            fn mul(self, rhs: ChebyshevExpansion<$t>) -> ChebyshevExpansion<$t> {
                rhs.scale(self)
            }
        }
    };
}

impl_commuted_scalar!(f32);
impl_commuted_scalar!(f64);
