use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

/// A reduced fraction with a positive denominator.
///
/// All arithmetic is exact, so comparing a result against the target never
/// suffers from rounding, whatever the magnitude of the intermediate values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExactNumber(BigRational);

impl ExactNumber {
    /// # Panics
    ///
    /// Panics if `denom` is zero. Only this module builds fractions from raw
    /// parts, so a zero denominator is a programming fault.
    pub fn new(numer: i64, denom: i64) -> Self {
        Self(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Exact quotient, or `None` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(Self(&self.0 / &rhs.0))
        }
    }
}

impl From<i64> for ExactNumber {
    fn from(value: i64) -> Self {
        Self(BigRational::from_integer(BigInt::from(value)))
    }
}

impl Add for &ExactNumber {
    type Output = ExactNumber;

    fn add(self, rhs: Self) -> Self::Output {
        ExactNumber(&self.0 + &rhs.0)
    }
}

impl Sub for &ExactNumber {
    type Output = ExactNumber;

    fn sub(self, rhs: Self) -> Self::Output {
        ExactNumber(&self.0 - &rhs.0)
    }
}

impl Mul for &ExactNumber {
    type Output = ExactNumber;

    fn mul(self, rhs: Self) -> Self::Output {
        ExactNumber(&self.0 * &rhs.0)
    }
}

impl fmt::Display for ExactNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}
