use crate::error::ComplexError;
use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::Serialize;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An immutable complex number with `f64` real and imaginary parts
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ComplexNumber {
    re: f64,
    im: f64,
}

impl ComplexNumber {
    /// The additive identity `0 + 0i`
    pub const ZERO: ComplexNumber = ComplexNumber { re: 0.0, im: 0.0 };

    /// The multiplicative identity `1 + 0i`
    pub const ONE: ComplexNumber = ComplexNumber { re: 1.0, im: 0.0 };

    /// The imaginary unit `0 + 1i`
    pub const I: ComplexNumber = ComplexNumber { re: 0.0, im: 1.0 };

    /// Create a new complex number from real and imaginary parts
    pub fn new(re: f64, im: f64) -> Self {
        ComplexNumber { re, im }
    }

    /// Create a new complex number from a real number (imaginary part = 0)
    pub fn from_real(re: f64) -> Self {
        ComplexNumber::new(re, 0.0)
    }

    /// Create a new complex number from an imaginary number (real part = 0)
    pub fn from_imag(im: f64) -> Self {
        ComplexNumber::new(0.0, im)
    }

    /// Get the real part
    pub fn re(&self) -> f64 {
        self.re
    }

    /// Get the imaginary part
    pub fn im(&self) -> f64 {
        self.im
    }

    /// Get the complex conjugate
    pub fn conj(&self) -> Self {
        ComplexNumber::new(self.re, -self.im)
    }

    /// Calculate the square of the magnitude (norm squared)
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Compute the multiplicative inverse `1/self`.
    ///
    /// Fails with [`ComplexError::InvalidArgument`] when `self` is the zero
    /// value. The zero check uses exact equality, so `-0.0` parts count as
    /// zero.
    pub fn inv(self) -> Result<Self, ComplexError> {
        if self == Self::ZERO {
            return Err(ComplexError::InvalidArgument(String::from(
                "Division by zero",
            )));
        }

        let denom = self.norm_sqr();
        Ok(ComplexNumber::new(self.re / denom, -self.im / denom))
    }

    /// Divide by `divisor`, computed as multiplication by the divisor's
    /// inverse.
    ///
    /// Fails with [`ComplexError::InvalidArgument`] when the divisor is the
    /// zero value.
    pub fn div(self, divisor: Self) -> Result<Self, ComplexError> {
        Ok(self * divisor.inv()?)
    }

    /// Check if either part is NaN
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Check if either part is infinite
    pub fn is_infinite(&self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    /// Check if both parts are finite
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

// Implement basic arithmetic operations
impl Add for ComplexNumber {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        ComplexNumber::new(self.re + other.re, self.im + other.im)
    }
}

impl Add<&ComplexNumber> for ComplexNumber {
    type Output = Self;

    fn add(self, other: &Self) -> Self {
        self + *other
    }
}

impl Add<ComplexNumber> for &ComplexNumber {
    type Output = ComplexNumber;

    fn add(self, other: ComplexNumber) -> ComplexNumber {
        *self + other
    }
}

impl Add<&ComplexNumber> for &ComplexNumber {
    type Output = ComplexNumber;

    fn add(self, other: &ComplexNumber) -> ComplexNumber {
        *self + *other
    }
}

impl Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        ComplexNumber::new(self.re - other.re, self.im - other.im)
    }
}

impl Sub<&ComplexNumber> for ComplexNumber {
    type Output = Self;

    fn sub(self, other: &Self) -> Self {
        self - *other
    }
}

impl Sub<ComplexNumber> for &ComplexNumber {
    type Output = ComplexNumber;

    fn sub(self, other: ComplexNumber) -> ComplexNumber {
        *self - other
    }
}

impl Sub<&ComplexNumber> for &ComplexNumber {
    type Output = ComplexNumber;

    fn sub(self, other: &ComplexNumber) -> ComplexNumber {
        *self - *other
    }
}

impl Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        ComplexNumber::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

impl Mul<&ComplexNumber> for ComplexNumber {
    type Output = Self;

    fn mul(self, other: &Self) -> Self {
        self * *other
    }
}

impl Mul<ComplexNumber> for &ComplexNumber {
    type Output = ComplexNumber;

    fn mul(self, other: ComplexNumber) -> ComplexNumber {
        *self * other
    }
}

impl Mul<&ComplexNumber> for &ComplexNumber {
    type Output = ComplexNumber;

    fn mul(self, other: &ComplexNumber) -> ComplexNumber {
        *self * *other
    }
}

impl Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self {
        ComplexNumber::new(-self.re, -self.im)
    }
}

impl Neg for &ComplexNumber {
    type Output = ComplexNumber;

    fn neg(self) -> ComplexNumber {
        -*self
    }
}

impl Zero for ComplexNumber {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl One for ComplexNumber {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl Default for ComplexNumber {
    fn default() -> Self {
        Self::ZERO
    }
}

// Implement Display for pretty printing
impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens: Vec<String> = vec![];

        // A real part of -0.0 compares equal to 0.0 and is omitted
        if self.re != 0.0 {
            tokens.push(format!("{}", self.re));
        }

        if self.im != 0.0 {
            if tokens.is_empty() {
                tokens.push(format!("{} * i", self.im));
            } else {
                tokens.push(String::from(if self.im > 0.0 { "+" } else { "-" }));
                tokens.push(format!("{} * i", self.im.abs()));
            }
        }

        if tokens.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", tokens.join(" "))
        }
    }
}

// Conversion from f64 (real number)
impl From<f64> for ComplexNumber {
    fn from(re: f64) -> Self {
        ComplexNumber::from_real(re)
    }
}

// Conversion from (f64, f64) tuple
impl From<(f64, f64)> for ComplexNumber {
    fn from((re, im): (f64, f64)) -> Self {
        ComplexNumber::new(re, im)
    }
}

// Conversion from Complex64
impl From<Complex64> for ComplexNumber {
    fn from(num: Complex64) -> Self {
        ComplexNumber::new(num.re, num.im)
    }
}

// Conversion to Complex64
impl From<ComplexNumber> for Complex64 {
    fn from(value: ComplexNumber) -> Complex64 {
        Complex64::new(value.re, value.im)
    }
}

impl From<&ComplexNumber> for Complex64 {
    fn from(value: &ComplexNumber) -> Complex64 {
        Complex64::new(value.re, value.im)
    }
}
