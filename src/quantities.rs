//! # Dimensional Quantities
//!
//! Scalar physical quantities carrying a vector of SI base-unit exponents
//! (plus angle), checked at runtime. Quantities of identical dimensions can
//! be added, subtracted and compared; multiplication and division combine
//! the exponent vectors; the elementary functions are restricted to the
//! dimensionless (or angular) domain.
//!
//! ## Error Semantics
//! -----------------
//! Mixing dimensions in `+`, `-` or a comparison is a programmer error and
//! panics with the [`RamureError::DimensionMismatch`] message. The checked
//! variants ([`Quantity::checked_add`], [`Quantity::checked_sub`]) return
//! the error instead.
//!
//! ## See also
//! ------------
//! * [`crate::constants`] – SI units and physical constants built on this
//!   module.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::ramure_errors::RamureError;

/// Exponents of a quantity over the SI base units and the angle.
///
/// The eight components are the integer exponents of metre, kilogram,
/// second, ampere, kelvin, mole, candela and radian, in that order. The
/// all-zero vector is the dimensionless case.
///
/// Constants are built with the chainable `const` setters:
///
/// ```rust
/// use ramure::quantities::Dimensions;
///
/// // m^3 kg^-1 s^-2, the dimensions of the gravitational constant.
/// const GRAVITATION: Dimensions = Dimensions::NONE.metre(3).kilogram(-1).second(-2);
/// assert_eq!(GRAVITATION.to_string(), "m^3 kg^-1 s^-2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    metre: i8,
    kilogram: i8,
    second: i8,
    ampere: i8,
    kelvin: i8,
    mole: i8,
    candela: i8,
    radian: i8,
}

impl Dimensions {
    /// The dimensionless exponent vector.
    pub const NONE: Dimensions = Dimensions {
        metre: 0,
        kilogram: 0,
        second: 0,
        ampere: 0,
        kelvin: 0,
        mole: 0,
        candela: 0,
        radian: 0,
    };

    pub const fn metre(self, exponent: i8) -> Self {
        Dimensions {
            metre: exponent,
            ..self
        }
    }

    pub const fn kilogram(self, exponent: i8) -> Self {
        Dimensions {
            kilogram: exponent,
            ..self
        }
    }

    pub const fn second(self, exponent: i8) -> Self {
        Dimensions {
            second: exponent,
            ..self
        }
    }

    pub const fn ampere(self, exponent: i8) -> Self {
        Dimensions {
            ampere: exponent,
            ..self
        }
    }

    pub const fn kelvin(self, exponent: i8) -> Self {
        Dimensions {
            kelvin: exponent,
            ..self
        }
    }

    pub const fn mole(self, exponent: i8) -> Self {
        Dimensions {
            mole: exponent,
            ..self
        }
    }

    pub const fn candela(self, exponent: i8) -> Self {
        Dimensions {
            candela: exponent,
            ..self
        }
    }

    pub const fn radian(self, exponent: i8) -> Self {
        Dimensions {
            radian: exponent,
            ..self
        }
    }

    /// True for the all-zero (dimensionless) vector.
    pub const fn is_none(self) -> bool {
        self.metre == 0
            && self.kilogram == 0
            && self.second == 0
            && self.ampere == 0
            && self.kelvin == 0
            && self.mole == 0
            && self.candela == 0
            && self.radian == 0
    }

    /// True for a pure angle or a dimensionless value, the domain of the
    /// circular functions.
    pub const fn is_angle(self) -> bool {
        self.metre == 0
            && self.kilogram == 0
            && self.second == 0
            && self.ampere == 0
            && self.kelvin == 0
            && self.mole == 0
            && self.candela == 0
            && (self.radian == 0 || self.radian == 1)
    }

    fn zip(self, other: Self, f: impl Fn(i8, i8) -> i8) -> Self {
        Dimensions {
            metre: f(self.metre, other.metre),
            kilogram: f(self.kilogram, other.kilogram),
            second: f(self.second, other.second),
            ampere: f(self.ampere, other.ampere),
            kelvin: f(self.kelvin, other.kelvin),
            mole: f(self.mole, other.mole),
            candela: f(self.candela, other.candela),
            radian: f(self.radian, other.radian),
        }
    }

    /// Exponent vector of a product.
    pub fn product(self, other: Self) -> Self {
        self.zip(other, |a, b| a + b)
    }

    /// Exponent vector of a quotient.
    pub fn quotient(self, other: Self) -> Self {
        self.zip(other, |a, b| a - b)
    }

    /// Exponent vector of an integer power.
    pub fn power(self, n: i32) -> Self {
        self.zip(Self::NONE, |a, _| (a as i32 * n) as i8)
    }

    /// Exponent vector of a square root, or `None` if an exponent is odd.
    pub fn root(self) -> Option<Self> {
        let halved = self.zip(Self::NONE, |a, _| a / 2);
        if halved.power(2) == self {
            Some(halved)
        } else {
            None
        }
    }

    fn components(self) -> [(&'static str, i8); 8] {
        [
            ("m", self.metre),
            ("kg", self.kilogram),
            ("s", self.second),
            ("A", self.ampere),
            ("K", self.kelvin),
            ("mol", self.mole),
            ("cd", self.candela),
            ("rad", self.radian),
        ]
    }
}

impl fmt::Display for Dimensions {
    /// Unit suffix derived from the exponent vector, `1` when dimensionless.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "1");
        }
        let mut first = true;
        for (symbol, exponent) in self.components() {
            if exponent == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            if exponent == 1 {
                write!(f, "{symbol}")?;
            } else {
                write!(f, "{symbol}^{exponent}")?;
            }
        }
        Ok(())
    }
}

/// A scalar physical quantity: an `f64` value and its [`Dimensions`].
///
/// # Fields
///
/// * `value` - The numerical value, expressed in coherent SI units
/// * `dimensions` - The exponent vector of the quantity
#[derive(Debug, Clone, Copy)]
pub struct Quantity {
    value: f64,
    dimensions: Dimensions,
}

impl Quantity {
    /// Build a quantity from a raw value and its exponent vector.
    pub const fn new(value: f64, dimensions: Dimensions) -> Self {
        Quantity { value, dimensions }
    }

    /// Build a dimensionless quantity.
    pub const fn dimensionless(value: f64) -> Self {
        Quantity::new(value, Dimensions::NONE)
    }

    /// The raw numerical value, in coherent SI units.
    #[inline]
    pub fn value(self) -> f64 {
        self.value
    }

    #[inline]
    pub fn dimensions(self) -> Dimensions {
        self.dimensions
    }

    #[inline]
    pub fn is_dimensionless(self) -> bool {
        self.dimensions.is_none()
    }

    fn require_same(self, other: Self) -> Result<(), RamureError> {
        if self.dimensions == other.dimensions {
            Ok(())
        } else {
            Err(RamureError::DimensionMismatch {
                left: self.dimensions,
                right: other.dimensions,
            })
        }
    }

    fn require_dimensionless(self) -> f64 {
        if !self.is_dimensionless() {
            dimension_panic(self.dimensions, Dimensions::NONE);
        }
        self.value
    }

    /// Addition restricted to identical dimensions.
    ///
    /// Return
    /// ------
    /// * The sum, or [`RamureError::DimensionMismatch`].
    pub fn checked_add(self, other: Self) -> Result<Self, RamureError> {
        self.require_same(other)?;
        Ok(Quantity::new(self.value + other.value, self.dimensions))
    }

    /// Subtraction restricted to identical dimensions.
    pub fn checked_sub(self, other: Self) -> Result<Self, RamureError> {
        self.require_same(other)?;
        Ok(Quantity::new(self.value - other.value, self.dimensions))
    }

    /// Integer power with a statically known exponent.
    ///
    /// ```rust
    /// use ramure::constants::METRE;
    ///
    /// let volume = (2.0 * METRE).pow::<3>();
    /// assert_eq!(volume.value(), 8.0);
    /// ```
    pub fn pow<const N: i32>(self) -> Self {
        self.powi(N)
    }

    /// Integer power with a runtime exponent.
    pub fn powi(self, n: i32) -> Self {
        Quantity::new(self.value.powi(n), self.dimensions.power(n))
    }

    /// Square root; halves the exponent vector.
    ///
    /// # Panics
    ///
    /// Panics if any exponent is odd.
    pub fn sqrt(self) -> Self {
        match self.dimensions.root() {
            Some(dimensions) => Quantity::new(self.value.sqrt(), dimensions),
            None => panic!(
                "cannot take the square root of a quantity with odd exponents: [{}]",
                self.dimensions
            ),
        }
    }

    /// Absolute value, preserving dimensions.
    pub fn abs(self) -> Self {
        Quantity::new(self.value.abs(), self.dimensions)
    }

    /// Sine of an angle (or of a dimensionless value). Panics otherwise.
    pub fn sin(self) -> Self {
        Quantity::dimensionless(self.require_angle().sin())
    }

    /// Cosine of an angle (or of a dimensionless value). Panics otherwise.
    pub fn cos(self) -> Self {
        Quantity::dimensionless(self.require_angle().cos())
    }

    /// Arc sine of a dimensionless value, as an angle in radians.
    pub fn asin(self) -> Self {
        Quantity::new(
            self.require_dimensionless().asin(),
            Dimensions::NONE.radian(1),
        )
    }

    /// Exponential of a dimensionless value. Panics otherwise.
    pub fn exp(self) -> Self {
        Quantity::dimensionless(self.require_dimensionless().exp())
    }

    /// Natural logarithm of a dimensionless value. Panics otherwise.
    pub fn ln(self) -> Self {
        Quantity::dimensionless(self.require_dimensionless().ln())
    }

    fn require_angle(self) -> f64 {
        if !self.dimensions.is_angle() {
            dimension_panic(self.dimensions, Dimensions::NONE.radian(1));
        }
        self.value
    }
}

#[cold]
fn dimension_panic(left: Dimensions, right: Dimensions) -> ! {
    panic!("{}", RamureError::DimensionMismatch { left, right })
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::dimensionless(value)
    }
}

impl Add for Quantity {
    type Output = Quantity;

    /// # Panics
    ///
    /// Panics on mismatched dimensions; see [`Quantity::checked_add`].
    fn add(self, rhs: Quantity) -> Quantity {
        match self.checked_add(rhs) {
            Ok(sum) => sum,
            Err(_) => dimension_panic(self.dimensions, rhs.dimensions),
        }
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    /// # Panics
    ///
    /// Panics on mismatched dimensions; see [`Quantity::checked_sub`].
    fn sub(self, rhs: Quantity) -> Quantity {
        match self.checked_sub(rhs) {
            Ok(difference) => difference,
            Err(_) => dimension_panic(self.dimensions, rhs.dimensions),
        }
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Quantity) {
        *self = *self + rhs;
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Quantity) {
        *self = *self - rhs;
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity::new(-self.value, self.dimensions)
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity::new(
            self.value * rhs.value,
            self.dimensions.product(rhs.dimensions),
        )
    }
}

impl Div for Quantity {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::new(
            self.value / rhs.value,
            self.dimensions.quotient(rhs.dimensions),
        )
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.value * rhs, self.dimensions)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity::new(self.value / rhs, self.dimensions)
    }
}

impl Div<Quantity> for f64 {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::dimensionless(self) / rhs
    }
}

impl MulAssign<Quantity> for Quantity {
    fn mul_assign(&mut self, rhs: Quantity) {
        *self = *self * rhs;
    }
}

impl DivAssign<Quantity> for Quantity {
    fn div_assign(&mut self, rhs: Quantity) {
        *self = *self / rhs;
    }
}

impl MulAssign<f64> for Quantity {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Quantity {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl PartialEq for Quantity {
    /// # Panics
    ///
    /// Comparing quantities of different dimensions is a programmer error
    /// and panics.
    fn eq(&self, other: &Quantity) -> bool {
        if self.dimensions != other.dimensions {
            dimension_panic(self.dimensions, other.dimensions);
        }
        self.value == other.value
    }
}

impl PartialOrd for Quantity {
    /// # Panics
    ///
    /// Comparing quantities of different dimensions is a programmer error
    /// and panics.
    fn partial_cmp(&self, other: &Quantity) -> Option<Ordering> {
        if self.dimensions != other.dimensions {
            dimension_panic(self.dimensions, other.dimensions);
        }
        self.value.partial_cmp(&other.value)
    }
}

impl PartialEq<f64> for Quantity {
    fn eq(&self, other: &f64) -> bool {
        self.require_dimensionless() == *other
    }
}

impl PartialEq<Quantity> for f64 {
    fn eq(&self, other: &Quantity) -> bool {
        *self == other.require_dimensionless()
    }
}

impl PartialOrd<f64> for Quantity {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.require_dimensionless().partial_cmp(other)
    }
}

impl PartialOrd<Quantity> for f64 {
    fn partial_cmp(&self, other: &Quantity) -> Option<Ordering> {
        self.partial_cmp(&other.require_dimensionless())
    }
}

impl fmt::Display for Quantity {
    /// Scientific notation followed by the unit suffix.
    ///
    /// The formatter precision selects the number of mantissa digits:
    /// `format!("{:.3}", GRAVITATIONAL_CONSTANT)` gives
    /// `"6.674e-11 m^3 kg^-1 s^-2"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*e}", precision, self.value)?,
            None => write!(f, "{:e}", self.value)?,
        }
        if !self.dimensions.is_none() {
            write!(f, " {}", self.dimensions)?;
        }
        Ok(())
    }
}

impl AbsDiffEq for Quantity {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.dimensions == other.dimensions && self.value.abs_diff_eq(&other.value, epsilon)
    }
}

impl RelativeEq for Quantity {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.dimensions == other.dimensions
            && self.value.relative_eq(&other.value, epsilon, max_relative)
    }
}
