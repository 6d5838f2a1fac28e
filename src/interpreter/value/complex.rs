use std::{fmt, ops};

use crate::util::num::f64_to_i32_checked;

/// `0` as a [`Number`].
pub const ZERO: Number = Number::new(0.0, 0.0);
/// `1` as a [`Number`].
pub const ONE: Number = Number::new(1.0, 0.0);
/// The imaginary unit `i`.
pub const I: Number = Number::new(0.0, 1.0);
/// The sentinel used for every undefined result: both components are NaN.
pub const NAN: Number = Number::new(f64::NAN, f64::NAN);

/// A complex number with double precision components.
///
/// This is the only value type produced by evaluation. Equality is exact,
/// componentwise floating point equality: `NaN` never equals anything,
/// including itself, and no tolerance is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Number {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl fmt::Display for Number {
    /// Formats the number the way the calculator echoes results.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::{NAN, Number};
    ///
    /// assert_eq!(Number::new(3.0, 0.0).to_string(), "3");
    /// assert_eq!(Number::new(0.0, 1.0).to_string(), "i");
    /// assert_eq!(Number::new(3.0, -2.0).to_string(), "3 - 2i");
    /// assert_eq!(Number::new(0.5, 1.0).to_string(), "0.5 + i");
    /// assert_eq!(NAN.to_string(), "NaN");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return f.write_str("NaN");
        }
        if self.imaginary == 0.0 {
            return write_real(f, self.real);
        }
        if self.real == 0.0 {
            return write_imaginary(f, self.imaginary);
        }

        write_real(f, self.real)?;
        if self.imaginary.is_sign_negative() {
            f.write_str(" - ")?;
        } else {
            f.write_str(" + ")?;
        }
        write_imaginary(f, self.imaginary.abs())
    }
}

// `-0` prints as `0`.
fn write_real(f: &mut fmt::Formatter<'_>, real: f64) -> fmt::Result {
    if real == 0.0 { f.write_str("0") } else { write!(f, "{real}") }
}

fn write_imaginary(f: &mut fmt::Formatter<'_>, imaginary: f64) -> fmt::Result {
    if imaginary == 1.0 {
        f.write_str("i")
    } else if imaginary == -1.0 {
        f.write_str("-i")
    } else {
        write!(f, "{imaginary}i")
    }
}

impl Number {
    /// Constructs a new number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::Number;
    /// let c = Number::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Builds a number from polar coordinates.
    #[must_use]
    pub fn polar(magnitude: f64, angle: f64) -> Self {
        Self { real:      magnitude * angle.cos(),
               imaginary: magnitude * angle.sin(), }
    }

    /// Returns `true` when the imaginary part is exactly zero.
    #[must_use]
    pub const fn is_real(&self) -> bool {
        self.imaginary == 0.0
    }

    /// Returns `true` when either component is NaN.
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        self.real.is_nan() || self.imaginary.is_nan()
    }

    /// Returns the absolute value (magnitude) of the number.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::Number;
    /// assert_eq!(Number::new(3.0, 4.0).abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the argument (phase angle) in radians.
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Returns the reciprocal `1/z`.
    #[must_use]
    pub const fn recip(&self) -> Self {
        let norm = self.real * self.real + self.imaginary * self.imaginary;

        Self { real:      self.real / norm,
               imaginary: -(self.imaginary / norm), }
    }

    /// Raises the number to an integer power by repeated squaring.
    ///
    /// Integer powers of integer-valued reals are exact as long as the result
    /// fits into the mantissa.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::Number;
    /// assert_eq!(Number::from(2.0).powi(9), Number::from(512.0));
    /// assert_eq!(Number::from(2.0).powi(-1), Number::from(0.5));
    /// ```
    #[must_use]
    pub fn powi(self, exp: i32) -> Self {
        if exp == 0 {
            return ONE;
        }

        let mut base = self;
        let mut result = ONE;
        let mut n = exp.unsigned_abs();

        while n > 0 {
            if n % 2 == 1 {
                result *= base;
            }
            n /= 2;
            if n > 0 {
                base *= base;
            }
        }

        if exp < 0 { result.recip() } else { result }
    }

    /// Raises the number to a complex power.
    ///
    /// Integer exponents use [`Number::powi`], non-negative real bases with
    /// real exponents use the real power function, and everything else
    /// goes through `exp(exponent * ln(self))`. A zero base yields zero for
    /// exponents with positive real part and NaN otherwise.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::{I, Number};
    /// assert_eq!(Number::from(4.0).pow(Number::from(0.5)), Number::from(2.0));
    ///
    /// let minus_one = I.pow(Number::from(2.0));
    /// assert_eq!(minus_one, Number::from(-1.0));
    /// ```
    #[must_use]
    pub fn pow(self, exponent: Self) -> Self {
        if exponent.is_real()
           && let Some(n) = f64_to_i32_checked(exponent.real)
        {
            return self.powi(n);
        }
        if self == ZERO {
            return if exponent.real > 0.0 { ZERO } else { NAN };
        }
        if self.is_real() && self.real > 0.0 && exponent.is_real() {
            return Self::from(self.real.powf(exponent.real));
        }

        (exponent * self.ln()).exp()
    }

    /// Returns the principal square root.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::{I, Number};
    /// assert_eq!(Number::from(9.0).sqrt(), Number::from(3.0));
    /// assert_eq!(Number::from(-1.0).sqrt(), I);
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        let a = self.real;
        let b = self.imaginary;
        let r = a.hypot(b);

        let real = f64::midpoint(r, a).sqrt();
        let imaginary = ((r - a) / 2.0).sqrt().copysign(b);

        Self { real, imaginary }
    }

    /// Returns the sine.
    #[must_use]
    pub fn sin(self) -> Self {
        Self { real:      self.real.sin() * self.imaginary.cosh(),
               imaginary: self.real.cos() * self.imaginary.sinh(), }
    }

    /// Returns the cosine.
    #[must_use]
    pub fn cos(self) -> Self {
        Self { real:      self.real.cos() * self.imaginary.cosh(),
               imaginary: -self.real.sin() * self.imaginary.sinh(), }
    }

    /// Returns the tangent.
    #[must_use]
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    /// Returns `e` raised to this number.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::{ONE, ZERO};
    /// assert_eq!(ZERO.exp(), ONE);
    /// ```
    #[must_use]
    pub fn exp(self) -> Self {
        let exp_r = self.real.exp();
        if self.imaginary == 0.0 {
            return Self::from(exp_r);
        }
        Self { real:      exp_r * self.imaginary.cos(),
               imaginary: exp_r * self.imaginary.sin(), }
    }

    /// Returns the principal natural logarithm.
    #[must_use]
    pub fn ln(self) -> Self {
        Self { real:      self.abs().ln(),
               imaginary: self.arg(), }
    }
}

impl ops::Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}

impl ops::Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real
                              .mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
               imaginary: self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real), }
    }
}

impl ops::MulAssign for Number {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl ops::Div for Number {
    type Output = Self;

    /// Complex division. Dividing by exact zero is not guarded and yields
    /// NaN or infinite components.
    fn div(self, rhs: Self) -> Self::Output {
        let denom = rhs.real.mul_add(rhs.real, rhs.imaginary * rhs.imaginary);
        Self { real:      self.real.mul_add(rhs.real, self.imaginary * rhs.imaginary) / denom,
               imaginary: self.imaginary
                              .mul_add(rhs.real, -(self.real * rhs.imaginary))
                          / denom, }
    }
}

impl<T> From<T> for Number where T: Into<f64>
{
    fn from(value: T) -> Self {
        Self { real:      value.into(),
               imaginary: 0.0, }
    }
}
