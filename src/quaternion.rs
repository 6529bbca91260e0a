//! Quaternions.

use crate::{consts, random};
use bytemuck::{Pod, Zeroable};
use std::ops::{Index, IndexMut, Mul};

/// A quaternion `a + b*i + c*j + d*k` with `f64` components.
///
/// Values are immutable by convention: every operation returns a fresh
/// quaternion, and the polar-form modifiers ([`with_theta`](Self::with_theta),
/// [`with_axis`](Self::with_axis), [`with_imag`](Self::with_imag)) rebuild
/// rather than mutate. Raw component access is available through the
/// `*_mut` accessors and `IndexMut`.
///
/// Mathematically undefined results (zero norm in [`inverse`](Self::inverse)
/// or [`normalized`](Self::normalized), zero imaginary part in
/// [`exp`](Self::exp), [`ln`](Self::ln), [`theta`](Self::theta) and
/// [`axis`](Self::axis)) propagate NaN or infinity per IEEE-754 instead of
/// panicking.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 4]", from = "[f64; 4]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Quaternion {
    /// Creates a new quaternion with the given components.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Creates a new quaternion with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Creates a new quaternion with the given real part and zero imaginary
    /// parts.
    #[inline]
    pub const fn from_real(a: f64) -> Self {
        Self::new(a, 0.0, 0.0, 0.0)
    }

    /// Creates a new quaternion with each component drawn independently and
    /// uniformly from `[-1, 1)`.
    pub fn random() -> Self {
        Self::new(
            random::uniform_symmetric_unit(),
            random::uniform_symmetric_unit(),
            random::uniform_symmetric_unit(),
            random::uniform_symmetric_unit(),
        )
    }

    /// The real component.
    #[inline]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// The imaginary i-component.
    #[inline]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// The imaginary j-component.
    #[inline]
    pub const fn c(&self) -> f64 {
        self.c
    }

    /// The imaginary k-component.
    #[inline]
    pub const fn d(&self) -> f64 {
        self.d
    }

    /// A mutable reference to the real component.
    #[inline]
    pub const fn a_mut(&mut self) -> &mut f64 {
        &mut self.a
    }

    /// A mutable reference to the imaginary i-component.
    #[inline]
    pub const fn b_mut(&mut self) -> &mut f64 {
        &mut self.b
    }

    /// A mutable reference to the imaginary j-component.
    #[inline]
    pub const fn c_mut(&mut self) -> &mut f64 {
        &mut self.c
    }

    /// A mutable reference to the imaginary k-component.
    #[inline]
    pub const fn d_mut(&mut self) -> &mut f64 {
        &mut self.d
    }

    /// Returns the real part `(a, 0, 0, 0)`.
    #[inline]
    pub const fn real_part(&self) -> Self {
        Self::from_real(self.a)
    }

    /// Returns the imaginary (vector) part `(0, b, c, d)`.
    #[inline]
    pub const fn imag(&self) -> Self {
        Self::new(0.0, self.b, self.c, self.d)
    }

    /// Returns the complex part `(a, b, 0, 0)`.
    #[inline]
    pub const fn comp(&self) -> Self {
        Self::new(self.a, self.b, 0.0, 0.0)
    }

    /// Computes the norm (Euclidean length of the 4-component vector).
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.a * self.a + self.b * self.b + self.c * self.c + self.d * self.d
    }

    /// Computes the conjugate `(a, -b, -c, -d)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.a, -self.b, -self.c, -self.d)
    }

    /// Computes the multiplicative inverse `conj / norm^2`.
    ///
    /// Produces NaN or infinite components when the norm is zero.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.norm_squared()
    }

    /// Computes the unit-norm version of the quaternion.
    ///
    /// Produces NaN components when the norm is zero.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Computes the distance to another quaternion, i.e. the norm of the
    /// difference.
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        (self - other).norm()
    }

    /// Returns the smallest of the four raw components.
    #[inline]
    pub fn min_component(&self) -> f64 {
        self.a.min(self.b).min(self.c).min(self.d)
    }

    /// Returns the largest of the four raw components.
    #[inline]
    pub fn max_component(&self) -> f64 {
        self.a.max(self.b).max(self.c).max(self.d)
    }

    /// The polar angle `acos(a / norm)`, in `[0, pi]`.
    ///
    /// NaN when the norm is zero.
    #[inline]
    pub fn theta(&self) -> f64 {
        (self.a / self.norm()).acos()
    }

    /// The unit rotation axis of the polar decomposition, i.e. the normalized
    /// imaginary part.
    ///
    /// NaN-valued when the imaginary part is zero.
    #[inline]
    pub fn axis(&self) -> Self {
        self.imag().normalized()
    }

    /// Returns the quaternion with the imaginary components copied from the
    /// given quaternion and the real component kept.
    #[inline]
    pub const fn with_imag(&self, v: &Self) -> Self {
        Self::new(self.a, v.b, v.c, v.d)
    }

    /// Returns the quaternion with the real component recomputed as
    /// `norm * cos(theta)` from the given polar angle, using the norm prior
    /// to the rebuild. The imaginary components are unchanged.
    #[inline]
    pub fn with_theta(&self, theta: f64) -> Self {
        Self {
            a: self.norm() * theta.cos(),
            ..*self
        }
    }

    /// Returns the quaternion with the imaginary part redirected along the
    /// given unit axis, keeping the imaginary magnitude and the real
    /// component.
    #[inline]
    pub fn with_axis(&self, axis: &Self) -> Self {
        self.with_imag(&(axis * self.imag().norm()))
    }

    /// Computes the quaternion exponential.
    ///
    /// A zero imaginary part divides zero by zero and yields NaN components.
    pub fn exp(&self) -> Self {
        let v = self.imag();
        let vlen = v.norm();
        (v * (vlen.sin() / vlen) + Self::from_real(vlen.cos())) * self.a.exp()
    }

    /// Computes the quaternion natural logarithm.
    ///
    /// A zero imaginary part divides by zero and yields NaN components.
    pub fn ln(&self) -> Self {
        let v = self.imag();
        let vlen = v.norm();
        Self::from_real(self.norm().ln()) + v * ((1.0 / vlen) * (self.a / self.norm()).acos())
    }

    /// Returns the quaternion with the polar angle advanced by the given
    /// angle in radians, taken modulo two pi.
    ///
    /// The remainder keeps the sign of the new angle, so it can be negative
    /// for negative input angles.
    pub fn rotated(&self, rad: f64) -> Self {
        self.with_theta((self.theta() + rad) % consts::TWO_PI)
    }

    /// Raises the quaternion to the given real power, via the polar form:
    /// the unit axis scaled by `exponent * theta` is exponentiated into a
    /// unit-norm rotor, which is then scaled by `norm^exponent`.
    pub fn powf(&self, exponent: f64) -> Self {
        (self.axis() * (exponent * self.theta())).exp() * self.norm().powf(exponent)
    }

    /// Computes the square by direct multiplication.
    #[inline]
    pub fn squared(&self) -> Self {
        self * self
    }

    /// Computes the cube by direct multiplication.
    #[inline]
    pub fn cubed(&self) -> Self {
        self * self * self
    }

    /// Computes the square root, as `powf(0.5)`.
    #[inline]
    pub fn sqrt(&self) -> Self {
        self.powf(0.5)
    }

    /// Computes the cube root, as `powf(1/3)`.
    #[inline]
    pub fn cbrt(&self) -> Self {
        self.powf(1.0 / 3.0)
    }
}

impl From<[f64; 4]> for Quaternion {
    #[inline]
    fn from([a, b, c, d]: [f64; 4]) -> Self {
        Self::new(a, b, c, d)
    }
}

impl From<Quaternion> for [f64; 4] {
    #[inline]
    fn from(quaternion: Quaternion) -> Self {
        [quaternion.a, quaternion.b, quaternion.c, quaternion.d]
    }
}

impl Index<usize> for Quaternion {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.a,
            1 => &self.b,
            2 => &self.c,
            3 => &self.d,
            _ => panic!("index {index} out of range for quaternion component"),
        }
    }
}

impl IndexMut<usize> for Quaternion {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.a,
            1 => &mut self.b,
            2 => &mut self.c,
            3 => &mut self.d,
            _ => panic!("index {index} out of range for quaternion component"),
        }
    }
}

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |p, q| {
    Quaternion::new(p.a + q.a, p.b + q.b, p.c + q.c, p.d + q.d)
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |p, q| {
    Quaternion::new(p.a - q.a, p.b - q.b, p.c - q.c, p.d - q.d)
});

// Hamilton product.
impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |p, q| {
    Quaternion::new(
        p.a * q.a - p.b * q.b - p.c * q.c - p.d * q.d,
        p.a * q.b + p.b * q.a + p.c * q.d - p.d * q.c,
        p.a * q.c - p.b * q.d + p.c * q.a + p.d * q.b,
        p.a * q.d + p.b * q.c - p.c * q.b + p.d * q.a,
    )
});

impl_binop!(Mul, mul, Quaternion, f64, Quaternion, |p, k| {
    Quaternion::new(p.a * k, p.b * k, p.c * k, p.d * k)
});

impl_binop!(Mul, mul, f64, Quaternion, Quaternion, |k, p| { p.mul(*k) });

// Right-multiplication by the inverse.
impl_binop!(Div, div, Quaternion, Quaternion, Quaternion, |p, q| {
    p.mul(q.inverse())
});

impl_binop!(Div, div, Quaternion, f64, Quaternion, |p, k| {
    p.mul(1.0 / k)
});

impl_binop_assign!(AddAssign, add_assign, Quaternion, Quaternion, |p, q| {
    *p = &*p + q;
});

impl_binop_assign!(SubAssign, sub_assign, Quaternion, Quaternion, |p, q| {
    *p = &*p - q;
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, f64, |p, k| {
    *p = &*p * *k;
});

impl_binop_assign!(DivAssign, div_assign, Quaternion, f64, |p, k| {
    *p = &*p / *k;
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |p| {
    Quaternion::new(-p.a, -p.b, -p.c, -p.d)
});

impl_abs_diff_eq!(Quaternion, |p, q, epsilon| {
    (p.a - q.a).abs() <= epsilon
        && (p.b - q.b).abs() <= epsilon
        && (p.c - q.c).abs() <= epsilon
        && (p.d - q.d).abs() <= epsilon
});

impl_relative_eq!(Quaternion, |p, q, epsilon, max_relative| {
    f64::relative_eq(&p.a, &q.a, epsilon, max_relative)
        && f64::relative_eq(&p.b, &q.b, epsilon, max_relative)
        && f64::relative_eq(&p.c, &q.c, epsilon, max_relative)
        && f64::relative_eq(&p.d, &q.d, epsilon, max_relative)
});
