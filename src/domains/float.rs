//! Floating-point fields.
//!
//! The primitive float types do not implement `Eq` and `Hash` and distinguish
//! `-0` from `0` in their bit patterns. The wrappers [F64] and [F32] fix this,
//! so that they can be used as elements of a [Field].

use std::{
    fmt::{self, Debug, Display, Formatter, LowerExp},
    hash::Hash,
    ops::{Add, Div, Mul, Neg, Sub},
};

use rand::Rng;

use super::{Field, InternalOrdering, Ring};
use crate::printer::PrintOptions;

/// A field of floating point type `T`. For `f64` fields, use [RR].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FloatField<T> {
    rep: T,
}

/// The field of double precision floats.
pub const RR: FloatField<F64> = FloatField { rep: F64(0.) };
/// The field of single precision floats.
pub const RR32: FloatField<F32> = FloatField { rep: F32(0.) };

impl<T> FloatField<T> {
    pub fn from_rep(rep: T) -> Self {
        FloatField { rep }
    }
}

impl FloatField<F64> {
    pub fn new() -> Self {
        RR
    }
}

impl Default for FloatField<F64> {
    fn default() -> Self {
        RR
    }
}

impl<T> Display for FloatField<T> {
    fn fmt(&self, _: &mut Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// The operations a float wrapper provides to [FloatField].
pub trait FloatLike:
    Copy
    + PartialEq
    + Eq
    + Hash
    + InternalOrdering
    + Debug
    + Display
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    fn zero(&self) -> Self;
    fn one(&self) -> Self;
    fn from_i64(&self, a: i64) -> Self;
    fn pow(&self, e: u64) -> Self;
    fn sqrt(&self) -> Self;
    fn is_zero(&self) -> bool;
    fn is_one(&self) -> bool;
    fn is_nan(&self) -> bool;
}

impl<T: FloatLike> Ring for FloatField<T> {
    type Element = T;

    #[inline(always)]
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        *a + *b
    }

    #[inline(always)]
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        *a - *b
    }

    #[inline(always)]
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        *a * *b
    }

    #[inline(always)]
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = *a + *b;
    }

    #[inline(always)]
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = *a - *b;
    }

    #[inline(always)]
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = *a * *b;
    }

    #[inline(always)]
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        // unfused: a product that rounds to `a` must cancel to exactly zero
        *a = *a + *b * *c;
    }

    #[inline(always)]
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = *a - *b * *c;
    }

    #[inline(always)]
    fn neg(&self, a: &Self::Element) -> Self::Element {
        -*a
    }

    #[inline(always)]
    fn zero(&self) -> Self::Element {
        self.rep.zero()
    }

    #[inline(always)]
    fn one(&self) -> Self::Element {
        self.rep.one()
    }

    #[inline(always)]
    fn nth(&self, n: i64) -> Self::Element {
        self.rep.from_i64(n)
    }

    #[inline(always)]
    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        b.pow(e)
    }

    #[inline(always)]
    fn is_zero(a: &Self::Element) -> bool {
        a.is_zero()
    }

    #[inline(always)]
    fn is_one(&self, a: &Self::Element) -> bool {
        a.is_one()
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        self.rep.from_i64(rng.gen_range(range.0..range.1))
    }

    fn format<W: std::fmt::Write>(
        &self,
        element: &Self::Element,
        opts: &PrintOptions,
        f: &mut W,
    ) -> Result<(), fmt::Error> {
        if let Some(p) = opts.precision {
            f.write_fmt(format_args!("{:.*}", p, element))
        } else {
            f.write_fmt(format_args!("{}", element))
        }
    }
}

impl<T: FloatLike> Field for FloatField<T> {
    #[inline(always)]
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        *a / *b
    }

    #[inline(always)]
    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = *a / *b;
    }

    #[inline(always)]
    fn inv(&self, a: &Self::Element) -> Self::Element {
        self.rep.one() / *a
    }

    fn sqrt(&self, a: &Self::Element) -> Option<Self::Element> {
        let r = a.sqrt();
        if r.is_nan() {
            None
        } else {
            Some(r)
        }
    }
}

macro_rules! float_wrapper {
    ($name:ident, $t:ty, $zero_bits:expr, $nan_bits:expr) => {
        /// A wrapper around a primitive float that implements `Eq`, `Ord`, and `Hash`.
        /// All `NaN` values are considered equal, and `-0` is considered equal to `0`.
        #[derive(Debug, Copy, Clone)]
        pub struct $name($t);

        impl $name {
            pub fn into_inner(self) -> $t {
                self.0
            }
        }

        impl FloatLike for $name {
            #[inline(always)]
            fn zero(&self) -> Self {
                $name(0.)
            }

            #[inline(always)]
            fn one(&self) -> Self {
                $name(1.)
            }

            #[inline(always)]
            fn from_i64(&self, a: i64) -> Self {
                $name(a as $t)
            }

            #[inline]
            fn pow(&self, e: u64) -> Self {
                debug_assert!(e <= i32::MAX as u64);
                $name(self.0.powi(e as i32))
            }

            #[inline(always)]
            fn sqrt(&self) -> Self {
                $name(self.0.sqrt())
            }

            #[inline(always)]
            fn is_zero(&self) -> bool {
                self.0 == 0.
            }

            #[inline(always)]
            fn is_one(&self) -> bool {
                self.0 == 1.
            }

            #[inline(always)]
            fn is_nan(&self) -> bool {
                self.0.is_nan()
            }
        }

        impl From<$t> for $name {
            #[inline(always)]
            fn from(value: $t) -> Self {
                $name(value)
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                $name(-self.0)
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                $name(self.0 - rhs.0)
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                $name(self.0 * rhs.0)
            }
        }

        impl Div for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self::Output {
                $name(self.0 / rhs.0)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                if self.0.is_nan() && other.0.is_nan() {
                    true
                } else {
                    self.0 == other.0
                }
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.internal_cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.internal_cmp(other)
            }
        }

        impl InternalOrdering for $name {
            fn internal_cmp(&self, other: &Self) -> std::cmp::Ordering {
                if self == other {
                    std::cmp::Ordering::Equal
                } else {
                    self.0.total_cmp(&other.0)
                }
            }
        }

        impl Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                if self.0.is_nan() {
                    state.write_u64($nan_bits);
                } else if self.0 == 0. {
                    state.write_u64($zero_bits);
                } else {
                    state.write_u64(self.0.to_bits() as u64);
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                Display::fmt(&self.0, f)
            }
        }

        impl LowerExp for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                LowerExp::fmt(&self.0, f)
            }
        }
    };
}

float_wrapper!(F64, f64, 0, 0x7ff8000000000000);
float_wrapper!(F32, f32, 0, 0x7fc00000);

#[cfg(test)]
mod test {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::{FloatField, F64, RR, RR32};
    use crate::domains::{Field, Ring};

    fn hash_of(x: &F64) -> u64 {
        let mut h = DefaultHasher::new();
        x.hash(&mut h);
        h.finish()
    }

    #[test]
    fn signed_zero() {
        let pz: F64 = 0.0.into();
        let nz: F64 = (-0.0).into();
        assert_eq!(pz, nz);
        assert_eq!(hash_of(&pz), hash_of(&nz));
        assert!(FloatField::<F64>::is_zero(&nz));
        assert_eq!(pz.cmp(&nz), std::cmp::Ordering::Equal);
    }

    #[test]
    fn nan_is_reflexive() {
        let a: F64 = f64::NAN.into();
        assert_eq!(a, a);
        assert_eq!(hash_of(&a), hash_of(&f64::NAN.into()));
    }

    #[test]
    fn arithmetic() {
        let a = RR.nth(3);
        let b = RR.nth(4);
        let mut c = RR.mul(&a, &a);
        RR.add_mul_assign(&mut c, &b, &b);
        assert_eq!(RR.sqrt(&c), Some(5.0.into()));
        assert_eq!(RR.inv(&b), 0.25.into());
        assert_eq!(RR.pow(&a, 3), 27.0.into());

        let x = RR32.nth(2);
        assert_eq!(RR32.div(&RR32.one(), &x), 0.5f32.into());
    }

    #[test]
    fn rounded_products_cancel() {
        // 6 * fl(1/3) rounds to exactly 2
        let third = RR.inv(&3.0.into());
        let mut e: F64 = 2.0.into();
        RR.sub_mul_assign(&mut e, &third, &6.0.into());
        assert!(FloatField::<F64>::is_zero(&e));

        let mut e: F64 = (-2.0).into();
        RR.add_mul_assign(&mut e, &6.0.into(), &third);
        assert!(FloatField::<F64>::is_zero(&e));
    }
}
