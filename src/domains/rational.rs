//! Exact arbitrary-precision rational numbers.

use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
};

use rand::Rng;
use rug::{ops::Pow, Integer, Rational as ArbitraryPrecisionRational};

use super::{float::F64, Field, InternalOrdering, Ring};
use crate::printer::{PrintMode, PrintOptions};

/// The field of rational numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RationalField;

/// The field of rational numbers.
pub const Q: RationalField = RationalField;

impl RationalField {
    pub const fn new() -> RationalField {
        RationalField
    }
}

impl Display for RationalField {
    fn fmt(&self, _: &mut Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// A rational number in canonical form: the denominator is positive
/// and coprime to the numerator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rational(ArbitraryPrecisionRational);

impl Rational {
    /// Create `num/den`.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    pub fn new(num: i64, den: i64) -> Rational {
        Rational(ArbitraryPrecisionRational::from((num, den)))
    }

    pub fn numerator(&self) -> &Integer {
        self.0.numer()
    }

    pub fn denominator(&self) -> &Integer {
        self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    pub fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }

    pub fn is_integer(&self) -> bool {
        *self.0.denom() == 1
    }

    pub fn abs(&self) -> Rational {
        Rational(self.0.clone().abs())
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    pub fn into_inner(self) -> ArbitraryPrecisionRational {
        self.0
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational(ArbitraryPrecisionRational::from(value))
    }
}

impl From<(i64, i64)> for Rational {
    /// Create `num/den`.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    fn from((num, den): (i64, i64)) -> Self {
        Rational::new(num, den)
    }
}

impl From<ArbitraryPrecisionRational> for Rational {
    fn from(value: ArbitraryPrecisionRational) -> Self {
        Rational(value)
    }
}

impl From<&Rational> for F64 {
    fn from(value: &Rational) -> Self {
        value.to_f64().into()
    }
}

impl InternalOrdering for Rational {
    fn internal_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Ring for RationalField {
    type Element = Rational;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Rational(ArbitraryPrecisionRational::from(&a.0 + &b.0))
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Rational(ArbitraryPrecisionRational::from(&a.0 - &b.0))
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Rational(ArbitraryPrecisionRational::from(&a.0 * &b.0))
    }

    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        a.0 += &b.0;
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        a.0 -= &b.0;
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        a.0 *= &b.0;
    }

    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        a.0 += ArbitraryPrecisionRational::from(&b.0 * &c.0);
    }

    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        a.0 -= ArbitraryPrecisionRational::from(&b.0 * &c.0);
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        Rational(ArbitraryPrecisionRational::from(-&a.0))
    }

    fn zero(&self) -> Self::Element {
        Rational(ArbitraryPrecisionRational::new())
    }

    fn one(&self) -> Self::Element {
        Rational(ArbitraryPrecisionRational::from(1))
    }

    fn nth(&self, n: i64) -> Self::Element {
        n.into()
    }

    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        if e > u32::MAX as u64 {
            panic!("Power of exponentation is larger than 2^32: {}", e);
        }

        Rational(b.0.clone().pow(e as u32))
    }

    fn is_zero(a: &Self::Element) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        *a.0.numer() == 1 && *a.0.denom() == 1
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        rng.gen_range(range.0..range.1).into()
    }

    fn format<W: std::fmt::Write>(
        &self,
        element: &Self::Element,
        opts: &PrintOptions,
        f: &mut W,
    ) -> Result<(), fmt::Error> {
        if element.is_integer() {
            return f.write_fmt(format_args!("{}", element.0.numer()));
        }

        match opts.mode {
            PrintMode::Latex => {
                if element.is_negative() {
                    f.write_char('-')?;
                }
                f.write_fmt(format_args!(
                    "\\frac{{{}}}{{{}}}",
                    Integer::from(element.0.numer().abs_ref()),
                    element.0.denom()
                ))
            }
            PrintMode::Plain | PrintMode::Mathematica => {
                f.write_fmt(format_args!("{}/{}", element.0.numer(), element.0.denom()))
            }
        }
    }
}

impl Field for RationalField {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Rational(ArbitraryPrecisionRational::from(&a.0 / &b.0))
    }

    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        a.0 /= &b.0;
    }

    fn inv(&self, a: &Self::Element) -> Self::Element {
        Rational(a.0.clone().recip())
    }

    fn sqrt(&self, a: &Self::Element) -> Option<Self::Element> {
        if a.is_negative() {
            return None;
        }

        let (num, den) = (a.0.numer(), a.0.denom());
        if num.is_perfect_square() && den.is_perfect_square() {
            Some(Rational(ArbitraryPrecisionRational::from((
                num.clone().sqrt(),
                den.clone().sqrt(),
            ))))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Rational, RationalField, Q};
    use crate::domains::{Field, Ring};
    use crate::printer::PrintOptions;

    #[test]
    fn canonical_form() {
        let a = Rational::new(6, -4);
        assert_eq!(a, (-3, 2).into());
        assert_eq!(*a.denominator(), 2);
        assert!(RationalField::is_zero(&Q.add(&a, &(3, 2).into())));
        assert!(Q.is_one(&Q.div(&a, &a)));
    }

    #[test]
    fn fused_operations() {
        let mut a = Q.nth(1);
        Q.add_mul_assign(&mut a, &(1, 2).into(), &(2, 3).into());
        assert_eq!(a, (4, 3).into());
        Q.sub_mul_assign(&mut a, &(1, 3).into(), &Q.nth(4));
        assert_eq!(a, Q.zero());
        assert_eq!(Q.pow(&(2, 3).into(), 3), (8, 27).into());
        assert_eq!(Q.inv(&(-2, 5).into()), (-5, 2).into());
    }

    #[test]
    fn latex() {
        let mut s = String::new();
        Q.format(&(-3, 4).into(), &PrintOptions::latex(), &mut s)
            .unwrap();
        assert_eq!(s, "-\\frac{3}{4}");
    }
}
