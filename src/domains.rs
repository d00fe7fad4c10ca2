//! Defines the algebraic traits that every scalar type must satisfy.
//!
//! The core trait is [Ring], which has two binary operations, addition and multiplication.
//! Each ring has an associated element type, that should not be confused with the ring type itself.
//! For example:
//! - The field of rational numbers [Q](rational::Q) has elements of type [Rational](rational::Rational).
//! - The field of double precision floats [RR](float::RR) has elements of type [F64](float::F64).
//!
//! The ring elements do not implement operations such as addition or multiplication,
//! but rather the ring itself does. All vectors, matrices and solvers in this crate are generic over the ring type.
//!
//! The extension [`Field`] adds the ability to divide, invert and take square roots.
pub mod float;
pub mod rational;

use std::fmt::{Debug, Display, Error, Formatter};
use std::hash::Hash;

use crate::printer::PrintOptions;

/// The internal ordering trait is used to compare elements of a ring.
/// Every field in this crate is totally ordered through this trait.
pub trait InternalOrdering {
    /// Compare two elements using an internal ordering.
    fn internal_cmp(&self, other: &Self) -> std::cmp::Ordering;
}

macro_rules! impl_internal_ordering {
    ($($t:ty),*) => {
        $(
            impl InternalOrdering for $t {
                fn internal_cmp(&self, other: &Self) -> std::cmp::Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_internal_ordering!(u8, u32, u64, i64, usize);

/// A ring is a set with two binary operations, addition and multiplication.
///
/// Each ring has an element type, that should not be confused with the ring type itself.
/// Two elements that are both zero-like (for example `+0.0` and `-0.0`)
/// must compare equal.
pub trait Ring: Clone + PartialEq + Eq + Hash + Debug + Display {
    /// The element of a ring. For example, the elements of [Q](rational::Q) are [Rational](rational::Rational).
    type Element: Clone + PartialEq + Eq + Hash + InternalOrdering + Debug;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element);
    /// Compute `a += b * c`.
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element);
    /// Compute `a -= b * c`.
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element);
    fn neg(&self, a: &Self::Element) -> Self::Element;
    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    /// Return the nth element by computing `n * 1`.
    fn nth(&self, n: i64) -> Self::Element;
    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element;
    fn is_zero(a: &Self::Element) -> bool;
    fn is_one(&self, a: &Self::Element) -> bool;

    /// Sample an element whose numerator lies in `range`.
    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element;

    /// Format a ring element with custom [PrintOptions].
    fn format<W: std::fmt::Write>(
        &self,
        element: &Self::Element,
        opts: &PrintOptions,
        f: &mut W,
    ) -> Result<(), Error>;

    /// Create a new printer for the given ring element that
    /// can be used in a [format!] macro.
    fn printer<'a>(&'a self, element: &'a Self::Element) -> RingPrinter<'a, Self> {
        RingPrinter::new(self, element)
    }
}

/// A field is a ring that supports division and inversion.
pub trait Field: Ring {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element);
    /// Compute the multiplicative inverse. Inverting zero is a caller error;
    /// callers check [Ring::is_zero] first.
    fn inv(&self, a: &Self::Element) -> Self::Element;
    /// The square root of `a`, if it exists in the field.
    fn sqrt(&self, a: &Self::Element) -> Option<Self::Element>;
}

/// Provides an interface for printing elements of a ring with optional customization,
/// suitable as an argument to [format!]. Internally, it will call [Ring::format].
pub struct RingPrinter<'a, R: Ring> {
    pub ring: &'a R,
    pub element: &'a R::Element,
    pub opts: PrintOptions,
}

impl<'a, R: Ring> RingPrinter<'a, R> {
    pub fn new(ring: &'a R, element: &'a R::Element) -> RingPrinter<'a, R> {
        RingPrinter {
            ring,
            element,
            opts: PrintOptions::default(),
        }
    }
}

impl<'a, R: Ring> Display for RingPrinter<'a, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.ring
            .format(self.element, &self.opts.update_with_fmt(f), f)
    }
}

#[cfg(test)]
mod test {
    use super::{float::RR, rational::Q, Field, InternalOrdering, Ring};

    #[test]
    fn field_contract() {
        let a = Q.nth(6);
        let b = Q.nth(4);
        assert_eq!(Q.div(&a, &b), (3, 2).into());
        assert_eq!(Q.sub(&a, &Q.add(&b, &b)), (-2).into());
        assert_eq!(Q.mul(&Q.inv(&b), &b), Q.one());
        assert_eq!(a.internal_cmp(&b), std::cmp::Ordering::Greater);

        let x = RR.nth(9);
        assert_eq!(RR.sqrt(&x), Some(3.0.into()));
        assert_eq!(RR.sqrt(&RR.neg(&x)), None);
        assert_eq!(Q.sqrt(&(9, 4).into()), Some((3, 2).into()));
        assert_eq!(Q.sqrt(&Q.nth(2)), None);
    }

    #[test]
    fn printing() {
        let r = (-7, 3).into();
        assert_eq!(format!("{}", Q.printer(&r)), "-7/3");
        let x = 0.1234.into();
        assert_eq!(format!("{:.2}", RR.printer(&x)), "0.12");
    }
}
