/*
 *  Copyright 2018 The WebRTC project authors. All Rights Reserved.
 *
 *  Use of this source code is governed by a BSD-style license
 *  that can be found in the LICENSE file in the root of the source
 *  tree. An additional intellectual property rights grant can be found
 *  in the file PATENTS.  All contributing project authors may
 *  be found in the AUTHORS file in the root of the source tree.
 */

// UnitBase is a superclass in C++.
// The closest we can do in Rust is a macro, as traits don't support const.
//
// Every unit is an i64 where i64::MAX and i64::MIN are reserved for plus and
// minus infinity. Each type must define `const ONE_SIDED: bool`, which forbids
// negative finite values when set.
macro_rules! unit_base {
    ($ty:ident) => {
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
        pub struct $ty(i64);

        impl $ty {
            pub const fn zero() -> Self {
                Self(0)
            }

            pub const fn plus_infinity() -> Self {
                Self(i64::MAX)
            }

            pub const fn minus_infinity() -> Self {
                Self(i64::MIN)
            }

            pub const fn is_zero(&self) -> bool {
                self.0 == 0
            }

            pub const fn is_finite(&self) -> bool {
                !self.is_infinite()
            }

            pub const fn is_infinite(&self) -> bool {
                self.0 == i64::MAX || self.0 == i64::MIN
            }

            pub const fn is_plus_infinity(&self) -> bool {
                self.0 == i64::MAX
            }

            pub const fn is_minus_infinity(&self) -> bool {
                self.0 == i64::MIN
            }

            const fn from_value(value: i64) -> Self {
                assert!(value != i64::MAX && value != i64::MIN);
                if Self::ONE_SIDED {
                    assert!(value >= 0);
                }
                Self(value)
            }

            const fn to_value(&self) -> i64 {
                assert!(self.is_finite());
                self.0
            }
        }
    };
}

// RelativeUnit adds the arithmetic that only makes sense for deltas, sizes
// and rates. Timestamps are absolute and only get the base.
macro_rules! relative_unit {
    ($ty:ident) => {
        crate::api::units::unit_base!($ty);

        impl ::std::ops::Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                if self.is_plus_infinity() || rhs.is_plus_infinity() {
                    assert!(!self.is_minus_infinity());
                    assert!(!rhs.is_minus_infinity());
                    return Self::plus_infinity();
                } else if self.is_minus_infinity() || rhs.is_minus_infinity() {
                    assert!(!self.is_plus_infinity());
                    assert!(!rhs.is_plus_infinity());
                    return Self::minus_infinity();
                }
                Self::from_value(self.to_value() + rhs.to_value())
            }
        }

        impl ::std::ops::Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                if self.is_plus_infinity() || rhs.is_minus_infinity() {
                    assert!(!self.is_minus_infinity());
                    assert!(!rhs.is_plus_infinity());
                    return Self::plus_infinity();
                } else if self.is_minus_infinity() || rhs.is_plus_infinity() {
                    assert!(!self.is_plus_infinity());
                    assert!(!rhs.is_minus_infinity());
                    return Self::minus_infinity();
                }
                Self::from_value(self.to_value() - rhs.to_value())
            }
        }

        impl ::std::ops::AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl ::std::ops::SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }
    };
}

pub(crate) use relative_unit;
pub(crate) use unit_base;

/// Integer division of `value` by `denominator`, rounding half away from zero.
pub(crate) const fn divide_round_to_nearest(value: i64, denominator: i64) -> i64 {
    assert!(denominator > 0);
    let mut result = value / denominator;
    let remainder = value % denominator;
    if remainder.abs() * 2 >= denominator {
        if value < 0 {
            result -= 1;
        } else {
            result += 1;
        }
    }
    result
}

#[cfg(test)]
mod test {
    use std::fmt;

    use super::*;

    relative_unit!(TestUnit);

    impl TestUnit {
        const ONE_SIDED: bool = false;

        pub const fn from_kilo(kilo: i64) -> Self {
            Self::from_value(kilo * 1000)
        }

        pub const fn to_kilo(&self) -> i64 {
            divide_round_to_nearest(self.to_value(), 1000)
        }
    }

    impl fmt::Debug for TestUnit {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            if self.is_plus_infinity() {
                write!(f, "+inf")
            } else if self.is_minus_infinity() {
                write!(f, "-inf")
            } else {
                write!(f, "{}", self.0)
            }
        }
    }

    #[test]
    fn const_expr() {
        const VALUE: i64 = -12345;
        const ZERO: TestUnit = TestUnit::zero();
        const PLUS_INF: TestUnit = TestUnit::plus_infinity();
        const KILO: TestUnit = TestUnit::from_kilo(VALUE);

        assert!(ZERO.is_zero());
        assert!(PLUS_INF.is_plus_infinity());
        assert!(PLUS_INF > ZERO);
        assert!(KILO.is_finite());
        assert_eq!(KILO.to_kilo(), VALUE);
    }

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(divide_round_to_nearest(1499, 1000), 1);
        assert_eq!(divide_round_to_nearest(1500, 1000), 2);
        assert_eq!(divide_round_to_nearest(-1500, 1000), -2);
        assert_eq!(divide_round_to_nearest(-1499, 1000), -1);
    }

    #[test]
    fn infinity_arithmetic_saturates() {
        const FINITE: TestUnit = TestUnit::from_kilo(267);
        assert!((TestUnit::plus_infinity() + FINITE).is_plus_infinity());
        assert!((FINITE - TestUnit::plus_infinity()).is_minus_infinity());
        assert!((TestUnit::minus_infinity() - FINITE).is_minus_infinity());
        assert!(TestUnit::minus_infinity().is_infinite());
    }

    #[test]
    fn math_operations() {
        const A: TestUnit = TestUnit::from_kilo(450);
        const B: TestUnit = TestUnit::from_kilo(267);
        assert_eq!((A + B).to_kilo(), 717);
        assert_eq!((A - B).to_kilo(), 183);

        let mut c = A;
        c += B;
        c -= A;
        assert_eq!(c, B);
    }

    #[test]
    #[should_panic]
    fn crashes_when_created_from_sentinel() {
        TestUnit::from_value(i64::MAX);
    }
}
