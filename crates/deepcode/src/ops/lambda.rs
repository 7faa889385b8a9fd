//! The fixed lambdas that higher-order operators are specialized with.
//!
//! Lambdas are not values in this DSL. `MAP`, `FILTER`, `COUNT`, `SCANL1`
//! and `ZIPWITH` carry one of these as part of their identity, so
//! `MAP[*2]` and `MAP[+1]` are two distinct library entries.
//!
//! Arithmetic wraps on overflow and division floors.

use std::fmt;

/// An integer-to-integer function usable by `MAP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntFn {
    /// `+1`
    Inc,
    /// `-1`
    Dec,
    /// `*2`
    Double,
    /// `/2`
    Half,
    /// `*(-1)`
    Negate,
    /// `**2`
    Square,
    /// `*3`
    Triple,
    /// `/3`
    Third,
    /// `*4`
    Quadruple,
    /// `/4`
    Quarter,
}

impl IntFn {
    /// Every integer function, in registration order.
    pub const ALL: [IntFn; 10] = [
        IntFn::Inc,
        IntFn::Dec,
        IntFn::Double,
        IntFn::Half,
        IntFn::Negate,
        IntFn::Square,
        IntFn::Triple,
        IntFn::Third,
        IntFn::Quadruple,
        IntFn::Quarter,
    ];

    /// Apply the function.
    pub fn apply(self, n: i64) -> i64 {
        match self {
            IntFn::Inc => n.wrapping_add(1),
            IntFn::Dec => n.wrapping_sub(1),
            IntFn::Double => n.wrapping_mul(2),
            IntFn::Half => n.div_euclid(2),
            IntFn::Negate => n.wrapping_neg(),
            IntFn::Square => n.wrapping_mul(n),
            IntFn::Triple => n.wrapping_mul(3),
            IntFn::Third => n.div_euclid(3),
            IntFn::Quadruple => n.wrapping_mul(4),
            IntFn::Quarter => n.div_euclid(4),
        }
    }

    /// The symbol used in operator names.
    pub fn symbol(self) -> &'static str {
        match self {
            IntFn::Inc => "+1",
            IntFn::Dec => "-1",
            IntFn::Double => "*2",
            IntFn::Half => "/2",
            IntFn::Negate => "*(-1)",
            IntFn::Square => "**2",
            IntFn::Triple => "*3",
            IntFn::Third => "/3",
            IntFn::Quadruple => "*4",
            IntFn::Quarter => "/4",
        }
    }

    /// Look up a function by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.symbol() == symbol)
    }
}

/// An integer predicate usable by `FILTER` and `COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// `>0`
    Positive,
    /// `<0`
    Negative,
    /// `%2==0`
    Even,
    /// `%2==1`
    Odd,
}

impl Predicate {
    /// Every predicate, in registration order.
    pub const ALL: [Predicate; 4] = [
        Predicate::Positive,
        Predicate::Negative,
        Predicate::Even,
        Predicate::Odd,
    ];

    /// Test an element.
    pub fn test(self, n: i64) -> bool {
        match self {
            Predicate::Positive => n > 0,
            Predicate::Negative => n < 0,
            // Euclidean remainder so that -3 counts as odd
            Predicate::Even => n.rem_euclid(2) == 0,
            Predicate::Odd => n.rem_euclid(2) == 1,
        }
    }

    /// The symbol used in operator names.
    pub fn symbol(self) -> &'static str {
        match self {
            Predicate::Positive => ">0",
            Predicate::Negative => "<0",
            Predicate::Even => "%2==0",
            Predicate::Odd => "%2==1",
        }
    }

    /// Look up a predicate by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.symbol() == symbol)
    }
}

/// A binary integer function usable by `ZIPWITH` and `SCANL1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinFn {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `MIN`
    Min,
    /// `MAX`
    Max,
}

impl BinFn {
    /// Every binary function, in registration order.
    pub const ALL: [BinFn; 5] = [BinFn::Add, BinFn::Sub, BinFn::Mul, BinFn::Min, BinFn::Max];

    /// Apply the function.
    pub fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            BinFn::Add => a.wrapping_add(b),
            BinFn::Sub => a.wrapping_sub(b),
            BinFn::Mul => a.wrapping_mul(b),
            BinFn::Min => a.min(b),
            BinFn::Max => a.max(b),
        }
    }

    /// The symbol used in operator names.
    pub fn symbol(self) -> &'static str {
        match self {
            BinFn::Add => "+",
            BinFn::Sub => "-",
            BinFn::Mul => "*",
            BinFn::Min => "MIN",
            BinFn::Max => "MAX",
        }
    }

    /// Look up a function by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.symbol() == symbol)
    }
}

impl fmt::Display for IntFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for BinFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_floors() {
        assert_eq!(IntFn::Half.apply(7), 3);
        assert_eq!(IntFn::Half.apply(-3), -2);
        assert_eq!(IntFn::Third.apply(-1), -1);
        assert_eq!(IntFn::Quarter.apply(9), 2);
    }

    #[test]
    fn test_arithmetic_wraps() {
        assert_eq!(IntFn::Inc.apply(i64::MAX), i64::MIN);
        assert_eq!(IntFn::Negate.apply(i64::MIN), i64::MIN);
        assert_eq!(BinFn::Mul.apply(i64::MAX, 2), -2);
    }

    #[test]
    fn test_parity_of_negatives() {
        assert!(Predicate::Odd.test(-3));
        assert!(Predicate::Even.test(-4));
        assert!(!Predicate::Even.test(-3));
    }

    #[test]
    fn test_sign_predicates_exclude_zero() {
        assert!(!Predicate::Positive.test(0));
        assert!(!Predicate::Negative.test(0));
    }

    #[test]
    fn test_symbols_round_trip() {
        for f in IntFn::ALL {
            assert_eq!(IntFn::from_symbol(f.symbol()), Some(f));
        }
        for p in Predicate::ALL {
            assert_eq!(Predicate::from_symbol(p.symbol()), Some(p));
        }
        for g in BinFn::ALL {
            assert_eq!(BinFn::from_symbol(g.symbol()), Some(g));
        }
        assert_eq!(IntFn::from_symbol("*5"), None);
    }
}
