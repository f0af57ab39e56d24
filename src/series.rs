use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::constants::{DEFAULT_TERMS, PI, TWO_PI};
use crate::math::factorial_unsigned;
use crate::Num;

#[cfg(feature = "f32")]
fn big_to_num(value: &BigUint) -> Num {
    value.to_f32().unwrap_or(Num::INFINITY)
}

#[cfg(feature = "f64")]
fn big_to_num(value: &BigUint) -> Num {
    value.to_f64().unwrap_or(Num::INFINITY)
}

/// Approximates sin(x) by summing the leading `terms` terms of the
/// Taylor series around zero:
///
/// sin(x) = Σ (-1)ⁿ · x^(2n+1) / (2n+1)!
///
/// The argument is reduced into [0, 2π) first (`rem_euclid`, so
/// negative angles land in the same range), which keeps the truncated
/// series inside its well-converged band for any real input.
pub fn sine(x: Num, terms: usize) -> Num {
    let x = x.rem_euclid(TWO_PI);

    let mut result = 0.0;

    for n in 0..terms {
        let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
        let k = 2 * n as u64 + 1;

        result += sign * x.powi(k as i32) / big_to_num(&factorial_unsigned(k));
    }

    result
}

/// Approximates cos(x) with the even-power twin of `sine`:
///
/// cos(x) = Σ (-1)ⁿ · x^(2n) / (2n)!
pub fn cosine(x: Num, terms: usize) -> Num {
    let x = x.rem_euclid(TWO_PI);

    let mut result = 0.0;

    for n in 0..terms {
        let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
        let k = 2 * n as u64;

        result += sign * x.powi(k as i32) / big_to_num(&factorial_unsigned(k));
    }

    result
}

/// Approximates arctan(x) with the Leibniz series:
///
/// arctan(x) = Σ (-1)ⁿ · x^(2n+1) / (2n+1)
///
/// The series diverges for |x| > 1, so those arguments are folded once
/// through arctan(x) = ±π/2 - arctan(1/x) before summing. Convergence
/// is slow near |x| = 1: ten terms leave an error of a few hundredths
/// at x = 1.
pub fn arctan(x: Num, terms: usize) -> Num {
    if x > 1.0 {
        return PI / 2.0 - leibniz(1.0 / x, terms);
    }

    if x < -1.0 {
        return -PI / 2.0 - leibniz(1.0 / x, terms);
    }

    leibniz(x, terms)
}

fn leibniz(x: Num, terms: usize) -> Num {
    let mut result = 0.0;

    for n in 0..terms {
        let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
        let k = (2 * n + 1) as i32;

        result += sign * x.powi(k) / k as Num;
    }

    result
}

/// `sine` at the default term count.
pub fn sin(x: Num) -> Num {
    sine(x, DEFAULT_TERMS)
}

/// `cosine` at the default term count.
pub fn cos(x: Num) -> Num {
    cosine(x, DEFAULT_TERMS)
}

/// `arctan` at the default term count.
pub fn atan(x: Num) -> Num {
    arctan(x, DEFAULT_TERMS)
}
