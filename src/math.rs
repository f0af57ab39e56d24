use num_bigint::BigUint;
use num_traits::One;

use crate::constants::DEFAULT_SQRT_TOLERANCE;
use crate::error::{Error, Result};
use crate::Num;

const MAX_STEPS: usize = 100_000;

/// Approximates the square root of a number using the Newton-Raphson method.
/// https://en.wikipedia.org/wiki/Newton%27s_method
///
/// # Arguments
/// x - The value to take the root of.
/// tolerance - The maximum residual |guess² - x| allowed.
///
/// # Returns
/// The approximate square root of x
pub fn newton_sqrt(x: Num, tolerance: Num) -> Result<Num> {
    if x < 0.0 {
        return Err(Error::NegativeSqrt(x));
    }

    // The x / 2 seed would divide by zero on the first step
    if x == 0.0 {
        return Ok(0.0);
    }

    let mut guess = x / 2.0;

    for _ in 0..MAX_STEPS {
        if (guess * guess - x).abs() <= tolerance {
            return Ok(guess);
        }

        guess = (guess + x / guess) / 2.0;
    }

    // For large x the residual bottoms out above any small absolute
    // tolerance, so the iteration stalls at the step cap
    Err(Error::SqrtDidNotConverge {
        input: x,
        steps: MAX_STEPS,
    })
}

/// `newton_sqrt` at the default tolerance.
pub fn sqrt(x: Num) -> Result<Num> {
    newton_sqrt(x, DEFAULT_SQRT_TOLERANCE)
}

/// Exact factorial of n.
///
/// The result outgrows every fixed-width integer by n = 21, hence the
/// arbitrary-precision return type.
pub fn factorial(n: i64) -> Result<BigUint> {
    if n < 0 {
        return Err(Error::NegativeFactorial(n));
    }

    Ok(factorial_unsigned(n as u64))
}

pub(crate) fn factorial_unsigned(n: u64) -> BigUint {
    let mut result = BigUint::one();

    for i in 2..=n {
        result *= i;
    }

    result
}
