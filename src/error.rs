use thiserror::Error;

use crate::Num;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("cannot compute the square root of a negative number ({0})")]
    NegativeSqrt(Num),

    #[error("newton iteration for sqrt({input}) did not converge within {steps} steps")]
    SqrtDidNotConverge { input: Num, steps: usize },

    #[error("factorial is undefined for negative input ({0})")]
    NegativeFactorial(i64),

    #[error("cannot aggregate an empty point set")]
    EmptyPointSet,

    #[error("grid size must be at least 1")]
    ZeroGridSize,
}
