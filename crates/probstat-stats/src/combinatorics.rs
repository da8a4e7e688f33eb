//! Factorials, permutations and combinations with arbitrary precision.
//!
//! All counts are [`BigUint`] so inputs in the tens (or hundreds) never
//! overflow.
//!
//! # Examples
//!
//! ```
//! use probstat_stats::combinatorics::{ComboResult, combination};
//!
//! let result = ComboResult::compute(5, 2).unwrap();
//! assert_eq!(result.factorial.to_string(), "120");
//! assert_eq!(result.permutations.to_string(), "20");
//! assert_eq!(result.combinations.to_string(), "10");
//!
//! assert_eq!(combination(52, 5).unwrap().to_string(), "2598960");
//! ```

use num_bigint::BigUint;
use serde::{Serialize, Serializer};

/// Invalid arguments for a counting function.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CombinatoricsError {
    #[display("{name} must be a non-negative integer (got {value})")]
    Negative { name: &'static str, value: i64 },
    #[display("r must not exceed n (got n={n}, r={r})")]
    ROutOfRange { n: i64, r: i64 },
}

fn check_non_negative(name: &'static str, value: i64) -> Result<u64, CombinatoricsError> {
    u64::try_from(value).map_err(|_| CombinatoricsError::Negative { name, value })
}

fn check_args(n: i64, r: i64) -> Result<(u64, u64), CombinatoricsError> {
    let n_u = check_non_negative("n", n)?;
    let r_u = check_non_negative("r", r)?;
    if r_u > n_u {
        return Err(CombinatoricsError::ROutOfRange { n, r });
    }
    Ok((n_u, r_u))
}

/// Computes `n!`.
///
/// # Examples
///
/// ```
/// # use probstat_stats::combinatorics::factorial;
/// assert_eq!(factorial(0).unwrap().to_string(), "1");
/// assert_eq!(
///     factorial(25).unwrap().to_string(),
///     "15511210043330985984000000"
/// );
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<BigUint, CombinatoricsError> {
    let n = check_non_negative("n", n)?;
    Ok((2..=n).map(BigUint::from).product())
}

/// Computes the number of ordered arrangements `P(n, r) = n·(n−1)·…·(n−r+1)`.
///
/// # Examples
///
/// ```
/// # use probstat_stats::combinatorics::permutation;
/// assert_eq!(permutation(10, 3).unwrap().to_string(), "720");
/// assert_eq!(permutation(7, 0).unwrap().to_string(), "1");
/// assert!(permutation(3, 4).is_err());
/// ```
pub fn permutation(n: i64, r: i64) -> Result<BigUint, CombinatoricsError> {
    let (n, r) = check_args(n, r)?;
    Ok((n - r + 1..=n).map(BigUint::from).product())
}

/// Computes the number of unordered selections `C(n, r) = P(n, r) / r!`.
///
/// # Examples
///
/// ```
/// # use probstat_stats::combinatorics::combination;
/// assert_eq!(combination(10, 3).unwrap().to_string(), "120");
/// assert_eq!(combination(10, 0).unwrap().to_string(), "1");
/// assert!(combination(-2, 1).is_err());
/// ```
pub fn combination(n: i64, r: i64) -> Result<BigUint, CombinatoricsError> {
    let p = permutation(n, r)?;
    let r_factorial = factorial(r)?;
    Ok(p / r_factorial)
}

pub(crate) fn serialize_decimal<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

/// The three counts for a pair `(n, r)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComboResult {
    pub n: u64,
    pub r: u64,
    /// `n!`
    #[serde(serialize_with = "serialize_decimal")]
    pub factorial: BigUint,
    /// `P(n, r)`
    #[serde(serialize_with = "serialize_decimal")]
    pub permutations: BigUint,
    /// `C(n, r)`
    #[serde(serialize_with = "serialize_decimal")]
    pub combinations: BigUint,
}

impl ComboResult {
    /// Computes `n!`, `P(n, r)` and `C(n, r)` after validating `0 <= r <= n`.
    pub fn compute(n: i64, r: i64) -> Result<Self, CombinatoricsError> {
        let (n_u, r_u) = check_args(n, r)?;
        Ok(Self {
            n: n_u,
            r: r_u,
            factorial: factorial(n)?,
            permutations: permutation(n, r)?,
            combinations: combination(n, r)?,
        })
    }
}
