use crate::error::{ChromaticError, Result};

/// Calculate k^n as an i128 without silent wrap-around.
///
/// `0^0` is 1 and `0^n` is 0 for every n > 0.
pub fn checked_power(k: i64, n: usize) -> Result<i128> {
    let overflow = || ChromaticError::Overflow(format!("{}^{} exceeds i128", k, n));
    let exp = u32::try_from(n).map_err(|_| overflow())?;
    i128::from(k).checked_pow(exp).ok_or_else(overflow)
}
