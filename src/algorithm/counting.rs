use crate::{Error, Result};

/// $\binom{n}{k}$, failing when $k > n$ or when the result does not fit in a `u64`.
pub fn binomial(n: u64, k: u64) -> Result<u64> {
    if k > n {
        return Err(Error::InvalidChoice { n, k });
    }
    // The partial products are binomials of increasing size up to the result.
    let k = k.min(n - k);
    let mut res: u128 = 1;
    for i in 0..k {
        res = res * (n - i) as u128 / (i + 1) as u128;
        if res > u64::MAX as u128 {
            return Err(Error::Overflow);
        }
    }
    Ok(res as u64)
}

/// $n!$, failing when the result does not fit in a `u64`.
pub fn factorial(n: u64) -> Result<u64> {
    (1..=n).try_fold(1u64, |acc, i| acc.checked_mul(i).ok_or(Error::Overflow))
}
