use std::collections::HashSet;

use num_bigint::{BigInt, RandBigInt};
use num_rational::BigRational;
use num_traits::{One, Zero};
use rand::rngs::OsRng;

use crate::error::RecoverError;

/// One point (x, f(x)) of the secret-encoding polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    pub x: i64,
    pub y: BigInt,
}

/// Recover the constant term of the degree-(k-1) polynomial through the first
/// `k` shares, by Lagrange interpolation at x = 0 over exact arithmetic.
///
/// Shares beyond the first `k` are ignored; fewer than `k` is an error. Basis
/// terms are accumulated as exact rationals (individual terms need not be
/// integers, their sum must be), so float drift and silent rounding are
/// impossible; a non-integer total means the shares never came from one
/// integer polynomial and fails with `ArithmeticIntegrity`.
pub fn reconstruct_secret(shares: &[Share], k: usize) -> Result<BigInt, RecoverError> {
    if k == 0 || shares.len() < k {
        return Err(RecoverError::InsufficientShares {
            needed: k,
            available: shares.len(),
        });
    }
    let picked = &shares[..k];

    let mut seen = HashSet::with_capacity(k);
    for share in picked {
        if !seen.insert(share.x) {
            return Err(RecoverError::SingularShareSet { x: share.x });
        }
    }

    let xs: Vec<BigInt> = picked.iter().map(|share| BigInt::from(share.x)).collect();
    let mut secret = BigRational::zero();
    for (i, share) in picked.iter().enumerate() {
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();
        for (j, xj) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator *= -xj;
            denominator *= &xs[i] - xj;
        }
        // denominator is non-zero: the x values were just checked distinct.
        secret += BigRational::new(&share.y * numerator, denominator);
    }
    if !secret.is_integer() {
        return Err(RecoverError::ArithmeticIntegrity {
            denominator: secret.denom().clone(),
        });
    }
    Ok(secret.to_integer())
}

/// Split a secret into `n` integer shares with threshold `k`: sample a random
/// degree-(k-1) polynomial over the integers with the secret as constant term
/// and evaluate it at x = 1..=n.
///
/// Over the plain integers this hides nothing (there is no field reduction),
/// so it is a fixture generator for exercising reconstruction, not a secure
/// sharing scheme.
pub fn split_secret(secret: &BigInt, n: usize, k: usize) -> Vec<Share> {
    assert!(k >= 1 && k <= n);
    let mut rng = OsRng;
    let mut coeffs: Vec<BigInt> = Vec::with_capacity(k);
    coeffs.push(secret.clone());
    for _ in 1..k {
        coeffs.push(rng.gen_bigint(128));
    }
    (1..=n as i64)
        .map(|x| {
            let mut acc = BigInt::zero();
            for c in coeffs.iter().rev() {
                acc = acc * x + c;
            }
            Share { x, y: acc }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn share(x: i64, y: i64) -> Share {
        Share {
            x,
            y: BigInt::from(y),
        }
    }

    #[test]
    fn test_reconstruct_sample_case() {
        // Points of x^2 + 3; the constant term is 3.
        let shares = vec![share(1, 4), share(2, 7), share(3, 12)];
        assert_eq!(reconstruct_secret(&shares, 3).unwrap(), BigInt::from(3));
    }

    #[test]
    fn test_reconstruct_quadratic() {
        // Points of x^2 + x + 2.
        let shares = vec![share(1, 4), share(2, 8), share(3, 14)];
        assert_eq!(reconstruct_secret(&shares, 3).unwrap(), BigInt::from(2));
    }

    #[test]
    fn test_single_share_is_the_secret() {
        let shares = vec![share(5, 42)];
        assert_eq!(reconstruct_secret(&shares, 1).unwrap(), BigInt::from(42));
    }

    #[test]
    fn test_negative_secret() {
        // Points of x - 5.
        let shares = vec![share(1, -4), share(2, -3)];
        assert_eq!(reconstruct_secret(&shares, 2).unwrap(), BigInt::from(-5));
    }

    #[test]
    fn test_non_consecutive_points() {
        // Individual basis terms are fractional here (8/3, -2, 1/3 for the
        // constant polynomial 1), but the total is still exact.
        let ones = vec![share(1, 1), share(2, 1), share(4, 1)];
        assert_eq!(reconstruct_secret(&ones, 3).unwrap(), BigInt::from(1));

        // Points of x over the same x set.
        let line = vec![share(1, 1), share(2, 2), share(4, 4)];
        assert_eq!(reconstruct_secret(&line, 3).unwrap(), BigInt::zero());
    }

    #[test]
    fn test_extra_shares_are_ignored() {
        // First two lie on x + 1; the third is garbage and must not matter.
        let shares = vec![share(1, 2), share(2, 3), share(3, 999)];
        assert_eq!(reconstruct_secret(&shares, 2).unwrap(), BigInt::from(1));
    }

    #[test]
    fn test_insufficient_shares() {
        let shares = vec![share(1, 4)];
        assert!(matches!(
            reconstruct_secret(&shares, 2),
            Err(RecoverError::InsufficientShares {
                needed: 2,
                available: 1
            })
        ));
        assert!(matches!(
            reconstruct_secret(&[], 0),
            Err(RecoverError::InsufficientShares { .. })
        ));
    }

    #[test]
    fn test_duplicate_x_is_rejected() {
        let shares = vec![share(1, 4), share(2, 7), share(1, 9)];
        assert!(matches!(
            reconstruct_secret(&shares, 3),
            Err(RecoverError::SingularShareSet { x: 1 })
        ));
        // A duplicate past the first k is never looked at.
        assert!(reconstruct_secret(&shares, 2).is_ok());
    }

    #[test]
    fn test_non_integer_total_is_an_error() {
        // No integer polynomial of degree 1 passes through (1,0) and (3,1).
        let shares = vec![share(1, 0), share(3, 1)];
        let err = reconstruct_secret(&shares, 2).unwrap_err();
        match err {
            RecoverError::ArithmeticIntegrity { denominator } => {
                assert_eq!(denominator, BigInt::from(2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_threshold_property() {
        let secret = BigInt::from(1234567890123456789i64);
        for (n, k) in [(3, 2), (5, 3), (6, 4)] {
            let shares = split_secret(&secret, n, k);
            assert_eq!(shares.len(), n);
            for subset in shares.iter().cloned().combinations(k) {
                assert_eq!(reconstruct_secret(&subset, k).unwrap(), secret);
            }
        }
    }

    #[test]
    fn test_order_invariance() {
        let secret = BigInt::from(-99999i64);
        let shares = split_secret(&secret, 4, 4);
        for perm in shares.iter().cloned().permutations(4) {
            assert_eq!(reconstruct_secret(&perm, 4).unwrap(), secret);
        }
    }

    #[test]
    fn test_large_secret() {
        let secret = BigInt::parse_bytes(
            b"170141183460469231731687303715884105727000000000000000000000001",
            10,
        )
        .unwrap();
        let shares = split_secret(&secret, 7, 5);
        assert_eq!(reconstruct_secret(&shares, 5).unwrap(), secret);
    }

    #[test]
    fn test_share_indices_start_at_one() {
        let shares = split_secret(&BigInt::from(7), 4, 2);
        for (i, share) in shares.iter().enumerate() {
            assert_eq!(share.x, i as i64 + 1);
        }
    }
}
