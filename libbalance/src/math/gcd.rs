use num_traits::{PrimInt, Unsigned};

/// Calculates the GCD for (u, v) ∈ (Z, Z).
///
/// The degenerate case `gcd(0, 0)` is defined as 1, so that dividing by the result is always the
/// identity on a pair of zeroes rather than a division by zero.
///
/// Currently, the Euclidean method is used as an underlying implementation.
///
/// ```text
/// binary_gcd              time:   [2.4969 ns 2.5894 ns 2.6641 ns]
///
/// euclidean_gcd           time:   [2.8543 ns 2.8948 ns 2.9257 ns]
/// ```
pub fn gcd<N: Unsigned + PrimInt>(u: N, v: N) -> N {
    if u.is_zero() && v.is_zero() {
        return N::one();
    }
    euclidean_gcd(u, v)
}

/// Calculates the GCD of two integral coefficient values, ignoring their signs.
///
/// Returns [None](Option::None) if either value is not a finite integer below 2^53, in which case
/// no GCD reduction is meaningful. Past 2^53, an `f64` no longer holds every integer exactly, and
/// dividing by a GCD would change the value of a fraction.
pub fn coefficient_gcd(a: f64, b: f64) -> Option<u64> {
    /// 2^53, the first integer beyond which `f64` skips integers.
    const EXACT_LIMIT: f64 = 9_007_199_254_740_992.;

    fn as_magnitude(n: f64) -> Option<u64> {
        if !n.is_finite() || n.fract() != 0. || n.abs() >= EXACT_LIMIT {
            return None;
        }
        Some(n.abs() as u64)
    }

    Some(gcd(as_magnitude(a)?, as_magnitude(b)?))
}

/// The [Binary GCD] algorithm, or Stein's algorithm.
/// Implemented ∀ (u, v) ∈ (Z, Z).
///
/// [Binary GCD]: https://en.wikipedia.org/wiki/Binary_GCD_algorithm
#[allow(unused)]
fn binary_gcd<N: Unsigned + PrimInt>(mut u: N, mut v: N) -> N {
    if u.is_zero() {
        return v;
    }
    if v.is_zero() {
        return u;
    }

    let shift_back = (u | v).trailing_zeros() as usize;
    u = u >> u.trailing_zeros() as usize;
    v = v >> v.trailing_zeros() as usize;
    if u > v {
        std::mem::swap(&mut u, &mut v);
    }
    v = v - u;
    while !v.is_zero() {
        v = v >> v.trailing_zeros() as usize;
        if u > v {
            std::mem::swap(&mut u, &mut v);
        }
        v = v - u;
    }
    u << shift_back
}

#[cfg(feature = "benchmark-internals")]
pub fn _binary_gcd<N: Unsigned + PrimInt>(u: N, v: N) -> N {
    binary_gcd(u, v)
}

/// The [Euclidean GCD] algorithm.
/// Implemented ∀ (u, v) ∈ (Z, Z).
///
/// [Euclidean GCD]: https://en.wikipedia.org/wiki/Euclidean_algorithm
fn euclidean_gcd<N: Unsigned + PrimInt>(mut u: N, mut v: N) -> N {
    let mut t;
    while !v.is_zero() {
        t = v;
        v = u % v;
        u = t;
    }
    u
}

#[cfg(feature = "benchmark-internals")]
pub fn _euclidean_gcd<N: Unsigned + PrimInt>(u: N, v: N) -> N {
    euclidean_gcd(u, v)
}
