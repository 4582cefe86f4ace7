//! Effective branching factor.


/// Lower end of the bisection interval.
pub const EBF_LOWER: f64 = 1.0;
/// Upper end of the bisection interval.
pub const EBF_UPPER: f64 = 10.0;
/// Width at which the bisection stops.
pub const EBF_TOLERANCE: f64 = 0.01;


/// Returns the branching factor `b*` of the uniform tree of depth `depth`
/// that has `n_generated` nodes,
/// i.e., the root of `b* + b*² + ... + b*^depth = n_generated`,
/// found by bisection over `[1, 10]`.
///
/// Returns `0` for `depth == 0`.
/// Values outside the interval are clamped to its ends
/// (up to the tolerance).
///
/// ```
/// use minilab::effective_branching_factor;
///
/// let b = effective_branching_factor(6, 2);
/// assert!((b - 2.0).abs() < 0.01);
/// ```
pub fn effective_branching_factor(n_generated: usize, depth: usize) -> f64 {
    if depth == 0 { return 0.0; }

    let n = n_generated as f64;
    let mut lower = EBF_LOWER;
    let mut upper = EBF_UPPER;
    while upper - lower > EBF_TOLERANCE {
        let mid = (lower + upper) / 2.0;
        if geometric_sum(mid, depth) < n {
            lower = mid;
        } else {
            upper = mid;
        }
    }
    (lower + upper) / 2.0
}


/// `b + b² + ... + b^depth`
#[inline]
fn geometric_sum(b: f64, depth: usize) -> f64 {
    let mut term = 1.0;
    let mut sum = 0.0;
    for _ in 0..depth {
        term *= b;
        sum += term;
    }
    sum
}
