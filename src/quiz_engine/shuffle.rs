//! Randomness helpers shared by every generator.

use rand::Rng;

/// Uniform in-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Call `attempt` until it yields a value or `max_attempts` calls have been made.
///
/// Returns the value together with the number of calls it took, or `None`
/// once the budget is spent.
pub fn retry_bounded<T, F>(max_attempts: u32, mut attempt: F) -> Option<(T, u32)>
where
    F: FnMut() -> Option<T>,
{
    (1..=max_attempts).find_map(|n| attempt().map(|v| (v, n)))
}

/// True with probability `p`, clamped to `[0, 1]`. Non-finite `p` is never true.
pub fn chance<R: Rng>(rng: &mut R, p: f64) -> bool {
    if !p.is_finite() {
        return false;
    }
    rng.gen_bool(p.clamp(0.0, 1.0))
}
