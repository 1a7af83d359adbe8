pub mod variable_base;
pub use self::variable_base::*;

/// Window width of the bucket method for `terms` scalar multiplications:
/// 3 up to 32 terms, otherwise the smallest `k` with `10^k >= terms`.
pub(crate) fn window_size(terms: usize) -> usize {
    if terms <= 32 {
        return 3;
    }
    let mut k = 0;
    let mut power = 1usize;
    while power < terms {
        power = power.saturating_mul(10);
        k += 1;
    }
    k
}
