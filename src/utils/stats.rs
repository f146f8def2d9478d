//! Mean, linspace, and nearest-index kernels, generic over `num_traits::Float`.

use num_traits::Float;

/// Arithmetic mean of a slice. Returns NaN for an empty slice.
pub fn mean<T: Float>(xs: &[T]) -> T {
    if xs.is_empty() {
        return T::nan();
    }
    let sum = xs.iter().fold(T::zero(), |acc, &x| acc + x);
    sum / T::from(xs.len()).unwrap()
}

/// `n` evenly spaced points over `[start, end]`, both endpoints included.
pub fn linspace<T: Float>(start: T, end: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            // ratio form so both endpoints come out exact
            let span = end - start;
            let denom = T::from(n - 1).unwrap();
            (0..n)
                .map(|i| start + span * (T::from(i).unwrap() / denom))
                .collect()
        }
    }
}

/// Index of the element closest to `target` (minimum absolute difference).
///
/// Ties go to the lowest index. Returns `None` for an empty slice.
pub fn nearest_index<T: Float>(xs: &[T], target: T) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (i, &x) in xs.iter().enumerate() {
        let d = (x - target).abs();
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}
