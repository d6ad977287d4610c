//! Circular hue arithmetic.

/// Circular distance between two hues in degrees.
///
/// Returns `min(|h1 - h2|, 360 - |h1 - h2|)`, in 0.0..=180.0 for hues in
/// 0.0..360.0. A full turn apart counts as the same hue.
///
/// ```
/// use color_harmony::hue_distance;
///
/// assert_eq!(hue_distance(350.0, 10.0), 20.0);
/// assert_eq!(hue_distance(0.0, 180.0), 180.0);
/// assert_eq!(hue_distance(30.0, 390.0), 0.0);
/// ```
pub fn hue_distance(h1: f64, h2: f64) -> f64 {
    let diff = (h1 - h2).abs();
    diff.min(360.0 - diff)
}

/// All unordered pairs `(items[i], items[j])` with `i < j`, in index order.
pub(crate) fn pairs<T: Copy>(items: &[T]) -> impl Iterator<Item = (T, T)> + '_ {
    items
        .iter()
        .enumerate()
        .flat_map(move |(i, &a)| items[i + 1..].iter().map(move |&b| (a, b)))
}
