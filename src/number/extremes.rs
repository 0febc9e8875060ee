//! Minimum and maximum helpers.

/// The larger of two values; `b` when they are not comparable.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// The smaller of two values; `b` when they are not comparable.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Index and value of the first largest element, or None if empty.
pub fn max_n<T: PartialOrd + Copy>(values: &[T]) -> Option<(usize, T)> {
    scan(values, |candidate, best| candidate > best)
}

/// Index and value of the first smallest element, or None if empty.
pub fn min_n<T: PartialOrd + Copy>(values: &[T]) -> Option<(usize, T)> {
    scan(values, |candidate, best| candidate < best)
}

fn scan<T: PartialOrd + Copy>(values: &[T], better: impl Fn(&T, &T) -> bool) -> Option<(usize, T)> {
    let (first, rest) = values.split_first()?;
    let mut best = (0, *first);
    for (i, value) in rest.iter().enumerate() {
        if better(value, &best.1) {
            best = (i + 1, *value);
        }
    }
    Some(best)
}
