use std::mem::swap;

/// Sorts three values in ascending order
pub fn sort3<TValue: PartialOrd>(a: &mut TValue, b: &mut TValue, c: &mut TValue) {
    if a > c {
        swap(a, c);
    }

    if a > b {
        swap(a, b);
    }

    if b > c {
        swap(b, c);
    }
}
