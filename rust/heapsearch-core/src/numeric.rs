use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Add;

use num_traits::Zero;

/// Cost and priority arithmetic the search engine needs: addition, a zero
/// constant and a three-way comparison.
///
/// Blanket-implemented for every `Copy + PartialOrd` type with `Zero`, so
/// the integer and float primitives work out of the box.
pub trait Numeric: Copy + Add<Output = Self> + PartialOrd + Zero + Debug {
    /// Three-way comparison; incomparable values (NaN) rank as `Equal`.
    fn compare(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

impl<T> Numeric for T where T: Copy + Add<Output = T> + PartialOrd + Zero + Debug {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum<P: Numeric>(values: &[P]) -> P {
        values.iter().fold(P::zero(), |acc, v| acc + *v)
    }

    #[test]
    fn integers_and_floats_share_the_capability() {
        assert_eq!(sum(&[1i64, 2, 3]), 6);
        assert_eq!(sum(&[0.5f64, 0.25]), 0.75);
        assert_eq!(sum::<u32>(&[]), 0);
    }

    #[test]
    fn compare_maps_nan_to_equal() {
        assert_eq!(1.0f32.compare(&2.0), Ordering::Less);
        assert_eq!(3u8.compare(&3), Ordering::Equal);
        assert_eq!(f64::NAN.compare(&1.0), Ordering::Equal);
    }
}
