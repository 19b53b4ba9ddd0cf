/// The combination capability required by tier aggregation
/// ([`Tree::sum_one_tier`](crate::Tree::sum_one_tier)).
///
/// Only types that are aggregated need it; storing values in a
/// [`Tree`](crate::Tree) requires nothing beyond [`Ord`].
///
/// `combine` is not required to be commutative or associative. Aggregation
/// always starts from [`Combine::empty`] and folds values left-to-right.
pub trait Combine {
    /// The result of combining no values at all.
    fn empty() -> Self;

    /// Combines `self` with `other`, producing a new value.
    fn combine(&self, other: &Self) -> Self;
}

macro_rules! combine_by_wrapping_add {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Combine for $ty {
                fn empty() -> Self {
                    0
                }

                fn combine(&self, other: &Self) -> Self {
                    self.wrapping_add(*other)
                }
            }
        )*
    };
}

combine_by_wrapping_add!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

macro_rules! combine_by_add {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Combine for $ty {
                fn empty() -> Self {
                    0.0
                }

                fn combine(&self, other: &Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

combine_by_add!(f32, f64);

impl Combine for String {
    fn empty() -> Self {
        String::new()
    }

    fn combine(&self, other: &Self) -> Self {
        let mut combined = String::with_capacity(self.len() + other.len());
        combined.push_str(self);
        combined.push_str(other);
        combined
    }
}

impl<T: Clone> Combine for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }

    fn combine(&self, other: &Self) -> Self {
        let mut combined = Vec::with_capacity(self.len() + other.len());
        combined.extend_from_slice(self);
        combined.extend_from_slice(other);
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_add() {
        assert_eq!(i32::empty(), 0);
        assert_eq!(2i32.combine(&3), 5);
        assert_eq!(u8::MAX.combine(&1), 0);
    }

    #[test]
    fn floats_add() {
        assert_eq!(f64::empty(), 0.0);
        assert_eq!(1.5f64.combine(&2.0), 3.5);
    }

    #[test]
    fn strings_concatenate_in_order() {
        let ab = "a".to_string().combine(&"b".to_string());
        assert_eq!(ab, "ab");
        assert_eq!(String::empty().combine(&ab), "ab");
    }

    #[test]
    fn vectors_concatenate_in_order() {
        assert_eq!(vec![1].combine(&vec![2, 3]), vec![1, 2, 3]);
        assert_eq!(Vec::<u8>::empty(), Vec::<u8>::new());
    }
}
