//! Edge weight extraction
//!
//! Traversals never look inside an edge payload except through this contract.
//! Weights are expected to be non-negative; Dijkstra's result is undefined
//! otherwise and nothing here rejects a negative value.

/// A payload that carries a numeric weight.
pub trait EdgeWeight {
    /// The weight of this edge. Must be pure and total.
    fn weight(&self) -> f64;
}

macro_rules! impl_edge_weight {
    ($($ty:ty),*) => {
        $(
            impl EdgeWeight for $ty {
                #[inline]
                fn weight(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_edge_weight!(f64, f32, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl<T: EdgeWeight + ?Sized> EdgeWeight for &T {
    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

impl<T: EdgeWeight + ?Sized> EdgeWeight for Box<T> {
    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Road {
        length_km: f32,
    }

    impl EdgeWeight for Road {
        fn weight(&self) -> f64 {
            self.length_km as f64
        }
    }

    #[test]
    fn test_primitive_weights() {
        assert_eq!(2.5f64.weight(), 2.5);
        assert_eq!(3u32.weight(), 3.0);
        assert_eq!(7usize.weight(), 7.0);
    }

    #[test]
    fn test_custom_payload_weight() {
        let road = Road { length_km: 12.5 };
        assert_eq!(road.weight(), 12.5);
        assert_eq!((&road).weight(), 12.5);
        assert_eq!(Box::new(Road { length_km: 1.0 }).weight(), 1.0);
    }
}
