//! The numeric capability every path cost is expressed in.

use std::fmt::Debug;
use std::ops::Add;

/// A cost value: ordered, summable, with an additive identity.
///
/// One cost type is chosen per search and threaded through every
/// computation. Overflow is not checked; pick a type wide enough for the
/// longest path you expect.
pub trait Cost: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// The additive identity.
    const ZERO: Self;
}

macro_rules! impl_cost {
    ($zero:expr => $($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_cost!(0 => i32, i64, u32, u64, usize);
impl_cost!(0.0 => f32, f64);
