//! # Arc Weights
//!
//! Graphs are generic over the numeric type stored on their arcs. The
//! [`Weight`] trait gathers what the model and its algorithms need from that
//! type:
//!
//! - **`zero`**: the distance from a node to itself, and the "no arc"
//!   sentinel under [`FillMode::Zero`](crate::FillMode::Zero).
//! - **`one`**: the implicit weight of every arc in an unweighted graph.
//! - **`infinity`**: the "no arc" sentinel under
//!   [`FillMode::Infinity`](crate::FillMode::Infinity) and the distance of an
//!   unreachable node. Floats use `+inf`; integers have no infinity and use
//!   their `MAX` value instead.
//!
//! Implementations are provided for every primitive integer and float type.

use std::fmt::Debug;
use std::ops::Add;

use duplicate::duplicate;

pub trait Weight: Copy + PartialOrd + Debug + Add<Output = Self> {
    fn zero() -> Self;

    fn one() -> Self;

    fn infinity() -> Self;

    /// `self + other`, or `None` when the sum does not fit in `Self`.
    /// Floats never fail and overflow to `+inf` instead.
    fn checked_add(self, other: Self) -> Option<Self>;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    fn is_infinite(&self) -> bool {
        *self == Self::infinity()
    }
}

duplicate! {
    [types zero_value one_value infinity_value sum;
        [f32] [0.0] [1.0] [f32::INFINITY] [Some(self + other)];
        [f64] [0.0] [1.0] [f64::INFINITY] [Some(self + other)];
        [i8] [0] [1] [i8::MAX] [i8::checked_add(self, other)];
        [i16] [0] [1] [i16::MAX] [i16::checked_add(self, other)];
        [i32] [0] [1] [i32::MAX] [i32::checked_add(self, other)];
        [i64] [0] [1] [i64::MAX] [i64::checked_add(self, other)];
        [i128] [0] [1] [i128::MAX] [i128::checked_add(self, other)];
        [isize] [0] [1] [isize::MAX] [isize::checked_add(self, other)];
        [u8] [0] [1] [u8::MAX] [u8::checked_add(self, other)];
        [u16] [0] [1] [u16::MAX] [u16::checked_add(self, other)];
        [u32] [0] [1] [u32::MAX] [u32::checked_add(self, other)];
        [u64] [0] [1] [u64::MAX] [u64::checked_add(self, other)];
        [u128] [0] [1] [u128::MAX] [u128::checked_add(self, other)];
        [usize] [0] [1] [usize::MAX] [usize::checked_add(self, other)];
        ]

    impl Weight for types {
        fn zero() -> Self {
            zero_value
        }

        fn one() -> Self {
            one_value
        }

        fn infinity() -> Self {
            infinity_value
        }

        fn checked_add(self, other: Self) -> Option<Self> {
            sum
        }
    }
}
