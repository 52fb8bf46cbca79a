use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Main trait for floating point types accepted by solver-side conversions.
///
/// [`SparseColMatrix`](crate::algebra::SparseColMatrix) itself stores any
/// `Clone` payload.  Only conversion into a solver-ready
/// [`CscMatrix`](crate::algebra::CscMatrix) requires values implementing
/// `FloatT`, with implementations provided for any type satisfying the
/// bounds below (in practice f32 and f64).
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent trait bounds.
pub trait FloatT:
    'static + Send + Float + NumAssign + Default + FromPrimitive + Display + LowerExp + Debug + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Float
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}
