use std::fmt::Debug;

use half::{bf16, f16};

/// Core element trait for the marshaling kernels.
///
/// The capability set is exactly what the generated operations need:
/// additive and multiplicative accumulation, ordering, and the two identity
/// constants. Compile-time monomorphization, zero runtime overhead.
pub trait Element:
    Debug + Clone + Copy + Send + Sync + Default + 'static
    + std::ops::Add<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::AddAssign
    + std::ops::MulAssign
    + PartialOrd
{
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! impl_element_int {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
        }
    )*};
}

macro_rules! impl_element_float {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
        }
    )*};
}

impl_element_int!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);
impl_element_float!(f32, f64);

impl Element for f16 {
    const ZERO: Self = f16::ZERO;
    const ONE: Self = f16::ONE;
}

impl Element for bf16 {
    const ZERO: Self = bf16::ZERO;
    const ONE: Self = bf16::ONE;
}
