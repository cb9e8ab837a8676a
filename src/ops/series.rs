//! 1D sequence operations: reductions and in-place fills.

use crate::traits::Element;

/// Multiplicative reduction over a sequence, seeded at 1.
#[inline(always)]
pub fn prod<E: Element>(series: &[E]) -> E {
    let mut result = E::ONE;
    for &v in series {
        result *= v;
    }
    result
}

/// Additive reduction over a sequence, seeded at 0.
#[inline(always)]
pub fn sum<E: Element>(series: &[E]) -> E {
    let mut result = E::ZERO;
    for &v in series {
        result += v;
    }
    result
}

/// Overwrite every element with 1.
#[inline(always)]
pub fn ones<E: Element>(array: &mut [E]) {
    for v in array.iter_mut() {
        *v = E::ONE;
    }
}

/// Overwrite every element with 0.
#[inline(always)]
pub fn zeros<E: Element>(array: &mut [E]) {
    for v in array.iter_mut() {
        *v = E::ZERO;
    }
}
