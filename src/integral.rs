// src/integral.rs
//
// Closed-form 1D integrals of plane-wave kernels, used as basis-function integrals.
//
// k = 0 is detected with an exact comparison. For |k| tiny but nonzero the general
// branch divides by ik and loses precision; callers that care must round k themselves.

use crate::{Complex, Real};

#[inline]
fn is_exact_zero(k: Complex) -> bool {
    k.re == 0.0 && k.im == 0.0
}

/// ∫_{x1}^{x2} e^{ikx} dx
pub fn integral_e(x1: Real, x2: Real, k: Complex) -> Complex {
    if is_exact_zero(k) {
        return Complex::new(x2 - x1, 0.0);
    }
    let ik = Complex::i() * k;
    ik.inv() * ((ik * x2).exp() - (ik * x1).exp())
}

/// ∫_{x1}^{x2} (ax + b) e^{ikx} dx
pub fn integral_xe(x1: Real, x2: Real, a: Real, b: Real, k: Complex) -> Complex {
    if is_exact_zero(k) {
        return Complex::new(a * (x2 * x2 - x1 * x1) / 2.0 + b * (x2 - x1), 0.0);
    }
    let ik = Complex::i() * k;
    let inv_ik = ik.inv();
    // antiderivative: (ax + b - a/(ik)) e^{ikx} / (ik)
    let upper = (Complex::from(a * x2 + b) - inv_ik * a) * (ik * x2).exp();
    let lower = (Complex::from(a * x1 + b) - inv_ik * a) * (ik * x1).exp();
    inv_ik * (upper - lower)
}
