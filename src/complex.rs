// src/complex.rs
//
// Named helpers on top of `num_complex`'s operators. Ordering is the one thing
// `num_complex` does not provide.

use std::cmp::Ordering;

use crate::{Complex, Real};

/// `a < b` ordered by real part, then imaginary part. Exact comparison, no epsilon.
#[inline]
pub fn complex_less_than(a: Complex, b: Complex) -> bool {
    if a.re < b.re {
        return true;
    }
    a.re == b.re && a.im < b.im
}

/// Same ordering as [`complex_less_than`]. Pairs involving NaN compare `Equal`.
#[inline]
pub fn complex_cmp(a: &Complex, b: &Complex) -> Ordering {
    if complex_less_than(*a, *b) {
        Ordering::Less
    } else if complex_less_than(*b, *a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Stable sort by real part, then imaginary part.
pub fn sort_complex(values: &mut [Complex]) {
    values.sort_by(complex_cmp);
}

/// (a+bi)(c+di) = (ac-bd) + (ad+bc)i
#[inline]
pub fn complex_mul(c: Complex, s: Complex) -> Complex {
    Complex::new(c.re * s.re - c.im * s.im, c.re * s.im + c.im * s.re)
}

/// Complex times real.
#[inline]
pub fn scale(c: Complex, s: Real) -> Complex {
    Complex::new(c.re * s, c.im * s)
}

/// Real times complex.
#[inline]
pub fn scale_rev(s: Real, c: Complex) -> Complex {
    scale(c, s)
}

/// Component-wise division by a real.
#[inline]
pub fn div_real(c: Complex, s: Real) -> Complex {
    Complex::new(c.re / s, c.im / s)
}

/// A real or complex factor for the scalar-multiply operations.
pub trait Scalar: Copy + Send + Sync {
    fn mul_complex(self, z: Complex) -> Complex;
}

impl Scalar for Real {
    #[inline]
    fn mul_complex(self, z: Complex) -> Complex {
        scale(z, self)
    }
}

impl Scalar for Complex {
    #[inline]
    fn mul_complex(self, z: Complex) -> Complex {
        complex_mul(z, self)
    }
}
