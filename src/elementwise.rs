// src/elementwise.rs
//
// Element-wise operations on flattened 3D complex arrays.
//
// Binary operations receive each operand's shape next to its buffer and refuse to run
// unless both the shapes and the buffer lengths agree. The check happens before any
// write, so on error neither `result` nor an in-place operand is touched.
//
// Every output element depends only on the inputs at the same index, so loops switch
// to rayon above `NumericsConfig::par_threshold` without changing results.

use rayon::prelude::*;

use crate::complex::Scalar;
use crate::config::NumericsConfig;
use crate::error::{NumResult, NumericsError};
use crate::shape::Shape3;
use crate::Complex;

// -------------------------
// Guards
// -------------------------

fn check_same_shape(
    op: &'static str,
    lhs: Shape3,
    lhs_len: usize,
    rhs: Shape3,
    rhs_len: usize,
) -> NumResult<()> {
    if lhs != rhs || lhs_len != rhs_len {
        log::error!(
            "matrix sizes are not the same for {} operation ({} [{}] vs {} [{}])",
            op,
            lhs,
            lhs_len,
            rhs,
            rhs_len
        );
        return Err(NumericsError::ShapeMismatch {
            op,
            lhs,
            rhs,
            lhs_len,
            rhs_len,
        });
    }
    Ok(())
}

// -------------------------
// Loop kernels (serial / rayon)
// -------------------------

pub(crate) fn map_into_with<F>(
    cfg: &NumericsConfig,
    matrix: &[Complex],
    result: &mut Vec<Complex>,
    f: F,
) where
    F: Fn(Complex) -> Complex + Send + Sync,
{
    result.clear();
    if cfg.use_parallel(matrix.len()) {
        result.par_extend(matrix.par_iter().map(|&z| f(z)));
    } else {
        result.extend(matrix.iter().map(|&z| f(z)));
    }
}

pub(crate) fn map_in_place_with<F>(cfg: &NumericsConfig, matrix: &mut [Complex], f: F)
where
    F: Fn(Complex) -> Complex + Send + Sync,
{
    if cfg.use_parallel(matrix.len()) {
        matrix.par_iter_mut().for_each(|z| *z = f(*z));
    } else {
        for z in matrix.iter_mut() {
            *z = f(*z);
        }
    }
}

/// Caller guarantees `lhs.len() == rhs.len()`.
pub(crate) fn zip_into_with<F>(
    cfg: &NumericsConfig,
    lhs: &[Complex],
    rhs: &[Complex],
    result: &mut Vec<Complex>,
    f: F,
) where
    F: Fn(Complex, Complex) -> Complex + Send + Sync,
{
    result.clear();
    if cfg.use_parallel(lhs.len()) {
        result.par_extend(lhs.par_iter().zip_eq(rhs.par_iter()).map(|(&a, &b)| f(a, b)));
    } else {
        result.extend(lhs.iter().zip(rhs.iter()).map(|(&a, &b)| f(a, b)));
    }
}

/// Caller guarantees `lhs.len() == rhs.len()`.
pub(crate) fn zip_in_place_with<F>(cfg: &NumericsConfig, lhs: &mut [Complex], rhs: &[Complex], f: F)
where
    F: Fn(Complex, Complex) -> Complex + Send + Sync,
{
    if cfg.use_parallel(lhs.len()) {
        lhs.par_iter_mut()
            .zip_eq(rhs.par_iter())
            .for_each(|(a, &b)| *a = f(*a, b));
    } else {
        for (a, &b) in lhs.iter_mut().zip(rhs.iter()) {
            *a = f(*a, b);
        }
    }
}

#[inline]
fn cfg() -> &'static NumericsConfig {
    NumericsConfig::global()
}

// -------------------------
// Addition
// -------------------------

/// `result[i] = matrix1[i] + matrix2[i]`.
pub fn mat_add(
    shape1: Shape3,
    matrix1: &[Complex],
    shape2: Shape3,
    matrix2: &[Complex],
    result: &mut Vec<Complex>,
) -> NumResult<()> {
    check_same_shape("addition", shape1, matrix1.len(), shape2, matrix2.len())?;
    zip_into_with(cfg(), matrix1, matrix2, result, |a, b| a + b);
    Ok(())
}

/// In-place `matrix1[i] += matrix2[i]`.
pub fn mat_add_in(
    shape1: Shape3,
    matrix1: &mut [Complex],
    shape2: Shape3,
    matrix2: &[Complex],
) -> NumResult<()> {
    check_same_shape("addition", shape1, matrix1.len(), shape2, matrix2.len())?;
    zip_in_place_with(cfg(), matrix1, matrix2, |a, b| a + b);
    Ok(())
}

// -------------------------
// Scalar multiplication (real or complex factor)
// -------------------------

/// `result[i] = matrix[i] * scalar`.
pub fn mat_mul<S: Scalar>(scalar: S, matrix: &[Complex], result: &mut Vec<Complex>) {
    map_into_with(cfg(), matrix, result, |z| scalar.mul_complex(z));
}

/// [`mat_mul`] with the arguments in matrix-first order.
pub fn mat_mul_rev<S: Scalar>(matrix: &[Complex], scalar: S, result: &mut Vec<Complex>) {
    mat_mul(scalar, matrix, result)
}

/// In-place `matrix[i] *= scalar`.
pub fn mat_mul_in<S: Scalar>(scalar: S, matrix: &mut [Complex]) {
    map_in_place_with(cfg(), matrix, |z| scalar.mul_complex(z));
}

pub fn mat_mul_in_rev<S: Scalar>(matrix: &mut [Complex], scalar: S) {
    mat_mul_in(scalar, matrix)
}

// -------------------------
// Element-by-element product / division
// -------------------------

/// `result[i] = matrix1[i] * matrix2[i]`.
pub fn mat_dot_prod(
    shape1: Shape3,
    matrix1: &[Complex],
    shape2: Shape3,
    matrix2: &[Complex],
    result: &mut Vec<Complex>,
) -> NumResult<()> {
    check_same_shape("dot product", shape1, matrix1.len(), shape2, matrix2.len())?;
    zip_into_with(cfg(), matrix1, matrix2, result, |a, b| a * b);
    Ok(())
}

pub fn mat_dot_prod_in(
    shape1: Shape3,
    matrix1: &mut [Complex],
    shape2: Shape3,
    matrix2: &[Complex],
) -> NumResult<()> {
    check_same_shape("dot product", shape1, matrix1.len(), shape2, matrix2.len())?;
    zip_in_place_with(cfg(), matrix1, matrix2, |a, b| a * b);
    Ok(())
}

/// `result[i] = matrix1[i] / matrix2[i]`. Division by a zero element follows IEEE rules.
pub fn mat_dot_div(
    shape1: Shape3,
    matrix1: &[Complex],
    shape2: Shape3,
    matrix2: &[Complex],
    result: &mut Vec<Complex>,
) -> NumResult<()> {
    check_same_shape("dot division", shape1, matrix1.len(), shape2, matrix2.len())?;
    zip_into_with(cfg(), matrix1, matrix2, result, |a, b| a / b);
    Ok(())
}

pub fn mat_dot_div_in(
    shape1: Shape3,
    matrix1: &mut [Complex],
    shape2: Shape3,
    matrix2: &[Complex],
) -> NumResult<()> {
    check_same_shape("dot division", shape1, matrix1.len(), shape2, matrix2.len())?;
    zip_in_place_with(cfg(), matrix1, matrix2, |a, b| a / b);
    Ok(())
}

// -------------------------
// Unary maps
// -------------------------

pub fn mat_sqr(matrix: &[Complex], result: &mut Vec<Complex>) {
    map_into_with(cfg(), matrix, result, |z| z * z);
}

pub fn mat_sqr_in(matrix: &mut [Complex]) {
    map_in_place_with(cfg(), matrix, |z| z * z);
}

/// Principal square root of every element.
pub fn mat_sqrt(matrix: &[Complex], result: &mut Vec<Complex>) {
    map_into_with(cfg(), matrix, result, |z| z.sqrt());
}

pub fn mat_sqrt_in(matrix: &mut [Complex]) {
    map_in_place_with(cfg(), matrix, |z| z.sqrt());
}

/// Complex exponential of every element.
pub fn mat_exp(matrix: &[Complex], result: &mut Vec<Complex>) {
    map_into_with(cfg(), matrix, result, |z| z.exp());
}

pub fn mat_exp_in(matrix: &mut [Complex]) {
    map_in_place_with(cfg(), matrix, |z| z.exp());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Real;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_buffer(rng: &mut StdRng, n: usize) -> Vec<Complex> {
        (0..n)
            .map(|_| Complex::new(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0)))
            .collect()
    }

    fn approx_eq(a: Complex, b: Complex, tol: Real) -> bool {
        (a - b).norm() <= tol
    }

    #[test]
    fn add_is_commutative() {
        let mut rng = StdRng::seed_from_u64(11);
        let s = Shape3::new(4, 3, 2);
        let a = random_buffer(&mut rng, s.n_cells());
        let b = random_buffer(&mut rng, s.n_cells());

        let mut ab = Vec::new();
        let mut ba = Vec::new();
        mat_add(s, &a, s, &b, &mut ab).unwrap();
        mat_add(s, &b, s, &a, &mut ba).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.len(), s.n_cells());
    }

    #[test]
    fn add_in_place_matches_out_of_place() {
        let mut rng = StdRng::seed_from_u64(12);
        let s = Shape3::new(5, 2, 1);
        let a = random_buffer(&mut rng, s.n_cells());
        let b = random_buffer(&mut rng, s.n_cells());

        let mut out = Vec::new();
        mat_add(s, &a, s, &b, &mut out).unwrap();

        let mut a_in = a.clone();
        mat_add_in(s, &mut a_in, s, &b).unwrap();
        assert_eq!(a_in, out);
    }

    #[test]
    fn dot_div_undoes_dot_prod() {
        let mut rng = StdRng::seed_from_u64(13);
        let s = Shape3::new(3, 3, 3);
        let a = random_buffer(&mut rng, s.n_cells());
        let b: Vec<Complex> = (0..s.n_cells())
            .map(|_| Complex::new(rng.gen_range(0.5..2.0), rng.gen_range(-2.0..2.0)))
            .collect();

        let mut prod = Vec::new();
        mat_dot_prod(s, &a, s, &b, &mut prod).unwrap();
        let mut back = Vec::new();
        mat_dot_div(s, &prod, s, &b, &mut back).unwrap();

        for (i, (&x, &y)) in a.iter().zip(back.iter()).enumerate() {
            assert!(approx_eq(x, y, 256.0 * Real::EPSILON), "index {i}: {x} vs {y}");
        }

        let mut a_in = prod.clone();
        mat_dot_div_in(s, &mut a_in, s, &b).unwrap();
        assert_eq!(a_in, back);

        let mut p_in = a.clone();
        mat_dot_prod_in(s, &mut p_in, s, &b).unwrap();
        assert_eq!(p_in, prod);
    }

    #[test]
    fn mismatched_shape_leaves_outputs_untouched() {
        let a = vec![Complex::new(1.0, 2.0); 6];
        let b = vec![Complex::new(3.0, -1.0); 6];
        let sentinel = vec![Complex::new(42.0, 42.0); 2];

        let mut result = sentinel.clone();
        let err = mat_add(Shape3::new(2, 3, 1), &a, Shape3::new(3, 2, 1), &b, &mut result)
            .unwrap_err();
        assert_eq!(err.kind(), "shape_mismatch");
        assert_eq!(result, sentinel);

        let err = mat_dot_prod(Shape3::new(2, 3, 1), &a, Shape3::new(2, 3, 2), &b, &mut result)
            .unwrap_err();
        assert_eq!(err.kind(), "shape_mismatch");
        assert_eq!(result, sentinel);

        let mut a_in = a.clone();
        assert!(mat_add_in(Shape3::new(6, 1, 1), &mut a_in, Shape3::new(1, 6, 1), &b).is_err());
        assert!(mat_dot_prod_in(Shape3::new(6, 1, 1), &mut a_in, Shape3::new(1, 1, 6), &b).is_err());
        assert!(mat_dot_div_in(Shape3::new(6, 1, 1), &mut a_in, Shape3::new(3, 2, 1), &b).is_err());
        assert_eq!(a_in, a);
    }

    #[test]
    fn same_shape_but_different_length_is_rejected() {
        let s = Shape3::new(2, 2, 1);
        let a = vec![Complex::new(1.0, 0.0); 4];
        let b = vec![Complex::new(1.0, 0.0); 3];
        let mut result = Vec::new();
        let err = mat_dot_div(s, &a, s, &b, &mut result).unwrap_err();
        assert_eq!(
            err,
            NumericsError::ShapeMismatch {
                op: "dot division",
                lhs: s,
                rhs: s,
                lhs_len: 4,
                rhs_len: 3,
            }
        );
        assert!(result.is_empty());
    }

    #[test]
    fn scalar_mul_accepts_real_and_complex_in_either_order() {
        let a = vec![Complex::new(1.0, -1.0), Complex::new(0.5, 2.0)];
        let two: Real = 2.0;
        let i = Complex::new(0.0, 1.0);

        let mut r1 = Vec::new();
        let mut r2 = Vec::new();
        mat_mul(two, &a, &mut r1);
        mat_mul_rev(&a, two, &mut r2);
        assert_eq!(r1, vec![Complex::new(2.0, -2.0), Complex::new(1.0, 4.0)]);
        assert_eq!(r1, r2);

        mat_mul(i, &a, &mut r1);
        assert_eq!(r1, vec![Complex::new(1.0, 1.0), Complex::new(-2.0, 0.5)]);

        let mut a_in = a.clone();
        mat_mul_in(i, &mut a_in);
        assert_eq!(a_in, r1);
        mat_mul_in_rev(&mut a_in, two);
        assert_eq!(a_in, vec![Complex::new(2.0, 2.0), Complex::new(-4.0, 1.0)]);
    }

    #[test]
    fn unary_maps_match_scalar_functions() {
        let a = vec![
            Complex::new(4.0, 0.0),
            Complex::new(-4.0, 0.0),
            Complex::new(0.0, 2.0),
            Complex::new(0.0, 0.0),
        ];

        let mut sq = Vec::new();
        mat_sqr(&a, &mut sq);
        assert_eq!(sq[0], Complex::new(16.0, 0.0));
        assert_eq!(sq[2], Complex::new(-4.0, 0.0));

        let mut rt = Vec::new();
        mat_sqrt(&a, &mut rt);
        assert!(approx_eq(rt[0], Complex::new(2.0, 0.0), 8.0 * Real::EPSILON));
        // principal branch: sqrt(-4) = +2i
        assert!(approx_eq(rt[1], Complex::new(0.0, 2.0), 8.0 * Real::EPSILON));
        assert!(approx_eq(rt[2], Complex::new(1.0, 1.0), 8.0 * Real::EPSILON));

        let mut ex = Vec::new();
        mat_exp(&a, &mut ex);
        assert!(approx_eq(ex[3], Complex::new(1.0, 0.0), 8.0 * Real::EPSILON));
        assert!(approx_eq(ex[2], Complex::new(2.0_f64.cos() as Real, 2.0_f64.sin() as Real), 8.0 * Real::EPSILON));

        let mut a_in = a.clone();
        mat_sqr_in(&mut a_in);
        assert_eq!(a_in, sq);
        let mut a_in = a.clone();
        mat_sqrt_in(&mut a_in);
        assert_eq!(a_in, rt);
        let mut a_in = a.clone();
        mat_exp_in(&mut a_in);
        assert_eq!(a_in, ex);
    }

    #[test]
    fn out_of_place_result_is_cleared_first() {
        let a = vec![Complex::new(1.0, 1.0); 3];
        let mut result = vec![Complex::new(9.0, 9.0); 10];
        mat_sqr(&a, &mut result);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn parallel_and_serial_paths_agree() {
        let mut rng = StdRng::seed_from_u64(0xBEEF);
        let n = 4096;
        let a = random_buffer(&mut rng, n);
        let b = random_buffer(&mut rng, n);

        let serial = NumericsConfig {
            force_serial: true,
            ..NumericsConfig::default()
        };
        let parallel = NumericsConfig {
            par_threshold: 0,
            ..NumericsConfig::default()
        };

        let mut rs = Vec::new();
        let mut rp = Vec::new();
        zip_into_with(&serial, &a, &b, &mut rs, |x, y| x * y + x);
        zip_into_with(&parallel, &a, &b, &mut rp, |x, y| x * y + x);
        assert_eq!(rs, rp);

        map_into_with(&serial, &a, &mut rs, |z| z.exp());
        map_into_with(&parallel, &a, &mut rp, |z| z.exp());
        assert_eq!(rs, rp);

        let mut is = a.clone();
        let mut ip = a.clone();
        zip_in_place_with(&serial, &mut is, &b, |x, y| x / y);
        zip_in_place_with(&parallel, &mut ip, &b, |x, y| x / y);
        assert_eq!(is, ip);

        map_in_place_with(&serial, &mut is, |z| z.sqrt());
        map_in_place_with(&parallel, &mut ip, |z| z.sqrt());
        assert_eq!(is, ip);
    }
}
