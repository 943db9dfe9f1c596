// src/field.rs

use crate::complex::Scalar;
use crate::elementwise;
use crate::error::{NumResult, NumericsError};
use crate::shape::Shape3;
use crate::Complex;

/// Complex-valued array on a 3D grid.
///
/// The shape travels with the data, so binary operations only have to compare two
/// `Shape3` values instead of trusting a separately passed triple.
/// `data.len() == shape.n_cells()` always holds: fields are private and `data_mut`
/// hands out a slice, which cannot change the length.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexField3D {
    shape: Shape3,
    data: Vec<Complex>,
}

impl ComplexField3D {
    /// Zero-filled field.
    pub fn new(shape: Shape3) -> Self {
        Self::filled(shape, Complex::new(0.0, 0.0))
    }

    pub fn filled(shape: Shape3, value: Complex) -> Self {
        Self {
            shape,
            data: vec![value; shape.n_cells()],
        }
    }

    /// Wrap an existing buffer. Fails if its length does not match the shape.
    pub fn from_vec(shape: Shape3, data: Vec<Complex>) -> NumResult<Self> {
        let Some(n) = shape.checked_n_cells() else {
            log::error!("shape {} overflows usize", shape);
            return Err(NumericsError::ExtentOverflow {
                op: "field construction",
                dims: [shape.nx, shape.ny, shape.nz],
            });
        };
        if data.len() != n {
            log::error!(
                "buffer of {} elements does not fit shape {} ({} cells)",
                data.len(),
                shape,
                n
            );
            return Err(NumericsError::ExtentMismatch {
                op: "field construction",
                expected: n,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Build a field by evaluating `f(i, j, k)` at every cell.
    pub fn from_fn<F>(shape: Shape3, mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> Complex,
    {
        let mut data = Vec::with_capacity(shape.n_cells());
        for k in 0..shape.nz {
            for j in 0..shape.ny {
                for i in 0..shape.nx {
                    data.push(f(i, j, k));
                }
            }
        }
        Self { shape, data }
    }

    #[inline]
    pub fn shape(&self) -> Shape3 {
        self.shape
    }

    #[inline]
    pub fn data(&self) -> &[Complex] {
        &self.data
    }

    /// Mutable view of the cells; the length is fixed by the shape.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Complex] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<Complex> {
        self.data
    }

    #[inline]
    pub fn idx(&self, i: usize, j: usize, k: usize) -> usize {
        self.shape.idx(i, j, k)
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> Complex {
        self.data[self.idx(i, j, k)]
    }

    /// Set all cells to the same value.
    pub fn set_uniform(&mut self, value: Complex) {
        for cell in &mut self.data {
            *cell = value;
        }
    }

    // --- binary, shape-checked ---

    pub fn add(&self, other: &Self) -> NumResult<Self> {
        let mut out = Vec::new();
        elementwise::mat_add(self.shape, &self.data, other.shape, &other.data, &mut out)?;
        Ok(Self {
            shape: self.shape,
            data: out,
        })
    }

    pub fn add_in(&mut self, other: &Self) -> NumResult<()> {
        elementwise::mat_add_in(self.shape, &mut self.data, other.shape, &other.data)
    }

    pub fn dot_prod(&self, other: &Self) -> NumResult<Self> {
        let mut out = Vec::new();
        elementwise::mat_dot_prod(self.shape, &self.data, other.shape, &other.data, &mut out)?;
        Ok(Self {
            shape: self.shape,
            data: out,
        })
    }

    pub fn dot_prod_in(&mut self, other: &Self) -> NumResult<()> {
        elementwise::mat_dot_prod_in(self.shape, &mut self.data, other.shape, &other.data)
    }

    pub fn dot_div(&self, other: &Self) -> NumResult<Self> {
        let mut out = Vec::new();
        elementwise::mat_dot_div(self.shape, &self.data, other.shape, &other.data, &mut out)?;
        Ok(Self {
            shape: self.shape,
            data: out,
        })
    }

    pub fn dot_div_in(&mut self, other: &Self) -> NumResult<()> {
        elementwise::mat_dot_div_in(self.shape, &mut self.data, other.shape, &other.data)
    }

    // --- scalar / unary, infallible ---

    pub fn scaled<S: Scalar>(&self, scalar: S) -> Self {
        self.mapped(|m, out| elementwise::mat_mul(scalar, m, out))
    }

    pub fn scale_in<S: Scalar>(&mut self, scalar: S) {
        elementwise::mat_mul_in(scalar, &mut self.data);
    }

    pub fn sqr(&self) -> Self {
        self.mapped(elementwise::mat_sqr)
    }

    pub fn sqr_in(&mut self) {
        elementwise::mat_sqr_in(&mut self.data);
    }

    pub fn sqrt(&self) -> Self {
        self.mapped(elementwise::mat_sqrt)
    }

    pub fn sqrt_in(&mut self) {
        elementwise::mat_sqrt_in(&mut self.data);
    }

    pub fn exp(&self) -> Self {
        self.mapped(elementwise::mat_exp)
    }

    pub fn exp_in(&mut self) {
        elementwise::mat_exp_in(&mut self.data);
    }

    fn mapped<F>(&self, op: F) -> Self
    where
        F: FnOnce(&[Complex], &mut Vec<Complex>),
    {
        let mut out = Vec::with_capacity(self.data.len());
        op(&self.data, &mut out);
        Self {
            shape: self.shape,
            data: out,
        }
    }
}
