// src/real2d.rs
//
// Helpers on flat x-fastest 2D real buffers: element (x, y) lives at `y * x_size + x`.

use crate::error::{NumResult, NumericsError};
use crate::Real;

fn check_extent(op: &'static str, x_size: usize, y_size: usize, len: usize) -> NumResult<usize> {
    let Some(n) = x_size.checked_mul(y_size) else {
        log::error!("extent {}x{} overflows while calculating {}", x_size, y_size, op);
        return Err(NumericsError::ExtentOverflow {
            op,
            dims: [x_size, y_size, 1],
        });
    };
    if n > 0 && len == 0 {
        log::error!("data is empty while calculating {}", op);
        return Err(NumericsError::NullInput { op });
    }
    if len < n {
        log::error!(
            "buffer of {} elements is too short for {} ({}x{})",
            len,
            op,
            x_size,
            y_size
        );
        return Err(NumericsError::ExtentMismatch {
            op,
            expected: n,
            actual: len,
        });
    }
    Ok(n)
}

/// Apply log10 in place to the first `x_size * y_size` elements.
///
/// Zeros stay zero. Any negative value fails the call, and the extent is scanned before
/// anything is written, so a failed call leaves `data` as it was.
pub fn mat_log10_2d(x_size: usize, y_size: usize, data: &mut [Real]) -> NumResult<()> {
    let n = check_extent("log10", x_size, y_size, data.len())?;

    if let Some((index, &value)) = data[..n].iter().enumerate().find(|(_, &v)| v < 0.0) {
        log::error!("matrix has a negative value. cannot calculate logarithm");
        return Err(NumericsError::NegativeLogArgument { index, value });
    }

    for v in &mut data[..n] {
        if *v == 0.0 {
            // -0.0 too
            *v = 0.0;
        } else {
            *v = v.log10();
        }
    }
    Ok(())
}

/// Transpose an `x_size` × `y_size` matrix into a new `y_size` × `x_size` buffer:
/// `out[y_size * x + y] = matrix[x_size * y + x]`.
pub fn transpose(x_size: usize, y_size: usize, matrix: &[Real]) -> NumResult<Vec<Real>> {
    let n = check_extent("transpose", x_size, y_size, matrix.len())?;

    let mut out = vec![0.0; n];
    for y in 0..y_size {
        for x in 0..x_size {
            out[y_size * x + y] = matrix[x_size * y + x];
        }
    }
    Ok(out)
}
