// src/vec3.rs
//
// Helpers on [Real; 3]. Three vectors passed together are the rows of a 3x3 matrix.

use crate::{Real, Vector3};

/// 3D vector dot product.
#[inline]
pub fn dot(a: Vector3, b: Vector3) -> Real {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Component-wise minimum.
#[inline]
pub fn min(a: Vector3, b: Vector3) -> Vector3 {
    [
        if a[0] < b[0] { a[0] } else { b[0] },
        if a[1] < b[1] { a[1] } else { b[1] },
        if a[2] < b[2] { a[2] } else { b[2] },
    ]
}

/// Component-wise maximum.
#[inline]
pub fn max(a: Vector3, b: Vector3) -> Vector3 {
    [
        if a[0] > b[0] { a[0] } else { b[0] },
        if a[1] > b[1] { a[1] } else { b[1] },
        if a[2] > b[2] { a[2] } else { b[2] },
    ]
}

/// Component-wise floor.
#[inline]
pub fn floor(a: Vector3) -> Vector3 {
    [a[0].floor(), a[1].floor(), a[2].floor()]
}

/// C = A × B for 3x3 matrices given by rows.
///
/// ```text
/// x1 x2 x3   a1 a2 a3   d1 d2 d3
/// y1 y2 y3 = b1 b2 b3 x e1 e2 e3
/// z1 z2 z3   c1 c2 c3   f1 f2 f3
/// ```
///
/// Returns the rows `[x, y, z]`.
pub fn mat_mul_3x3(
    a: Vector3,
    b: Vector3,
    c: Vector3,
    d: Vector3,
    e: Vector3,
    f: Vector3,
) -> [Vector3; 3] {
    let lhs = [a, b, c];
    let rhs = [d, e, f];
    let mut out = [[0.0; 3]; 3];

    for i in 0..3 {
        for j in 0..3 {
            let mut acc = 0.0;
            for k in 0..3 {
                acc += lhs[i][k] * rhs[k][j];
            }
            out[i][j] = acc;
        }
    }
    out
}

/// x = A · d where (a, b, c) are the rows of A and d is a column vector.
#[inline]
pub fn mat_mul_3x1(a: Vector3, b: Vector3, c: Vector3, d: Vector3) -> Vector3 {
    [dot(a, d), dot(b, d), dot(c, d)]
}
