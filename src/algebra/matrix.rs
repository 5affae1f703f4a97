use crate::algebra::Matrix;
use crate::errors::{NumericError, NumericResult};

/// Pivots smaller than this (after row exchange) mark the matrix as singular.
const PIVOT_EPSILON: f64 = 1e-10;

/// Returns (rows, cols), or `None` if the rows have differing lengths.
fn shape(m: &[Vec<f64>]) -> Option<(usize, usize)> {
    let cols = m.first().map_or(0, Vec::len);
    if m.iter().all(|row| row.len() == cols) {
        Some((m.len(), cols))
    } else {
        None
    }
}

/// Dense product C = A·B.
///
/// Both operands must be non-empty and rectangular with cols(A) == rows(B).
pub fn multiply(a: &[Vec<f64>], b: &[Vec<f64>]) -> NumericResult<Matrix> {
    let (a_shape, b_shape) = match (shape(a), shape(b)) {
        (Some(sa), Some(sb)) => (sa, sb),
        _ => {
            return Err(NumericError::dimensions(
                (a.len(), a.first().map_or(0, Vec::len)),
                (b.len(), b.first().map_or(0, Vec::len)),
            ))
        }
    };

    let (rows, inner) = a_shape;
    let (b_rows, cols) = b_shape;
    if rows == 0 || b_rows == 0 || inner != b_rows {
        return Err(NumericError::dimensions(a_shape, b_shape));
    }

    let mut result = vec![vec![0.0; cols]; rows];
    for (out_row, a_row) in result.iter_mut().zip(a) {
        for (k, &a_ik) in a_row.iter().enumerate() {
            for (out, &b_kj) in out_row.iter_mut().zip(&b[k]) {
                *out += a_ik * b_kj;
            }
        }
    }
    Ok(result)
}

/// Inverse by Gauss-Jordan elimination on the augmented matrix [M | I].
///
/// Each column's pivot is the entry of largest magnitude at or below the
/// diagonal. A pivot below 1e-10 in magnitude fails with `SingularMatrix`.
pub fn inverse(m: &[Vec<f64>]) -> NumericResult<Matrix> {
    let n = m.len();
    let cols = m.first().map_or(0, Vec::len);
    if n == 0 || m.iter().any(|row| row.len() != n) {
        return Err(NumericError::dimensions((n, cols), (n, n)));
    }

    let mut aug: Matrix = m
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut r = Vec::with_capacity(2 * n);
            r.extend_from_slice(row);
            r.extend((0..n).map(|j| if i == j { 1.0 } else { 0.0 }));
            r
        })
        .collect();

    for col in 0..n {
        let mut pivot_row = col;
        for r in (col + 1)..n {
            if aug[r][col].abs() > aug[pivot_row][col].abs() {
                pivot_row = r;
            }
        }
        if pivot_row != col {
            aug.swap(col, pivot_row);
        }

        let pivot = aug[col][col];
        if pivot.abs() < PIVOT_EPSILON {
            tracing::debug!(column = col, pivot = pivot, "singular matrix detected");
            return Err(NumericError::SingularMatrix { column: col, pivot });
        }

        for v in aug[col].iter_mut() {
            *v /= pivot;
        }

        let pivot_values = aug[col].clone();
        for (k, row) in aug.iter_mut().enumerate() {
            if k == col {
                continue;
            }
            let factor = row[col];
            if factor == 0.0 {
                continue;
            }
            for (v, &p) in row.iter_mut().zip(&pivot_values) {
                *v -= factor * p;
            }
        }
    }

    Ok(aug.into_iter().map(|row| row[n..].to_vec()).collect())
}

/// Swaps rows and columns. Rows must all have the same length; empty input
/// yields an empty matrix.
pub fn transpose(m: &[Vec<f64>]) -> Matrix {
    let cols = m.first().map_or(0, Vec::len);
    (0..cols)
        .map(|j| m.iter().map(|row| row[j]).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn assert_identity(m: &Matrix, tol: f64) {
        for (i, row) in m.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (v - expected).abs() < tol,
                    "entry ({i},{j})={v} should be {expected}"
                );
            }
        }
    }

    #[test]
    fn test_multiply_2x3_by_3x2() {
        let a = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let b = vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]];
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c, vec![vec![58.0, 64.0], vec![139.0, 154.0]]);
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = vec![vec![1.0, 2.0]];
        let b = vec![vec![1.0, 2.0]];
        assert!(matches!(
            multiply(&a, &b),
            Err(NumericError::DimensionMismatch { left_cols: 2, right_rows: 1, .. })
        ));
    }

    #[test]
    fn test_multiply_empty_fails() {
        let empty: Matrix = Vec::new();
        let b = vec![vec![1.0]];
        assert!(multiply(&empty, &b).is_err());
        assert!(multiply(&b, &empty).is_err());
    }

    #[test]
    fn test_multiply_ragged_fails() {
        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        let b = vec![vec![1.0], vec![1.0]];
        assert!(matches!(multiply(&ragged, &b), Err(NumericError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = vec![
            vec![4.0, 7.0, 2.0],
            vec![3.0, 6.0, 1.0],
            vec![2.0, 5.0, 3.0],
        ];
        let inv = inverse(&m).unwrap();
        assert_identity(&multiply(&m, &inv).unwrap(), 1e-8);
    }

    #[test]
    fn test_inverse_needs_row_exchange() {
        // Zero on the leading diagonal; the pivot must come from below.
        let m = vec![vec![0.0, 1.0], vec![2.0, 3.0]];
        let inv = inverse(&m).unwrap();
        assert_abs_diff_eq!(inv[0][0], -1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[0][1], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[1][0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[1][1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_singular() {
        let m = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
        assert!(matches!(inverse(&m), Err(NumericError::SingularMatrix { column: 1, .. })));
    }

    #[test]
    fn test_inverse_requires_square() {
        let m = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert!(matches!(inverse(&m), Err(NumericError::DimensionMismatch { .. })));
        assert!(inverse(&[]).is_err());
    }

    #[test]
    fn test_inverse_1x1() {
        let inv = inverse(&[vec![4.0]]).unwrap();
        assert_abs_diff_eq!(inv[0][0], 0.25);
    }

    #[test]
    fn test_transpose() {
        let m = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert_eq!(
            transpose(&m),
            vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]
        );
        assert!(transpose(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_inverse_round_trip_diagonally_dominant(
            n in 1usize..6,
            entries in proptest::collection::vec(-1.0f64..1.0, 36),
        ) {
            // Strict diagonal dominance guarantees a well-conditioned, non-singular matrix.
            let m: Matrix = (0..n)
                .map(|i| {
                    (0..n)
                        .map(|j| {
                            let v = entries[i * 6 + j];
                            if i == j { v + n as f64 + 1.0 } else { v }
                        })
                        .collect()
                })
                .collect();
            let inv = inverse(&m).unwrap();
            let product = multiply(&m, &inv).unwrap();
            for i in 0..n {
                for j in 0..n {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    prop_assert!((product[i][j] - expected).abs() < 1e-8);
                }
            }
        }
    }
}
