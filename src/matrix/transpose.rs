use crate::kernels::Element;

/// Transpose a matrix: dst = src^T, optionally conjugating every element.
///
/// Converts from row-major (rows × cols, stride `lds`) to row-major
/// (cols × rows, stride `ldd`). After transpose, what was column j of src
/// becomes row j of dst.
///
/// # Example
///
/// ```
/// use blockgemm::matrix::transpose::transpose;
///
/// let src = vec![1.0, 2.0, 3.0,   // 2×3 matrix
///                4.0, 5.0, 6.0];
/// let mut dst = vec![0.0; 6];      // will be 3×2
///
/// transpose(&src, 3, &mut dst, 2, 2, 3, false);
///
/// assert_eq!(dst, vec![1.0, 4.0,   // 3×2 matrix
///                      2.0, 5.0,
///                      3.0, 6.0]);
/// ```
pub fn transpose<T: Element>(
    src: &[T],
    lds: usize,
    dst: &mut [T],
    ldd: usize,
    rows: usize,
    cols: usize,
    conj: bool,
) {
    for i in 0..rows {
        for j in 0..cols {
            let v = src[i * lds + j];
            dst[j * ldd + i] = if conj { v.conj() } else { v };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_conj_transpose() {
        let src = [Complex64::new(1.0, 2.0), Complex64::new(3.0, -4.0)]; // 1x2
        let mut dst = [Complex64::new(0.0, 0.0); 2]; // 2x1
        transpose(&src, 2, &mut dst, 1, 1, 2, true);
        assert_eq!(dst, [Complex64::new(1.0, -2.0), Complex64::new(3.0, 4.0)]);
    }

    #[test]
    fn test_padded_destination() {
        let src = [1.0, 2.0, 3.0, 4.0]; // 2x2
        let mut dst = [-1.0; 6]; // 2x2 with stride 3
        transpose(&src, 2, &mut dst, 3, 2, 2, false);
        assert_eq!(dst, [1.0, 3.0, -1.0, 2.0, 4.0, -1.0]);
    }
}
