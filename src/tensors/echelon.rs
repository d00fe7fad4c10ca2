//! Gaussian elimination, echelon forms and determinants.
//!
//! The elimination uses a single convention throughout: the pivot of column `c`
//! is the first non-zero entry at or below the current row, and every row `n`
//! below the pivot row `r` is updated as `row[n] -= (row[n][c] / row[r][c]) * row[r]`.
//! This update leaves the determinant unchanged, so only row swaps affect its sign.

use smallvec::SmallVec;
use tracing::trace;

use super::matrix::{Matrix, MatrixError};
use crate::domains::Field;

impl<F: Field> Matrix<F> {
    /// Write the first `max_col` columns of the matrix in echelon form.
    /// Returns the number of pivots and whether an odd number of rows were swapped.
    fn gaussian_elimination(&mut self, max_col: u32) -> (u32, bool) {
        let zero = self.field.zero();

        let mut i = 0;
        let mut odd_swaps = false;
        for j in 0..max_col {
            if i >= self.nrows {
                break;
            }

            if F::is_zero(&self[(i, j)]) {
                // Select a non-zero pivot.
                let Some(k) = (i + 1..self.nrows).find(|&k| !F::is_zero(&self[(k, j)])) else {
                    continue;
                };

                trace!(col = j, from = k, to = i, "swapping pivot row");
                self.swap_rows(i, k);
                odd_swaps = !odd_swaps;
            }

            for k in i + 1..self.nrows {
                if !F::is_zero(&self[(k, j)]) {
                    let s = self.field.div(&self[(k, j)], &self[(i, j)]);
                    self[(k, j)] = zero.clone();
                    for l in j + 1..self.ncols {
                        let mut e = std::mem::replace(&mut self[(k, l)], zero.clone());
                        self.field.sub_mul_assign(&mut e, &self[(i, l)], &s);
                        self[(k, l)] = e;
                    }
                }
            }

            i += 1;
        }

        (i, odd_swaps)
    }

    /// Create a row-reduced matrix from a matrix in echelon form.
    fn back_substitution(&mut self, max_col: u32) {
        let field = self.field.clone();
        for i in (0..self.nrows).rev() {
            if let Some(j) = (0..max_col).find(|&j| !F::is_zero(&self[(i, j)])) {
                if !field.is_one(&self[(i, j)]) {
                    let inv_x = field.inv(&self[(i, j)]);

                    for k in j + 1..self.ncols {
                        field.mul_assign(&mut self[(i, k)], &inv_x);
                    }
                    self[(i, j)] = field.one();
                }

                for k in 0..i {
                    if !F::is_zero(&self[(k, j)]) {
                        let scale = std::mem::replace(&mut self[(k, j)], field.zero());
                        for l in j + 1..self.ncols {
                            let mut e = std::mem::replace(&mut self[(k, l)], field.zero());
                            field.sub_mul_assign(&mut e, &self[(i, l)], &scale);
                            self[(k, l)] = e;
                        }
                    }
                }
            }
        }
    }

    /// Row-reduce the matrix in-place and return the rank.
    pub fn row_reduce(&mut self) -> usize {
        let (rank, _) = self.gaussian_elimination(self.ncols);
        self.back_substitution(self.ncols);
        rank as usize
    }

    /// Return the row echelon form: the first non-zero entry of every row lies strictly
    /// to the right of the one in the row above, and zero rows are at the bottom.
    pub fn row_echelon_form(&self) -> Matrix<F> {
        let mut m = self.clone();
        m.gaussian_elimination(m.ncols);
        m
    }

    /// Return the reduced row echelon form: the row echelon form where every pivot is one
    /// and is the only non-zero entry in its column.
    pub fn reduced_row_echelon_form(&self) -> Matrix<F> {
        let mut m = self.clone();
        m.row_reduce();
        m
    }

    /// Get the rank of the matrix.
    pub fn rank(&self) -> usize {
        self.clone().gaussian_elimination(self.ncols).0 as usize
    }

    /// Return the columns that contain a pivot in the row echelon form.
    pub fn pivot_columns(&self) -> SmallVec<[u32; 8]> {
        let m = self.row_echelon_form();
        m.row_iter()
            .take(m.nrows as usize)
            .filter_map(|r| r.iter().position(|e| !F::is_zero(e)))
            .map(|c| c as u32)
            .collect()
    }

    /// Check if the matrix is in reduced row echelon form.
    pub fn is_rref(&self) -> bool {
        let mut last_pivot: Option<u32> = None;
        let mut seen_zero_row = false;

        for i in 0..self.nrows {
            let Some(j) = (0..self.ncols).find(|&j| !F::is_zero(&self[(i, j)])) else {
                seen_zero_row = true;
                continue;
            };

            if seen_zero_row || last_pivot.is_some_and(|p| p >= j) {
                return false;
            }

            if !self.field.is_one(&self[(i, j)])
                || (0..self.nrows).any(|k| k != i && !F::is_zero(&self[(k, j)]))
            {
                return false;
            }

            last_pivot = Some(j);
        }

        true
    }

    /// Compute the determinant from the row echelon form: the product of the
    /// diagonal, negated for an odd number of row swaps.
    /// The determinant of a `0x0` matrix is one.
    pub fn determinant(&self) -> Result<F::Element, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                nrows: self.nrows(),
                ncols: self.ncols(),
            });
        }

        let mut m = self.clone();
        let (_, odd_swaps) = m.gaussian_elimination(m.ncols);

        let mut det = m.field.one();
        for x in 0..m.nrows {
            m.field.mul_assign(&mut det, &m[(x, x)]);
        }

        if odd_swaps {
            det = m.field.neg(&det);
        }

        Ok(det)
    }

    /// Compute the determinant by cofactor expansion along the first row.
    /// This takes factorial time and is meant for small matrices and cross-checks.
    pub fn determinant_by_cofactors(&self) -> Result<F::Element, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                nrows: self.nrows(),
                ncols: self.ncols(),
            });
        }

        let f = &self.field;
        match self.nrows {
            0 => Ok(f.one()),
            1 => Ok(self.data[0].clone()),
            2 => Ok(f.sub(
                &f.mul(&self.data[0], &self.data[3]),
                &f.mul(&self.data[1], &self.data[2]),
            )),
            _ => {
                let mut det = f.zero();
                for j in 0..self.ncols {
                    if F::is_zero(&self[(0, j)]) {
                        continue;
                    }

                    let m = self.minor(0, j).determinant_by_cofactors()?;
                    if j % 2 == 0 {
                        f.add_mul_assign(&mut det, &self[(0, j)], &m);
                    } else {
                        f.sub_mul_assign(&mut det, &self[(0, j)], &m);
                    }
                }
                Ok(det)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{
        domains::{
            float::RR,
            rational::{RationalField, Q},
        },
        tensors::matrix::{Matrix, MatrixError},
    };

    fn m123() -> Matrix<RationalField> {
        Matrix::from_linear((1..=9i64).map(|i| i.into()).collect(), 3, 3, Q).unwrap()
    }

    #[test]
    fn echelon_forms() {
        let a = m123();

        let r = a.row_echelon_form();
        assert_eq!(
            r.data,
            vec![
                1.into(),
                2.into(),
                3.into(),
                0.into(),
                (-3).into(),
                (-6).into(),
                0.into(),
                0.into(),
                0.into()
            ]
        );

        let rr = a.reduced_row_echelon_form();
        assert_eq!(
            rr.data,
            vec![
                1.into(),
                0.into(),
                (-1).into(),
                0.into(),
                1.into(),
                2.into(),
                0.into(),
                0.into(),
                0.into()
            ]
        );
        assert!(rr.is_rref());
        assert!(!a.is_rref());
        assert_eq!(rr.reduced_row_echelon_form(), rr);
        assert_eq!(a.rank(), 2);
        assert_eq!(a.pivot_columns().as_slice(), &[0, 1]);
    }

    #[test]
    fn zero_column_pivot() {
        let a = Matrix::from_nested_vec(
            vec![
                vec![0.into(), 0.into(), 2.into()],
                vec![0.into(), 1.into(), 1.into()],
            ],
            Q,
        )
        .unwrap();

        let r = a.row_echelon_form();
        assert_eq!(r.row(0), &[0.into(), 1.into(), 1.into()]);
        assert_eq!(r.row(1), &[0.into(), 0.into(), 2.into()]);
        assert!(a.reduced_row_echelon_form().is_rref());
        assert_eq!(a.pivot_columns().as_slice(), &[1, 2]);
    }

    #[test]
    fn determinants() {
        assert_eq!(m123().determinant(), Ok(0.into()));
        assert_eq!(m123().determinant_by_cofactors(), Ok(0.into()));

        let a = Matrix::from_nested_vec(
            vec![
                vec![0.into(), 2.into(), 1.into()],
                vec![1.into(), 0.into(), 3.into()],
                vec![4.into(), (-1).into(), 0.into()],
            ],
            Q,
        )
        .unwrap();

        // 0*(0+3) - 2*(0-12) + 1*(-1-0) = 23
        assert_eq!(a.determinant(), Ok(23.into()));
        assert_eq!(a.determinant_by_cofactors(), Ok(23.into()));

        let swapped = Matrix::from_nested_vec(
            vec![vec![0.into(), 1.into()], vec![1.into(), 0.into()]],
            Q,
        )
        .unwrap();
        assert_eq!(swapped.determinant(), Ok((-1).into()));

        assert_eq!(Matrix::new(0, 0, Q).determinant(), Ok(1.into()));
        assert_eq!(
            Matrix::new(2, 3, Q).determinant_by_cofactors(),
            Err(MatrixError::NotSquare { nrows: 2, ncols: 3 })
        );
    }

    #[test]
    fn float_determinant() {
        let a = Matrix::from_nested_vec(
            vec![
                vec![2.0.into(), 0.0.into(), 0.0.into(), 0.0.into()],
                vec![0.0.into(), 0.0.into(), 3.0.into(), 0.0.into()],
                vec![0.0.into(), 1.0.into(), 0.0.into(), 0.0.into()],
                vec![0.0.into(), 0.0.into(), 0.0.into(), 4.0.into()],
            ],
            RR,
        )
        .unwrap();

        assert_eq!(a.determinant(), Ok((-24.0).into()));
        assert_eq!(a.determinant_by_cofactors(), Ok((-24.0).into()));
    }
}
