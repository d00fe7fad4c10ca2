use std::{
    fmt::Display,
    ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign},
    slice::Chunks,
};

use crate::{
    domains::{Field, Ring},
    printer::{MatrixPrinter, VectorPrinter},
};

/// An n-dimensional vector.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Vector<F: Ring> {
    pub(crate) data: Vec<F::Element>,
    pub(crate) field: F,
}

impl<F: Ring> Vector<F> {
    /// Create a new vector from a list of scalars.
    pub fn new(data: Vec<F::Element>, field: F) -> Vector<F> {
        Vector { data, field }
    }

    /// Create the zero vector of dimension `dim`.
    pub fn zero(dim: u32, field: F) -> Vector<F> {
        Vector {
            data: (0..dim).map(|_| field.zero()).collect(),
            field,
        }
    }

    /// Create the unit vector of dimension `dim` that points along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= dim`.
    pub fn unit(dim: u32, axis: u32, field: F) -> Vector<F> {
        assert!(axis < dim, "Axis {} out of range for dimension {}", axis, dim);
        let mut v = Vector::zero(dim, field);
        v.data[axis as usize] = v.field.one();
        v
    }

    /// Create a new zero vector from an existing one.
    pub fn new_zero(&self) -> Vector<F> {
        Vector {
            data: vec![self.field.zero(); self.data.len()],
            field: self.field.clone(),
        }
    }

    /// Return the number of entries.
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    /// Return the field of the vector entries.
    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn as_slice(&self) -> &[F::Element] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F::Element> {
        self.data.iter()
    }

    /// Return true iff every entry is zero. The empty vector is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(F::is_zero)
    }

    /// Return the position of the first non-zero entry.
    pub fn first_non_zero_index(&self) -> Option<usize> {
        self.data.iter().position(|e| !F::is_zero(e))
    }

    /// Return the first non-zero entry.
    pub fn first_non_zero(&self) -> Option<&F::Element> {
        self.data.iter().find(|e| !F::is_zero(e))
    }

    /// Multiply every entry by the scalar `e`.
    pub fn scale(&self, e: &F::Element) -> Vector<F> {
        Vector {
            data: self.data.iter().map(|x| self.field.mul(x, e)).collect(),
            field: self.field.clone(),
        }
    }

    pub fn norm_squared(&self) -> F::Element {
        let mut res = self.field.zero();
        for e in &self.data {
            self.field.add_mul_assign(&mut res, e, e);
        }
        res
    }

    /// Take the Euclidean scalar product of two vectors.
    pub fn dot(&self, rhs: &Self) -> F::Element {
        if self.data.len() != rhs.data.len() {
            panic!(
                "Vectors do not have equal dimension: {} vs {}",
                self.data.len(),
                rhs.data.len()
            );
        }

        let mut res = self.field.zero();
        for (e1, e2) in self.data.iter().zip(&rhs.data) {
            self.field.add_mul_assign(&mut res, e1, e2);
        }

        res
    }

    /// Compute the Euclidean cross product in three dimensions.
    pub fn cross_product(&self, rhs: &Self) -> Result<Vector<F>, MatrixError> {
        if self.data.len() != 3 || rhs.data.len() != 3 {
            return Err(MatrixError::DimensionMismatch {
                expected: (3, 1),
                found: (self.data.len().max(rhs.data.len()), 1),
            });
        }

        let f = &self.field;
        let (a, b) = (&self.data, &rhs.data);
        Ok(Vector {
            data: vec![
                f.sub(&f.mul(&a[1], &b[2]), &f.mul(&a[2], &b[1])),
                f.sub(&f.mul(&a[2], &b[0]), &f.mul(&a[0], &b[2])),
                f.sub(&f.mul(&a[0], &b[1]), &f.mul(&a[1], &b[0])),
            ],
            field: f.clone(),
        })
    }

    /// Check if `rhs` is a scalar multiple of `self` or vice versa,
    /// i.e. if all 2x2 minors of the pair vanish. The zero vector is parallel
    /// to every vector.
    pub fn is_parallel(&self, rhs: &Self) -> Result<bool, MatrixError> {
        if self.data.len() != rhs.data.len() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.data.len(), 1),
                found: (rhs.data.len(), 1),
            });
        }

        let f = &self.field;
        let (a, b) = (&self.data, &rhs.data);
        for i in 0..a.len() {
            for j in i + 1..a.len() {
                let minor = f.sub(&f.mul(&a[i], &b[j]), &f.mul(&a[j], &b[i]));
                if !F::is_zero(&minor) {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }
}

impl<F: Field> Vector<F> {
    /// The Euclidean length, if its square root exists in the field.
    pub fn norm(&self) -> Option<F::Element> {
        self.field.sqrt(&self.norm_squared())
    }
}

impl<F: Ring> Mul<F::Element> for Vector<F> {
    type Output = Vector<F>;

    fn mul(mut self, rhs: F::Element) -> Self::Output {
        for e in &mut self.data {
            self.field.mul_assign(e, &rhs);
        }
        self
    }
}

impl<F: Ring> Mul<F::Element> for &Vector<F> {
    type Output = Vector<F>;

    fn mul(self, rhs: F::Element) -> Self::Output {
        self.scale(&rhs)
    }
}

impl<F: Ring> Index<u32> for Vector<F> {
    type Output = F::Element;

    /// Get the `i`th entry of the vector.
    #[inline]
    fn index(&self, index: u32) -> &Self::Output {
        &self.data[index as usize]
    }
}

impl<F: Ring> IndexMut<u32> for Vector<F> {
    /// Get the `i`th entry of the vector.
    #[inline]
    fn index_mut(&mut self, index: u32) -> &mut F::Element {
        &mut self.data[index as usize]
    }
}

impl<F: Ring> Display for Vector<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        VectorPrinter::new(self).fmt(f)
    }
}

impl<F: Ring> Add<&Vector<F>> for &Vector<F> {
    type Output = Vector<F>;

    /// Add two vectors.
    fn add(self, rhs: &Vector<F>) -> Self::Output {
        let mut m = self.clone();
        m += rhs;
        m
    }
}

impl<F: Ring> AddAssign<&Vector<F>> for Vector<F> {
    /// Add two vectors in place.
    fn add_assign(&mut self, rhs: &Vector<F>) {
        if self.data.len() != rhs.data.len() {
            panic!(
                "Cannot add vectors of different dimensions: {} vs {}",
                self.data.len(),
                rhs.data.len()
            );
        }

        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            self.field.add_assign(a, b);
        }
    }
}

impl<F: Ring> Sub<&Vector<F>> for &Vector<F> {
    type Output = Vector<F>;

    /// Subtract two vectors.
    fn sub(self, rhs: &Vector<F>) -> Self::Output {
        let mut m = self.clone();
        m -= rhs;
        m
    }
}

impl<F: Ring> SubAssign<&Vector<F>> for Vector<F> {
    fn sub_assign(&mut self, rhs: &Vector<F>) {
        if self.data.len() != rhs.data.len() {
            panic!(
                "Cannot subtract vectors of different dimensions: {} vs {}",
                self.data.len(),
                rhs.data.len()
            );
        }

        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            self.field.sub_assign(a, b);
        }
    }
}

impl<F: Ring> Neg for Vector<F> {
    type Output = Vector<F>;

    /// Negate each entry of the vector.
    fn neg(mut self) -> Self::Output {
        for e in &mut self.data {
            *e = self.field.neg(e);
        }

        self
    }
}

impl<F: Ring> Neg for &Vector<F> {
    type Output = Vector<F>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

/// A matrix with entries that are elements of a field `F`, stored in row-major order.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Matrix<F: Ring> {
    pub(crate) data: Vec<F::Element>,
    pub(crate) nrows: u32,
    pub(crate) ncols: u32,
    pub(crate) field: F,
}

impl<F: Ring> Matrix<F> {
    /// Create a new zeroed matrix with `nrows` rows and `ncols` columns.
    pub fn new(nrows: u32, ncols: u32, field: F) -> Matrix<F> {
        Matrix {
            data: (0..nrows as usize * ncols as usize)
                .map(|_| field.zero())
                .collect(),
            nrows,
            ncols,
            field,
        }
    }

    /// Create a new square identity matrix.
    pub fn identity(nrows: u32, field: F) -> Matrix<F> {
        Matrix::rectangular_identity(nrows, nrows, field)
    }

    /// Create a matrix with ones on the main diagonal and zeros elsewhere.
    pub fn rectangular_identity(nrows: u32, ncols: u32, field: F) -> Matrix<F> {
        let mut m = Matrix::new(nrows, ncols, field);
        for i in 0..nrows.min(ncols) {
            m[(i, i)] = m.field.one();
        }
        m
    }

    /// Convert a linear representation of a matrix to a `Matrix`.
    pub fn from_linear(
        data: Vec<F::Element>,
        nrows: u32,
        ncols: u32,
        field: F,
    ) -> Result<Matrix<F>, MatrixError> {
        if data.len() == nrows as usize * ncols as usize {
            Ok(Matrix {
                data,
                nrows,
                ncols,
                field,
            })
        } else {
            Err(MatrixError::InvalidLength {
                len: data.len(),
                nrows: nrows as usize,
                ncols: ncols as usize,
            })
        }
    }

    /// Create a new matrix from a 2-dimensional vector of scalars.
    pub fn from_nested_vec(
        matrix: Vec<Vec<F::Element>>,
        field: F,
    ) -> Result<Matrix<F>, MatrixError> {
        let nrows = matrix.len();
        let cols = matrix.first().map(|r| r.len()).unwrap_or(0);

        let mut data = Vec::with_capacity(nrows * cols);
        for d in matrix {
            if d.len() != cols {
                return Err(MatrixError::NotRectangular);
            }

            data.extend(d);
        }

        Ok(Matrix {
            nrows: nrows as u32,
            ncols: cols as u32,
            data,
            field,
        })
    }

    /// Create a matrix whose rows are the given vectors.
    pub fn from_rows(rows: &[Vector<F>], field: F) -> Result<Matrix<F>, MatrixError> {
        Matrix::from_nested_vec(rows.iter().map(|r| r.data.clone()).collect(), field)
    }

    /// Create a matrix whose columns are the given vectors.
    pub fn from_columns(cols: &[Vector<F>], field: F) -> Result<Matrix<F>, MatrixError> {
        Ok(Matrix::from_rows(cols, field)?.transpose())
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows as usize
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols as usize
    }

    /// Return the number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Return the field of the matrix entries.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Return the entries in row-major order.
    pub fn as_slice(&self) -> &[F::Element] {
        &self.data
    }

    /// Return the position of entry `(row, col)` in the row-major storage.
    #[inline]
    pub fn linear_position(&self, row: u32, col: u32) -> usize {
        row as usize * self.ncols as usize + col as usize
    }

    /// Return the `(row, col)` coordinate of the entry at `pos` in the row-major storage.
    #[inline]
    pub fn grid_coordinate(&self, pos: usize) -> (u32, u32) {
        (
            (pos / self.ncols as usize) as u32,
            (pos % self.ncols as usize) as u32,
        )
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> Chunks<'_, F::Element> {
        self.data.chunks(self.ncols.max(1) as usize)
    }

    /// Get row `i`.
    pub fn row(&self, i: u32) -> &[F::Element] {
        &self.data[self.linear_position(i, 0)..self.linear_position(i + 1, 0)]
    }

    /// Get a copy of column `j`.
    pub fn col(&self, j: u32) -> Vec<F::Element> {
        (0..self.nrows).map(|i| self[(i, j)].clone()).collect()
    }

    pub fn row_vector(&self, i: u32) -> Vector<F> {
        Vector::new(self.row(i).to_vec(), self.field.clone())
    }

    pub fn col_vector(&self, j: u32) -> Vector<F> {
        Vector::new(self.col(j), self.field.clone())
    }

    /// Return all rows as vectors.
    pub fn rows(&self) -> Vec<Vector<F>> {
        (0..self.nrows).map(|i| self.row_vector(i)).collect()
    }

    /// Return true iff every entry in the matrix is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(F::is_zero)
    }

    /// Return true iff the matrix has ones on the main diagonal and zeros elsewhere.
    /// Rectangular matrices are allowed.
    pub fn is_identity(&self) -> bool {
        self.data.iter().enumerate().all(|(pos, e)| {
            let (r, c) = self.grid_coordinate(pos);
            if r == c {
                self.field.is_one(e)
            } else {
                F::is_zero(e)
            }
        })
    }

    /// Return the transpose of the matrix.
    pub fn transpose(&self) -> Matrix<F> {
        let mut m = Matrix::new(self.ncols, self.nrows, self.field.clone());
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                m[(j, i)] = self[(i, j)].clone();
            }
        }
        m
    }

    /// Return the matrix without row `row` and column `col`.
    pub fn minor(&self, row: u32, col: u32) -> Matrix<F> {
        assert!(
            row < self.nrows && col < self.ncols,
            "Minor ({},{}) out of bounds for a ({},{}) matrix",
            row,
            col,
            self.nrows,
            self.ncols
        );

        let data = self
            .data
            .iter()
            .enumerate()
            .filter(|(pos, _)| {
                let (r, c) = self.grid_coordinate(*pos);
                r != row && c != col
            })
            .map(|(_, e)| e.clone())
            .collect();

        Matrix {
            data,
            nrows: self.nrows - 1,
            ncols: self.ncols - 1,
            field: self.field.clone(),
        }
    }

    /// Return a copy of the matrix with row `i` replaced by `v`.
    pub fn replace_row(&self, i: u32, v: &Vector<F>) -> Result<Matrix<F>, MatrixError> {
        if v.dim() != self.ncols() {
            return Err(MatrixError::DimensionMismatch {
                expected: (1, self.ncols()),
                found: (1, v.dim()),
            });
        }

        let mut m = self.clone();
        for (j, e) in v.data.iter().enumerate() {
            m[(i, j as u32)] = e.clone();
        }
        Ok(m)
    }

    /// Return a copy of the matrix with column `j` replaced by `v`.
    pub fn replace_col(&self, j: u32, v: &Vector<F>) -> Result<Matrix<F>, MatrixError> {
        if v.dim() != self.nrows() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.nrows(), 1),
                found: (v.dim(), 1),
            });
        }

        let mut m = self.clone();
        for (i, e) in v.data.iter().enumerate() {
            m[(i as u32, j)] = e.clone();
        }
        Ok(m)
    }

    /// Split the matrix into the columns before `col` and the columns from `col` onwards.
    pub fn split_at_col(&self, col: u32) -> (Matrix<F>, Matrix<F>) {
        assert!(col <= self.ncols, "Column {} out of bounds", col);

        let mut left = Vec::with_capacity(self.nrows as usize * col as usize);
        let mut right = Vec::with_capacity(self.nrows as usize * (self.ncols - col) as usize);
        for r in self.row_iter().take(self.nrows as usize) {
            left.extend_from_slice(&r[..col as usize]);
            right.extend_from_slice(&r[col as usize..]);
        }

        (
            Matrix {
                data: left,
                nrows: self.nrows,
                ncols: col,
                field: self.field.clone(),
            },
            Matrix {
                data: right,
                nrows: self.nrows,
                ncols: self.ncols - col,
                field: self.field.clone(),
            },
        )
    }

    /// Append `b` as an extra column.
    pub fn augment(&self, b: &Vector<F>) -> Result<Matrix<F>, MatrixError> {
        if b.dim() != self.nrows() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.nrows(), 1),
                found: (b.dim(), 1),
            });
        }

        let mut data = Vec::with_capacity(self.data.len() + b.dim());
        for (i, e) in b.data.iter().enumerate() {
            data.extend_from_slice(self.row(i as u32));
            data.push(e.clone());
        }

        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols + 1,
            field: self.field.clone(),
        })
    }

    /// Swap rows `i` and `j` in place.
    pub(crate) fn swap_rows(&mut self, i: u32, j: u32) {
        if i == j {
            return;
        }

        for l in 0..self.ncols {
            let (a, b) = (self.linear_position(i, l), self.linear_position(j, l));
            self.data.swap(a, b);
        }
    }

    /// Multiply the scalar `e` to each entry of the matrix.
    pub fn mul_scalar(&self, e: &F::Element) -> Matrix<F> {
        Matrix {
            data: self.data.iter().map(|ee| self.field.mul(ee, e)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field: self.field.clone(),
        }
    }

    /// Compute `A * x`.
    pub fn mul_vec(&self, x: &Vector<F>) -> Result<Vector<F>, MatrixError> {
        if x.dim() != self.ncols() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.ncols(), 1),
                found: (x.dim(), 1),
            });
        }

        let data = (0..self.nrows)
            .map(|i| {
                let mut sum = self.field.zero();
                for (a, b) in self.row(i).iter().zip(&x.data) {
                    self.field.add_mul_assign(&mut sum, a, b);
                }
                sum
            })
            .collect();

        Ok(Vector::new(data, self.field.clone()))
    }

    /// Multiply entry `(i,j)` by `(-1)^(i+j)`.
    pub fn cofactor(&self) -> Matrix<F> {
        let mut m = self.clone();
        for (pos, e) in m.data.iter_mut().enumerate() {
            let (r, c) = self.grid_coordinate(pos);
            if (r + c) % 2 == 1 {
                *e = self.field.neg(e);
            }
        }
        m
    }
}

impl<F: Field> Matrix<F> {
    /// The matrix of minor determinants: entry `(i,j)` is the determinant of
    /// [Matrix::minor] `(i,j)`.
    pub fn minor_matrix(&self) -> Result<Matrix<F>, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                nrows: self.nrows(),
                ncols: self.ncols(),
            });
        }

        let mut m = Matrix::new(self.nrows, self.ncols, self.field.clone());
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                m[(i, j)] = self.minor(i, j).determinant()?;
            }
        }
        Ok(m)
    }

    /// The transposed matrix of cofactors.
    pub fn adjugate(&self) -> Result<Matrix<F>, MatrixError> {
        Ok(self.minor_matrix()?.cofactor().transpose())
    }

    /// Compute the inverse of a square matrix as its adjugate divided by
    /// its determinant. A zero determinant yields [MatrixError::SingularMatrix].
    pub fn inv(&self) -> Result<Matrix<F>, MatrixError> {
        let det = self.determinant()?;
        if F::is_zero(&det) {
            return Err(MatrixError::SingularMatrix);
        }

        Ok(self.adjugate()?.mul_scalar(&self.field.inv(&det)))
    }

    /// Solve `A * x = b` with Cramer's rule: `x_i = det(A_i) / det(A)`, where `A_i`
    /// is `A` with column `i` replaced by `b`.
    pub fn solve_cramer(&self, b: &Vector<F>) -> Result<Vector<F>, MatrixError> {
        let det = self.determinant()?;
        if b.dim() != self.nrows() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.nrows(), 1),
                found: (b.dim(), 1),
            });
        }
        if F::is_zero(&det) {
            return Err(MatrixError::SingularMatrix);
        }

        let inv_det = self.field.inv(&det);
        let data = (0..self.ncols)
            .map(|i| {
                let d = self.replace_col(i, b)?.determinant()?;
                Ok(self.field.mul(&d, &inv_det))
            })
            .collect::<Result<Vec<_>, MatrixError>>()?;

        Ok(Vector::new(data, self.field.clone()))
    }

    /// Solve `A * x = b` as `x = A^-1 * b`.
    pub fn solve_from_inverse(&self, b: &Vector<F>) -> Result<Vector<F>, MatrixError> {
        self.inv()?.mul_vec(b)
    }
}

impl<F: Ring> Index<u32> for Matrix<F> {
    type Output = [F::Element];

    /// Get the `index`th row of the matrix.
    #[inline]
    fn index(&self, index: u32) -> &Self::Output {
        self.row(index)
    }
}

impl<F: Ring> Index<(u32, u32)> for Matrix<F> {
    type Output = F::Element;

    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index(&self, index: (u32, u32)) -> &Self::Output {
        &self.data[self.linear_position(index.0, index.1)]
    }
}

impl<F: Ring> IndexMut<(u32, u32)> for Matrix<F> {
    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index_mut(&mut self, index: (u32, u32)) -> &mut F::Element {
        let pos = self.linear_position(index.0, index.1);
        &mut self.data[pos]
    }
}

impl<F: Ring> Display for Matrix<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        MatrixPrinter::new(self).fmt(f)
    }
}

impl<F: Ring> Add<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Add two matrices.
    fn add(self, rhs: &Matrix<F>) -> Self::Output {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            panic!(
                "Cannot add matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            );
        }

        let mut m = Matrix::new(self.nrows, self.ncols, self.field.clone());
        for (c, (a, b)) in m.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
            *c = self.field.add(a, b);
        }

        m
    }
}

impl<F: Ring> Sub<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Subtract two matrices.
    fn sub(self, rhs: &Matrix<F>) -> Self::Output {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            panic!(
                "Cannot subtract matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            );
        }

        let mut m = Matrix::new(self.nrows, self.ncols, self.field.clone());
        for (c, (a, b)) in m.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
            *c = self.field.sub(a, b);
        }

        m
    }
}

impl<F: Ring> Mul<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Multiply two matrices.
    fn mul(self, rhs: &Matrix<F>) -> Self::Output {
        if self.ncols != rhs.nrows {
            panic!(
                "Cannot multiply matrices because of a dimension mismatch: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            );
        }

        let mut m = Matrix::new(self.nrows, rhs.ncols, self.field.clone());

        for i in 0..self.nrows {
            for j in 0..rhs.ncols {
                let sum = &mut m[(i, j)];
                for k in 0..self.ncols {
                    self.field.add_mul_assign(sum, &self[(i, k)], &rhs[(k, j)]);
                }
            }
        }

        m
    }
}

impl<F: Ring> Neg for Matrix<F> {
    type Output = Matrix<F>;

    /// Negate each entry of the matrix.
    fn neg(mut self) -> Self::Output {
        for e in &mut self.data {
            *e = self.field.neg(e);
        }

        self
    }
}

/// Errors that can occur when performing matrix operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The shapes of the operands do not fit, given as `(rows, cols)`.
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    NotSquare {
        nrows: usize,
        ncols: usize,
    },
    SingularMatrix,
    NotRectangular,
    InvalidLength {
        len: usize,
        nrows: usize,
        ncols: usize,
    },
    Empty,
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::DimensionMismatch { expected, found } => write!(
                f,
                "Dimension mismatch: expected ({},{}), found ({},{})",
                expected.0, expected.1, found.0, found.1
            ),
            MatrixError::NotSquare { nrows, ncols } => {
                write!(f, "The matrix is not square: ({},{})", nrows, ncols)
            }
            MatrixError::SingularMatrix => write!(f, "The matrix is singular"),
            MatrixError::NotRectangular => write!(f, "Matrix is not rectangular"),
            MatrixError::InvalidLength { len, nrows, ncols } => write!(
                f,
                "Data length does not match matrix dimensions: {} vs ({},{})",
                len, nrows, ncols
            ),
            MatrixError::Empty => write!(f, "The matrix has no columns"),
        }
    }
}

impl std::error::Error for MatrixError {}
