//! Linear subspaces given by spanning sets, and affine subspaces that are
//! offset from the origin.

use std::fmt::{self, Display};

use tracing::{debug, instrument};

use super::{
    matrix::{Matrix, MatrixError, Vector},
    solve::{AugmentedMatrix, Solution},
};
use crate::domains::{Field, Ring};

/// The span of a set of direction vectors of equal dimension.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subspace<F: Ring> {
    directions: Vec<Vector<F>>,
}

impl<F: Ring> Subspace<F> {
    /// Create the span of `directions`. Zero vectors are dropped.
    pub fn new(directions: Vec<Vector<F>>) -> Result<Subspace<F>, MatrixError> {
        if let Some(first) = directions.first() {
            if let Some(d) = directions.iter().find(|d| d.dim() != first.dim()) {
                return Err(MatrixError::DimensionMismatch {
                    expected: (first.dim(), 1),
                    found: (d.dim(), 1),
                });
            }
        }

        Ok(Subspace::from_directions(directions))
    }

    /// Create the span of `directions`, which must have equal dimension.
    pub(crate) fn from_directions(directions: Vec<Vector<F>>) -> Subspace<F> {
        Subspace {
            directions: directions.into_iter().filter(|d| !d.is_zero()).collect(),
        }
    }

    /// The zero-dimensional subspace.
    pub fn zero() -> Subspace<F> {
        Subspace { directions: vec![] }
    }

    /// The spanning set. It contains no zero vectors but may be linearly dependent.
    pub fn directions(&self) -> &[Vector<F>] {
        &self.directions
    }

    /// Return the directions as the rows of a matrix.
    fn direction_rows(&self) -> Option<Matrix<F>> {
        let first = self.directions.first()?;
        // the directions share one dimension, so the rows are rectangular
        Matrix::from_rows(&self.directions, first.field.clone()).ok()
    }
}

impl<F: Field> Subspace<F> {
    /// Return a linearly independent spanning set: the non-zero rows of the row echelon
    /// form of the directions.
    pub fn basis(&self) -> Vec<Vector<F>> {
        match self.direction_rows() {
            Some(m) => m.row_space().directions,
            None => vec![],
        }
    }

    /// The number of vectors in a basis.
    pub fn dimension(&self) -> usize {
        self.direction_rows().map_or(0, |m| m.rank())
    }

    /// Check if `v` is a linear combination of the directions.
    pub fn contains(&self, v: &Vector<F>) -> Result<bool, MatrixError> {
        match self.direction_rows() {
            Some(m) => Ok(!m.transpose().solve(v)?.is_none()),
            None => Ok(v.is_zero()),
        }
    }
}

impl<F: Ring> Display for Subspace<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("span[")?;
        for (i, d) in self.directions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            d.fmt(f)?;
        }
        f.write_str("]")
    }
}

impl<F: Field> Matrix<F> {
    /// The span of the rows, given by the non-zero rows of the row echelon form.
    pub fn row_space(&self) -> Subspace<F> {
        let m = self.row_echelon_form();
        Subspace::from_directions(m.rows())
    }

    /// The span of the columns, given by the columns of `self` that
    /// contain a pivot in the echelon form.
    pub fn col_space(&self) -> Subspace<F> {
        Subspace::from_directions(
            self.pivot_columns()
                .into_iter()
                .map(|j| self.col_vector(j))
                .collect(),
        )
    }
}

impl<F: Field> Vector<F> {
    /// Check if the vectors are linearly independent. The empty set is independent.
    /// Vectors of different dimensions yield [MatrixError::DimensionMismatch].
    pub fn is_linearly_independent_set(vectors: &[Vector<F>]) -> Result<bool, MatrixError> {
        let s = Subspace::new(vectors.to_vec())?;
        Ok(s.directions.len() == vectors.len() && s.dimension() == vectors.len())
    }
}

/// An affine subspace `offset + span(directions)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AffineSubspace<F: Ring> {
    subspace: Subspace<F>,
    offset: Vector<F>,
}

impl<F: Ring> AffineSubspace<F> {
    /// Create `offset + subspace`. Every direction must have the dimension of `offset`.
    pub fn new(subspace: Subspace<F>, offset: Vector<F>) -> Result<AffineSubspace<F>, MatrixError> {
        if let Some(d) = subspace.directions.iter().find(|d| d.dim() != offset.dim()) {
            return Err(MatrixError::DimensionMismatch {
                expected: (offset.dim(), 1),
                found: (d.dim(), 1),
            });
        }

        Ok(AffineSubspace { subspace, offset })
    }

    pub(crate) fn from_parts(subspace: Subspace<F>, offset: Vector<F>) -> AffineSubspace<F> {
        AffineSubspace { subspace, offset }
    }

    /// The affine subspace that consists of the single point `p`.
    pub fn point(p: Vector<F>) -> AffineSubspace<F> {
        AffineSubspace::from_parts(Subspace::zero(), p)
    }

    /// The line `point + t * direction`.
    pub fn line(point: Vector<F>, direction: Vector<F>) -> Result<AffineSubspace<F>, MatrixError> {
        AffineSubspace::new(Subspace::new(vec![direction])?, point)
    }

    /// The line through `a` and `b`, with offset `a` and direction `a - b`.
    pub fn line_through(a: &Vector<F>, b: &Vector<F>) -> Result<AffineSubspace<F>, MatrixError> {
        if a.dim() != b.dim() {
            return Err(MatrixError::DimensionMismatch {
                expected: (a.dim(), 1),
                found: (b.dim(), 1),
            });
        }

        AffineSubspace::line(a.clone(), a - b)
    }

    /// The line `y = gradient * x + intercept` in the plane.
    pub fn line_from_gradient(
        gradient: F::Element,
        intercept: F::Element,
        field: F,
    ) -> AffineSubspace<F> {
        let direction = Vector::new(vec![field.one(), gradient], field.clone());
        let offset = Vector::new(vec![field.zero(), intercept], field);
        AffineSubspace::from_parts(Subspace::from_directions(vec![direction]), offset)
    }

    /// The line `x = c` in the plane.
    pub fn vertical_line(c: F::Element, field: F) -> AffineSubspace<F> {
        let direction = Vector::unit(2, 1, field.clone());
        let offset = Vector::new(vec![c, field.zero()], field);
        AffineSubspace::from_parts(Subspace::from_directions(vec![direction]), offset)
    }

    /// The line `y = c` in the plane.
    pub fn horizontal_line(c: F::Element, field: F) -> AffineSubspace<F> {
        let direction = Vector::unit(2, 0, field.clone());
        let offset = Vector::new(vec![field.zero(), c], field);
        AffineSubspace::from_parts(Subspace::from_directions(vec![direction]), offset)
    }

    pub fn offset(&self) -> &Vector<F> {
        &self.offset
    }

    pub fn into_offset(self) -> Vector<F> {
        self.offset
    }

    pub fn subspace(&self) -> &Subspace<F> {
        &self.subspace
    }

    /// The dimension of the space the subspace lives in.
    pub fn ambient_dimension(&self) -> usize {
        self.offset.dim()
    }

    /// Compute `sum_i coefficients[i] * directions[i]`.
    fn combine(&self, coefficients: &[F::Element]) -> Vector<F> {
        let mut v = self.offset.new_zero();
        for (d, c) in self.subspace.directions.iter().zip(coefficients) {
            if !F::is_zero(c) {
                v += &d.scale(c);
            }
        }
        v
    }

    /// Evaluate `offset + sum_i params[i] * directions[i]`.
    pub fn point_at(&self, params: &[F::Element]) -> Result<Vector<F>, MatrixError> {
        if params.len() != self.subspace.directions.len() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.subspace.directions.len(), 1),
                found: (params.len(), 1),
            });
        }

        Ok(&self.offset + &self.combine(params))
    }

    /// The system `[directions | offset]`, with one column per direction.
    pub fn augmented_matrix(&self) -> Result<AugmentedMatrix<F>, MatrixError> {
        let mut columns = self.subspace.directions.clone();
        columns.push(self.offset.clone());
        let m = Matrix::from_columns(&columns, self.offset.field.clone())?;
        Ok(AugmentedMatrix::from_parts(m))
    }

    /// The affine subspace spanned by the directions of `self` followed by the negated
    /// directions of `other`, offset by `self.offset - other.offset`.
    pub fn difference(&self, other: &AffineSubspace<F>) -> Result<AffineSubspace<F>, MatrixError> {
        if self.ambient_dimension() != other.ambient_dimension() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.ambient_dimension(), 1),
                found: (other.ambient_dimension(), 1),
            });
        }

        let directions = self
            .subspace
            .directions
            .iter()
            .cloned()
            .chain(other.subspace.directions.iter().map(|d| -d))
            .collect();

        Ok(AffineSubspace::from_parts(
            Subspace::from_directions(directions),
            &self.offset - &other.offset,
        ))
    }
}

impl<F: Field> AffineSubspace<F> {
    /// Intersect two affine subspaces.
    ///
    /// A point on both satisfies `self.offset + sum_i a_i d_i = other.offset + sum_j b_j e_j`,
    /// which is a linear system in the parameters `(a, b)`. Its solutions are mapped back
    /// through the directions of `self`.
    #[instrument(skip_all, fields(dim = self.ambient_dimension()))]
    pub fn intersection(&self, other: &AffineSubspace<F>) -> Result<Solution<F>, MatrixError> {
        let diff = self.difference(other)?;
        let system = AffineSubspace::from_parts(diff.subspace, -diff.offset).augmented_matrix()?;

        let k = self.subspace.directions.len();
        match system.solution() {
            Solution::None => {
                debug!("the subspaces do not intersect");
                Ok(Solution::None)
            }
            Solution::Point(p) => Ok(Solution::Point(self.point_at(&p.data[..k])?)),
            Solution::Space(s) => {
                let offset = self.point_at(&s.offset.data[..k])?;
                let directions = s
                    .subspace
                    .directions
                    .iter()
                    .map(|d| self.combine(&d.data[..k]))
                    .collect();

                let subspace = Subspace::from_directions(directions);
                if subspace.directions.is_empty() {
                    debug!("the intersection is a single point");
                }

                Ok(Solution::Space(AffineSubspace::from_parts(subspace, offset)))
            }
        }
    }

    /// Check if `point` lies in the affine subspace.
    pub fn contains(&self, point: &Vector<F>) -> Result<bool, MatrixError> {
        if point.dim() != self.ambient_dimension() {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.ambient_dimension(), 1),
                found: (point.dim(), 1),
            });
        }

        self.subspace.contains(&(point - &self.offset))
    }
}

impl<F: Ring> Display for AffineSubspace<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.offset.fmt(f)?;
        f.write_str(" + ")?;
        self.subspace.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::{AffineSubspace, Subspace};
    use crate::{
        domains::{
            float::RR,
            rational::{RationalField, Q},
        },
        tensors::{
            matrix::{Matrix, MatrixError, Vector},
            solve::Solution,
        },
    };

    fn v(data: &[i64]) -> Vector<RationalField> {
        Vector::new(data.iter().map(|&x| x.into()).collect(), Q)
    }

    #[test]
    fn intersect_lines() {
        let a = AffineSubspace::line(v(&[0, 0]), v(&[1, 1])).unwrap();
        let b = AffineSubspace::line(v(&[1, 0]), v(&[0, 1])).unwrap();

        assert_eq!(a.intersection(&b), Ok(Solution::Point(v(&[1, 1]))));
        assert_eq!(b.intersection(&a), Ok(Solution::Point(v(&[1, 1]))));
    }

    #[test]
    fn identical_lines() {
        let a = AffineSubspace::line_through(&v(&[1, 2]), &v(&[3, 5])).unwrap();

        let Ok(Solution::Space(s)) = a.intersection(&a) else {
            panic!("Expected a space");
        };
        assert_eq!(s.subspace().directions().len(), 1);
        assert!(s.subspace().directions()[0].is_parallel(&v(&[2, 3])).unwrap());
        assert!(a.contains(s.offset()).unwrap());
    }

    #[test]
    fn parallel_lines() {
        let a = AffineSubspace::horizontal_line(0.into(), Q);
        let b = AffineSubspace::horizontal_line(1.into(), Q);
        assert_eq!(a.intersection(&b), Ok(Solution::None));

        let c = AffineSubspace::vertical_line((1, 2).into(), Q);
        assert_eq!(
            a.intersection(&c),
            Ok(Solution::Point(Vector::new(vec![(1, 2).into(), 0.into()], Q)))
        );
    }

    #[test]
    fn gradient_lines() {
        // y = 2x + 1 and y = -x + 4 meet at (1, 3)
        let a = AffineSubspace::line_from_gradient(2.0.into(), 1.0.into(), RR);
        let b = AffineSubspace::line_from_gradient((-1.0).into(), 4.0.into(), RR);

        let p = a.intersection(&b).unwrap();
        assert_eq!(
            p.as_point(),
            Some(&Vector::new(vec![1.0.into(), 3.0.into()], RR))
        );
    }

    #[test]
    fn plane_and_line() {
        // the plane z = 1 and the z-axis
        let plane = AffineSubspace::new(
            Subspace::new(vec![v(&[1, 0, 0]), v(&[0, 1, 0])]).unwrap(),
            v(&[0, 0, 1]),
        )
        .unwrap();
        let axis = AffineSubspace::line(v(&[0, 0, 0]), v(&[0, 0, 1])).unwrap();

        assert_eq!(plane.intersection(&axis), Ok(Solution::Point(v(&[0, 0, 1]))));

        // two planes meet in a line
        let other = AffineSubspace::new(
            Subspace::new(vec![v(&[1, 0, 0]), v(&[0, 0, 1])]).unwrap(),
            v(&[0, 2, 0]),
        )
        .unwrap();
        let Ok(Solution::Space(line)) = plane.intersection(&other) else {
            panic!("Expected a space");
        };
        assert_eq!(line.subspace().dimension(), 1);
        assert!(line.subspace().directions()[0].is_parallel(&v(&[1, 0, 0])).unwrap());
        assert!(plane.contains(line.offset()).unwrap());
        assert!(other.contains(line.offset()).unwrap());
    }

    #[test]
    fn points() {
        let p = AffineSubspace::point(v(&[1, 2]));
        let q = AffineSubspace::point(v(&[1, 2]));
        let s = p.intersection(&q).unwrap();
        assert_eq!(s.dimension(), Some(0));
        assert_eq!(s.into_point(), Solution::Point(v(&[1, 2])));

        let r = AffineSubspace::point(v(&[0, 2]));
        assert!(p.intersection(&r).unwrap().is_none());
    }

    #[test]
    fn dimension_mismatch() {
        let a = AffineSubspace::line(v(&[0, 0]), v(&[1, 1])).unwrap();
        let b = AffineSubspace::line(v(&[0, 0, 0]), v(&[1, 1, 1])).unwrap();
        assert!(matches!(
            a.intersection(&b),
            Err(MatrixError::DimensionMismatch { .. })
        ));
        assert!(AffineSubspace::line(v(&[0, 0]), v(&[1, 1, 1])).is_err());
        assert!(Subspace::new(vec![v(&[1]), v(&[1, 2])]).is_err());
    }

    #[test]
    fn spaces() {
        let m = Matrix::from_nested_vec(
            vec![
                vec![1.into(), 2.into(), 0.into()],
                vec![2.into(), 4.into(), 1.into()],
                vec![3.into(), 6.into(), 1.into()],
            ],
            Q,
        )
        .unwrap();

        assert_eq!(m.row_space().directions(), &[v(&[1, 2, 0]), v(&[0, 0, 1])]);
        assert_eq!(m.col_space().directions(), &[v(&[1, 2, 3]), v(&[0, 1, 1])]);

        let s = Subspace::new(vec![v(&[1, 1, 0]), v(&[2, 2, 0]), v(&[0, 0, 0])]).unwrap();
        assert_eq!(s.directions().len(), 2);
        assert_eq!(s.dimension(), 1);
        assert_eq!(s.basis(), vec![v(&[1, 1, 0])]);
        assert!(s.contains(&v(&[3, 3, 0])).unwrap());
        assert!(!s.contains(&v(&[1, 0, 0])).unwrap());
        assert_eq!(s.to_string(), "span[{1,1,0}, {2,2,0}]");
    }

    #[test]
    fn linear_independence() {
        let independent = Vector::<RationalField>::is_linearly_independent_set;

        assert_eq!(independent(&[v(&[1, 0]), v(&[1, 1])]), Ok(true));
        assert_eq!(independent(&[v(&[1, 2]), v(&[2, 4])]), Ok(false));
        assert_eq!(independent(&[v(&[0, 0])]), Ok(false));
        assert_eq!(independent(&[]), Ok(true));
        assert!(independent(&[v(&[1]), v(&[1, 1])]).is_err());
    }

    #[test]
    fn display() {
        let a = AffineSubspace::line(v(&[1, 0]), v(&[0, 1])).unwrap();
        assert_eq!(a.to_string(), "{1,0} + span[{0,1}]");
        assert_eq!(a.point_at(&[3.into()]), Ok(v(&[1, 3])));
        assert!(a.point_at(&[]).is_err());
    }
}
