//! Solutions of linear systems in parametrized form.
//!
//! The solver brings the augmented matrix `[A|b]` into reduced row echelon form and
//! then performs back-substitution symbolically: every variable is expressed as a
//! constant plus a linear combination of free parameters. The result is either no
//! solution, a single point, or an affine subspace spanned by one direction per free
//! parameter.

use std::fmt::{self, Display};

use ahash::HashMap;
use tracing::{debug, instrument};

use super::{
    matrix::{Matrix, MatrixError, Vector},
    subspace::{AffineSubspace, Subspace},
};
use crate::{
    domains::{Field, Ring},
    printer::PrintOptions,
};

/// The solution set of a linear system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution<F: Ring> {
    /// The system is inconsistent.
    None,
    /// The system has exactly one solution.
    Point(Vector<F>),
    /// The solutions form an affine subspace. A space without directions is a single point.
    Space(AffineSubspace<F>),
}

impl<F: Ring> Solution<F> {
    pub fn is_none(&self) -> bool {
        matches!(self, Solution::None)
    }

    /// Return the solution if it is a single point.
    /// A space without directions is not considered a point; use [Solution::into_point] first.
    pub fn as_point(&self) -> Option<&Vector<F>> {
        match self {
            Solution::Point(p) => Some(p),
            _ => None,
        }
    }

    /// The number of free parameters, or `None` if there is no solution.
    pub fn dimension(&self) -> Option<usize> {
        match self {
            Solution::None => None,
            Solution::Point(_) => Some(0),
            Solution::Space(s) => Some(s.subspace().directions().len()),
        }
    }

    /// Turn a space without directions into a point.
    pub fn into_point(self) -> Solution<F> {
        match self {
            Solution::Space(s) if s.subspace().directions().is_empty() => {
                Solution::Point(s.into_offset())
            }
            s => s,
        }
    }
}

impl<F: Ring> Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::None => f.write_str("no solution"),
            Solution::Point(p) => p.fmt(f),
            Solution::Space(s) => s.fmt(f),
        }
    }
}

/// A symbol in a solution component: the constant term or a free parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Parameter {
    Constant,
    Free(u32),
}

/// A variable written as a linear combination of the constant and the free parameters.
/// Only non-zero coefficients are stored.
#[derive(Clone, Debug)]
struct SolutionComponent<F: Ring> {
    terms: HashMap<Parameter, F::Element>,
}

impl<F: Ring> SolutionComponent<F> {
    /// The variable is its own free parameter: `x_i = t_i`.
    fn free(index: u32, field: &F) -> Self {
        let mut terms = HashMap::default();
        terms.insert(Parameter::Free(index), field.one());
        SolutionComponent { terms }
    }

    fn constant(value: F::Element) -> Self {
        let mut terms = HashMap::default();
        if !F::is_zero(&value) {
            terms.insert(Parameter::Constant, value);
        }
        SolutionComponent { terms }
    }

    /// Compute `self += factor * other`.
    fn add_scaled(&mut self, other: &Self, factor: &F::Element, field: &F) {
        for (p, v) in &other.terms {
            let e = self.terms.entry(*p).or_insert_with(|| field.zero());
            field.add_mul_assign(e, v, factor);
            if F::is_zero(e) {
                self.terms.remove(p);
            }
        }
    }

    fn coefficient(&self, p: Parameter, field: &F) -> F::Element {
        self.terms.get(&p).cloned().unwrap_or_else(|| field.zero())
    }
}

/// A linear system `A * x = b`, stored as the matrix `[A|b]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentedMatrix<F: Ring> {
    matrix: Matrix<F>,
}

impl<F: Ring> AugmentedMatrix<F> {
    /// Create the system `a * x = b`.
    pub fn new(a: &Matrix<F>, b: &Vector<F>) -> Result<AugmentedMatrix<F>, MatrixError> {
        Ok(AugmentedMatrix {
            matrix: a.augment(b)?,
        })
    }

    /// Interpret the last column of `matrix` as the right-hand side.
    pub fn from_matrix(matrix: Matrix<F>) -> Result<AugmentedMatrix<F>, MatrixError> {
        if matrix.ncols == 0 {
            return Err(MatrixError::Empty);
        }

        Ok(AugmentedMatrix { matrix })
    }

    pub(crate) fn from_parts(matrix: Matrix<F>) -> AugmentedMatrix<F> {
        debug_assert!(matrix.ncols > 0);
        AugmentedMatrix { matrix }
    }

    /// The number of unknowns.
    pub fn nvars(&self) -> usize {
        self.matrix.ncols() - 1
    }

    pub fn as_matrix(&self) -> &Matrix<F> {
        &self.matrix
    }

    /// The matrix `A`.
    pub fn coefficients(&self) -> Matrix<F> {
        self.matrix.split_at_col(self.matrix.ncols - 1).0
    }

    /// The right-hand side `b`.
    pub fn constants(&self) -> Vector<F> {
        self.matrix.col_vector(self.matrix.ncols - 1)
    }

    /// Format the system with custom [PrintOptions], one `a b | c` line per equation.
    pub fn format<W: fmt::Write>(&self, opts: &PrintOptions, f: &mut W) -> fmt::Result {
        let nvars = self.nvars();
        for i in 0..self.matrix.nrows {
            if i > 0 {
                f.write_char('\n')?;
            }

            for (j, e) in self.matrix.row(i).iter().enumerate() {
                if j == nvars {
                    f.write_str("| ")?;
                }
                self.matrix.field.format(e, opts, f)?;
                if j < nvars {
                    f.write_char(' ')?;
                }
            }
        }
        Ok(())
    }
}

impl<F: Field> AugmentedMatrix<F> {
    /// Check if the system is consistent, i.e. if `A` and `[A|b]` have the same rank.
    pub fn solution_exists(&self) -> bool {
        self.coefficients().rank() == self.matrix.rank()
    }

    /// Compute the complete solution set of the system.
    #[instrument(level = "debug", skip_all, fields(nrows = self.matrix.nrows(), nvars = self.nvars()))]
    pub fn solution(&self) -> Solution<F> {
        let field = &self.matrix.field;
        let nvars = self.matrix.ncols - 1;

        let reduced = self.matrix.reduced_row_echelon_form();
        let (a, x) = reduced.split_at_col(nvars);

        let mut rank = 0;
        for r in 0..a.nrows {
            if a.row(r).iter().all(F::is_zero) {
                if !F::is_zero(&x.data[r as usize]) {
                    debug!(row = r, "inconsistent row");
                    return Solution::None;
                }
            } else {
                rank += 1;
            }
        }

        if a.nrows >= a.ncols && a.is_identity() {
            debug!("unique solution");
            return Solution::Point(Vector::new(
                x.data[..nvars as usize].to_vec(),
                field.clone(),
            ));
        }

        // Rows are processed bottom-up, so that every column to the right of a pivot
        // is resolved before it is substituted.
        let mut components: Vec<SolutionComponent<F>> = (0..nvars)
            .map(|i| SolutionComponent::free(i, field))
            .collect();
        for r in (0..a.nrows).rev() {
            let row = a.row(r);
            let Some(idx) = row.iter().position(|e| !F::is_zero(e)) else {
                continue;
            };

            let mut resolved = SolutionComponent::constant(x.data[r as usize].clone());
            for (c, v) in row.iter().enumerate().skip(idx + 1) {
                if !F::is_zero(v) {
                    resolved.add_scaled(&components[c], &field.neg(v), field);
                }
            }
            components[idx] = resolved;
        }

        let offset = Vector::new(
            components
                .iter()
                .map(|c| c.coefficient(Parameter::Constant, field))
                .collect(),
            field.clone(),
        );
        let directions = (0..nvars)
            .map(|j| {
                Vector::new(
                    components
                        .iter()
                        .map(|c| c.coefficient(Parameter::Free(j), field))
                        .collect(),
                    field.clone(),
                )
            })
            .collect();

        let subspace = Subspace::from_directions(directions);
        debug!(
            rank,
            free = subspace.directions().len(),
            "parametrized solution"
        );
        debug_assert_eq!(subspace.directions().len(), nvars as usize - rank);

        Solution::Space(AffineSubspace::from_parts(subspace, offset))
    }
}

impl<F: Ring> Display for AugmentedMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format(&PrintOptions::from_fmt(f), f)
    }
}

impl<F: Field> Matrix<F> {
    /// Solve `A * x = b`, where `A` is `self`, returning the complete solution set.
    #[instrument(skip_all, fields(nrows = self.nrows(), ncols = self.ncols()))]
    pub fn solve(&self, b: &Vector<F>) -> Result<Solution<F>, MatrixError> {
        Ok(AugmentedMatrix::new(self, b)?.solution())
    }
}
