//! Output configuration and printers for vectors and matrices.

use std::fmt::{self, Display, Write};

use colored::Colorize;

use crate::{
    domains::Ring,
    tensors::{
        matrix::{Matrix, Vector},
        subspace::AffineSubspace,
    },
};

/// The overall print mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PrintMode {
    #[default]
    Plain,
    Latex,
    Mathematica,
}

impl PrintMode {
    pub fn is_latex(&self) -> bool {
        *self == PrintMode::Latex
    }
}

/// Various options for printing field elements, vectors, matrices and solutions.
#[derive(Debug, Copy, Clone)]
pub struct PrintOptions {
    pub mode: PrintMode,
    /// The number of digits after the decimal point for floating point entries.
    pub precision: Option<usize>,
    /// Print one row per line with aligned columns.
    pub pretty_matrix: bool,
    /// Color the names of free parameters.
    pub color_parameters: bool,
    /// The base name of free parameters, followed by their index.
    pub parameter_name: char,
}

impl PrintOptions {
    pub const fn new() -> Self {
        Self {
            mode: PrintMode::Plain,
            precision: None,
            pretty_matrix: false,
            color_parameters: true,
            parameter_name: 't',
        }
    }

    /// Print the output in a Mathematica-readable format.
    pub const fn mathematica() -> PrintOptions {
        Self {
            mode: PrintMode::Mathematica,
            color_parameters: false,
            ..Self::new()
        }
    }

    /// Print the output in a Latex input format.
    pub const fn latex() -> PrintOptions {
        Self {
            mode: PrintMode::Latex,
            color_parameters: false,
            ..Self::new()
        }
    }

    /// Print the output suitable for a file.
    pub const fn file() -> PrintOptions {
        Self {
            color_parameters: false,
            ..Self::new()
        }
    }

    pub fn from_fmt(f: &fmt::Formatter) -> PrintOptions {
        PrintOptions::default().update_with_fmt(f)
    }

    /// Take over the precision (`{:.3}`) and pretty printing (`{:#}`) of a formatter.
    pub fn update_with_fmt(mut self, f: &fmt::Formatter) -> Self {
        if let Some(p) = f.precision() {
            self.precision = Some(p);
        }

        if f.alternate() {
            self.pretty_matrix = true;
        }
        self
    }

    /// Format the name of free parameter `index`.
    pub fn format_parameter<W: Write>(&self, index: usize, f: &mut W) -> fmt::Result {
        let name = if self.mode.is_latex() {
            format!("{}_{{{}}}", self.parameter_name, index)
        } else {
            format!("{}{}", self.parameter_name, index)
        };

        if self.color_parameters {
            f.write_fmt(format_args!("{}", name.as_str().cyan()))
        } else {
            f.write_str(&name)
        }
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::new()
    }
}

fn format_entries<F: Ring>(
    field: &F,
    entries: &[F::Element],
    opts: &PrintOptions,
) -> Result<Vec<String>, fmt::Error> {
    entries
        .iter()
        .map(|e| {
            let mut s = String::new();
            field.format(e, opts, &mut s)?;
            Ok(s)
        })
        .collect()
}

/// A printer for vectors.
pub struct VectorPrinter<'a, F: Ring> {
    pub vector: &'a Vector<F>,
    pub opts: PrintOptions,
}

impl<'a, F: Ring> VectorPrinter<'a, F> {
    pub fn new(vector: &'a Vector<F>) -> VectorPrinter<'a, F> {
        VectorPrinter {
            vector,
            opts: PrintOptions::default(),
        }
    }

    pub fn new_with_options(vector: &'a Vector<F>, opts: PrintOptions) -> VectorPrinter<'a, F> {
        VectorPrinter { vector, opts }
    }
}

impl<'a, F: Ring> Display for VectorPrinter<'a, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opts = self.opts.update_with_fmt(f);
        let entries = format_entries(self.vector.field(), self.vector.as_slice(), &opts)?;

        match opts.mode {
            PrintMode::Latex => {
                f.write_str("\\begin{pmatrix}")?;
                f.write_str(&entries.join(" & "))?;
                f.write_str("\\end{pmatrix}")
            }
            PrintMode::Plain | PrintMode::Mathematica => {
                f.write_char('{')?;
                f.write_str(&entries.join(","))?;
                f.write_char('}')
            }
        }
    }
}

/// A printer for matrices.
pub struct MatrixPrinter<'a, F: Ring> {
    pub matrix: &'a Matrix<F>,
    pub opts: PrintOptions,
}

impl<'a, F: Ring> MatrixPrinter<'a, F> {
    pub fn new(matrix: &'a Matrix<F>) -> MatrixPrinter<'a, F> {
        MatrixPrinter {
            matrix,
            opts: PrintOptions::default(),
        }
    }

    pub fn new_with_options(matrix: &'a Matrix<F>, opts: PrintOptions) -> MatrixPrinter<'a, F> {
        MatrixPrinter { matrix, opts }
    }
}

impl<'a, F: Ring> Display for MatrixPrinter<'a, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opts = self.opts.update_with_fmt(f);
        let ncols = self.matrix.ncols().max(1);
        let entries = format_entries(self.matrix.field(), self.matrix.as_slice(), &opts)?;

        if opts.mode.is_latex() {
            f.write_str("\\begin{pmatrix}")?;
            for (ri, r) in entries.chunks(ncols).enumerate() {
                if ri > 0 {
                    f.write_str("\\\\")?;
                }
                f.write_str(&r.join(" & "))?;
            }
            return f.write_str("\\end{pmatrix}");
        }

        if opts.pretty_matrix {
            let mut widths = vec![0; ncols];
            for r in entries.chunks(ncols) {
                for (w, e) in widths.iter_mut().zip(r) {
                    *w = (*w).max(e.chars().count());
                }
            }

            for (ri, r) in entries.chunks(ncols).enumerate() {
                if ri > 0 {
                    f.write_char('\n')?;
                }
                f.write_char('[')?;
                for (e, w) in r.iter().zip(&widths) {
                    f.write_fmt(format_args!(" {:>w$}", e, w = *w))?;
                }
                f.write_str(" ]")?;
            }
            return Ok(());
        }

        f.write_char('{')?;
        for (ri, r) in entries.chunks(ncols).enumerate() {
            if ri > 0 {
                f.write_char(',')?;
            }
            f.write_char('{')?;
            f.write_str(&r.join(","))?;
            f.write_char('}')?;
        }
        f.write_char('}')
    }
}

/// A printer for affine subspaces in parametric form, `o + t0 d0 + t1 d1`.
pub struct AffineSubspacePrinter<'a, F: Ring> {
    pub space: &'a AffineSubspace<F>,
    pub opts: PrintOptions,
}

impl<'a, F: Ring> AffineSubspacePrinter<'a, F> {
    pub fn new(space: &'a AffineSubspace<F>) -> AffineSubspacePrinter<'a, F> {
        AffineSubspacePrinter {
            space,
            opts: PrintOptions::default(),
        }
    }

    pub fn new_with_options(
        space: &'a AffineSubspace<F>,
        opts: PrintOptions,
    ) -> AffineSubspacePrinter<'a, F> {
        AffineSubspacePrinter { space, opts }
    }
}

impl<'a, F: Ring> Display for AffineSubspacePrinter<'a, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opts = self.opts.update_with_fmt(f);

        VectorPrinter::new_with_options(self.space.offset(), opts).fmt(f)?;
        for (i, d) in self.space.subspace().directions().iter().enumerate() {
            f.write_str(" + ")?;
            opts.format_parameter(i, f)?;
            if opts.mode.is_latex() {
                f.write_char(' ')?;
            } else {
                f.write_char('*')?;
            }
            VectorPrinter::new_with_options(d, opts).fmt(f)?;
        }
        Ok(())
    }
}
