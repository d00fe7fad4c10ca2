//! Echelon is a linear algebra library over abstract fields.
//!
//! It brings matrices into (reduced) row echelon form, computes determinants,
//! and solves linear systems completely: the answer is either no solution, a single
//! point, or an affine subspace with one direction per free parameter. Affine
//! subspaces can be intersected, which reduces to solving a linear system.
//!
//! All algorithms are generic over the field. Use [Q](domains::rational::Q) for exact
//! rational arithmetic and [RR](domains::float::RR) for double precision floats.
//!
//! For example:
//!
//! ```
//! use echelon::{
//!     domains::rational::Q,
//!     tensors::{matrix::{Matrix, Vector}, solve::Solution},
//! };
//!
//! let a = Matrix::from_linear((1..=9i64).map(|i| i.into()).collect(), 3, 3, Q).unwrap();
//! let b = Vector::new(vec![1.into(), 2.into(), 3.into()], Q);
//!
//! match a.solve(&b).unwrap() {
//!     Solution::Space(s) => println!("x = {}", s),
//!     s => println!("{}", s),
//! }
//! ```

pub mod domains;
pub mod printer;
pub mod tensors;
