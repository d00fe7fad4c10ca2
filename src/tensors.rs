//! Vectors, matrices and the algorithms that act on them.
//!
//! - [matrix]: storage, arithmetic and cofactor-based inversion.
//! - [echelon]: Gaussian elimination, echelon forms and determinants.
//! - [solve]: parametrized solutions of linear systems.
//! - [subspace]: linear and affine subspaces and their intersection.

pub mod echelon;
pub mod matrix;
pub mod solve;
pub mod subspace;
