//! Assembly of the 5-point finite-difference Laplacian on the interior grid.
//!
//! Row `k` of the system encodes
//! $T_(i-1,j) + T_(i+1,j) + T_(i,j-1) + T_(i,j+1) - 4 T_(i,j) = 0$
//! for the interior node `(i,j)` with index `k`.
//! Neighbors on the boundary are known and moved to the right-hand side.

use itertools::iproduct;

use crate::{
  config::{BoundaryTemps, Edge},
  error::{PlateError, PlateResult},
  grid::{InteriorGrid, Neighbor},
  sparse::SparseMatrix,
};

pub const STENCIL_CENTER: f64 = -4.0;
pub const STENCIL_NEIGHBOR: f64 = 1.0;

/// Compacted linear system `A x = b` for the interior temperatures.
#[derive(Debug, Clone)]
pub struct LaplaceSystem {
  pub matrix: nas::CsrMatrix<f64>,
  pub rhs: na::DVector<f64>,
}

impl LaplaceSystem {
  pub fn nunknowns(&self) -> usize {
    self.rhs.len()
  }

  /// Max-norm of `A x - b`.
  pub fn residual(&self, x: &na::DVector<f64>) -> PlateResult<f64> {
    if x.len() != self.nunknowns() {
      return Err(PlateError::DimensionMismatch {
        what: "solution vector",
        expected: self.nunknowns(),
        found: x.len(),
      });
    }
    if x.is_empty() {
      return Ok(0.0);
    }
    let ax = &self.matrix * x;
    Ok((ax - &self.rhs).amax())
  }
}

/// Accumulates the stencil into triplets and the boundary terms into `b`.
pub fn assemble_triplets(
  interior_n: usize,
  boundary: &BoundaryTemps,
) -> PlateResult<(SparseMatrix, na::DVector<f64>)> {
  if interior_n < 1 {
    return Err(PlateError::invalid(format!(
      "interior resolution {interior_n} leaves no unknowns"
    )));
  }
  boundary.validate()?;

  let grid = InteriorGrid::new(interior_n);
  let nnodes = grid.nnodes();
  let mut galmat = SparseMatrix::with_capacity(nnodes, nnodes, 5 * nnodes);
  let mut galvec = na::DVector::zeros(nnodes);

  for (i, j) in iproduct!(0..interior_n, 0..interior_n) {
    let k = grid.index(i, j);
    galmat.push(k, k, STENCIL_CENTER);
    for edge in Edge::ALL {
      match grid.neighbor(i, j, edge) {
        Neighbor::Interior(kn) => galmat.push(k, kn, STENCIL_NEIGHBOR),
        Neighbor::Boundary(edge) => galvec[k] -= boundary.edge(edge),
      }
    }
  }

  Ok((galmat, galvec))
}

pub fn assemble_laplace_system(
  interior_n: usize,
  boundary: &BoundaryTemps,
) -> PlateResult<LaplaceSystem> {
  let (galmat, rhs) = assemble_triplets(interior_n, boundary)?;
  let matrix = galmat.to_nalgebra_csr()?;
  tracing::debug!(
    "assembled {}x{} laplace system with {} nonzeros",
    matrix.nrows(),
    matrix.ncols(),
    matrix.nnz()
  );
  Ok(LaplaceSystem { matrix, rhs })
}
