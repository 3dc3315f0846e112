//! Direct sparse solve through faer.
//!
//! The 5-point Laplacian is symmetric negative definite, so we factor its negation
//! with a sparse Cholesky decomposition and solve $(-A) x = -b$.

use faer::linalg::solvers::Solve;

use crate::error::{PlateError, PlateResult};

type SparseMatrixFaer = faer::sparse::SparseRowMat<usize, f64>;

pub fn nalgebra2faer(m: nas::CsrMatrix<f64>) -> SparseMatrixFaer {
  let nrows = m.nrows();
  let ncols = m.ncols();
  let (row_ptrs, col_indices, values) = m.disassemble();

  let symbolic =
    faer::sparse::SymbolicSparseRowMat::new_checked(nrows, ncols, row_ptrs, None, col_indices);
  faer::sparse::SparseRowMat::new(symbolic, values)
}

pub struct FaerCholesky {
  raw: faer::sparse::linalg::solvers::Llt<usize, f64>,
  size: usize,
}
impl FaerCholesky {
  /// Factors a symmetric positive definite matrix.
  pub fn new(a: nas::CsrMatrix<f64>) -> PlateResult<Self> {
    let size = a.nrows();
    if a.ncols() != size {
      return Err(PlateError::DimensionMismatch {
        what: "square matrix",
        expected: size,
        found: a.ncols(),
      });
    }
    let raw = nalgebra2faer(a)
      .sp_cholesky(faer::Side::Upper)
      .map_err(|err| {
        tracing::warn!("cholesky factorization failed: {err:?}");
        PlateError::SingularSystem { size }
      })?;
    Ok(Self { raw, size })
  }

  pub fn size(&self) -> usize {
    self.size
  }

  pub fn solve(&self, b: &na::DVector<f64>) -> PlateResult<na::DVector<f64>> {
    if b.len() != self.size {
      return Err(PlateError::DimensionMismatch {
        what: "right-hand side",
        expected: self.size,
        found: b.len(),
      });
    }
    let b = faer::Col::from_fn(b.nrows(), |i| b[i]);
    let x = self.raw.solve(b);
    let x = na::DVector::from_iterator(x.nrows(), x.iter().copied());
    if x.iter().any(|v| !v.is_finite()) {
      tracing::warn!("cholesky solve produced non-finite values");
      return Err(PlateError::SingularSystem { size: self.size });
    }
    Ok(x)
  }
}

/// Solves `A x = b` for a symmetric negative definite `A`.
pub fn solve_system(
  matrix: &nas::CsrMatrix<f64>,
  rhs: &na::DVector<f64>,
) -> PlateResult<na::DVector<f64>> {
  let size = matrix.nrows();
  if rhs.len() != size {
    return Err(PlateError::DimensionMismatch {
      what: "right-hand side",
      expected: size,
      found: rhs.len(),
    });
  }
  if size == 0 {
    return Ok(na::DVector::zeros(0));
  }

  let neg_matrix = -matrix;
  let neg_rhs = -rhs;
  FaerCholesky::new(neg_matrix)?.solve(&neg_rhs)
}
