use crate::error::{PlateError, PlateResult};

/// Growable list of `(row, col, value)` triplets.
///
/// Entries with the same `(row, col)` are summed when compacted.
#[derive(Default, Debug, Clone)]
pub struct SparseMatrix {
  nrows: usize,
  ncols: usize,
  triplets: Vec<(usize, usize, f64)>,
}

impl SparseMatrix {
  pub fn zeros(nrows: usize, ncols: usize) -> Self {
    Self::new(nrows, ncols, Vec::new())
  }
  pub fn new(nrows: usize, ncols: usize, triplets: Vec<(usize, usize, f64)>) -> Self {
    Self {
      nrows,
      ncols,
      triplets,
    }
  }
  pub fn with_capacity(nrows: usize, ncols: usize, capacity: usize) -> Self {
    Self::new(nrows, ncols, Vec::with_capacity(capacity))
  }

  pub fn nrows(&self) -> usize {
    self.nrows
  }
  pub fn ncols(&self) -> usize {
    self.ncols
  }
  pub fn triplets(&self) -> &[(usize, usize, f64)] {
    &self.triplets
  }
  pub fn ntriplets(&self) -> usize {
    self.triplets.len()
  }

  pub fn push(&mut self, r: usize, c: usize, v: f64) {
    debug_assert!(r < self.nrows && c < self.ncols);
    if v != 0.0 {
      self.triplets.push((r, c, v));
    }
  }

  fn check_bounds(&self) -> PlateResult<()> {
    for &(r, c, _) in &self.triplets {
      if r >= self.nrows {
        return Err(PlateError::DimensionMismatch {
          what: "triplet row",
          expected: self.nrows,
          found: r,
        });
      }
      if c >= self.ncols {
        return Err(PlateError::DimensionMismatch {
          what: "triplet column",
          expected: self.ncols,
          found: c,
        });
      }
    }
    Ok(())
  }

  pub fn to_nalgebra_coo(&self) -> PlateResult<nas::CooMatrix<f64>> {
    self.check_bounds()?;
    let rows = self.triplets.iter().map(|t| t.0).collect();
    let cols = self.triplets.iter().map(|t| t.1).collect();
    let vals = self.triplets.iter().map(|t| t.2).collect();
    nas::CooMatrix::try_from_triplets(self.nrows, self.ncols, rows, cols, vals).map_err(|_| {
      PlateError::DimensionMismatch {
        what: "triplet matrix",
        expected: self.nrows,
        found: self.ncols,
      }
    })
  }

  /// Compacts the triplets into compressed-row form, summing duplicates.
  pub fn to_nalgebra_csr(&self) -> PlateResult<nas::CsrMatrix<f64>> {
    Ok((&self.to_nalgebra_coo()?).into())
  }

  pub fn to_nalgebra_dense(&self) -> PlateResult<na::DMatrix<f64>> {
    Ok((&self.to_nalgebra_coo()?).into())
  }
}
