//! The full temperature grid, boundary included.

use crate::{
  config::BoundaryTemps,
  error::{PlateError, PlateResult},
  grid::{self, InteriorGrid},
};

/// Temperatures on the `(n+1) x (n+1)` grid.
///
/// Row 0 is the top edge, row `n` the bottom edge,
/// column 0 the left edge and column `n` the right edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureField {
  values: na::DMatrix<f64>,
}

impl TemperatureField {
  /// Number of grid intervals per axis.
  pub fn n(&self) -> usize {
    self.values.nrows() - 1
  }
  pub fn npoints_axis(&self) -> usize {
    self.values.nrows()
  }

  pub fn get(&self, r: usize, c: usize) -> f64 {
    self.values[(r, c)]
  }
  pub fn row(&self, r: usize) -> Vec<f64> {
    self.values.row(r).iter().copied().collect()
  }
  pub fn column(&self, c: usize) -> Vec<f64> {
    self.values.column(c).iter().copied().collect()
  }

  pub fn as_matrix(&self) -> &na::DMatrix<f64> {
    &self.values
  }
  pub fn into_matrix(self) -> na::DMatrix<f64> {
    self.values
  }

  /// Row-major copy, the layout handed to renderers.
  pub fn to_row_major(&self) -> Vec<Vec<f64>> {
    (0..self.npoints_axis()).map(|r| self.row(r)).collect()
  }

  /// The solved interior block without the boundary.
  pub fn interior(&self) -> na::DMatrix<f64> {
    let interior_n = self.n() - 1;
    self.values.view((1, 1), (interior_n, interior_n)).into_owned()
  }

  /// Grid line positions in [0, 1], shared by both axes.
  pub fn coords(&self) -> Vec<f64> {
    let n = self.n();
    (0..=n).map(|r| grid::node_coord(n, r)).collect()
  }

  pub fn min(&self) -> f64 {
    self.values.min()
  }
  pub fn max(&self) -> f64 {
    self.values.max()
  }
}

/// Embeds the interior solution `x` and the edge temperatures into the full grid.
///
/// Rows are written before columns, so the four corners carry the
/// left/right temperature. This tie-break is arbitrary; the corners are
/// never read by the stencil.
pub fn reconstruct_field(
  interior_n: usize,
  boundary: &BoundaryTemps,
  x: &na::DVector<f64>,
) -> PlateResult<TemperatureField> {
  let grid = InteriorGrid::new(interior_n);
  if x.len() != grid.nnodes() {
    return Err(PlateError::DimensionMismatch {
      what: "interior solution",
      expected: grid.nnodes(),
      found: x.len(),
    });
  }

  let n = interior_n + 1;
  let mut values = na::DMatrix::zeros(n + 1, n + 1);

  values.row_mut(0).fill(boundary.top);
  values.row_mut(n).fill(boundary.bottom);
  values.column_mut(0).fill(boundary.left);
  values.column_mut(n).fill(boundary.right);

  for (k, &v) in x.iter().enumerate() {
    let (i, j) = grid.coords(k);
    values[(i + 1, j + 1)] = v;
  }

  Ok(TemperatureField { values })
}

#[cfg(test)]
mod test {
  use super::reconstruct_field;
  use crate::{config::BoundaryTemps, error::PlateError};

  #[test]
  fn interior_is_placed_row_major() {
    let boundary = BoundaryTemps::new(1.0, 2.0, 3.0, 4.0);
    let x = na::DVector::from_column_slice(&[10.0, 11.0, 12.0, 13.0]);
    let field = reconstruct_field(2, &boundary, &x).unwrap();

    assert_eq!(field.n(), 3);
    assert_eq!(field.get(1, 1), 10.0);
    assert_eq!(field.get(1, 2), 11.0);
    assert_eq!(field.get(2, 1), 12.0);
    assert_eq!(field.get(2, 2), 13.0);
    assert_eq!(
      field.interior(),
      na::DMatrix::from_row_slice(2, 2, &[10.0, 11.0, 12.0, 13.0])
    );
  }

  #[test]
  fn corners_take_column_value() {
    let boundary = BoundaryTemps::new(1.0, 2.0, 3.0, 4.0);
    let field = reconstruct_field(1, &boundary, &na::DVector::from_element(1, 0.0)).unwrap();
    assert_eq!(field.get(0, 0), 3.0);
    assert_eq!(field.get(2, 0), 3.0);
    assert_eq!(field.get(0, 2), 4.0);
    assert_eq!(field.get(2, 2), 4.0);
    assert_eq!(field.row(0), vec![3.0, 1.0, 4.0]);
    assert_eq!(field.row(2), vec![3.0, 2.0, 4.0]);
  }

  #[test]
  fn wrong_solution_length_is_reported() {
    let err = reconstruct_field(3, &BoundaryTemps::uniform(0.0), &na::DVector::zeros(8));
    assert_eq!(
      err.unwrap_err(),
      PlateError::DimensionMismatch {
        what: "interior solution",
        expected: 9,
        found: 8,
      }
    );
  }

  #[test]
  fn row_major_layout_and_coords() {
    let boundary = BoundaryTemps::new(1.0, 2.0, 3.0, 4.0);
    let field = reconstruct_field(1, &boundary, &na::DVector::from_element(1, 5.0)).unwrap();
    assert_eq!(
      field.to_row_major(),
      vec![
        vec![3.0, 1.0, 4.0],
        vec![3.0, 5.0, 4.0],
        vec![3.0, 2.0, 4.0],
      ]
    );
    assert_eq!(field.coords(), vec![0.0, 0.5, 1.0]);
    assert_eq!(field.min(), 1.0);
    assert_eq!(field.max(), 5.0);
  }
}
