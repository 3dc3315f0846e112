//! Plate configuration: grid resolution and the four Dirichlet edge temperatures.

use crate::error::{PlateError, PlateResult};

/// Edge of the square plate.
///
/// Row 0 of the grid is the top edge, row n the bottom edge,
/// column 0 the left edge and column n the right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
  Top,
  Bottom,
  Left,
  Right,
}

impl Edge {
  pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// Constant temperature on each edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryTemps {
  pub top: f64,
  pub bottom: f64,
  pub left: f64,
  pub right: f64,
}

impl BoundaryTemps {
  pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
    Self {
      top,
      bottom,
      left,
      right,
    }
  }

  pub fn uniform(value: f64) -> Self {
    Self::new(value, value, value, value)
  }

  pub fn edge(&self, edge: Edge) -> f64 {
    match edge {
      Edge::Top => self.top,
      Edge::Bottom => self.bottom,
      Edge::Left => self.left,
      Edge::Right => self.right,
    }
  }

  pub fn validate(&self) -> PlateResult<()> {
    for edge in Edge::ALL {
      let value = self.edge(edge);
      if !value.is_finite() {
        return Err(PlateError::invalid(format!(
          "{edge:?} boundary temperature is not finite ({value})"
        )));
      }
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateConfig {
  /// Number of grid intervals per axis. The grid has `n + 1` points per axis.
  pub n: usize,
  pub boundary: BoundaryTemps,
}

impl PlateConfig {
  pub const MIN_RESOLUTION: usize = 2;

  pub fn new(n: usize, boundary: BoundaryTemps) -> Self {
    Self { n, boundary }
  }

  /// Number of unknowns per axis.
  ///
  /// Only meaningful for a validated configuration.
  pub fn interior_n(&self) -> usize {
    self.n.saturating_sub(1)
  }

  pub fn validate(&self) -> PlateResult<()> {
    if self.n < Self::MIN_RESOLUTION {
      return Err(PlateError::invalid(format!(
        "grid resolution n={} is below the minimum of {}",
        self.n,
        Self::MIN_RESOLUTION
      )));
    }
    self.boundary.validate()
  }
}

impl Default for PlateConfig {
  fn default() -> Self {
    Self::new(160, BoundaryTemps::new(50.0, -50.0, 200.0, 100.0))
  }
}
