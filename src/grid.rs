use crate::config::Edge;

/// Position of an interior node in the system: its row `i` and column `j`
/// inside the `(n-1) x (n-1)` interior sub-grid.
pub type NodeCoords = (usize, usize);
/// Row/column index into the linear system.
pub type SystemIdx = usize;

/// What lies one stencil step away from an interior node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
  Interior(SystemIdx),
  Boundary(Edge),
}

/// Row-major bijection between interior nodes and system indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteriorGrid {
  interior_n: usize,
}

impl InteriorGrid {
  pub fn new(interior_n: usize) -> Self {
    Self { interior_n }
  }

  pub fn interior_n(&self) -> usize {
    self.interior_n
  }
  pub fn nnodes(&self) -> usize {
    self.interior_n * self.interior_n
  }

  /// converts interior node coordinates to system index
  pub fn index(&self, i: usize, j: usize) -> SystemIdx {
    debug_assert!(i < self.interior_n && j < self.interior_n);
    i * self.interior_n + j
  }

  /// converts system index to interior node coordinates
  pub fn coords(&self, k: SystemIdx) -> NodeCoords {
    debug_assert!(k < self.nnodes());
    (k / self.interior_n, k % self.interior_n)
  }

  /// Stencil neighbor of `(i, j)` when stepping across towards `edge`.
  ///
  /// Stepping up decreases `i`, stepping left decreases `j`.
  pub fn neighbor(&self, i: usize, j: usize, edge: Edge) -> Neighbor {
    let last = self.interior_n - 1;
    let interior = match edge {
      Edge::Top => (i > 0).then(|| (i - 1, j)),
      Edge::Bottom => (i < last).then(|| (i + 1, j)),
      Edge::Left => (j > 0).then(|| (i, j - 1)),
      Edge::Right => (j < last).then(|| (i, j + 1)),
    };
    match interior {
      Some((ni, nj)) => Neighbor::Interior(self.index(ni, nj)),
      None => Neighbor::Boundary(edge),
    }
  }
}

/// Coordinate in [0, 1] of grid line `r` on a grid with `n` intervals.
pub fn node_coord(n: usize, r: usize) -> f64 {
  r as f64 / n as f64
}

#[cfg(test)]
mod test {
  use super::{node_coord, InteriorGrid, Neighbor};
  use crate::config::Edge;

  #[test]
  fn index_coords_roundtrip() {
    for interior_n in 1..=7 {
      let grid = InteriorGrid::new(interior_n);
      let mut seen = vec![false; grid.nnodes()];
      for i in 0..interior_n {
        for j in 0..interior_n {
          let k = grid.index(i, j);
          assert!(!seen[k], "index {k} hit twice");
          seen[k] = true;
          assert_eq!(grid.coords(k), (i, j));
        }
      }
      assert!(seen.iter().all(|&s| s));
    }
  }

  #[test]
  fn row_major_order() {
    let grid = InteriorGrid::new(3);
    assert_eq!(grid.index(0, 2), 2);
    assert_eq!(grid.index(1, 0), 3);
    assert_eq!(grid.coords(8), (2, 2));
  }

  #[test]
  fn neighbors_of_corner_and_center() {
    let grid = InteriorGrid::new(3);

    assert_eq!(grid.neighbor(0, 0, Edge::Top), Neighbor::Boundary(Edge::Top));
    assert_eq!(grid.neighbor(0, 0, Edge::Left), Neighbor::Boundary(Edge::Left));
    assert_eq!(grid.neighbor(0, 0, Edge::Bottom), Neighbor::Interior(3));
    assert_eq!(grid.neighbor(0, 0, Edge::Right), Neighbor::Interior(1));

    let center: Vec<_> = Edge::ALL.iter().map(|&e| grid.neighbor(1, 1, e)).collect();
    assert_eq!(
      center,
      vec![
        Neighbor::Interior(1),
        Neighbor::Interior(7),
        Neighbor::Interior(3),
        Neighbor::Interior(5),
      ]
    );
  }

  #[test]
  fn single_node_touches_all_edges() {
    let grid = InteriorGrid::new(1);
    for edge in Edge::ALL {
      assert_eq!(grid.neighbor(0, 0, edge), Neighbor::Boundary(edge));
    }
  }

  #[test]
  fn coords_span_unit_interval() {
    assert_eq!(node_coord(4, 0), 0.0);
    assert_eq!(node_coord(4, 2), 0.5);
    assert_eq!(node_coord(4, 4), 1.0);
  }
}
