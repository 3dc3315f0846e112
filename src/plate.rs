//! Steady-state temperature of a square plate with fixed edge temperatures,
//! i.e. the Laplace equation $Delta T = 0$ on $[0,1]^2$ with Dirichlet data.

use crate::{
  assemble, config::PlateConfig, error::PlateResult, field, field::TemperatureField, linalg,
};

pub fn solve_plate(config: &PlateConfig) -> PlateResult<TemperatureField> {
  config.validate()?;

  let interior_n = config.interior_n();
  let span = tracing::info_span!("solve_plate", n = config.n, interior_n);
  let _enter = span.enter();

  let system = assemble::assemble_laplace_system(interior_n, &config.boundary)?;
  let x = linalg::solve_system(&system.matrix, &system.rhs).inspect_err(|err| {
    tracing::warn!("solve failed: {err}");
  })?;
  tracing::debug!("solved {} unknowns", x.len());

  field::reconstruct_field(interior_n, &config.boundary, &x)
}
