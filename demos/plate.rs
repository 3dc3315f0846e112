//! Solves the default plate and reports the temperature range.
//! Rendering the field is left to an external heatmap tool.

use heatplate::{solve_plate, PlateConfig};

fn main() -> Result<(), heatplate::PlateError> {
  tracing_subscriber::fmt::init();

  let config = PlateConfig::default();
  let field = solve_plate(&config)?;

  let n = field.n();
  let center = field.get(n / 2, n / 2);
  tracing::info!(
    "solved {}x{} plate: min={:.3} max={:.3} center={:.3}",
    n + 1,
    n + 1,
    field.min(),
    field.max(),
    center
  );
  Ok(())
}
