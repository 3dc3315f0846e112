extern crate nalgebra as na;
extern crate nalgebra_sparse as nas;

pub mod assemble;
pub mod config;
pub mod error;
pub mod field;
pub mod grid;
pub mod linalg;
pub mod plate;
pub mod sparse;

pub use config::{BoundaryTemps, Edge, PlateConfig};
pub use error::{PlateError, PlateResult};
pub use field::TemperatureField;
pub use plate::solve_plate;
