use thiserror::Error;

pub type PlateResult<T> = Result<T, PlateError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlateError {
  #[error("invalid configuration: {what}")]
  InvalidConfiguration { what: String },

  #[error("singular system: factorization of {size}x{size} matrix failed")]
  SingularSystem { size: usize },

  #[error("dimension mismatch in {what}: expected {expected}, found {found}")]
  DimensionMismatch {
    what: &'static str,
    expected: usize,
    found: usize,
  },
}

impl PlateError {
  pub fn invalid(what: impl Into<String>) -> Self {
    Self::InvalidConfiguration { what: what.into() }
  }
}
