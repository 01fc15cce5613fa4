//! Host package for the workspace integration tests in `tests/`

pub use instantiator_core::*;
