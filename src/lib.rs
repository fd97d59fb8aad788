pub mod analysis; // Report scalars: errors, regression, full-scale figures
pub mod dsp;
pub mod error;

pub use error::{InvalidInput, Result};
