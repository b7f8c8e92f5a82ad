mod float;

pub use float::{Float32, Float64, FloatError};
