mod algorithm;
mod entropy;
mod iter;
mod text;

pub use algorithm::*;
pub use entropy::{GainEngine, GAIN_TOLERANCE};
pub use iter::*;
pub use text::*;
