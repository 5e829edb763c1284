//! Public value types shared by the encoding model and the pipeline.

mod offsets;
mod params;
mod token;

pub use offsets::Offsets;
pub use params::{PaddingDirection, PaddingParams, PaddingStrategy, TruncationParams};
pub use token::Token;
