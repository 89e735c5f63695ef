mod builders;
mod mock_sinks;

pub use builders::*;
pub use mock_sinks::*;
