//! Check pipeline components.
//!
//! - **discovery**: list the image file names of a directory
//! - **results**: classify each labeled file and build result records

pub mod discovery;
pub mod results;

pub use discovery::FileDiscovery;
pub use results::{build_results, classify_record, BuildOutcome, ResultBuilder};
