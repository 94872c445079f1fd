//! Infrastructure layer - concrete collaborators for the domain seams

pub mod environment;
pub mod locale_names;
pub mod sinks;
pub mod storage;
