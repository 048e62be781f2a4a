//! Build-output discovery and path containment
//!
//! Everything that decides which directory gets served and whether a request
//! path stays inside it.

pub mod contain;
pub mod locate;
