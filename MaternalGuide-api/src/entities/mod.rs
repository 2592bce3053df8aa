// Public entities for the MaternalGuide shell
// This module contains data structures that are shared across the application boundary

// Assessment view state and request bodies
pub mod assessment;

// Common entities for error handling
pub mod common;

// Conversions from domain entities to public entities
pub mod conversions;
