//! Data transfer objects that are not domain entities.

pub mod response;
