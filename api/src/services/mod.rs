// delicia_api/src/services/mod.rs

//! Operations behind the HTTP routes and the seed importer. Each takes the
//! document store explicitly.

pub mod catalog;
pub mod contact;
pub mod importer;
