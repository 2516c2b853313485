//! Slide metadata client library
//!
//! An async client for the header endpoint of a histology slide server,
//! plus the logic that reshapes a flat property dictionary into a grouped,
//! sortable table binding for a rendering widget.

pub mod classify;
pub mod error;
pub mod model;
pub mod table;

mod client;

pub use client::*;
pub use error::Error;
