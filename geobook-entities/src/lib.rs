#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # geobook-entities
//!
//! Reusable, agnostic domain entities for Geobook.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod address;
pub mod geo;
pub mod id;
