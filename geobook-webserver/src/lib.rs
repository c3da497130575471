#[macro_use]
extern crate log;

mod adapters;
pub mod web;
