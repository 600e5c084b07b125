//! delivcheck - A strict, deterministic compliance validator for electronic
//! photo delivery packages
//!
//! Checks an assembled delivery package model (folder layout, file naming,
//! metadata completeness, photo sequencing) against the government electronic
//! delivery standard and renders the outcome as a text report or a canonical
//! JSON document.

pub mod cli;
pub mod document;
pub mod engine;
pub mod model;
pub mod observability;
pub mod report;
pub mod rules;
