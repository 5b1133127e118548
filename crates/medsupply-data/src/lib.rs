//! Deterministic seed data and the in-memory repository for the MedSupply
//! dashboard.
//!
//! There is no database. At startup the server builds one [`Repository`]
//! from a [`SeedConfig`]; every generated value is a pure function of the
//! config, so restarting with the same config reproduces the same data.
//!
//! # Modules
//!
//! - [`config`] -- [`SeedConfig`], the `seed` section of the config file.
//! - [`hash`] -- FNV-1a and `splitmix64` helpers for derived fields.
//! - [`derived`] -- identity-derived fields shared with the stores.
//! - [`catalog`] -- fixed name lists, products and salary tables.
//! - [`generate`] -- one generator per entity array.
//! - [`repository`] -- the [`Repository`] itself.

pub mod catalog;
pub mod config;
pub mod derived;
pub mod generate;
pub mod hash;
pub mod repository;

pub use config::SeedConfig;
pub use repository::Repository;
