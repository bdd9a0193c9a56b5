//! Configuration types for Biome profiles.
//!
//! Responsibilities:
//! - Define the on-disk profile record and the merged, resolved profile.
//! - Define the closed set of value specifications a variable may declare.
//! - Define the environment map produced by an activation.
//!
//! Does NOT handle:
//! - Locating or parsing profile files (see `loader`).
//! - Producing variable values (see the engine crate).

mod environment;
mod profile;
mod value;

pub use environment::ConfiguredEnvironment;
pub use profile::{ProfileRecord, ResolvedProfile};
pub use value::{SecretPolicy, UnknownSpecification, ValueSpecification};
