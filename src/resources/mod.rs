//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `atlasstore` – texture atlas definitions keyed by string IDs
//! - `engineconfig` – INI-backed engine settings with safe defaults
//! - `worldtime` – simulation time and delta

pub mod atlasstore;
pub mod engineconfig;
pub mod worldtime;
