//! Engine systems.
//!
//! This module groups the ECS systems that advance the simulation.
//!
//! Submodules overview
//! - [`collision`] – pairwise overlap checks and event emission
//! - [`movement`] – integrate collider positions from rigid body velocities
//! - [`time`] – update simulation time and delta

pub mod collision;
pub mod movement;
pub mod time;
