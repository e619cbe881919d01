//! ECS components for entities.
//!
//! This module groups the component types that bind the collision core
//! into the ECS world. Components define data only; behavior lives in
//! [`crate::systems`].
//!
//! Submodules overview:
//! - [`collider`] – observable collision box owned by an entity
//! - [`group`] – tag component for grouping entities by name
//! - [`rigidbody`] – simple kinematic body storing velocity

pub mod collider;
pub mod group;
pub mod rigidbody;
