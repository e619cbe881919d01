//! Event types and observers used by the engine.
//!
//! Events provide a decoupled way for systems to communicate: the
//! collision detector triggers them, observers react without the detector
//! knowing who listens.
//!
//! Submodules:
//! - [`collision`] – collision notifications emitted by the detection system

pub mod collision;
