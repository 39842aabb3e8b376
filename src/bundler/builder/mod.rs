//! Deploy orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that validates the
//! release root and builds each platform package.
//!
//! # Overview
//!
//! The bundler:
//! 1. Checks that every shared asset exists
//! 2. Ensures the releases directory exists
//! 3. Delegates each platform target to [`platform::bundle_project`](crate::bundler::platform::bundle_project)
//! 4. Returns a [`BundledArtifact`](crate::bundler::BundledArtifact) per archive written
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA-256 checksum calculation for archives
//! - [`orchestrator`] - Main [`Bundler`] struct
//! - [`validation`] - Shared asset presence checks

mod checksum;
mod orchestrator;
mod validation;

pub use checksum::calculate_sha256;
pub use orchestrator::Bundler;
pub use validation::validate_inputs;
