// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports to the viewer's collaborators.
//!
//! - [`port`]: Trait definitions the host implements (rendering engine,
//!   notification sink)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure adapters implement application layer ports
//! - The viewer and its runtime only talk to collaborators through ports

pub mod port;
