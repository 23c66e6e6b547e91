#![no_std]

//! # Core Types
//!
//! This crate defines the identifier types used throughout the workspace.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Handles are typed and cannot be confused.
//! - **Type safety first**: An editor handle is not a session handle.
//! - **No ambient authority**: Identity never grants access; a handle must
//!   be resolved against a registry that owns the target.
//!
//! ## Key Types
//!
//! - [`EditorId`]: Handle for an editor registered in a session
//! - [`SessionId`]: Unique identifier for an editing session

#[cfg(test)]
extern crate alloc;

pub mod ids;

pub use ids::{EditorId, SessionId};
