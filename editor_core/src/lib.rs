#![no_std]

//! # Editor Core
//!
//! State holder and snapshot machinery for reversible editing.
//!
//! ## Philosophy
//!
//! - **No_std compatible**: Uses alloc but not std
//! - **Deterministic**: Same operation sequence => same editor state
//! - **Snapshots are owned copies**: A snapshot is never a live view into
//!   the editor it was captured from
//! - **Mechanism over policy**: The core provides capture/restore and the
//!   selection primitives; services decide what is undoable
//!
//! ## Design
//!
//! The core provides:
//! - Editor: the mutable state holder (buffer, cursor, selection width)
//! - Snapshot: an immutable point-in-time copy with a handle back-reference
//! - TextBuffer: line-based text storage with span-level primitives

extern crate alloc;

pub mod buffer;
pub mod editor;
pub mod snapshot;

pub use buffer::{Position, TextBuffer};
pub use editor::Editor;
pub use snapshot::Snapshot;
