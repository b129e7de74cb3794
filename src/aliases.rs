// src/aliases.rs
//! secure-gate secret aliases used throughout the crate

pub use secure_gate::dynamic_alias;

dynamic_alias!(MasterKey, String); // root key for field re-encryption; zeroized on drop
