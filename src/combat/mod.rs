//! Combat entities and battle resolution.

#![allow(unused_imports)]

pub mod battle;
pub mod mob;
pub mod spawn;

pub use battle::*;
pub use mob::*;
pub use spawn::*;
