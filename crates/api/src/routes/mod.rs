//! Route registration. One submodule per mounted resource.

pub mod health;
pub mod items;
