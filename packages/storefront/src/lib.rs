#![doc = include_str!("../README.md")]

pub mod components;

mod state;
pub use state::*;
