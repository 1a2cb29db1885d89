#![doc = include_str!("../README.md")]

mod client;
mod config;
mod error;
mod product;
mod samples;

pub use client::*;
pub use config::*;
pub use error::*;
pub use product::*;
pub use samples::*;
