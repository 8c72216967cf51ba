//! Sideways — a side-scrolling terminal shooter.
//!
//! - `compute`: deterministic per-frame simulation and the session mode machine
//! - `wave`, `stars`: entity factories
//! - `input`: terminal events → `PlayerInput`
//! - `display`: draw lists, cell canvas, terminal presenter

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod input;
pub mod stars;
pub mod timing;
pub mod wave;
