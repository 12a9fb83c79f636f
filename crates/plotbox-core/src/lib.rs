#![cfg_attr(not(test), no_std)]

//! Platform-independent core of the function plotter: plot math, the interaction state
//! machine and the traits it uses to reach input and indicator hardware.

pub mod app;
pub mod indicator;
pub mod input;
pub mod plot;
pub mod render;
pub mod text;
