#![cfg_attr(not(test), no_std)]

//! Board glue for the plotter: rendering, buttons, stick, indicators and display sink.

pub mod indicator;
pub mod input;
pub mod platform;
pub mod render;
