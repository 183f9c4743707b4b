//! Internal utilities shared by the xkem crates

#![no_std]

pub mod constant_time;
