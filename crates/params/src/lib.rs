//! Constant values for xkem cryptographic operations
//!
//! This crate provides the scheme parameters shared across the xkem workspace.

#![no_std]

pub mod traditional;
