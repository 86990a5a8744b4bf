//! Compile-time configuration for the PL/0 front-end

pub mod constants;
