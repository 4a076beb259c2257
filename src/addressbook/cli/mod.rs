//! Terminal side of the binary: logging setup, config lookup and printing.
//! Nothing in here is part of the library API.

pub(crate) mod print;
pub(crate) mod setup;
