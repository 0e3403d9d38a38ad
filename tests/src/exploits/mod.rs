//! Attack simulations against `PUT /terms`.
//!
//! Every scenario asserts both the HTTP outcome and that stored terms are
//! unchanged.

pub mod forgery;
