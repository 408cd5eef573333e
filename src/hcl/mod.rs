//! HCL generation
//!
//! The core of the tool: a generic serializer from decoded API values to
//! Terraform configuration text. [`value::Value`] is the closed set of
//! shapes an attribute can take; [`writer`] renders ordered attribute
//! sequences as resource blocks.

pub mod value;
pub mod writer;

pub use value::Value;
pub use writer::{render_resource, write_attr};
