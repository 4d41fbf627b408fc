//! featurejson-codec - Type-preserving JSON codec for configuration properties
//!
//! This crate provides:
//! - [`PropertyCodec`] mapping [`TypedValue`](featurejson_core::TypedValue)s
//!   to tagged JSON keys and values and back
//! - [`TypeTag`] parsing and formatting of the `name:Tag` key suffix
//! - [`Report`] and [`Decoded`] for collecting decode diagnostics

mod codec;
mod report;
mod tag;

pub use codec::{CodecError, PropertyCodec, decode_scalar, encode_scalar};
pub use report::{Decoded, Diagnostic, Report, child_location};
pub use tag::{TypeTag, join_key, split_key};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CodecError, Decoded, Diagnostic, PropertyCodec, Report, TypeTag};
}
