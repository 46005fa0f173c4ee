//! Request helpers.
//!
//! One function per operation, split by body concern. Every helper follows
//! the same protocol: parse the URI, build a fresh client from the given
//! configuration (see [`crate::client`]), issue the request, require
//! `200 OK`, then decode or relay the body. Non-200 responses are rejected
//! as [`HttpError::UnexpectedStatus`] without decoding the body.
//!
//! The crate root re-exports wrappers over these functions that read the
//! process-wide configuration.
//!
//! [`HttpError::UnexpectedStatus`]: crate::error::HttpError::UnexpectedStatus

mod bytes;
mod common;
mod download;
mod json;
mod multipart;
mod xml;

pub use bytes::get_body;
pub use download::download_file;
pub use json::{get_json, post_json, post_json_into};
pub use multipart::{FormField, post_file, post_multipart_form};
pub use xml::{get_xml, post_xml_into};
