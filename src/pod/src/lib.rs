//! A3S Pod - Pod Document Decoding and Validation
//!
//! Turns an untrusted pod document into a typed, defaulted `Pod` and checks
//! it before it reaches VM provisioning:
//! - `decode_bytes` / `decode_file` parse, fill defaults and reject pods
//!   that cannot be used at all
//! - `Pod::validate` enforces catalog uniqueness and mount references

pub mod config;
pub mod decode;
pub mod error;
pub mod keyset;
pub mod random;
pub mod spec;
pub mod validate;

// Re-export commonly used types
pub use config::PodDefaults;
pub use decode::{
    decode_bytes, decode_bytes_with, decode_file, decode_file_with, decode_yaml_bytes,
};
pub use error::{ErrorKind, PodError, Result, ValidationError};
pub use keyset::{key_set, KeySet, Keyed};
pub use random::{random_string, Charset};
pub use spec::{Container, EnvVar, File, FileMount, Pod, Port, Resource, Volume, VolumeMount};

/// A3S Pod version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
