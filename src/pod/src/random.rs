//! Random identifier generation.
//!
//! Identifiers are drawn from the OS random source and mapped onto a fixed
//! alphabet by remainder, so symbols are only roughly uniform when the
//! alphabet size does not divide 256. Use these for names, never for secrets.

use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PodError, Result};

const ALPHANUMERIC: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ALPHABETIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const NUMERIC: &[u8] = b"0123456789";

/// Alphabet used for a generated identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Digits and lowercase letters (36 symbols).
    #[default]
    Alphanumeric,
    /// Upper and lowercase letters (52 symbols).
    Alphabetic,
    /// Digits only (10 symbols).
    Numeric,
}

impl Charset {
    /// Symbols of this charset.
    pub fn alphabet(&self) -> &'static [u8] {
        match self {
            Charset::Alphanumeric => ALPHANUMERIC,
            Charset::Alphabetic => ALPHABETIC,
            Charset::Numeric => NUMERIC,
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Charset::Alphanumeric => write!(f, "alphanumeric"),
            Charset::Alphabetic => write!(f, "alphabetic"),
            Charset::Numeric => write!(f, "numeric"),
        }
    }
}

impl std::str::FromStr for Charset {
    type Err = PodError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alphanumeric" | "alphanum" => Ok(Charset::Alphanumeric),
            "alphabetic" | "alpha" => Ok(Charset::Alphabetic),
            "numeric" | "number" => Ok(Charset::Numeric),
            other => Err(PodError::UnknownCharset(other.to_string())),
        }
    }
}

/// Generate a random string of exactly `size` symbols from `charset`.
pub fn random_string(size: usize, charset: Charset) -> Result<String> {
    let alphabet = charset.alphabet();
    let mut bytes = vec![0u8; size];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| PodError::RandomSource)?;

    Ok(bytes
        .iter()
        .map(|b| alphabet[*b as usize % alphabet.len()] as char)
        .collect())
}
