use serde::{Deserialize, Serialize};

use crate::error::{PodError, Result};
use crate::random::Charset;
use crate::validate::is_valid_perm;

/// Default vCPU count for a pod that does not request one.
pub const DEFAULT_VCPU: u32 = 1;

/// Default memory size in MB for a pod that does not request one.
pub const DEFAULT_MEMORY_MB: u32 = 128;

/// Length of a generated pod name.
pub const DEFAULT_NAME_LENGTH: usize = 10;

/// Permission assigned to a file mount without one.
pub const DEFAULT_FILE_PERM: &str = "0755";

/// Maximum accepted pod document size (1 MiB).
pub const DEFAULT_MAX_DOCUMENT_SIZE: usize = 1024 * 1024;

/// Values the decoder injects into fields a pod document leaves unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodDefaults {
    /// Number of virtual CPUs
    #[serde(default = "default_vcpu")]
    pub vcpu: u32,

    /// Memory in MB
    #[serde(default = "default_memory_mb")]
    pub memory_mb: u32,

    /// Length of a generated pod name
    #[serde(default = "default_name_length")]
    pub name_length: usize,

    /// Alphabet of a generated pod name
    #[serde(default)]
    pub name_charset: Charset,

    /// Permission for file mounts without one
    #[serde(default = "default_file_perm")]
    pub file_perm: String,

    /// Documents larger than this are rejected before parsing
    #[serde(default = "default_max_document_size")]
    pub max_document_size: usize,
}

fn default_vcpu() -> u32 {
    DEFAULT_VCPU
}

fn default_memory_mb() -> u32 {
    DEFAULT_MEMORY_MB
}

fn default_name_length() -> usize {
    DEFAULT_NAME_LENGTH
}

fn default_file_perm() -> String {
    DEFAULT_FILE_PERM.to_string()
}

fn default_max_document_size() -> usize {
    DEFAULT_MAX_DOCUMENT_SIZE
}

impl Default for PodDefaults {
    fn default() -> Self {
        Self {
            vcpu: DEFAULT_VCPU,
            memory_mb: DEFAULT_MEMORY_MB,
            name_length: DEFAULT_NAME_LENGTH,
            name_charset: Charset::default(),
            file_perm: default_file_perm(),
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
        }
    }
}

impl PodDefaults {
    /// Reject defaults that would produce an unusable pod.
    pub fn validate(&self) -> Result<()> {
        if self.vcpu == 0 {
            return Err(PodError::Config("vcpu must be at least 1".to_string()));
        }
        if self.memory_mb == 0 {
            return Err(PodError::Config("memory_mb must be at least 1".to_string()));
        }
        if self.name_length == 0 {
            return Err(PodError::Config("name_length must be at least 1".to_string()));
        }
        if self.file_perm.is_empty() || !is_valid_perm(&self.file_perm) {
            return Err(PodError::Config(format!(
                "file_perm '{}' must be '0' or an octal string like '0755'",
                self.file_perm
            )));
        }
        if self.max_document_size == 0 {
            return Err(PodError::Config(
                "max_document_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
