//! Referential and structural validation of a decoded pod.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. volume catalog names are unique
//! 2. file catalog names are unique
//! 3. per container: volume mounts unique, env names unique, file mounts
//!    resolve with a well-formed permission, volume mounts resolve

use regex::Regex;
use std::sync::OnceLock;

use crate::config::DEFAULT_FILE_PERM;
use crate::error::{Result, ValidationError};
use crate::keyset::key_set;
use crate::spec::Pod;

/// Permission value that leaves the file mode untouched.
pub const PERM_UNCHANGED: &str = "0";

fn perm_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^0[0-7]{3}$").expect("permission pattern is valid"))
}

/// Whether `perm` is an accepted file mount permission.
///
/// Empty means the default (`0755`); `"0"` means unchanged; anything else
/// must be a leading zero followed by exactly three octal digits.
pub fn is_valid_perm(perm: &str) -> bool {
    let perm = if perm.is_empty() { DEFAULT_FILE_PERM } else { perm };
    perm == PERM_UNCHANGED || perm_pattern().is_match(perm)
}

impl Pod {
    /// Validate catalog uniqueness and every container's references.
    ///
    /// Never mutates the pod. Returns the first failure found.
    pub fn validate(&self) -> Result<()> {
        let volumes = key_set(&self.volumes);
        if let Some(name) = volumes.duplicate {
            return Err(ValidationError::DuplicateVolumeName {
                name: name.to_string(),
            }
            .into());
        }

        let files = key_set(&self.files);
        if let Some(name) = files.duplicate {
            return Err(ValidationError::DuplicateFileName {
                name: name.to_string(),
            }
            .into());
        }

        for (idx, container) in self.containers.iter().enumerate() {
            if let Some(volume) = key_set(&container.volumes).duplicate {
                return Err(ValidationError::DuplicateVolumeMount {
                    container: idx,
                    volume: volume.to_string(),
                }
                .into());
            }

            if let Some(name) = key_set(&container.envs).duplicate {
                return Err(ValidationError::DuplicateEnvName {
                    container: idx,
                    name: name.to_string(),
                }
                .into());
            }

            for file in &container.files {
                if !files.contains(&file.file_ref) {
                    return Err(ValidationError::DanglingFileReference {
                        container: idx,
                        file: file.file_ref.clone(),
                    }
                    .into());
                }
                if !is_valid_perm(&file.perm) {
                    return Err(ValidationError::MalformedPermission {
                        container: idx,
                        perm: file.perm.clone(),
                    }
                    .into());
                }
            }

            for mount in &container.volumes {
                if !volumes.contains(&mount.volume_ref) {
                    return Err(ValidationError::DanglingVolumeReference {
                        container: idx,
                        volume: mount.volume_ref.clone(),
                    }
                    .into());
                }
            }
        }

        tracing::debug!(
            pod = %self.name,
            containers = self.containers.len(),
            "Pod validated"
        );
        Ok(())
    }
}
