//! Pod document decoding.
//!
//! Decoding is all-or-nothing: a document is parsed, its unset scalars are
//! defaulted, and the minimal structure every pod needs is checked before a
//! `Pod` is handed back. Full referential checks live in `Pod::validate`.

use std::io::Read;
use std::path::Path;

use crate::config::PodDefaults;
use crate::error::{PodError, Result};
use crate::random::random_string;
use crate::spec::Pod;

/// Document encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick the format from a file extension (`.yaml`/`.yml` → YAML, else JSON).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Format::Yaml
            }
            _ => Format::Json,
        }
    }
}

/// Decode a JSON pod document.
pub fn decode_bytes(body: &[u8]) -> Result<Pod> {
    decode_bytes_with(body, &PodDefaults::default())
}

/// Decode a JSON pod document with custom defaults.
pub fn decode_bytes_with(body: &[u8], defaults: &PodDefaults) -> Result<Pod> {
    decode(body, Format::Json, defaults)
}

/// Decode a YAML pod document.
pub fn decode_yaml_bytes(body: &[u8]) -> Result<Pod> {
    decode(body, Format::Yaml, &PodDefaults::default())
}

/// Decode a pod document from a file.
///
/// A missing file is reported as `PodError::NotFound`, distinct from any
/// other read failure.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Pod> {
    decode_file_with(path, &PodDefaults::default())
}

/// Decode a pod document from a file with custom defaults.
///
/// The size limit is enforced before and during the read, so an oversized
/// file is never loaded whole.
pub fn decode_file_with(path: impl AsRef<Path>, defaults: &PodDefaults) -> Result<Pod> {
    defaults.validate()?;

    let path = path.as_ref();
    let limit = defaults.max_document_size;
    let meta = match std::fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PodError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };
    if meta.len() > limit as u64 {
        return Err(PodError::TooLarge {
            size: usize::try_from(meta.len()).unwrap_or(usize::MAX),
            limit,
        });
    }

    let mut body = Vec::with_capacity(meta.len() as usize);
    std::fs::File::open(path)?
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut body)?;
    tracing::debug!(path = %path.display(), bytes = body.len(), "Read pod document");
    decode(&body, Format::from_path(path), defaults)
}

/// Parse, default and structurally check a document.
pub fn decode(body: &[u8], format: Format, defaults: &PodDefaults) -> Result<Pod> {
    defaults.validate()?;

    if body.len() > defaults.max_document_size {
        return Err(PodError::TooLarge {
            size: body.len(),
            limit: defaults.max_document_size,
        });
    }

    // A bare `null` document is an empty pod.
    let pod: Option<Pod> = match format {
        Format::Json => serde_json::from_slice(body)?,
        Format::Yaml => serde_yaml::from_slice(body)?,
    };
    let mut pod = pod.unwrap_or_default();

    apply_defaults(&mut pod, defaults)?;
    check_structure(&pod)?;
    Ok(pod)
}

/// Fill unset fields of a freshly decoded pod.
pub fn apply_defaults(pod: &mut Pod, defaults: &PodDefaults) -> Result<()> {
    if pod.name.is_empty() {
        pod.name = random_string(defaults.name_length, defaults.name_charset)?;
        tracing::debug!(name = %pod.name, "Generated pod name");
    }

    if pod.resource.vcpu == 0 {
        pod.resource.vcpu = defaults.vcpu;
    }
    if pod.resource.memory == 0 {
        pod.resource.memory = defaults.memory_mb;
    }

    for container in &mut pod.containers {
        for file in &mut container.files {
            if file.perm.is_empty() {
                file.perm = defaults.file_perm.clone();
            }
        }
    }

    tracing::debug!(
        pod = %pod.name,
        vcpu = pod.resource.vcpu,
        memory_mb = pod.resource.memory,
        "Applied pod defaults"
    );
    Ok(())
}

/// Checks a pod must pass to be usable at all.
pub fn check_structure(pod: &Pod) -> Result<()> {
    if pod.containers.is_empty() {
        return Err(PodError::NoContainers);
    }
    if pod.containers.iter().any(|c| c.image.is_empty()) {
        return Err(PodError::MissingImage);
    }
    if pod.volumes.iter().any(|v| v.name.is_empty()) {
        return Err(PodError::MissingVolumeName);
    }
    Ok(())
}
