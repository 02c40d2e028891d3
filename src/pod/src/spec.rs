//! Pod document types.
//!
//! Field names follow the pod document wire format. Every field is optional
//! on the wire; absent values decode to zero or empty and are filled in by
//! the decoder's defaulting step. An explicit `null` is treated as absent.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode an explicit `null` as the field's zero value.
///
/// Producers that marshal empty lists as `null` are accepted the same as
/// producers that omit the field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A pod: one or more containers provisioned together in one VM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pod {
    /// Pod name (generated when absent)
    #[serde(rename = "id", deserialize_with = "null_as_default")]
    pub name: String,

    /// Containers (at least one required)
    #[serde(deserialize_with = "null_as_default")]
    pub containers: Vec<Container>,

    /// VM resources
    #[serde(deserialize_with = "null_as_default")]
    pub resource: Resource,

    /// File catalog referenced by container file mounts
    #[serde(deserialize_with = "null_as_default")]
    pub files: Vec<File>,

    /// Volume catalog referenced by container volume mounts
    #[serde(deserialize_with = "null_as_default")]
    pub volumes: Vec<Volume>,

    /// Allocate a TTY
    #[serde(deserialize_with = "null_as_default")]
    pub tty: bool,

    /// Pod type tag
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub pod_type: String,
}

/// One runnable unit within a pod.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Container {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Image reference (required)
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,

    #[serde(deserialize_with = "null_as_default")]
    pub command: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub workdir: String,

    #[serde(deserialize_with = "null_as_default")]
    pub entrypoint: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub ports: Vec<Port>,

    #[serde(deserialize_with = "null_as_default")]
    pub envs: Vec<EnvVar>,

    /// Mounts of catalog volumes
    #[serde(deserialize_with = "null_as_default")]
    pub volumes: Vec<VolumeMount>,

    /// Mounts of catalog files
    #[serde(deserialize_with = "null_as_default")]
    pub files: Vec<FileMount>,

    #[serde(deserialize_with = "null_as_default")]
    pub restart_policy: String,
}

/// Port mapping.
///
/// Port numbers outside `0..=65535` are rejected when the document is decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Port {
    #[serde(deserialize_with = "null_as_default")]
    pub host_port: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub container_port: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub service_port: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub protocol: String,
}

/// Environment variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvVar {
    #[serde(rename = "env", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

/// Container-local mount of a catalog volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeMount {
    /// Path inside the container
    #[serde(rename = "path", deserialize_with = "null_as_default")]
    pub mount_path: String,

    /// Name of the catalog volume
    #[serde(rename = "volume", deserialize_with = "null_as_default")]
    pub volume_ref: String,

    #[serde(rename = "readOnly", deserialize_with = "null_as_default")]
    pub read_only: bool,
}

/// Container-local mount of a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMount {
    /// Path inside the container
    #[serde(rename = "path", deserialize_with = "null_as_default")]
    pub mount_path: String,

    /// Name of the catalog file
    #[serde(rename = "filename", deserialize_with = "null_as_default")]
    pub file_ref: String,

    /// Octal permission string ("0644"), or "0" to leave permissions untouched
    #[serde(deserialize_with = "null_as_default")]
    pub perm: String,

    #[serde(deserialize_with = "null_as_default")]
    pub user: String,

    #[serde(deserialize_with = "null_as_default")]
    pub group: String,
}

/// VM resource request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    /// Number of virtual CPUs
    #[serde(deserialize_with = "null_as_default")]
    pub vcpu: u32,

    /// Memory in MB
    #[serde(deserialize_with = "null_as_default")]
    pub memory: u32,
}

/// File catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub encoding: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
}

/// Volume catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volume {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub driver: String,
}
