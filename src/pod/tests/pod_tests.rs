//! Integration tests for the decode → default → validate pipeline.
//!
//! ```bash
//! cargo test -p a3s-pod --test pod_tests
//! ```

use a3s_pod::{
    decode_bytes, decode_file, decode_file_with, ErrorKind, PodDefaults, PodError,
    ValidationError,
};
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Test Helpers
// =============================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("a3s_pod=debug")
        .with_test_writer()
        .try_init();
}

fn write_pod(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

const NGINX_POD: &str = r#"{
    "id": "web",
    "containers": [{
        "name": "nginx",
        "image": "nginx:1.25",
        "command": ["nginx", "-g", "daemon off;"],
        "ports": [{"hostPort": 8080, "containerPort": 80, "protocol": "tcp"}],
        "envs": [{"env": "WORKERS", "value": "4"}],
        "volumes": [{"path": "/var/www", "volume": "site", "readOnly": true}],
        "files": [{"path": "/etc/nginx/nginx.conf", "filename": "nginx.conf"}]
    }],
    "resource": {"vcpu": 2},
    "files": [{"name": "nginx.conf", "encoding": "raw", "content": "worker_processes 4;"}],
    "volumes": [{"name": "site", "source": "/srv/site", "driver": "vfs"}]
}"#;

// =============================================================================
// Decode From Bytes
// =============================================================================

#[test]
fn test_busybox_scenario() {
    init_tracing();
    let pod = decode_bytes(br#"{"containers":[{"image":"busybox"}]}"#).unwrap();
    assert_eq!(pod.resource.vcpu, 1);
    assert_eq!(pod.resource.memory, 128);
    assert_eq!(pod.name.len(), 10);
    assert!(pod
        .name
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    assert!(pod.validate().is_ok());
}

#[test]
fn test_zero_containers_scenario() {
    let err = decode_bytes(br#"{"containers":[],"id":"x"}"#).unwrap_err();
    assert!(matches!(err, PodError::NoContainers));
    assert_eq!(err.kind(), ErrorKind::Structural);
}

#[test]
fn test_duplicate_volume_scenario() {
    let pod = decode_bytes(
        br#"{"containers":[{"image":"busybox"}],"volumes":[{"name":"a"},{"name":"a"}]}"#,
    )
    .unwrap();
    let err = pod.validate().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(matches!(
        err,
        PodError::Validation(ValidationError::DuplicateVolumeName { .. })
    ));
}

#[test]
fn test_full_pod_roundtrip_to_validate() {
    init_tracing();
    let pod = decode_bytes(NGINX_POD.as_bytes()).unwrap();
    assert_eq!(pod.name, "web");
    assert_eq!(pod.resource.vcpu, 2);
    assert_eq!(pod.resource.memory, 128);
    assert_eq!(pod.containers[0].files[0].perm, "0755");
    assert!(pod.validate().is_ok());
}

#[test]
fn test_missing_image_even_with_valid_siblings() {
    let err = decode_bytes(
        br#"{"containers":[{"image":"nginx"},{"image":"redis"},{"name":"broken"}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, PodError::MissingImage));
}

#[test]
fn test_dangling_file_reports_index_and_name() {
    let pod = decode_bytes(
        br#"{"containers":[
            {"image":"a"},
            {"image":"b","files":[{"path":"/x","filename":"absent"}]}
        ],"files":[{"name":"present"}]}"#,
    )
    .unwrap();
    let err = pod.validate().unwrap_err();
    assert!(err.to_string().contains("container 1"));
    assert!(err.to_string().contains("absent"));
}

#[test]
fn test_bad_permission_from_document() {
    let pod = decode_bytes(
        br#"{"containers":[{"image":"a","files":[{"path":"/x","filename":"f","perm":"0999"}]}],
            "files":[{"name":"f"}]}"#,
    )
    .unwrap();
    assert!(matches!(
        pod.validate().unwrap_err(),
        PodError::Validation(ValidationError::MalformedPermission { .. })
    ));
}

// =============================================================================
// Decode From File
// =============================================================================

#[test]
fn test_decode_file_json() {
    let dir = TempDir::new().unwrap();
    let path = write_pod(&dir, "pod.json", NGINX_POD);
    let pod = decode_file(&path).unwrap();
    assert_eq!(pod.name, "web");
    assert_eq!(pod.volumes[0].name, "site");
}

#[test]
fn test_decode_file_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write_pod(
        &dir,
        "pod.yaml",
        "id: cache\ncontainers:\n  - image: redis:7\n    restartPolicy: always\nresource:\n  memory: 512\n",
    );
    let pod = decode_file(&path).unwrap();
    assert_eq!(pod.name, "cache");
    assert_eq!(pod.containers[0].restart_policy, "always");
    assert_eq!(pod.resource.memory, 512);
    assert_eq!(pod.resource.vcpu, 1);
}

#[test]
fn test_decode_file_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");
    let err = decode_file(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    match err {
        PodError::NotFound { path: p } => assert_eq!(p, path),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_decode_file_malformed_is_not_not_found() {
    let dir = TempDir::new().unwrap();
    let path = write_pod(&dir, "pod.json", "this is not a pod");
    let err = decode_file(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn test_decode_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = decode_file(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_decode_file_with_size_limit() {
    let dir = TempDir::new().unwrap();
    let path = write_pod(&dir, "pod.json", NGINX_POD);
    let defaults = PodDefaults {
        max_document_size: 64,
        ..Default::default()
    };
    let err = decode_file_with(&path, &defaults).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    match err {
        // Size comes from file metadata, reported before the body is read.
        PodError::TooLarge { size, limit } => {
            assert_eq!(limit, 64);
            assert_eq!(size, NGINX_POD.len());
        }
        other => panic!("Expected TooLarge, got {other:?}"),
    }
}

#[test]
fn test_decode_file_at_size_limit() {
    let dir = TempDir::new().unwrap();
    let body = r#"{"containers":[{"image":"busybox"}]}"#;
    let path = write_pod(&dir, "pod.json", body);
    let defaults = PodDefaults {
        max_document_size: body.len(),
        ..Default::default()
    };
    let pod = decode_file_with(&path, &defaults).unwrap();
    assert_eq!(pod.containers[0].image, "busybox");
}

#[test]
fn test_decode_file_invalid_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");
    let defaults = PodDefaults {
        vcpu: 0,
        ..Default::default()
    };
    let err = decode_file_with(&path, &defaults).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

// =============================================================================
// Explicit Nulls
// =============================================================================

#[test]
fn test_null_collections_from_marshalled_document() {
    let pod = decode_bytes(
        br#"{"id":"web","containers":[{"image":"busybox","command":null,"entrypoint":null,
            "ports":null,"envs":null,"volumes":null,"files":null}],
            "resource":{"vcpu":null,"memory":null},"files":null,"volumes":null,"tty":null,"type":null}"#,
    )
    .unwrap();
    assert_eq!(pod.name, "web");
    assert_eq!(pod.resource.vcpu, 1);
    assert_eq!(pod.resource.memory, 128);
    assert!(pod.validate().is_ok());
}

#[test]
fn test_null_containers_is_zero_containers() {
    let err = decode_bytes(br#"{"id":"x","containers":null,"volumes":[{"name":"a"}]}"#)
        .unwrap_err();
    assert!(matches!(err, PodError::NoContainers));
}

#[test]
fn test_null_id_gets_generated_name() {
    let pod = decode_bytes(br#"{"id":null,"containers":[{"image":"busybox"}]}"#).unwrap();
    assert_eq!(pod.name.len(), 10);
}
