use std::io;
use std::path::PathBuf;

use env_secrets::error::format_error_chain;
use env_secrets::errors::{EnvFileError, UploadError};

#[test]
fn test_error_enum_display_messages() {
    let e1 = EnvFileError::Open {
        path: PathBuf::from("/tmp/.env"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };
    assert!(e1.to_string().contains("Failed to open env file"));
    assert!(e1.to_string().contains("/tmp/.env"));

    let e2 = EnvFileError::Read(io::Error::other("bad read"));
    assert!(e2.to_string().contains("Failed to read line"));

    let u1 = UploadError::Launch {
        program: "gh".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "not found"),
    };
    assert_eq!(u1.to_string(), "Failed to launch 'gh'");

    let u2 = UploadError::CommandFailed {
        stderr: "HTTP 403: Forbidden\n".to_string(),
    };
    assert_eq!(u2.to_string(), "HTTP 403: Forbidden");
}

#[test]
fn test_launch_error_chain_includes_source() {
    let err = UploadError::Launch {
        program: "gh".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    };
    let chain = format_error_chain(&anyhow::Error::new(err));

    assert!(chain.contains("Failed to launch 'gh'"));
    assert!(chain.contains("→"));
    assert!(chain.contains("No such file or directory"));
}

#[test]
fn test_command_failed_chain_is_just_stderr() {
    let err = UploadError::CommandFailed {
        stderr: "secret name is invalid".to_string(),
    };
    let chain = format_error_chain(&anyhow::Error::new(err));

    assert_eq!(chain, "secret name is invalid");
}
