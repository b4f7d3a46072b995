//! Common test utilities for integration tests
//!
//! Provides the reference document and helpers for writing documents to disk.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// The stock deployment document, as shipped alongside MAAS.
pub const REFERENCE: &str = "\
maas:
  cluster:
    enabled: true
    region:
      host: localhost
    role: master
    enable_iframe: True
  region:
    theme: theme
    bind:
      host: localhost
      port: 80
    admin:
      username: admin
      password: password
      email: email@example.com
    database:
      engine: postgresql
      host: localhost
      name: maasdb
      password: password
      username: maas
    enabled: true
";

/// Write `contents` to a fresh temporary file.
///
/// The file is deleted when the returned handle is dropped.
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file.flush().expect("Failed to flush config");
    file
}

/// The reference document with its bind port replaced.
pub fn reference_with_port(port: &str) -> String {
    REFERENCE.replace("      port: 80\n", &format!("      port: {port}\n"))
}
