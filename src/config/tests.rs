// Copyright 2025 The axion Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration tests.

use std::path::{Path, PathBuf};

use serial_test::serial;

use super::loader::ConfigError;
use super::types::Config;
use super::utils::expand_tilde;
use crate::ssh::known_hosts::HostKeyPolicy;

fn parse(content: &str) -> Result<Config, ConfigError> {
    Config::from_yaml(content, Path::new("/tmp/config.yaml"))
}

#[test]
#[serial]
fn test_expand_tilde() {
    let original_home = std::env::var("HOME").ok();
    std::env::set_var("HOME", "/home/user");

    assert_eq!(
        expand_tilde(Path::new("~/.config/vps/config.yaml")),
        PathBuf::from("/home/user/.config/vps/config.yaml")
    );
    assert_eq!(
        expand_tilde(Path::new("/etc/axion.yaml")),
        PathBuf::from("/etc/axion.yaml")
    );

    match original_home {
        Some(home) => std::env::set_var("HOME", home),
        None => std::env::remove_var("HOME"),
    }
}

#[test]
fn test_top_level_list() {
    let yaml = r#"
- name: worker1
  ip: 10.0.0.1
  username: root
  password: secret
- name: worker2
  ip: 10.0.0.2
  username: admin
  password: hunter2
  port: 2222
"#;
    let config = parse(yaml).unwrap();
    assert_eq!(config.hosts.len(), 2);
    assert_eq!(config.hosts[0].display_name(), "worker1");
    assert_eq!(config.hosts[0].address, "10.0.0.1");
    assert_eq!(config.hosts[0].port(), 22);
    assert_eq!(config.hosts[1].credential.as_str(), "hunter2");
    assert_eq!(config.hosts[1].port(), 2222);
    assert!(config.host_key_policy.is_none());
}

#[test]
fn test_credentials_document() {
    let yaml = r#"
host_key_checking: "yes"
known_hosts: /etc/ssh/fleet_known_hosts
credentials:
  - name: db3
    ip: 10.0.1.3
    username: postgres
    password: pw
    secret: ""
"#;
    let config = parse(yaml).unwrap();
    assert_eq!(config.hosts.len(), 1);
    assert_eq!(config.hosts[0].ordinal(), Some(3));
    assert_eq!(config.host_key_policy, Some(HostKeyPolicy::KnownHosts));
    assert_eq!(
        config.known_hosts,
        Some(PathBuf::from("/etc/ssh/fleet_known_hosts"))
    );
}

#[test]
fn test_host_key_checking_boolean() {
    let yaml = r#"
host_key_checking: false
credentials:
  - name: web1
    ip: 10.0.0.1
    username: root
    password: pw
"#;
    assert_eq!(
        parse(yaml).unwrap().host_key_policy,
        Some(HostKeyPolicy::AcceptAny)
    );
}

#[test]
fn test_invalid_host_key_checking() {
    let yaml = r#"
host_key_checking: sometimes
credentials:
  - name: web1
    ip: 10.0.0.1
    username: root
    password: pw
"#;
    assert!(matches!(parse(yaml), Err(ConfigError::InvalidSetting(_))));
}

#[test]
fn test_unnamed_host_allowed() {
    let yaml = r#"
- ip: 192.168.1.7
  username: root
  password: pw
"#;
    let config = parse(yaml).unwrap();
    assert_eq!(config.hosts[0].display_name(), "192.168.1.7");
    assert_eq!(config.hosts[0].ordinal(), None);
}

#[test]
fn test_empty_list_rejected() {
    let err = parse("[]").unwrap_err();
    assert!(matches!(err, ConfigError::Empty));
    assert_eq!(err.to_string(), "config file contains no host entries");

    let err = parse("credentials: []").unwrap_err();
    assert!(matches!(err, ConfigError::Empty));
}

#[test]
fn test_missing_fields_reported_one_based() {
    let yaml = r#"
- name: web1
  ip: 10.0.0.1
  username: root
  password: pw
- name: web2
  username: root
  password: pw
"#;
    let err = parse(yaml).unwrap_err();
    assert_eq!(err.to_string(), "host entry 2: address is required");

    let yaml = r#"
- name: web1
  ip: 10.0.0.1
  password: pw
"#;
    assert_eq!(
        parse(yaml).unwrap_err().to_string(),
        "host entry 1: username is required"
    );

    let yaml = r#"
- name: web1
  ip: 10.0.0.1
  username: root
"#;
    assert_eq!(
        parse(yaml).unwrap_err().to_string(),
        "host entry 1: password is required"
    );
}

#[test]
fn test_malformed_yaml() {
    assert!(matches!(
        parse("- name: [unterminated"),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_numeric_password_and_name() {
    let yaml = r#"
credentials:
  - name: 7
    ip: 10.0.0.7
    username: root
    password: 123456
"#;
    let config = parse(yaml).unwrap();
    let host = &config.hosts[0];
    assert_eq!(host.display_name(), "7");
    assert_eq!(host.ordinal(), Some(7));
    assert_eq!(host.credential.as_str(), "123456");
}

#[test]
fn test_bad_field_reports_its_own_error() {
    let yaml = r#"
- name: worker1
  ip: 10.0.0.1
  username: root
  password: pw
  port: abc
"#;
    let err = parse(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    let message = err.to_string();
    assert!(!message.contains("untagged"), "{message}");
    assert!(message.contains("u16"), "{message}");

    let yaml = r#"
credentials:
  - name: worker1
    ip: 10.0.0.1
    username: root
    password: pw
    port: -1
"#;
    let message = parse(yaml).unwrap_err().to_string();
    assert!(!message.contains("untagged"), "{message}");
}

#[test]
fn test_empty_document_has_no_hosts() {
    assert!(matches!(parse(""), Err(ConfigError::Empty)));
}

#[tokio::test]
async fn test_load_missing_file() {
    let err = Config::load(Path::new("/nonexistent/axion/config.yaml"))
        .await
        .unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}
