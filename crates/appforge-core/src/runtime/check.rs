//! Toolchain detection for Node.js, package managers, and the mobile CLI

use std::process::Command;

/// Probe result for one external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(program: &str, name: &'static str) -> ToolInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            ToolInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => ToolInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> ToolInfo {
    probe("node", "Node.js")
}

/// Check if npm is available
pub fn check_npm() -> ToolInfo {
    probe("npm", "npm")
}

/// Check if Yarn is available
pub fn check_yarn() -> ToolInfo {
    probe("yarn", "Yarn")
}

/// Check if the react-native CLI is available
pub fn check_react_native() -> ToolInfo {
    probe("react-native", "react-native CLI")
}
