//! Generic tool management for external CLI tools
//!
//! Checking and installing tools the scaffolder depends on, like the
//! react-native CLI. Installation streams the installer's output and is
//! bounded by a timeout so a hung registry never wedges the prompt flow.

use anyhow::Result;
use colored::Colorize;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for a global package install (5 minutes)
const INSTALL_TIMEOUT: Duration = Duration::from_secs(300);

/// Configuration for an external CLI tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "react-native")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// Shell command that installs the tool
    pub install_command: &'static str,
    /// URL to the installation documentation
    pub docs_url: &'static str,
}

/// Manager for checking and installing external CLI tools
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    pub fn install_command(&self) -> &'static str {
        self.config.install_command
    }

    /// Check if the tool is installed and available in PATH
    pub fn is_installed(&self) -> bool {
        std::process::Command::new("which")
            .arg(self.config.name)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Get the installed tool version (if available)
    pub fn get_version(&self) -> Option<String> {
        std::process::Command::new(self.config.name)
            .arg("--version")
            .output()
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    String::from_utf8(output.stdout)
                        .ok()
                        .map(|s| s.trim().to_string())
                } else {
                    None
                }
            })
    }

    /// Install the tool, streaming the installer's output.
    pub async fn install(&self) -> Result<()> {
        let cmd = self.install_command();
        println!();
        println!("{} {}", "Running:".dimmed(), cmd.yellow());
        println!();

        let mut child = TokioCommand::new("sh")
            .arg("-c")
            .arg(cmd)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let stdout = child.stdout.take().expect("Failed to capture stdout");
        let stderr = child.stderr.take().expect("Failed to capture stderr");

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();

        let output_task = async {
            loop {
                tokio::select! {
                    line = stdout_reader.next_line() => {
                        match line {
                            Ok(Some(line)) => println!("  {}", line),
                            Ok(None) => break,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stdout:".red(), e);
                                break;
                            }
                        }
                    }
                    line = stderr_reader.next_line() => {
                        match line {
                            Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                            Ok(None) => {}
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stderr:".red(), e);
                            }
                        }
                    }
                }
            }
        };

        if timeout(INSTALL_TIMEOUT, output_task).await.is_err() {
            let _ = child.kill().await;
            println!();
            anyhow::bail!(
                "Installation timed out after {} seconds.\n\
                 The registry may be unreachable. Please try again later or install manually:\n\
                 {}",
                INSTALL_TIMEOUT.as_secs(),
                cmd
            );
        }

        match timeout(Duration::from_secs(5), child.wait()).await {
            Ok(Ok(status)) => {
                println!();
                if status.success() {
                    Ok(())
                } else {
                    anyhow::bail!(
                        "Installation failed with exit code: {}\n\
                         Please try installing manually: {}",
                        status.code().unwrap_or(-1),
                        cmd
                    );
                }
            }
            Ok(Err(e)) => {
                anyhow::bail!("Failed to wait for installer: {}", e);
            }
            Err(_) => {
                let _ = child.kill().await;
                anyhow::bail!(
                    "Installation process hung. Please try installing manually:\n{}",
                    cmd
                );
            }
        }
    }

    /// Open the tool's documentation in the default browser
    pub fn open_docs(&self) -> Result<()> {
        println!(
            "{}",
            format!(
                "Opening {} documentation in your browser...",
                self.config.display_name
            )
            .cyan()
        );
        open::that(self.config.docs_url)?;
        Ok(())
    }
}

/// Pre-configured tool manager for the react-native CLI
pub fn react_native_tool() -> ToolManager {
    ToolManager::new(ToolConfig {
        name: "react-native",
        display_name: "react-native CLI",
        install_command: "npm install -g react-native-cli",
        docs_url: "https://reactnative.dev/docs/environment-setup",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn react_native_tool_config() {
        let tool = react_native_tool();
        assert_eq!(tool.config().name, "react-native");
        assert!(tool.install_command().starts_with("npm install -g"));
    }
}
