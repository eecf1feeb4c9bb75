// xlsq-formula/src/model.rs
// Typed form of the package formula. The JSON descriptor is the source the
// Ruby formula is rendered from.

use std::fs;
use std::path::{Path, PathBuf};

use semver::Version;
use serde::{Deserialize, Serialize};
use tracing::debug;
use xlsq_common::error::{Result, XlsqError};

use crate::validation::validate_url;

/// Value of `sha256` until a release archive exists.
pub const PLACEHOLDER_SHA256: &str = "YOUR_SHA256_HERE";

/// Install-step token that expands to the standard cargo install arguments.
pub const STD_CARGO_ARGS: &str = "*std_cargo_args";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstallStep {
    /// Program followed by its arguments.
    pub system: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestStep {
    /// Executable under `bin/`; defaults to the formula name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    /// Substring the command's output must contain.
    pub expect: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Formula {
    pub name: String,
    pub desc: String,
    pub homepage: String,
    pub version: Version,
    pub url: String,
    pub sha256: String,
    pub license: String,
    #[serde(default)]
    pub build_dependencies: Vec<String>,
    pub install: InstallStep,
    pub test: TestStep,
}

pub fn is_sha256_hex(value: &str) -> bool {
    value.len() == 64 && value.chars().all(|c| c.is_ascii_hexdigit())
}

/// Byte offsets where `version` appears in `url` as a whole version, so
/// `1.0.0` matches `v1.0.0.tar.gz` and `xlsq-1.0.0/` but not `v11.0.0` or
/// `1.0.0.5`.
fn version_offsets(url: &str, version: &str) -> Vec<usize> {
    url.match_indices(version)
        .filter(|(start, _)| {
            let starts_clean = !url[..*start]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_digit() || c == '.');
            let mut after = url[start + version.len()..].chars();
            let ends_clean = match after.next() {
                Some(c) if c.is_ascii_digit() => false,
                Some('.') => !after.next().is_some_and(|c| c.is_ascii_digit()),
                _ => true,
            };
            starts_clean && ends_clean
        })
        .map(|(start, _)| start)
        .collect()
}

fn replace_version(url: &str, old: &str, new: &str) -> String {
    let mut out = String::with_capacity(url.len());
    let mut last = 0;
    for start in version_offsets(url, old) {
        out.push_str(&url[last..start]);
        out.push_str(new);
        last = start + old.len();
    }
    out.push_str(&url[last..]);
    out
}

impl Formula {
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| XlsqError::ParseError("formula JSON", e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading formula descriptor from {}", path.display());
        let data = fs::read_to_string(path).map_err(|e| {
            XlsqError::IoError(format!("Failed to read formula {}: {}", path.display(), e))
        })?;
        Self::from_json(&data)
    }

    pub fn to_json(&self) -> Result<String> {
        let mut data = serde_json::to_string_pretty(self)?;
        data.push('\n');
        Ok(data)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        debug!("Writing formula descriptor to {}", path.display());
        fs::write(path, self.to_json()?).map_err(|e| {
            XlsqError::IoError(format!("Failed to write formula {}: {}", path.display(), e))
        })
    }

    /// True while the checksum is the placeholder or otherwise not a digest.
    pub fn has_placeholder_checksum(&self) -> bool {
        !is_sha256_hex(&self.sha256)
    }

    pub fn binary_name(&self) -> &str {
        self.test.binary.as_deref().unwrap_or(&self.name)
    }

    /// Homebrew class name: `xlsq` -> `Xlsq`, `foo-bar` -> `FooBar`.
    pub fn class_name(&self) -> String {
        self.name
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect()
    }

    /// `--locked --root <prefix> --path .`
    pub fn std_cargo_args(prefix: &Path) -> Vec<String> {
        vec![
            "--locked".to_string(),
            "--root".to_string(),
            prefix.display().to_string(),
            "--path".to_string(),
            ".".to_string(),
        ]
    }

    /// The install command with `*std_cargo_args` expanded for `prefix`.
    pub fn install_argv(&self, prefix: &Path) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.install.system.len() + 4);
        for token in &self.install.system {
            if token == STD_CARGO_ARGS {
                argv.extend(Self::std_cargo_args(prefix));
            } else {
                argv.push(token.clone());
            }
        }
        argv
    }

    /// File name the source archive is cached under.
    pub fn archive_file_name(&self) -> String {
        let tail = self
            .url
            .split('/')
            .next_back()
            .filter(|s| !s.is_empty())
            .unwrap_or("source");
        format!("{}-{}", self.name, tail)
    }

    /// Collects every problem instead of stopping at the first.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.name.is_empty()
            || !self
                .name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "-_.@+".contains(c))
        {
            problems.push(format!(
                "name '{}' must be non-empty lowercase ASCII",
                self.name
            ));
        }
        if self.desc.trim().is_empty() {
            problems.push("desc is empty".to_string());
        }
        if self.license.trim().is_empty() {
            problems.push("license is empty".to_string());
        }
        if let Err(e) = validate_url(&self.homepage) {
            problems.push(format!("homepage: {e}"));
        }
        if let Err(e) = validate_url(&self.url) {
            problems.push(format!("url: {e}"));
        }
        let version = self.version.to_string();
        if version_offsets(&self.url, &version).is_empty() {
            problems.push(format!(
                "url '{}' does not mention version {}",
                self.url, version
            ));
        }
        if self.sha256 == PLACEHOLDER_SHA256 || self.sha256.is_empty() {
            problems.push(format!(
                "sha256 is the placeholder '{}'; set it to the SHA-256 of {}",
                PLACEHOLDER_SHA256, self.url
            ));
        } else if !is_sha256_hex(&self.sha256) {
            problems.push(format!(
                "sha256 '{}' is not a 64-character hex digest",
                self.sha256
            ));
        }
        if self.install.system.is_empty() {
            problems.push("install step has no command".to_string());
        }
        if self.test.expect.is_empty() {
            problems.push("test step expects no output".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(XlsqError::ValidationError(format!(
                "formula '{}': {}",
                self.name,
                problems.join("; ")
            )))
        }
    }

    /// Moves the formula to `new_version`. The version is rewritten inside the
    /// URL and the checksum is replaced; without a new checksum it goes back to
    /// the placeholder so a stale digest can never pass `validate`.
    pub fn bump(&mut self, new_version: Version, sha256: Option<&str>) -> Result<()> {
        if new_version == self.version {
            return Err(XlsqError::ValidationError(format!(
                "formula '{}' is already at version {}",
                self.name, new_version
            )));
        }
        let old = self.version.to_string();
        if version_offsets(&self.url, &old).is_empty() {
            return Err(XlsqError::ValidationError(format!(
                "url '{}' does not mention version {}; update it by hand",
                self.url, old
            )));
        }
        let sha256 = match sha256 {
            Some(digest) if is_sha256_hex(digest) => digest.to_ascii_lowercase(),
            Some(digest) => {
                return Err(XlsqError::ValidationError(format!(
                    "sha256 '{digest}' is not a 64-character hex digest"
                )))
            }
            None => PLACEHOLDER_SHA256.to_string(),
        };

        debug!("Bumping {} from {} to {}", self.name, old, new_version);
        self.url = replace_version(&self.url, &old, &new_version.to_string());
        self.version = new_version;
        self.sha256 = sha256;
        Ok(())
    }
}

/// `Formula/xlsq.json` -> `Formula/xlsq.rb`
pub fn ruby_path_for(descriptor: &Path) -> PathBuf {
    descriptor.with_extension("rb")
}
