// xlsq-formula/src/render.rs
//! Renders the descriptor as a Homebrew Ruby formula.

use std::fs;
use std::path::Path;

use xlsq_common::error::{Result, XlsqError};

use crate::model::{Formula, PLACEHOLDER_SHA256, STD_CARGO_ARGS};

/// Escapes text for a double-quoted Ruby string, including `#` so nothing
/// interpolates.
fn ruby_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '#' => out.push_str("\\#"),
            _ => out.push(c),
        }
    }
    out
}

fn ruby_str(value: &str) -> String {
    format!("\"{}\"", ruby_escape(value))
}

pub fn render_ruby(formula: &Formula) -> String {
    let mut rb = format!("class {} < Formula\n", formula.class_name());
    rb.push_str(&format!("  desc {}\n", ruby_str(&formula.desc)));
    rb.push_str(&format!("  homepage {}\n", ruby_str(&formula.homepage)));
    rb.push_str(&format!("  url {}\n", ruby_str(&formula.url)));
    rb.push_str(&format!("  sha256 {}", ruby_str(&formula.sha256)));
    if formula.sha256 == PLACEHOLDER_SHA256 {
        rb.push_str(" # Update this when you create the release");
    }
    rb.push('\n');
    rb.push_str(&format!("  license {}\n", ruby_str(&formula.license)));

    if !formula.build_dependencies.is_empty() {
        rb.push('\n');
        for dep in &formula.build_dependencies {
            rb.push_str(&format!("  depends_on {} => :build\n", ruby_str(dep)));
        }
    }

    let system = formula
        .install
        .system
        .iter()
        .map(|token| {
            if token == STD_CARGO_ARGS {
                token.clone()
            } else {
                ruby_str(token)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    rb.push_str("\n  def install\n");
    rb.push_str(&format!("    system {system}\n"));
    rb.push_str("  end\n");

    // `#{bin}` is the only interpolation the test command keeps.
    let mut command = format!("#{{bin}}/{}", ruby_escape(formula.binary_name()));
    for arg in &formula.test.args {
        command.push(' ');
        command.push_str(&ruby_escape(arg));
    }
    rb.push_str("\n  test do\n");
    rb.push_str(&format!(
        "    assert_match {}, shell_output(\"{}\")\n",
        ruby_str(&formula.test.expect),
        command
    ));
    rb.push_str("  end\n");
    rb.push_str("end\n");
    rb
}

/// Fails when the Ruby formula on disk is not what the descriptor renders to.
pub fn check_rendered(formula: &Formula, path: &Path) -> Result<()> {
    let on_disk = fs::read_to_string(path).map_err(|e| {
        XlsqError::IoError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    if on_disk == render_ruby(formula) {
        Ok(())
    } else {
        Err(XlsqError::ValidationError(format!(
            "{} is out of date with its descriptor; run `xlsq-formula render`",
            path.display()
        )))
    }
}

pub fn write_rendered(formula: &Formula, path: &Path) -> Result<()> {
    tracing::debug!("Rendering {} to {}", formula.name, path.display());
    fs::write(path, render_ruby(formula)).map_err(|e| {
        XlsqError::IoError(format!("Failed to write {}: {}", path.display(), e))
    })
}
