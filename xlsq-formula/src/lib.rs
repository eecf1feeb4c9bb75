// xlsq-formula/src/lib.rs
//! The Homebrew formula for xlsq as data: lint it, render it to Ruby, fetch
//! and checksum its source archive, and run its install and test steps.

pub mod checksum;
pub mod http;
pub mod install;
pub mod model;
pub mod process;
pub mod render;
pub mod validation;
pub mod verify;

pub use checksum::{sha256_file, verify_checksum};
pub use http::{fetch_source, FetchedArchive};
pub use install::run_install;
pub use model::{Formula, InstallStep, TestStep, PLACEHOLDER_SHA256};
pub use render::{check_rendered, render_ruby};
pub use validation::validate_url;
pub use verify::run_test;
