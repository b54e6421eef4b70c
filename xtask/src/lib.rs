use std::path::{Path, PathBuf};
use std::process::Command;

pub mod tasks;

pub fn project_root() -> PathBuf {
    Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .expect("xtask is nested one level under the project root")
        .to_path_buf()
}

pub fn check_trunk_exists() -> Result<(), anyhow::Error> {
    let status = Command::new("trunk").arg("--version").output();
    match status {
        Ok(output) if output.status.success() => Ok(()),
        _ => anyhow::bail!("trunk is not available. Install it with `cargo install trunk`."),
    }
}
