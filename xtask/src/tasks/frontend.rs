use std::process::{Command, ExitStatus};

use crate::{check_trunk_exists, project_root};

pub fn frontend() -> Result<(), anyhow::Error> {
    println!("Building frontend...");
    build_frontend()?;
    Ok(())
}

pub fn build_frontend() -> Result<ExitStatus, anyhow::Error> {
    check_trunk_exists()?;
    let build = Command::new("trunk")
        .current_dir(
            project_root()
                .join("services")
                .join("newsletter-frontend")
                .join("crate"),
        )
        .args(["build", "--release"])
        .status()?;
    Ok(build)
}
