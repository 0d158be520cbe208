use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use chrono::Utc;

fn main() {
    // Define the output path for the version.rs file
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = PathBuf::from(out_dir).join("version.rs");

    // Helper function returning git output, or "unknown" when the build
    // happens outside a git checkout
    fn git(args: &[&str]) -> String {
        Command::new("git")
            .args(args)
            .output()
            .ok()
            .filter(|out| out.status.success())
            .and_then(|out| String::from_utf8(out.stdout).ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "unknown".to_string())
    }

    let git_hash = git(&["log", "-1", "--pretty=format:%H"]);
    let git_branch = git(&["branch", "--show-current"]);
    let git_commit_date = git(&["log", "-1", "--pretty=format:%as"]);
    let build_date = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

    // Write the version information to the version.rs file
    fs::write(
        &dest_path,
        format!(
            r#"
#[allow(dead_code)]
pub const GIT_HASH: &str = "{}";
#[allow(dead_code)]
pub const GIT_BRANCH: &str = "{}";
#[allow(dead_code)]
pub const GIT_COMMIT_DATE: &str = "{}";
#[allow(dead_code)]
pub const BUILD_DATE: &str = "{}";
"#,
            git_hash, git_branch, git_commit_date, build_date
        ),
    )
    .unwrap();
}
