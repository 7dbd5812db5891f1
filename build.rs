use std::path::{Path, PathBuf};
use std::process::Command;
use std::{env, fs};

/// Embeds the short commit hash as PHOENYX_GIT_HASH, "unknown" outside a checkout.
fn main() {
    let hash = git_short_hash().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=PHOENYX_GIT_HASH={hash}");

    if let Some(git_dir) = git_dir() {
        for name in ["HEAD", "refs", "packed-refs"] {
            let path = git_dir.join(name);
            if path.exists() {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())?;
    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!hash.is_empty()).then_some(hash)
}

fn git_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os("GIT_DIR") {
        return Some(PathBuf::from(dir));
    }

    let dot_git = Path::new(".git");
    if dot_git.is_dir() {
        return Some(dot_git.to_path_buf());
    }

    // worktrees and submodules point at the real directory from a file
    let contents = fs::read_to_string(dot_git).ok()?;
    // relative targets resolve against the crate root, which is the cwd here
    let target = contents.strip_prefix("gitdir:")?.trim();
    Some(PathBuf::from(target))
}
