use std::{
    env,
    path::{Path, PathBuf},
};

use vergen_gix::{Emitter, GixBuilder};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Packagers building from a source tarball can pin the SHA explicitly.
    println!("cargo:rerun-if-env-changed=HIPSMOKE_BUILD_SHA_SHORT");

    if let Some(sha) = env::var("HIPSMOKE_BUILD_SHA_SHORT")
        .ok()
        .and_then(|raw| short_sha(&raw))
    {
        emit_fallbacks(Some(&sha));
        return;
    }

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    let Some(repo_root) = find_git_root(Path::new(&manifest_dir)) else {
        emit_fallbacks(None);
        return;
    };

    // Git probing is best-effort; a missing or broken repo must not fail the build.
    let git = match GixBuilder::default()
        .repo_path(Some(repo_root))
        .sha(true)
        .dirty(false)
        .build()
    {
        Ok(git) => git,
        Err(err) => {
            println!("cargo:warning=hipsmoke-build-info: git probing disabled: {err}");
            emit_fallbacks(None);
            return;
        }
    };

    if let Err(err) = Emitter::default()
        .add_instructions(&git)
        .and_then(|e| e.emit())
    {
        println!("cargo:warning=hipsmoke-build-info: vergen emit failed: {err}");
        emit_fallbacks(None);
    }
}

/// Emit the variables `lib.rs` reads with `env!()`; they must always exist.
fn emit_fallbacks(sha: Option<&str>) {
    println!(
        "cargo:rustc-env=VERGEN_GIT_SHA={}",
        sha.unwrap_or("unknown")
    );
    println!("cargo:rustc-env=VERGEN_GIT_DIRTY=false");
}

fn short_sha(raw: &str) -> Option<String> {
    let candidate: String = raw.trim().chars().take(7).collect();
    (candidate.len() == 7 && candidate.chars().all(|c| c.is_ascii_hexdigit()))
        .then_some(candidate)
}

fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
