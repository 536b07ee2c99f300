//! External editor launch for `fitsch config --edit`.

use anyhow::{Result, anyhow, bail};
use std::env;
use std::path::Path;
use std::process::Command;

/// Opens `path` in the first available editor: `$VISUAL`, `$EDITOR`, then
/// `nvim`/`vim`/`vi`. Env values may carry arguments (`code --wait`).
pub fn edit_file_with_system_editor(path: &Path) -> Result<()> {
    for candidate in editor_candidates() {
        let mut words = candidate.split_whitespace();
        let Some(program) = words.next() else {
            continue;
        };

        match Command::new(program).args(words).arg(path).status() {
            Ok(status) if status.success() => return Ok(()),
            Ok(status) => bail!("editor `{candidate}` exited with {status}"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
            Err(err) => return Err(anyhow!("failed to launch editor `{candidate}`: {err}")),
        }
    }

    bail!("no editor found (tried $VISUAL, $EDITOR, nvim, vim, vi)")
}

fn editor_candidates() -> Vec<String> {
    let mut candidates: Vec<String> = ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .collect();

    candidates.extend(["nvim", "vim", "vi"].map(str::to_owned));
    candidates
}
