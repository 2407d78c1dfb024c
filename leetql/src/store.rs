//! JSON dump of an aggregated submission history.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::types::Submission;

/// Write `submissions` to `path` as an indented JSON array.
///
/// The dump goes to a sibling `*.tmp` file first and is renamed over `path`, so a
/// failed write leaves any previous file untouched.
pub fn write_submissions(path: &Path, submissions: &[Submission]) -> Result<()> {
    let json = serde_json::to_string_pretty(submissions)?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json.as_bytes())?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    debug!(path = %path.display(), count = submissions.len(), "wrote submissions");
    Ok(())
}

/// Load a dump written by [`write_submissions`].
pub fn read_submissions(path: &Path) -> Result<Vec<Submission>> {
    let raw = fs::read(path)?;
    Ok(serde_json::from_slice(&raw)?)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tmp_path_is_sibling() {
        let tmp = tmp_path(Path::new("/data/out/alice_submissions.json"));
        assert_eq!(tmp, PathBuf::from("/data/out/alice_submissions.json.tmp"));
    }
}
