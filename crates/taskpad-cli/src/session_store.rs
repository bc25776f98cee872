//! On-disk persistence for the CLI session token.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use taskpad_client::Session;

use crate::client::{CliError, CliResult};

const SESSION_DIR: &str = ".taskpad";
const SESSION_FILE: &str = "session.json";

/// Resolve the session file: explicit path, else `$HOME/.taskpad/session.json`.
pub(crate) fn resolve_path(explicit: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        home.map_or_else(
            || PathBuf::from(SESSION_DIR).join(SESSION_FILE),
            |home| home.join(SESSION_DIR).join(SESSION_FILE),
        )
    })
}

/// Load a stored session; a missing file means logged out.
pub(crate) fn load(path: &Path) -> CliResult<Session> {
    match fs::read(path) {
        Ok(bytes) => serde_json::from_slice(&bytes)
            .with_context(|| format!("session file '{}' is corrupt", path.display()))
            .map_err(CliError::failure),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(Session::new()),
        Err(err) => Err(CliError::failure(anyhow!(
            "failed to read session file '{}': {err}",
            path.display()
        ))),
    }
}

/// Persist `session`, creating parent directories as needed.
pub(crate) fn save(path: &Path, session: &Session) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))
            .map_err(CliError::failure)?;
    }
    let json = serde_json::to_vec_pretty(session)
        .map_err(|err| CliError::failure(anyhow!("failed to encode session: {err}")))?;
    fs::write(path, json)
        .with_context(|| format!("failed to write session file '{}'", path.display()))
        .map_err(CliError::failure)
}

/// Remove the stored session; succeeds when nothing was stored.
pub(crate) fn clear(path: &Path) -> CliResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(CliError::failure(anyhow!(
            "failed to remove session file '{}': {err}",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_explicit_then_home() {
        let explicit = resolve_path(Some(PathBuf::from("/tmp/s.json")), Some("/home/a".into()));
        assert_eq!(explicit, PathBuf::from("/tmp/s.json"));
        let home = resolve_path(None, Some(PathBuf::from("/home/a")));
        assert_eq!(home, PathBuf::from("/home/a/.taskpad/session.json"));
        let fallback = resolve_path(None, None);
        assert_eq!(fallback, PathBuf::from(".taskpad/session.json"));
    }

    #[test]
    fn save_load_clear_cycle() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("session.json");

        assert_eq!(load(&path).map_err(|err| anyhow!("{err}"))?, Session::new());

        save(&path, &Session::with_token("tok-7")).map_err(|err| anyhow!("{err}"))?;
        let restored = load(&path).map_err(|err| anyhow!("{err}"))?;
        assert_eq!(restored.token(), Some("tok-7"));

        clear(&path).map_err(|err| anyhow!("{err}"))?;
        assert!(!path.exists());
        clear(&path).map_err(|err| anyhow!("{err}"))?;
        Ok(())
    }

    #[test]
    fn corrupt_file_is_a_failure() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");
        fs::write(&path, "not json")?;
        let err = load(&path).expect_err("corrupt session should fail");
        assert_eq!(err.exit_code(), 3);
        Ok(())
    }
}
