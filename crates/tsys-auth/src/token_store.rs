use std::fs;
use std::path::PathBuf;

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "tsys-cli";
const KEYRING_USER: &str = "bearer-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";
const ROLE_FILE_NAME: &str = "role";

/// Returns the keyring service name.
///
/// Defaults to `"tsys-cli"`. Override via `TSYS_KEYRING_SERVICE` env var
/// for testing (e.g., `"tsys-cli-test"`) to avoid touching production credentials.
fn keyring_service() -> String {
    std::env::var("TSYS_KEYRING_SERVICE").unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Store the bearer token in the OS keychain. Falls back to file if keyring
/// unavailable.
///
/// The write is verified by reading the token back through a fresh entry:
/// some keyring backends accept writes that do not survive the process, and
/// those must land in the file tier instead.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if both keyring and file storage fail.
pub fn store(token: &str) -> Result<(), AuthError> {
    match keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        Ok(entry) => match entry.set_password(token) {
            Ok(()) => {
                if keyring_read_back(token) {
                    Ok(())
                } else {
                    tracing::warn!("keyring write did not read back; falling back to file");
                    store_file(token)
                }
            }
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                store_file(token)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            store_file(token)
        }
    }
}

/// Whether a fresh keyring entry yields exactly `token`.
fn keyring_read_back(token: &str) -> bool {
    keyring::Entry::new(&keyring_service(), KEYRING_USER)
        .and_then(|entry| entry.get_password())
        .is_ok_and(|stored| stored == token)
}

/// Load the bearer token. Priority: keyring → `TSYS_AUTH__TOKEN` env →
/// file (`~/.tsys/credentials`).
#[must_use]
pub fn load() -> Option<String> {
    // 1. Keyring
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && let Ok(token) = entry.get_password()
        && !token.is_empty()
    {
        return Some(token);
    }

    // 2. Environment variable
    if let Ok(token) = std::env::var("TSYS_AUTH__TOKEN") {
        if !token.is_empty() {
            return Some(token);
        }
    }

    // 3. File fallback
    load_file()
}

/// Store the cached role string. The role is not a secret, so it only ever
/// lives in `~/.tsys/role`, never in the keyring.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the file cannot be written.
pub fn store_role(role: &str) -> Result<(), AuthError> {
    let path = role_path()?;
    ensure_credentials_dir(&path)?;
    fs::write(&path, role)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))
}

/// Load the cached role, if any.
#[must_use]
pub fn load_role() -> Option<String> {
    let path = role_path().ok()?;
    fs::read_to_string(&path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Remove the cached role file, if present.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the file exists but cannot be
/// removed.
pub fn delete_role() -> Result<(), AuthError> {
    let path = role_path()?;
    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

/// Delete stored credentials from keyring and file, including the cached role.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if a credentials file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    // Delete from keyring (ignore errors — may not exist)
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        let _ = entry.delete_credential();
    }

    for path in [credentials_path()?, role_path()?] {
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
    }

    Ok(())
}

/// Detect which tier the current token came from (for status display).
#[must_use]
pub fn detect_token_source() -> Option<String> {
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && entry.get_password().is_ok_and(|t| !t.is_empty())
    {
        return Some("keyring".into());
    }
    if std::env::var("TSYS_AUTH__TOKEN").is_ok_and(|t| !t.is_empty()) {
        return Some("env".into());
    }
    if load_file().is_some() {
        return Some("file".into());
    }
    None
}

// --- Private file helpers ---

fn credentials_dir() -> Result<PathBuf, AuthError> {
    if let Ok(dir) = std::env::var("TSYS_CREDENTIALS_DIR") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    dirs::home_dir().map(|h| h.join(".tsys")).ok_or_else(|| {
        AuthError::TokenStoreError("home directory not found — cannot store credentials".into())
    })
}

fn credentials_path() -> Result<PathBuf, AuthError> {
    credentials_dir().map(|d| d.join(CREDENTIALS_FILE_NAME))
}

fn role_path() -> Result<PathBuf, AuthError> {
    credentials_dir().map(|d| d.join(ROLE_FILE_NAME))
}

fn ensure_credentials_dir(path: &std::path::Path) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    Ok(())
}

fn store_file(token: &str) -> Result<(), AuthError> {
    let path = credentials_path()?;
    ensure_credentials_dir(&path)?;
    fs::write(&path, token)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

fn load_file() -> Option<String> {
    let path = credentials_path().ok()?;
    fs::read_to_string(&path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
