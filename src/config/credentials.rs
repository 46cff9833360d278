//! Credential resolution and URI redaction for [`BackplaneConfig`].
//!
//! Nothing in here logs. Callers decide what to print, and should only ever
//! print [`BackplaneConfig::redis_uri_masked`].

use std::fs;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::BackplaneError;

use super::types::BackplaneConfig;

/// Replaces the password wherever it appears in a masked URI.
pub const REDACTION_MARKER: &str = "<HIDDEN>";

/// Password component of a URI's userinfo, percent-decoded.
///
/// `user:pw@` and `:pw@` yield `pw`. A userinfo without a colon is a bare
/// password: usernames are never embedded in backplane URIs. Empty passwords
/// come back as `None`.
pub fn uri_password(uri: &str) -> Result<Option<String>, BackplaneError> {
    Ok(raw_uri_password(uri)?
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned()))
}

/// Password text exactly as written in `uri`, escapes included.
///
/// The URI is validated with [`Url::parse`], but the password is cut from
/// the input itself because `Url` re-encodes userinfo on serialisation.
fn raw_uri_password(uri: &str) -> Result<Option<&str>, BackplaneError> {
    Url::parse(uri)?;

    let Some((_, rest)) = uri.split_once("://") else {
        return Ok(None);
    };
    let authority = match rest.find(['/', '?', '#']) {
        Some(end) => &rest[..end],
        None => rest,
    };
    let Some((userinfo, _)) = authority.rsplit_once('@') else {
        return Ok(None);
    };
    let password = match userinfo.split_once(':') {
        Some((_, password)) => password,
        None => userinfo,
    };
    Ok(non_empty(Some(password)))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl BackplaneConfig {
    /// Configured username, with empty normalised to `None`.
    pub fn redis_username(&self) -> Option<&str> {
        non_empty(self.redis_username.as_deref())
    }

    /// Resolve the password to authenticate with.
    ///
    /// The first source that yields a value wins:
    ///
    /// 1. the password embedded in `redisUri`;
    /// 2. the full contents of `redisCredentialFile`, read on every call;
    /// 3. the plain `redisPassword` field.
    ///
    /// # Errors
    ///
    /// [`BackplaneError::InvalidUri`] if `redisUri` does not parse, and
    /// [`BackplaneError::CredentialFile`] if the credential file is configured
    /// but cannot be read. A broken file never falls through to step 3.
    pub fn redis_password(&self) -> Result<Option<String>, BackplaneError> {
        if let Some(uri) = self.redis_uri.as_deref() {
            if let Some(password) = uri_password(uri)? {
                return Ok(Some(password));
            }
        }

        if let Some(path) = self.redis_credential_file() {
            return fs::read_to_string(path)
                .map(Some)
                .map_err(|source| BackplaneError::CredentialFile {
                    path: path.to_path_buf(),
                    source,
                });
        }

        Ok(non_empty(self.redis_password.as_deref()).map(str::to_owned))
    }

    /// The connection URI with its password replaced by [`REDACTION_MARKER`].
    ///
    /// Returns `Ok(None)` when no URI is configured, and the URI unchanged when
    /// it carries no password. The replacement is a plain substring replace,
    /// so the password text is hidden wherever else it appears in the URI too.
    pub fn redis_uri_masked(&self) -> Result<Option<String>, BackplaneError> {
        let Some(uri) = self.redis_uri.as_deref() else {
            return Ok(None);
        };
        let masked = match raw_uri_password(uri)? {
            Some(password) => uri.replace(password, REDACTION_MARKER),
            None => uri.to_owned(),
        };
        Ok(Some(masked))
    }
}
