//! Client-side session cache: the single source of truth for "who is
//! signed in". Backed by the remote auth API for mutations and by a JSON
//! snapshot on disk so the profile survives restarts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::models::UserProfile;
use crate::services::api::{AuthApi, ChangePasswordRequest, LoginRequest, SignupRequest};

pub struct AuthSession {
    api: Box<dyn AuthApi>,
    snapshot_path: PathBuf,
    user: Option<UserProfile>,
}

impl AuthSession {
    /// Opens the session, restoring any cached profile from disk without a
    /// network call. A missing or corrupt snapshot means "not signed in".
    pub fn open(api: Box<dyn AuthApi>, snapshot_path: impl Into<PathBuf>) -> Self {
        let snapshot_path = snapshot_path.into();
        let user = load_snapshot(&snapshot_path);
        Self {
            api,
            snapshot_path,
            user,
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// True iff a profile is cached. Deliberately does not consult the
    /// server: the session cookie may have expired without the cache
    /// noticing, and the next authenticated call surfaces that.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// On success the profile is cached and persisted; on failure the cache
    /// is left untouched and the error carries the server's message.
    pub async fn login(&mut self, credentials: &LoginRequest) -> anyhow::Result<UserProfile> {
        let profile = self.api.login(credentials).await?;
        self.set_user(profile.clone());
        tracing::info!(user = %profile.email, "signed in");
        Ok(profile)
    }

    /// Same contract as [`login`](Self::login) for the account-creation path.
    pub async fn signup(&mut self, data: &SignupRequest) -> anyhow::Result<UserProfile> {
        let profile = self.api.signup(data).await?;
        self.set_user(profile.clone());
        tracing::info!(user = %profile.email, "account created");
        Ok(profile)
    }

    /// Remote logout is best-effort; the local cache is cleared no matter
    /// what the server says.
    pub async fn logout(&mut self) {
        if let Err(err) = self.api.logout().await {
            tracing::warn!("logout request failed: {err:#}");
        }
        self.clear();
    }

    /// Leaves the cached profile as-is. The server invalidates the old
    /// session on success, so callers should force a fresh login afterward.
    pub async fn change_password(&self, data: &ChangePasswordRequest) -> anyhow::Result<()> {
        self.api.change_password(data).await
    }

    /// Direct cache overwrite, used after profile-update round-trips.
    pub fn set_user(&mut self, profile: UserProfile) {
        if let Err(err) = persist_snapshot(&self.snapshot_path, &profile) {
            tracing::warn!("failed to persist session snapshot: {err:#}");
        }
        self.user = Some(profile);
    }

    pub fn clear(&mut self) {
        self.user = None;
        if self.snapshot_path.exists() {
            if let Err(err) = fs::remove_file(&self.snapshot_path) {
                tracing::warn!("failed to remove session snapshot: {err}");
            }
        }
    }

    /// The underlying auth API, for flows that do not touch the cache
    /// (forgot/reset password, profile updates).
    pub fn api(&self) -> &dyn AuthApi {
        self.api.as_ref()
    }
}

fn load_snapshot(path: &Path) -> Option<UserProfile> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(err) => {
            tracing::warn!("ignoring corrupt session snapshot: {err}");
            None
        }
    }
}

fn persist_snapshot(path: &Path, profile: &UserProfile) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create session directory")?;
        }
    }
    let body = serde_json::to_string_pretty(profile).context("failed to encode session snapshot")?;
    fs::write(path, body).context("failed to write session snapshot")
}
