//! Shared runtime and SDK configuration for the AWS clients.
//!
//! Responsibilities:
//! - Own a current-thread tokio runtime used to block on SDK futures.
//! - Load the default SDK configuration lazily, once.
//! - Load an SDK configuration for a specific profile and region.
//!
//! Invariants:
//! - The default configuration is loaded on first use, so credentials
//!   exported earlier in the same process are picked up.
//! - `block_on` is never called from inside an async context.

use std::future::Future;
use std::sync::OnceLock;

use aws_config::{BehaviorVersion, Region, SdkConfig};

use crate::error::{ClientError, Result};

pub struct AwsContext {
    runtime: tokio::runtime::Runtime,
    default_config: OnceLock<SdkConfig>,
}

impl AwsContext {
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ClientError::Runtime(e.to_string()))?;

        Ok(Self {
            runtime,
            default_config: OnceLock::new(),
        })
    }

    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// SDK configuration from the standard environment and profile chain.
    pub(crate) fn default_config(&self) -> &SdkConfig {
        self.default_config.get_or_init(|| {
            tracing::debug!("Loading default AWS configuration");
            self.block_on(aws_config::defaults(BehaviorVersion::latest()).load())
        })
    }

    /// SDK configuration for `profile` (or the default chain) pinned to `region`.
    pub(crate) fn config_for(&self, profile: Option<&str>, region: &str) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()));
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        self.block_on(loader.load())
    }
}

impl std::fmt::Debug for AwsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsContext")
            .field("default_config_loaded", &self.default_config.get().is_some())
            .finish()
    }
}
