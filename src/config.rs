// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as vars, DEFAULT_RESOLVE_TIMEOUT_SECS};
use crate::types::InfraSecretRef;
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Configuration for the `infracluster` binary, loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace of the object that triggers resolution
    pub owner_namespace: String,
    /// Infra kubeconfig secret; `None` resolves to the local cluster
    pub secret_ref: Option<InfraSecretRef>,
    /// Bound on the secret fetch; `None` waits indefinitely
    pub resolve_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let owner_namespace = lookup(vars::OWNER_NAMESPACE)
            .filter(|ns| !ns.trim().is_empty())
            .with_context(|| format!("{} environment variable not set", vars::OWNER_NAMESPACE))?;

        let secret_ref = lookup(vars::SECRET_NAME)
            .filter(|name| !name.trim().is_empty())
            .map(|name| InfraSecretRef {
                name,
                namespace: lookup(vars::SECRET_NAMESPACE),
            });

        let timeout_secs = match lookup(vars::RESOLVE_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse::<u64>().with_context(|| {
                format!("{} must be a number of seconds, got '{}'", vars::RESOLVE_TIMEOUT_SECS, raw)
            })?,
            None => DEFAULT_RESOLVE_TIMEOUT_SECS,
        };
        let resolve_timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        Ok(Config {
            owner_namespace,
            secret_ref,
            resolve_timeout,
        })
    }
}
