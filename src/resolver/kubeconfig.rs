// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubeconfig parsing and namespace selection for infra kubeconfig secrets

use crate::constants::{secret_keys, DEFAULT_NAMESPACE};
use crate::error::{InfraClusterError, Result};
use k8s_openapi::ByteString;
use kube::config::Kubeconfig;
use std::collections::BTreeMap;
use tracing::warn;

/// Parse kubeconfig bytes as stored in a secret
pub fn parse_kubeconfig(bytes: &[u8]) -> Result<Kubeconfig> {
    serde_yaml::from_slice(bytes).map_err(InfraClusterError::KubeconfigParse)
}

/// Namespace of the kubeconfig's current context, `default` when the context sets none
pub fn context_namespace(kubeconfig: &Kubeconfig) -> Result<String> {
    let Some(current) = kubeconfig
        .current_context
        .as_deref()
        .filter(|name| !name.is_empty())
    else {
        return Err(InfraClusterError::NamespaceResolution(
            "kubeconfig has no current-context".to_string(),
        ));
    };

    let Some(named) = kubeconfig.contexts.iter().find(|c| c.name == current) else {
        return Err(InfraClusterError::NamespaceResolution(format!(
            "current-context '{}' not found in kubeconfig",
            current
        )));
    };

    Ok(named
        .context
        .as_ref()
        .and_then(|c| c.namespace.as_deref())
        .filter(|ns| !ns.is_empty())
        .unwrap_or(DEFAULT_NAMESPACE)
        .to_string())
}

/// The `namespace` entry of the secret data, trimmed.
///
/// A present entry always wins over the kubeconfig, even when blank. Bytes that
/// are not valid UTF-8 are rejected rather than converted lossily, since they
/// can never form a valid namespace name.
pub fn namespace_override(data: &BTreeMap<String, ByteString>) -> Result<Option<String>> {
    let Some(raw) = data.get(secret_keys::NAMESPACE) else {
        return Ok(None);
    };

    let namespace = std::str::from_utf8(&raw.0).map_err(|e| {
        InfraClusterError::NamespaceResolution(format!(
            "'{}' entry of secret is not valid UTF-8: {}",
            secret_keys::NAMESPACE,
            e
        ))
    })?;

    let namespace = namespace.trim();
    if namespace.is_empty() {
        warn!(
            "Blank '{}' entry in infra kubeconfig secret overrides the kubeconfig namespace",
            secret_keys::NAMESPACE
        );
    }

    Ok(Some(namespace.to_string()))
}
