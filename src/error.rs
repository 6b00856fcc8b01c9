// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

/// Boxed error returned by client factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum InfraClusterError {
    #[error("failed to fetch infra kubeconfig secret {namespace}/{name}: {source}")]
    SecretFetch {
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("fetch of infra kubeconfig secret {namespace}/{name} was cancelled")]
    SecretFetchCancelled { namespace: String, name: String },

    #[error("fetch of infra kubeconfig secret {namespace}/{name} timed out")]
    SecretFetchTimedOut { namespace: String, name: String },

    #[error("infra kubeconfig secret {namespace}/{name}: 'kubeconfig' key is missing")]
    MissingKubeconfigKey { namespace: String, name: String },

    #[error("failed to parse infra kubeconfig: {0}")]
    KubeconfigParse(#[source] serde_yaml::Error),

    #[error("failed to resolve namespace from infra kubeconfig: {0}")]
    NamespaceResolution(String),

    #[error("failed to create REST config: {0}")]
    ConnectionConfig(#[source] kube::config::KubeconfigError),

    #[error("failed to create infra cluster client: {0}")]
    ClientConstruction(#[source] BoxError),

    #[error("kind {0} is not registered in the client scheme")]
    UnregisteredKind(String),

    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),
}

pub type Result<T> = std::result::Result<T, InfraClusterError>;
