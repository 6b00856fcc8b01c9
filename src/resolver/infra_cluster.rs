// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resolves the client a controller uses to manage infra cluster objects

use super::context::{Interrupted, ResolveContext};
use super::kubeconfig::{context_namespace, namespace_override, parse_kubeconfig};
use crate::constants::secret_keys;
use crate::error::{InfraClusterError, Result};
use crate::kubernetes::{default_client_factory, ClientFactory, ClientOptions, ClusterClient};
use crate::types::InfraSecretRef;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::{config::KubeConfigOptions, Api, Config as KConfig};
use tracing::{debug, info, instrument};

/// Which cluster a [`Resolution`] points at
#[derive(Debug, Clone)]
pub enum ClusterTarget {
    /// The controller's own cluster; there is no separate connection config
    Local,
    /// A remote cluster described by the infra kubeconfig secret
    Remote(Box<KConfig>),
}

/// Outcome of a successful resolution
#[derive(Debug, Clone)]
pub struct Resolution {
    pub client: ClusterClient,
    pub namespace: String,
    pub target: ClusterTarget,
}

impl Resolution {
    pub fn is_local(&self) -> bool {
        matches!(self.target, ClusterTarget::Local)
    }

    /// Connection config of a remote target, `None` for the local cluster
    pub fn connection_config(&self) -> Option<&KConfig> {
        match &self.target {
            ClusterTarget::Local => None,
            ClusterTarget::Remote(config) => Some(&**config),
        }
    }
}

#[async_trait]
pub trait InfraClusterResolver: Send + Sync {
    /// Resolve the client, namespace and connection config for an optional
    /// infra kubeconfig secret reference.
    async fn resolve(
        &self,
        secret_ref: Option<&InfraSecretRef>,
        owner_namespace: &str,
        ctx: &ResolveContext,
    ) -> Result<Resolution>;
}

/// Builds infra cluster clients from kubeconfig secrets read through the local client
#[derive(Clone)]
pub struct InfraCluster {
    local: ClusterClient,
    factory: ClientFactory,
}

impl InfraCluster {
    pub fn new(local: ClusterClient) -> Self {
        Self::with_factory(local, default_client_factory())
    }

    pub fn with_factory(local: ClusterClient, factory: ClientFactory) -> Self {
        Self { local, factory }
    }

    pub fn local(&self) -> &ClusterClient {
        &self.local
    }

    async fn fetch_secret(
        &self,
        namespace: &str,
        name: &str,
        ctx: &ResolveContext,
    ) -> Result<Secret> {
        let secrets: Api<Secret> = Api::namespaced(self.local.client().clone(), namespace);

        debug!("Getting infra kubeconfig secret '{}/{}'", namespace, name);

        match ctx.run(secrets.get(name)).await {
            Ok(Ok(secret)) => Ok(secret),
            Ok(Err(source)) => Err(InfraClusterError::SecretFetch {
                namespace: namespace.to_string(),
                name: name.to_string(),
                source,
            }),
            Err(Interrupted::Cancelled) => Err(InfraClusterError::SecretFetchCancelled {
                namespace: namespace.to_string(),
                name: name.to_string(),
            }),
            Err(Interrupted::DeadlineExceeded) => Err(InfraClusterError::SecretFetchTimedOut {
                namespace: namespace.to_string(),
                name: name.to_string(),
            }),
        }
    }
}

#[async_trait]
impl InfraClusterResolver for InfraCluster {
    #[instrument(skip(self, secret_ref, ctx), fields(secret = secret_ref.map(|r| r.name.as_str())))]
    async fn resolve(
        &self,
        secret_ref: Option<&InfraSecretRef>,
        owner_namespace: &str,
        ctx: &ResolveContext,
    ) -> Result<Resolution> {
        let Some(secret_ref) = secret_ref else {
            debug!("No infra kubeconfig secret referenced, using local cluster");
            return Ok(Resolution {
                client: self.local.clone(),
                namespace: owner_namespace.to_string(),
                target: ClusterTarget::Local,
            });
        };

        let secret_namespace = secret_ref.lookup_namespace(owner_namespace);
        let secret = self
            .fetch_secret(secret_namespace, &secret_ref.name, ctx)
            .await?;

        let data = secret.data.unwrap_or_default();
        let Some(kubeconfig_bytes) = data.get(secret_keys::KUBECONFIG) else {
            return Err(InfraClusterError::MissingKubeconfigKey {
                namespace: secret_namespace.to_string(),
                name: secret_ref.name.clone(),
            });
        };

        let kubeconfig = parse_kubeconfig(&kubeconfig_bytes.0)?;

        let mut namespace = context_namespace(&kubeconfig)?;
        if let Some(pinned) = namespace_override(&data)? {
            debug!("Namespace '{}' from secret overrides '{}'", pinned, namespace);
            namespace = pinned;
        }

        let mut config =
            KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .map_err(InfraClusterError::ConnectionConfig)?;
        // Clients built from the config default to the resolved namespace
        config.default_namespace = namespace.clone();

        let options = ClientOptions {
            scheme: self.local.scheme().clone(),
        };
        let client = (self.factory)(config.clone(), options)
            .map_err(InfraClusterError::ClientConstruction)?;

        info!(
            "Resolved infra cluster {} (namespace {}) from secret {}/{}",
            config.cluster_url, namespace, secret_namespace, secret_ref.name
        );

        Ok(Resolution {
            client,
            namespace,
            target: ClusterTarget::Remote(Box::new(config)),
        })
    }
}
