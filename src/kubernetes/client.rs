// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Scheme-aware client handle and the factory used to build remote clients

use super::scheme::{describe, gvk_of, Scheme};
use crate::error::{BoxError, InfraClusterError, Result};
use k8s_openapi::NamespaceResourceScope;
use kube::{Api, Client, Config as KConfig, Resource};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

/// Options handed to a [`ClientFactory`] together with the connection config
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Kinds the new client must be able to decode
    pub scheme: Arc<Scheme>,
}

/// Builds a client for a connection config.
///
/// Injected into the resolver so tests can build clients without a real API
/// server behind them.
pub type ClientFactory = Arc<
    dyn Fn(KConfig, ClientOptions) -> std::result::Result<ClusterClient, BoxError> + Send + Sync,
>;

/// Factory backed by `kube::Client::try_from`
pub fn default_client_factory() -> ClientFactory {
    Arc::new(
        |config: KConfig, options: ClientOptions| -> std::result::Result<ClusterClient, BoxError> {
            Ok(ClusterClient::from_config(config, options)?)
        },
    )
}

/// Namespace and name of a namespaced object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey {
    pub namespace: String,
    pub name: String,
}

impl ObjectKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// A Kubernetes client bound to the scheme of kinds it may decode
#[derive(Clone)]
pub struct ClusterClient {
    client: Client,
    scheme: Arc<Scheme>,
}

impl ClusterClient {
    pub fn new(client: Client, scheme: Scheme) -> Self {
        Self::with_shared_scheme(client, Arc::new(scheme))
    }

    pub fn with_shared_scheme(client: Client, scheme: Arc<Scheme>) -> Self {
        Self { client, scheme }
    }

    /// Build a client for `config`; no request is sent until the client is used
    pub fn from_config(
        config: KConfig,
        options: ClientOptions,
    ) -> std::result::Result<Self, kube::Error> {
        debug!("Building client for {}", config.cluster_url);
        let client = Client::try_from(config)?;
        Ok(Self::with_shared_scheme(client, options.scheme))
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn scheme(&self) -> &Arc<Scheme> {
        &self.scheme
    }

    /// Typed API for a namespaced kind, if the kind is in the scheme
    pub fn namespaced_api<K>(&self, namespace: &str) -> Result<Api<K>>
    where
        K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>,
    {
        self.ensure_registered::<K>()?;
        Ok(Api::namespaced(self.client.clone(), namespace))
    }

    /// Typed API across all namespaces, or for a cluster-scoped kind
    pub fn all_api<K>(&self) -> Result<Api<K>>
    where
        K: Resource<DynamicType = ()>,
    {
        self.ensure_registered::<K>()?;
        Ok(Api::all(self.client.clone()))
    }

    /// Get a namespaced object by key
    pub async fn get<K>(&self, key: &ObjectKey) -> Result<K>
    where
        K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
            + Clone
            + DeserializeOwned
            + Debug,
    {
        let api = self.namespaced_api::<K>(&key.namespace)?;
        Ok(api.get(&key.name).await?)
    }

    fn ensure_registered<K>(&self) -> Result<()>
    where
        K: Resource<DynamicType = ()>,
    {
        if self.scheme.recognizes::<K>() {
            Ok(())
        } else {
            Err(InfraClusterError::UnregisteredKind(describe(&gvk_of::<K>())))
        }
    }
}

impl Debug for ClusterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClusterClient")
            .field("default_namespace", &self.client.default_namespace())
            .field("kinds", &self.scheme.len())
            .finish()
    }
}
