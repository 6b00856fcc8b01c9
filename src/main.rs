// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::Client;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use infracluster::config::Config;
use infracluster::resolver::ClusterTarget;
use infracluster::{ClusterClient, InfraCluster, InfraClusterResolver, ResolveContext, Scheme};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: owner_namespace={}, secret={:?}",
        config.owner_namespace, config.secret_ref
    );

    let client = Client::try_default().await?;
    info!("Connected to local Kubernetes cluster");

    let local = ClusterClient::new(client, Scheme::with_core_kinds());
    let mut kinds: Vec<&str> = local.scheme().kinds().map(|gvk| gvk.kind.as_str()).collect();
    kinds.sort_unstable();
    debug!("Client scheme registers {}", kinds.join(", "));
    let resolver = InfraCluster::new(local);

    let shutdown = CancellationToken::new();
    let mut ctx = ResolveContext::with_token(shutdown.child_token());
    if let Some(timeout) = config.resolve_timeout {
        ctx = ctx.with_timeout(timeout);
    }
    if let Some(deadline) = ctx.deadline() {
        debug!(
            "Secret fetch must finish within {:?}",
            deadline.saturating_duration_since(Instant::now())
        );
    }
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling resolution");
            shutdown.cancel();
        }
    });

    let resolution = resolver
        .resolve(config.secret_ref.as_ref(), &config.owner_namespace, &ctx)
        .await
        .context("failed to resolve infra cluster client")?;

    match &resolution.target {
        ClusterTarget::Local => info!(
            "Using local cluster, namespace {}",
            resolution.namespace
        ),
        ClusterTarget::Remote(remote) => info!(
            "Using infra cluster {}, namespace {}",
            remote.cluster_url, resolution.namespace
        ),
    }

    let namespaces = resolution.client.all_api::<Namespace>()?;
    match namespaces
        .get_opt(&resolution.namespace)
        .await
        .context("failed to reach resolved cluster")?
    {
        Some(_) => info!("Namespace {} exists on resolved cluster", resolution.namespace),
        None => warn!("Namespace {} does not exist on resolved cluster", resolution.namespace),
    }

    Ok(())
}
