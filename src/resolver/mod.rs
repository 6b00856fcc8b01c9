// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Infra cluster client resolution from kubeconfig secrets.

pub mod context;
pub mod infra_cluster;
pub mod kubeconfig;

pub use context::{Interrupted, ResolveContext};
pub use infra_cluster::{ClusterTarget, InfraCluster, InfraClusterResolver, Resolution};
