// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod resolver;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use error::{InfraClusterError, Result};
pub use kubernetes::{ClusterClient, Scheme};
pub use resolver::{InfraCluster, InfraClusterResolver, ResolveContext, Resolution};
pub use types::InfraSecretRef;
