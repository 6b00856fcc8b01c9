// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Data keys read from the infra kubeconfig secret
pub mod secret_keys {
    /// Required: the kubeconfig file contents
    pub const KUBECONFIG: &str = "kubeconfig";
    /// Optional: overrides the namespace of the kubeconfig's current context
    pub const NAMESPACE: &str = "namespace";
}

/// Namespace used when the active kubeconfig context does not set one
pub const DEFAULT_NAMESPACE: &str = "default";

/// Environment variables read by the `infracluster` binary
pub mod env {
    pub const OWNER_NAMESPACE: &str = "OWNER_NAMESPACE";
    pub const SECRET_NAME: &str = "INFRA_KUBECONFIG_SECRET_NAME";
    pub const SECRET_NAMESPACE: &str = "INFRA_KUBECONFIG_SECRET_NAMESPACE";
    pub const RESOLVE_TIMEOUT_SECS: &str = "RESOLVE_TIMEOUT_SECS";
}

/// Default bound on the secret fetch, in seconds
pub const DEFAULT_RESOLVE_TIMEOUT_SECS: u64 = 30;
