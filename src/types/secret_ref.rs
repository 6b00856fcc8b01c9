// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::api::core::v1::ObjectReference;
use serde::{Deserialize, Serialize};

/// Reference to a secret holding an infra cluster kubeconfig.
///
/// Meant to be embedded in a custom resource spec, so it serializes in the
/// same shape as the other Kubernetes references there.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfraSecretRef {
    pub name: String,
    /// Namespace of the secret; empty or unset means the owner's namespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl InfraSecretRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Namespace to look the secret up in
    pub fn lookup_namespace<'a>(&'a self, owner_namespace: &'a str) -> &'a str {
        self.namespace
            .as_deref()
            .filter(|ns| !ns.is_empty())
            .unwrap_or(owner_namespace)
    }
}

impl From<&ObjectReference> for InfraSecretRef {
    fn from(reference: &ObjectReference) -> Self {
        Self {
            name: reference.name.clone().unwrap_or_default(),
            namespace: reference.namespace.clone(),
        }
    }
}
