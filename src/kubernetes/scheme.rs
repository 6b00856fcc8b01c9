// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Registry of the API kinds a client is able to decode.

use k8s_openapi::api::core::v1::{ConfigMap, Namespace, Pod, Secret, Service, ServiceAccount};
use kube::core::{ApiResource, GroupVersionKind};
use kube::Resource;
use std::collections::HashSet;

/// Set of kinds known to a client.
///
/// Typed access through a [`ClusterClient`](super::ClusterClient) is only
/// allowed for kinds registered here. A client built for a remote cluster is
/// handed the scheme of the local client, so both decode the same kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scheme {
    kinds: HashSet<GroupVersionKind>,
}

impl Scheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheme with the core kinds a controller typically touches
    pub fn with_core_kinds() -> Self {
        Self::new()
            .register::<Secret>()
            .register::<ConfigMap>()
            .register::<Namespace>()
            .register::<Pod>()
            .register::<Service>()
            .register::<ServiceAccount>()
    }

    pub fn register<K>(mut self) -> Self
    where
        K: Resource<DynamicType = ()>,
    {
        self.kinds.insert(gvk_of::<K>());
        self
    }

    /// Register a kind only known at runtime, e.g. a discovered CRD
    pub fn register_api_resource(&mut self, resource: &ApiResource) {
        self.kinds.insert(GroupVersionKind::gvk(
            &resource.group,
            &resource.version,
            &resource.kind,
        ));
    }

    pub fn recognizes<K>(&self) -> bool
    where
        K: Resource<DynamicType = ()>,
    {
        self.kinds.contains(&gvk_of::<K>())
    }

    pub fn contains(&self, gvk: &GroupVersionKind) -> bool {
        self.kinds.contains(gvk)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &GroupVersionKind> {
        self.kinds.iter()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

pub(crate) fn gvk_of<K>() -> GroupVersionKind
where
    K: Resource<DynamicType = ()>,
{
    GroupVersionKind::gvk(&K::group(&()), &K::version(&()), &K::kind(&()))
}

/// Human readable `group/version/Kind`, `version/Kind` for the core group
pub(crate) fn describe(gvk: &GroupVersionKind) -> String {
    if gvk.group.is_empty() {
        format!("{}/{}", gvk.version, gvk.kind)
    } else {
        format!("{}/{}/{}", gvk.group, gvk.version, gvk.kind)
    }
}
