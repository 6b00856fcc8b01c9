// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client handles, their type scheme and client construction.

pub mod client;
pub mod scheme;

pub use client::{default_client_factory, ClientFactory, ClientOptions, ClusterClient, ObjectKey};
pub use scheme::Scheme;
