// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for the registry client.
//!
//! The registry is deployed in two variants that differ in path prefix,
//! query-parameter names and the location of the stats endpoint. An
//! [`ApiProfile`] captures those differences so one client serves both.

use std::time::Duration;

use crate::network::TransportConfig;

/// Where the aggregate stats endpoint lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsPath {
    /// `/api/{version}/fonogramas/stats`
    Collection,
    /// `/api/{version}/stats`
    Root,
}

/// Deployment-specific naming of the registry API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiProfile {
    /// Path segment after `/api` for phonogram routes (`v1`), if any.
    pub api_version: Option<String>,
    /// Query parameter carrying the free-text search.
    pub search_param: String,
    /// Query parameter carrying the status filter.
    pub status_param: String,
    pub stats_location: StatsPath,
}

impl Default for ApiProfile {
    fn default() -> Self {
        Self::legacy()
    }
}

impl ApiProfile {
    /// Unversioned deployment: `/api/fonogramas`, `busca`, `status`.
    pub fn legacy() -> Self {
        ApiProfile {
            api_version: None,
            search_param: "busca".to_string(),
            status_param: "status".to_string(),
            stats_location: StatsPath::Collection,
        }
    }

    /// Versioned deployment: `/api/v1/fonogramas`, `search`, `situacao`.
    pub fn v1() -> Self {
        ApiProfile {
            api_version: Some("v1".to_string()),
            search_param: "search".to_string(),
            status_param: "situacao".to_string(),
            stats_location: StatsPath::Root,
        }
    }

    /// Overrides the version segment; `None` or an empty string removes it.
    pub fn with_api_version(mut self, version: Option<&str>) -> Self {
        self.api_version = version
            .map(|v| v.trim_matches('/').to_string())
            .filter(|v| !v.is_empty());
        self
    }

    pub fn with_search_param(mut self, name: &str) -> Self {
        self.search_param = name.to_string();
        self
    }

    pub fn with_status_param(mut self, name: &str) -> Self {
        self.status_param = name.to_string();
        self
    }

    pub fn with_stats_location(mut self, location: StatsPath) -> Self {
        self.stats_location = location;
        self
    }

    /// `/api` or `/api/{version}`.
    pub fn api_root(&self) -> String {
        match &self.api_version {
            Some(version) => format!("/api/{}", version),
            None => "/api".to_string(),
        }
    }

    /// Path of the phonogram collection.
    pub fn collection_path(&self) -> String {
        format!("{}/fonogramas", self.api_root())
    }

    /// Path of the aggregate stats endpoint.
    pub fn stats_path(&self) -> String {
        match self.stats_location {
            StatsPath::Collection => format!("{}/stats", self.collection_path()),
            StatsPath::Root => format!("{}/stats", self.api_root()),
        }
    }
}

/// Everything needed to build a client over HTTP.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub transport: TransportConfig,
    pub profile: ApiProfile,
}

impl ClientConfig {
    /// Creates a config for the given base URL with the legacy profile.
    pub fn new(base_url: &str) -> Self {
        ClientConfig {
            transport: TransportConfig::new(base_url),
            profile: ApiProfile::default(),
        }
    }

    pub fn with_profile(mut self, profile: ApiProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.transport.timeout = timeout;
        self
    }

    /// Disables cookie retention; every call is then unauthenticated.
    pub fn without_session_continuity(mut self) -> Self {
        self.transport.session_continuity = false;
        self
    }
}
