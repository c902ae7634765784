// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! List and search parameters.
//!
//! Absent or blank filters are left out of the query string entirely.

use super::config::ApiProfile;
use crate::error::{ClientError, ClientResult};
use crate::model::EcadStatus;

const DEFAULT_PER_PAGE: u32 = 20;

/// Parameters of the paginated phonogram list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
    /// Matched by the server against ISRC and title.
    pub search: Option<String>,
    pub status: Option<EcadStatus>,
}

impl Default for ListQuery {
    fn default() -> Self {
        ListQuery {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: None,
            status: None,
        }
    }
}

impl ListQuery {
    pub fn new(page: u32, per_page: u32) -> Self {
        ListQuery {
            page,
            per_page,
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_status(mut self, status: EcadStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub(crate) fn to_query(&self, profile: &ApiProfile) -> ClientResult<Vec<(String, String)>> {
        let mut pairs = page_pairs(self.page, self.per_page)?;

        if let Some(search) = non_blank(&self.search) {
            pairs.push((profile.search_param.clone(), search.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push((profile.status_param.clone(), status.as_str().to_string()));
        }

        Ok(pairs)
    }
}

/// Parameters of the advanced search (`/fonogramas/buscar`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Matched against ISRC, title, producer and album.
    pub term: Option<String>,
    pub genre: Option<String>,
    /// Inclusive lower bound on the release year.
    pub year_from: Option<i32>,
    /// Inclusive upper bound on the release year.
    pub year_to: Option<i32>,
    pub page: u32,
    pub per_page: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        SearchQuery {
            term: None,
            genre: None,
            year_from: None,
            year_to: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl SearchQuery {
    pub fn new(term: &str) -> Self {
        SearchQuery {
            term: Some(term.to_string()),
            ..Default::default()
        }
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genre = Some(genre.to_string());
        self
    }

    pub fn with_years(mut self, from: Option<i32>, to: Option<i32>) -> Self {
        self.year_from = from;
        self.year_to = to;
        self
    }

    pub fn with_page(mut self, page: u32, per_page: u32) -> Self {
        self.page = page;
        self.per_page = per_page;
        self
    }

    pub(crate) fn to_query(&self) -> ClientResult<Vec<(String, String)>> {
        let mut pairs = Vec::new();

        if let Some(term) = non_blank(&self.term) {
            pairs.push(("q".to_string(), term.to_string()));
        }
        if let Some(genre) = non_blank(&self.genre) {
            pairs.push(("genero".to_string(), genre.to_string()));
        }
        if let Some(from) = self.year_from {
            pairs.push(("ano_de".to_string(), from.to_string()));
        }
        if let Some(to) = self.year_to {
            pairs.push(("ano_ate".to_string(), to.to_string()));
        }
        pairs.extend(page_pairs(self.page, self.per_page)?);

        Ok(pairs)
    }
}

/// Parameters of the ECAD submission and return lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcadQuery {
    pub page: u32,
    pub per_page: u32,
    /// Submission status, e.g. `GERADO` or `ENVIADO`. Returns ignore it.
    pub status: Option<String>,
}

impl Default for EcadQuery {
    fn default() -> Self {
        EcadQuery {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            status: None,
        }
    }
}

impl EcadQuery {
    pub fn new(page: u32, per_page: u32) -> Self {
        EcadQuery {
            page,
            per_page,
            status: None,
        }
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub(crate) fn to_query(&self) -> ClientResult<Vec<(String, String)>> {
        let mut pairs = page_pairs(self.page, self.per_page)?;
        if let Some(status) = non_blank(&self.status) {
            pairs.push(("status".to_string(), status.to_string()));
        }
        Ok(pairs)
    }
}

pub(super) fn page_pairs(page: u32, per_page: u32) -> ClientResult<Vec<(String, String)>> {
    if page < 1 {
        return Err(ClientError::InvalidArgument("page must be at least 1".into()));
    }
    if per_page < 1 {
        return Err(ClientError::InvalidArgument(
            "per_page must be at least 1".into(),
        ));
    }
    Ok(vec![
        ("page".to_string(), page.to_string()),
        ("per_page".to_string(), per_page.to_string()),
    ])
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
