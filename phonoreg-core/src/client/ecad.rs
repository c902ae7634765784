// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! ECAD submissions and returns (read-only).
//!
//! Payload shapes are left to the caller. List pagination arrives in the
//! envelope metadata.

use serde_json::Value;

use super::query::page_pairs;
use super::{item_path, EcadQuery, RegistryClient};
use crate::envelope::ResponseEnvelope;
use crate::error::ClientResult;
use crate::network::{HttpRequest, Method, Transport};

const SUBMISSIONS_PATH: &str = "/api/ecad/envios";
const RETURNS_PATH: &str = "/api/ecad/retornos";

impl<T: Transport> RegistryClient<T> {
    /// Lists submissions, newest first.
    pub fn list_submissions(&mut self, query: &EcadQuery) -> ClientResult<ResponseEnvelope<Value>> {
        let pairs = query.to_query()?;
        self.execute(HttpRequest::new(Method::Get, SUBMISSIONS_PATH).with_query_pairs(pairs))
    }

    /// One submission with the phonograms it carried.
    pub fn get_submission(&mut self, id: u64) -> ClientResult<ResponseEnvelope<Value>> {
        let path = item_path(SUBMISSIONS_PATH, id, "submission")?;
        self.execute(HttpRequest::new(Method::Get, path))
    }

    /// Submission counts by status.
    pub fn submission_stats(&mut self) -> ClientResult<ResponseEnvelope<Value>> {
        let path = format!("{}/stats", SUBMISSIONS_PATH);
        self.execute(HttpRequest::new(Method::Get, path))
    }

    /// Lists returns processed from ECAD, newest first.
    pub fn list_returns(&mut self, page: u32, per_page: u32) -> ClientResult<ResponseEnvelope<Value>> {
        let pairs = page_pairs(page, per_page)?;
        self.execute(HttpRequest::new(Method::Get, RETURNS_PATH).with_query_pairs(pairs))
    }

    pub fn get_return(&mut self, id: u64) -> ClientResult<ResponseEnvelope<Value>> {
        let path = item_path(RETURNS_PATH, id, "return")?;
        self.execute(HttpRequest::new(Method::Get, path))
    }
}
