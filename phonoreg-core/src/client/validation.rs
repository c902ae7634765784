// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Server-side field checks.
//!
//! Each check posts a single field to `/api/validar/<field>` and needs no
//! session. The verdict is in the payload; an invalid value is still a
//! successful call.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{require_value, with_body, RegistryClient};
use crate::envelope::ResponseEnvelope;
use crate::error::ClientResult;
use crate::model::{DocumentValidation, DurationValidation, IsrcValidation};
use crate::network::{HttpRequest, Method, Transport};

const VALIDATE_PATH: &str = "/api/validar";

impl<T: Transport> RegistryClient<T> {
    /// Asks the registry whether an ISRC is well-formed and already taken.
    pub fn validate_isrc(&mut self, isrc: &str) -> ClientResult<ResponseEnvelope<IsrcValidation>> {
        let isrc = require_value("ISRC", isrc)?;
        self.validate_field("isrc", isrc)
    }

    pub fn validate_cpf(&mut self, cpf: &str) -> ClientResult<ResponseEnvelope<DocumentValidation>> {
        let cpf = require_value("CPF", cpf)?;
        self.validate_field("cpf", cpf)
    }

    pub fn validate_cnpj(&mut self, cnpj: &str) -> ClientResult<ResponseEnvelope<DocumentValidation>> {
        let cnpj = require_value("CNPJ", cnpj)?;
        self.validate_field("cnpj", cnpj)
    }

    /// Checks a CPF or CNPJ; the registry tells them apart by digit count.
    pub fn validate_document(
        &mut self,
        document: &str,
    ) -> ClientResult<ResponseEnvelope<DocumentValidation>> {
        let document = require_value("document", document)?;
        self.validate_field("documento", document)
    }

    /// Normalises a duration (`3:45`, `3.45`, `225`) to `mm:ss`.
    pub fn validate_duration(
        &mut self,
        duration: &str,
    ) -> ClientResult<ResponseEnvelope<DurationValidation>> {
        let duration = require_value("duration", duration)?;
        self.validate_field("duracao", duration)
    }

    fn validate_field<U: DeserializeOwned>(
        &mut self,
        field: &str,
        value: &str,
    ) -> ClientResult<ResponseEnvelope<U>> {
        let mut body = Map::new();
        body.insert(field.to_string(), Value::String(value.to_string()));

        let path = format!("{}/{}", VALIDATE_PATH, field);
        let request = with_body(HttpRequest::new(Method::Post, path), &body)?;
        self.fetch(request)
    }
}
