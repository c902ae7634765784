// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Payloads of the service-level endpoints (health, status, validation).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Liveness report from `/api/health` or `/api/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `healthy` or `online`
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Server-side ISRC check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsrcValidation {
    /// The ISRC as normalized by the server (trimmed, uppercase).
    pub isrc: String,
    #[serde(rename = "valido")]
    pub valid: bool,
    /// Whether a phonogram with this ISRC is already registered.
    #[serde(rename = "existe_no_sistema", default)]
    pub exists: bool,
    #[serde(rename = "mensagem", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Server-side CPF/CNPJ check.
///
/// The CPF, CNPJ and auto-detecting endpoints name their keys after the
/// document kind; all three decode into this one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentValidation {
    /// The document as submitted.
    #[serde(rename = "documento", alias = "cpf", alias = "cnpj")]
    pub document: String,
    /// Canonical punctuation, present when the document is valid.
    #[serde(
        rename = "formatado",
        alias = "cpf_formatado",
        alias = "cnpj_formatado",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub formatted: Option<String>,
    /// `CPF` or `CNPJ`; only the auto-detecting endpoint reports it.
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "valido")]
    pub valid: bool,
    #[serde(rename = "mensagem", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Server-side duration check and normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationValidation {
    #[serde(rename = "duracao_original")]
    pub original: String,
    /// `mm:ss`, present when the input was recognised.
    #[serde(rename = "duracao_formatada", default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(rename = "total_segundos", default, skip_serializing_if = "Option::is_none")]
    pub total_seconds: Option<u32>,
    #[serde(rename = "valido")]
    pub valid: bool,
    #[serde(rename = "mensagem", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
