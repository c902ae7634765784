// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Phonogram records as exchanged with the registry.
//!
//! Field names follow Rust conventions; serde renames map them to the
//! registry's wire keys. Keys the client does not know are kept in `extra`
//! and sent back unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codec::duration::TrackDuration;
use crate::envelope::Pagination;

/// A rights holder credited for the musical work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    #[serde(rename = "nome")]
    pub name: String,
    /// CPF/CNPJ of the creator.
    #[serde(rename = "cpf", default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// e.g. `AUTOR`, `COMPOSITOR`
    #[serde(rename = "funcao", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "percentual", default, skip_serializing_if = "Option::is_none")]
    pub share_percent: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Creator {
    pub fn new(name: &str) -> Self {
        Creator {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_tax_id(mut self, tax_id: &str) -> Self {
        self.tax_id = Some(tax_id.to_string());
        self
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    pub fn with_share(mut self, percent: f64) -> Self {
        self.share_percent = Some(percent);
        self
    }
}

/// A performer on the recording.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Performer {
    #[serde(rename = "nome")]
    pub name: String,
    /// e.g. `INTERPRETE`, `MUSICO_ACOMPANHANTE`
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "percentual", default, skip_serializing_if = "Option::is_none")]
    pub share_percent: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Performer {
    pub fn new(name: &str) -> Self {
        Performer {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_share(mut self, percent: f64) -> Self {
        self.share_percent = Some(percent);
        self
    }
}

/// Metadata record of one sound recording.
///
/// The client does not validate business rules (ISRC format, share totals);
/// the registry is authoritative and reports violations in the envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phonogram {
    /// Registry-assigned id; absent on records not yet created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub isrc: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "titulo_obra", default, skip_serializing_if = "Option::is_none")]
    pub work_title: Option<String>,
    #[serde(
        rename = "duracao",
        default,
        with = "crate::codec::duration::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<TrackDuration>,
    #[serde(rename = "ano_lanc", default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(rename = "genero", default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(rename = "prod_nome", default, skip_serializing_if = "Option::is_none")]
    pub producer_name: Option<String>,
    #[serde(rename = "prod_doc", default, skip_serializing_if = "Option::is_none")]
    pub producer_document: Option<String>,
    #[serde(rename = "prod_perc", default, skip_serializing_if = "Option::is_none")]
    pub producer_share_percent: Option<f64>,
    /// Submission order is preserved.
    #[serde(rename = "autores", default)]
    pub creators: Vec<Creator>,
    /// Submission order is preserved.
    #[serde(rename = "interpretes", default)]
    pub performers: Vec<Performer>,
    /// Collection-society status, set by the registry.
    #[serde(rename = "status_ecad", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Phonogram {
    pub fn new(isrc: &str, title: &str) -> Self {
        Phonogram {
            isrc: isrc.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn with_creator(mut self, creator: Creator) -> Self {
        self.creators.push(creator);
        self
    }

    pub fn with_performer(mut self, performer: Performer) -> Self {
        self.performers.push(performer);
        self
    }
}

/// Id (and ISRC, on create) returned by create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonogramRef {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,
}

/// One page of a list or search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhonogramPage {
    pub items: Vec<Phonogram>,
    pub pagination: Option<Pagination>,
}

/// List payload as sent by either deployment.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum PageWire {
    Items(Vec<Phonogram>),
    Wrapped {
        items: Vec<Phonogram>,
        #[serde(default)]
        pagination: Option<Pagination>,
    },
}

impl PhonogramPage {
    /// Builds a page, preferring inline pagination over envelope metadata.
    pub(crate) fn from_wire(wire: PageWire, envelope_pagination: Option<&Pagination>) -> Self {
        let (items, inline) = match wire {
            PageWire::Items(items) => (items, None),
            PageWire::Wrapped { items, pagination } => (items, pagination),
        };
        PhonogramPage {
            items,
            pagination: inline.or_else(|| envelope_pagination.cloned()),
        }
    }
}

/// Collection-society submission status, used as a list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EcadStatus {
    Pendente,
    Enviado,
    Aceito,
    Recusado,
}

impl EcadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EcadStatus::Pendente => "PENDENTE",
            EcadStatus::Enviado => "ENVIADO",
            EcadStatus::Aceito => "ACEITO",
            EcadStatus::Recusado => "RECUSADO",
        }
    }
}

impl fmt::Display for EcadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EcadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDENTE" => Ok(EcadStatus::Pendente),
            "ENVIADO" => Ok(EcadStatus::Enviado),
            "ACEITO" => Ok(EcadStatus::Aceito),
            "RECUSADO" => Ok(EcadStatus::Recusado),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}
