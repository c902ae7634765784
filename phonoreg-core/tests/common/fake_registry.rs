// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fake Registry
//!
//! In-memory stand-in for the registry service, implementing `Transport`.
//! It speaks the envelope format of the deployment selected by its profile:
//! the legacy profile answers lists with a bare array plus `meta`, the v1
//! profile with `{items, pagination}`. The session cookie is modelled as a
//! flag that `clear_cookies` drops.

use serde_json::{json, Map, Value};

use phonoreg_core::network::TransportResult;
use phonoreg_core::{ApiProfile, HttpRequest, HttpResponse, Method, Transport};

pub const ADMIN_EMAIL: &str = "admin@sbacem.org.br";
pub const ADMIN_PASSWORD: &str = "admin123";

pub struct FakeRegistry {
    profile: ApiProfile,
    records: Vec<Value>,
    next_id: u64,
    cookie: bool,
    calls: usize,
}

impl FakeRegistry {
    pub fn new(profile: ApiProfile) -> Self {
        FakeRegistry {
            profile,
            records: Vec::new(),
            next_id: 1,
            cookie: false,
            calls: 0,
        }
    }

    pub fn legacy() -> Self {
        Self::new(ApiProfile::legacy())
    }

    pub fn v1() -> Self {
        Self::new(ApiProfile::v1())
    }

    /// Stores a record directly, bypassing authentication.
    pub fn seed(&mut self, mut record: Value) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        if let Some(fields) = record.as_object_mut() {
            fields.insert("id".into(), json!(id));
            fields
                .entry("status_ecad")
                .or_insert_with(|| json!("PENDENTE"));
        }
        self.records.push(record);
        id
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn has_cookie(&self) -> bool {
        self.cookie
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    fn route(&mut self, request: &HttpRequest) -> HttpResponse {
        let path = request.path.as_str();

        match (request.method, path) {
            (Method::Get, "/api/health") => {
                ok(200, json!({"status": "healthy", "service": "fake-registry"}))
            }
            (Method::Get, "/api/status") => ok(
                200,
                json!({"status": "online", "service": "fake-registry", "version": "1.0.0"}),
            ),
            (Method::Post, "/api/auth/login") => self.login(request),
            (Method::Post, "/api/auth/logout") => {
                self.cookie = false;
                ok(200, Value::Null)
            }
            _ if !self.cookie => failure(401, "UNAUTHORIZED", "Autenticação necessária"),
            (Method::Get, "/api/auth/me") => ok(200, admin_user()),
            (Method::Get, p) if p == self.profile.stats_path() => self.stats(),
            _ => {
                let collection = self.profile.collection_path();
                match path.strip_prefix(collection.as_str()) {
                    Some(rest) => self.collection(request, rest),
                    None => failure(404, "NOT_FOUND", "Rota não encontrada"),
                }
            }
        }
    }

    fn login(&mut self, request: &HttpRequest) -> HttpResponse {
        let body = parse_body(request);
        if body["email"] == ADMIN_EMAIL && body["password"] == ADMIN_PASSWORD {
            self.cookie = true;
            ok(200, json!({"user": admin_user()}))
        } else {
            failure(401, "UNAUTHORIZED", "Credenciais inválidas")
        }
    }

    fn collection(&mut self, request: &HttpRequest, rest: &str) -> HttpResponse {
        match (request.method, rest) {
            (Method::Get, "") => self.list(request),
            (Method::Post, "") => self.create(parse_body(request)),
            (Method::Get, rest) if rest.starts_with("/isrc/") => {
                let isrc = rest.trim_start_matches("/isrc/").to_ascii_uppercase();
                match self.records.iter().find(|r| r["isrc"] == isrc.as_str()) {
                    Some(record) => ok(200, record.clone()),
                    None => not_found(),
                }
            }
            (method, rest) => {
                let Some(id) = rest.strip_prefix('/').and_then(|s| s.parse::<u64>().ok()) else {
                    return not_found();
                };
                let Some(index) = self.records.iter().position(|r| r["id"] == id) else {
                    return not_found();
                };
                match method {
                    Method::Get => ok(200, self.records[index].clone()),
                    Method::Put => self.replace(index, id, parse_body(request)),
                    Method::Delete => {
                        self.records.remove(index);
                        HttpResponse::new(204, Vec::new())
                    }
                    Method::Post => failure(405, "METHOD_NOT_ALLOWED", "Método não permitido"),
                }
            }
        }
    }

    fn list(&self, request: &HttpRequest) -> HttpResponse {
        let page: usize = query_number(request, "page", 1);
        let per_page: usize = query_number(request, "per_page", 20);
        let search = request
            .query_value(&self.profile.search_param)
            .map(str::to_lowercase);
        let status = request.query_value(&self.profile.status_param);

        let matching: Vec<&Value> = self
            .records
            .iter()
            .filter(|r| match &search {
                Some(term) => field_contains(r, "isrc", term) || field_contains(r, "titulo", term),
                None => true,
            })
            .filter(|r| match status {
                Some(status) => r["status_ecad"] == status,
                None => true,
            })
            .collect();

        let total = matching.len();
        let items: Vec<Value> = matching
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .cloned()
            .collect();
        let pages = total.div_ceil(per_page);
        let pagination = json!({
            "total": total,
            "page": page,
            "per_page": per_page,
            "pages": pages,
            "has_next": page < pages,
            "has_prev": page > 1
        });

        let body = if self.profile.api_version.is_some() {
            json!({
                "success": true,
                "data": {"items": items, "pagination": pagination}
            })
        } else {
            json!({"success": true, "message": "Success", "data": items, "meta": pagination})
        };
        HttpResponse::json(200, &body)
    }

    fn create(&mut self, body: Value) -> HttpResponse {
        if let Some(response) = validate(&body) {
            return response;
        }
        let isrc = body["isrc"].as_str().unwrap_or_default().to_ascii_uppercase();
        if self.records.iter().any(|r| r["isrc"] == isrc.as_str()) {
            return failure(409, "DUPLICATE_ISRC", "ISRC já cadastrado");
        }

        let mut record = body;
        record["isrc"] = json!(isrc);
        let id = self.seed(record);
        HttpResponse::json(
            201,
            &json!({
                "success": true,
                "message": "Fonograma criado com sucesso",
                "data": {"id": id, "isrc": isrc}
            }),
        )
    }

    fn replace(&mut self, index: usize, id: u64, body: Value) -> HttpResponse {
        if let Some(response) = validate(&body) {
            return response;
        }
        let existing = &self.records[index];
        let mut record = body;
        record["id"] = json!(id);
        record["isrc"] = existing["isrc"].clone();
        record["status_ecad"] = existing["status_ecad"].clone();
        self.records[index] = record;
        ok(200, json!({"id": id}))
    }

    fn stats(&self) -> HttpResponse {
        let mut by_status = Map::new();
        for record in &self.records {
            let key = record["status_ecad"].as_str().unwrap_or("PENDENTE").to_string();
            let count = by_status.get(&key).and_then(Value::as_u64).unwrap_or(0);
            by_status.insert(key, json!(count + 1));
        }
        ok(
            200,
            json!({"total_fonogramas": self.records.len(), "por_status": by_status}),
        )
    }
}

impl Transport for FakeRegistry {
    fn send(&mut self, request: &HttpRequest) -> TransportResult<HttpResponse> {
        self.calls += 1;
        Ok(self.route(request))
    }

    fn clear_cookies(&mut self) -> TransportResult<()> {
        self.cookie = false;
        Ok(())
    }
}

fn admin_user() -> Value {
    json!({"id": 1, "email": ADMIN_EMAIL, "nome": "Administrador", "is_admin": true})
}

fn ok(status: u16, data: Value) -> HttpResponse {
    HttpResponse::json(status, &json!({"success": true, "data": data}))
}

fn failure(status: u16, code: &str, message: &str) -> HttpResponse {
    HttpResponse::json(
        status,
        &json!({"success": false, "error": {"code": code, "message": message}}),
    )
}

fn not_found() -> HttpResponse {
    failure(404, "NOT_FOUND", "Fonograma não encontrado")
}

fn validate(body: &Value) -> Option<HttpResponse> {
    let mut missing = Vec::new();
    for field in ["isrc", "titulo"] {
        if body[field].as_str().map_or(true, |s| s.trim().is_empty()) {
            missing.push(format!("{} é obrigatório", field));
        }
    }
    if missing.is_empty() {
        return None;
    }
    Some(HttpResponse::json(
        400,
        &json!({
            "success": false,
            "error": {"code": "VALIDATION_ERROR", "message": "Validação falhou", "details": missing}
        }),
    ))
}

fn parse_body(request: &HttpRequest) -> Value {
    request
        .body
        .as_deref()
        .and_then(|bytes| serde_json::from_slice(bytes).ok())
        .unwrap_or(Value::Null)
}

fn query_number(request: &HttpRequest, name: &str, default: usize) -> usize {
    request
        .query_value(name)
        .and_then(|v| v.parse().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}

fn field_contains(record: &Value, field: &str, term: &str) -> bool {
    record[field]
        .as_str()
        .is_some_and(|value| value.to_lowercase().contains(term))
}
