// Rust guideline compliant 2026-10-12

//! Core data models for the Open Finance participant directory.
//!
//! Every scalar is optional because the directory omits or nulls fields
//! freely. Fields the model does not name are preserved in `extra` so the
//! full record can be printed back unchanged.

use crate::Role;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A registered organisation in the directory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Participant {
    /// Directory-wide organisation identifier (UUID).
    #[serde(default)]
    pub organisation_id: Option<String>,
    /// Trading name.
    #[serde(default)]
    pub organisation_name: Option<String>,
    /// Registered legal entity name.
    #[serde(default)]
    pub legal_entity_name: Option<String>,
    /// CNPJ.
    #[serde(default)]
    pub registration_number: Option<String>,
    /// ISPB.
    #[serde(default)]
    pub registration_id: Option<String>,
    /// Directory status (e.g. `Active`).
    #[serde(default)]
    pub status: Option<String>,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_on: Option<String>,
    /// Roles the organisation claims.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub org_domain_role_claims: Vec<RoleClaim>,
    /// Authorization servers operated by the organisation.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub authorisation_servers: Vec<AuthorisationServer>,
    /// Remaining directory fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A role claimed by a participant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoleClaim {
    /// Role code (see [`Role`]).
    #[serde(default)]
    pub role: Option<String>,
    /// Claim status.
    #[serde(default)]
    pub status: Option<String>,
    /// Authorisation domain the claim applies to.
    #[serde(default)]
    pub authorisation_domain: Option<String>,
    /// Registration identifier of the claim.
    #[serde(default)]
    pub registration_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An authorization server published by a participant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorisationServer {
    /// Directory-wide server identifier.
    #[serde(default)]
    pub authorisation_server_id: Option<String>,
    /// Friendly name shown to customers.
    #[serde(default)]
    pub customer_friendly_name: Option<String>,
    /// Friendly description shown to customers.
    #[serde(default)]
    pub customer_friendly_description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub developer_portal_uri: Option<String>,
    #[serde(default, rename = "OpenIDDiscoveryDocument")]
    pub open_id_discovery_document: Option<String>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub payload_signing_cert_location_uri: Option<String>,
    #[serde(default, rename = "SupportsDCR")]
    pub supports_dcr: Option<bool>,
    #[serde(default)]
    pub supports_ciba: Option<bool>,
    #[serde(default)]
    pub supports_redirect: Option<bool>,
    /// APIs exposed by the server.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub api_resources: Vec<ApiResource>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An API family published behind an authorization server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResource {
    #[serde(default)]
    pub api_resource_id: Option<String>,
    /// API family (e.g. `accounts`, `payments-pix`).
    #[serde(default)]
    pub api_family_type: Option<String>,
    /// Published as either a string or a number.
    #[serde(default)]
    pub api_version: Option<Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub family_complete: Option<bool>,
    #[serde(default)]
    pub certification_status: Option<String>,
    #[serde(default)]
    pub certification_start_date: Option<String>,
    #[serde(default)]
    pub certification_expiration_date: Option<String>,
    #[serde(default)]
    pub api_certification_uri: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub api_discovery_endpoints: Vec<ApiDiscoveryEndpoint>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A discovery endpoint of an API resource.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiDiscoveryEndpoint {
    #[serde(default)]
    pub api_discovery_id: Option<String>,
    #[serde(default)]
    pub api_endpoint: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Decodes an absent or `null` list as empty.
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Participant {
    /// Returns the organisation id, or `""` when missing.
    #[must_use]
    pub fn id(&self) -> &str {
        self.organisation_id.as_deref().unwrap_or_default()
    }

    /// Returns the organisation name, or `""` when missing.
    #[must_use]
    pub fn name(&self) -> &str {
        self.organisation_name.as_deref().unwrap_or_default()
    }

    /// Returns the legal entity name, or `""` when missing.
    #[must_use]
    pub fn legal_name(&self) -> &str {
        self.legal_entity_name.as_deref().unwrap_or_default()
    }

    /// Looks up one of this participant's authorization servers by id.
    #[must_use]
    pub fn auth_server(&self, server_id: &str) -> Option<&AuthorisationServer> {
        self.authorisation_servers
            .iter()
            .find(|server| server.authorisation_server_id.as_deref() == Some(server_id))
    }

    /// Returns true if any role claim carries the given role code.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.org_domain_role_claims
            .iter()
            .any(|claim| claim.role.as_deref() == Some(role.as_str()))
    }
}

impl ApiResource {
    /// Returns the API version as display text (`"2.0.1"`, `"1"`), or `""`.
    #[must_use]
    pub fn version_text(&self) -> String {
        match &self.api_version {
            Some(Value::String(version)) => version.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}
