// Rust guideline compliant 2026-10-15

//! Output formatting module for the ofp CLI.
//!
//! This module renders participants, authorization servers and
//! disambiguation candidates as JSON or as human-readable tables.

use crate::terminal::{colorize, wrap_text};
use chrono::{DateTime, NaiveDateTime};
use ofp_core::{ApiResource, AuthorisationServer, OutputFormat, Participant};
use serde_json::json;
use std::collections::BTreeSet;
use tabled::{builder::Builder, settings::Style};
use termcolor::Color;

/// Output formatter trait.
///
/// Defines the interface for presenting directory data in different output formats.
pub trait OutputFormatter {
    /// Formats a single participant for display.
    ///
    /// # Arguments
    /// * `participant` - The participant to format
    /// * `auth_server` - Authorization Server to show in detail instead of the summary
    ///
    /// # Returns
    /// A formatted string representation of the participant
    fn format_participant(&self, participant: &Participant, auth_server: Option<&str>) -> String;

    /// Formats a list of participants for display.
    fn format_list(&self, participants: &[&Participant]) -> String;

    /// Formats a single authorization server.
    fn format_auth_server(&self, server: &AuthorisationServer) -> String;

    /// Formats the numbered disambiguation candidates.
    fn format_candidates(&self, candidates: &[&Participant]) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Prints full directory records for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_participant(&self, participant: &Participant, _auth_server: Option<&str>) -> String {
        serde_json::to_string_pretty(participant)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize participant" }).to_string())
    }

    fn format_list(&self, participants: &[&Participant]) -> String {
        serde_json::to_string_pretty(participants).unwrap_or_else(|_| {
            json!({ "error": "Failed to serialize participant list" }).to_string()
        })
    }

    fn format_auth_server(&self, server: &AuthorisationServer) -> String {
        serde_json::to_string_pretty(server).unwrap_or_else(|_| {
            json!({ "error": "Failed to serialize authorization server" }).to_string()
        })
    }

    fn format_candidates(&self, candidates: &[&Participant]) -> String {
        let rows: Vec<_> = candidates
            .iter()
            .enumerate()
            .map(|(i, participant)| {
                json!({
                    "index": i + 1,
                    "OrganisationName": participant.organisation_name,
                    "LegalEntityName": participant.legal_entity_name,
                    "OrganisationId": participant.organisation_id,
                })
            })
            .collect();
        serde_json::to_string_pretty(&rows)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize candidates" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats participants as titled sections of tables, optionally colored.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_color {
            colorize(text, color, true)
        } else {
            text.to_string()
        }
    }

    fn title(&self, text: &str, color: Color) -> String {
        format!("{}\n", self.paint(text, color))
    }

    fn organisation_header(&self, participant: &Participant) -> String {
        let mut output = self.title("Organization Details", Color::Green);
        output.push_str(&format!("{}\n", self.paint(participant.name(), Color::White)));
        output.push_str(&format!("{}\n", participant.id()));
        output
    }

    fn basic_information(&self, participant: &Participant) -> String {
        let created_on = participant.created_on.as_deref().map(format_date);
        let fields = [
            ("Status", participant.status.clone()),
            ("Legal Entity Name", participant.legal_entity_name.clone()),
            ("Registration Number (CNPJ)", participant.registration_number.clone()),
            ("Registration ID (ISPB)", participant.registration_id.clone()),
            ("Created On", created_on),
        ];

        let mut builder = Builder::default();
        for (field, value) in fields {
            if let Some(value) = value.filter(|value| !value.is_empty()) {
                builder.push_record([field.to_string(), value]);
            }
        }

        let mut output = self.title("Basic Information", Color::Green);
        output.push_str(&render(builder));
        output
    }

    fn role_claims(&self, participant: &Participant) -> String {
        if participant.org_domain_role_claims.is_empty() {
            return String::new();
        }

        let mut builder = Builder::default();
        builder.push_record(["Role", "Status", "Domain", "Registration ID"]);
        for claim in &participant.org_domain_role_claims {
            builder.push_record([
                text(&claim.role),
                text(&claim.status),
                text(&claim.authorisation_domain),
                text(&claim.registration_id),
            ]);
        }

        let mut output = self.title("Roles & Claims", Color::Green);
        output.push_str(&render(builder));
        output
    }

    fn servers_summary(&self, participant: &Participant) -> String {
        if participant.authorisation_servers.is_empty() {
            return String::new();
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "Server ID", "Status", "API Families"]);
        for server in &participant.authorisation_servers {
            builder.push_record([
                text(&server.customer_friendly_name),
                text(&server.authorisation_server_id),
                text(&server.status),
                api_families(server),
            ]);
        }

        let mut output = self.title("Authorization Servers Summary", Color::Yellow);
        output.push_str(&render(builder));
        output.push_str(&format!(
            "\n{} Use --auth-server <ID> flag to see detailed information for a specific Authorization Server\n",
            self.paint("Tip:", Color::Yellow)
        ));
        output
    }

    fn api_resource(&self, api: &ApiResource) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Family Type".to_string(), text(&api.api_family_type)]);
        builder.push_record(["Version".to_string(), format!("v{}", api.version_text())]);
        builder.push_record(["Status".to_string(), text(&api.status)]);
        builder.push_record(["Resource ID".to_string(), text(&api.api_resource_id)]);
        builder.push_record(["Family Complete".to_string(), flag(api.family_complete)]);
        builder.push_record(["Certification Status".to_string(), text(&api.certification_status)]);

        let optional = [
            ("Certification Start", &api.certification_start_date),
            ("Certification Expiration", &api.certification_expiration_date),
            ("Certification URI", &api.api_certification_uri),
        ];
        for (field, value) in optional {
            if let Some(value) = value.as_deref().filter(|value| !value.is_empty()) {
                builder.push_record([field.to_string(), value.to_string()]);
            }
        }

        if !api.api_discovery_endpoints.is_empty() {
            let endpoints = api
                .api_discovery_endpoints
                .iter()
                .map(|endpoint| {
                    format!(
                        "{}\nID: {}",
                        text(&endpoint.api_endpoint),
                        text(&endpoint.api_discovery_id)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            builder.push_record(["Endpoints".to_string(), endpoints]);
        }

        let mut output = self.title(&format!("{} API", text(&api.api_family_type)), Color::Yellow);
        output.push_str(&render(builder));
        output
    }
}

impl OutputFormatter for TableFormatter {
    fn format_participant(&self, participant: &Participant, auth_server: Option<&str>) -> String {
        let mut sections = vec![
            self.organisation_header(participant),
            self.basic_information(participant),
            self.role_claims(participant),
        ];

        match auth_server {
            Some(server_id) => {
                if let Some(server) = participant.auth_server(server_id) {
                    sections.push(self.format_auth_server(server));
                }
            }
            None => sections.push(self.servers_summary(participant)),
        }

        sections
            .into_iter()
            .filter(|section| !section.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_list(&self, participants: &[&Participant]) -> String {
        if participants.is_empty() {
            return "No participants found.".to_string();
        }

        participants
            .iter()
            .map(|participant| self.format_participant(participant, None))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_auth_server(&self, server: &AuthorisationServer) -> String {
        let mut output = self.title("Authorization Server Details", Color::Yellow);
        output.push_str(&format!(
            "{}\n",
            self.paint(&text(&server.customer_friendly_name), Color::White)
        ));
        if let Some(description) = server
            .customer_friendly_description
            .as_deref()
            .filter(|description| !description.is_empty())
        {
            output.push_str(&format!("{}\n", wrap_text(description, 0)));
        }
        output.push('\n');

        let mut builder = Builder::default();
        let rows = [
            ("Server ID", text(&server.authorisation_server_id)),
            ("Status", text(&server.status)),
            ("Developer Portal", text(&server.developer_portal_uri)),
            ("OpenID Configuration", text(&server.open_id_discovery_document)),
            ("Issuer", text(&server.issuer)),
            ("Payload Signing Cert Location", text(&server.payload_signing_cert_location_uri)),
            ("Supports DCR", flag(server.supports_dcr)),
            ("Supports CIBA", flag(server.supports_ciba)),
            ("Supports Redirect", flag(server.supports_redirect)),
        ];
        for (field, value) in rows {
            builder.push_record([field.to_string(), value]);
        }
        output.push_str(&render(builder));

        if !server.api_resources.is_empty() {
            output.push('\n');
            output.push_str(&self.title("Available APIs", Color::Yellow));
            for api in &server.api_resources {
                output.push_str(&self.api_resource(api));
            }
        }

        output
    }

    fn format_candidates(&self, candidates: &[&Participant]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Index", "Organization Name", "Legal Name", "Organization ID"]);
        for (i, participant) in candidates.iter().enumerate() {
            builder.push_record([
                (i + 1).to_string(),
                participant.name().to_string(),
                participant.legal_name().to_string(),
                participant.id().to_string(),
            ]);
        }
        render(builder)
    }

    fn format_error(&self, error: &str) -> String {
        format!("{} {}", self.paint("Error:", Color::Red), error)
    }
}

/// Renders an ISO-8601 timestamp as `dd/mm/YYYY HH:MM:SS`.
///
/// Unparsable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    const DISPLAY: &str = "%d/%m/%Y %H:%M:%S";

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.format(DISPLAY).to_string();
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(raw, pattern).ok())
        .map(|timestamp| timestamp.format(DISPLAY).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table.with(Style::modern());
    format!("{}\n", table)
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn flag(value: Option<bool>) -> String {
    let mark = if value.unwrap_or(false) { "✅" } else { "❌" };
    mark.to_string()
}

fn api_families(server: &AuthorisationServer) -> String {
    let families: BTreeSet<&str> = server
        .api_resources
        .iter()
        .filter_map(|api| api.api_family_type.as_deref())
        .collect();

    if families.is_empty() {
        "No APIs".to_string()
    } else {
        families.into_iter().collect::<Vec<_>>().join("\n")
    }
}
