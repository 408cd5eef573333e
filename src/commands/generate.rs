use anyhow::{Context, Result};
use clap::Args;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::PathBuf;

use crate::api::{Client, Credentials, HttpClient};
use crate::hcl::{self, Value};
use crate::output;
use crate::registry::{self, ResourceSpec, Scope};

/// Generate Terraform resource blocks for existing Cloudflare resources
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Terraform resource type to generate (e.g. cloudflare_record)
    #[arg(long)]
    resource_type: String,

    /// Zone ID to scan, for zone-scoped resource types
    #[arg(long, env = "CLOUDFLARE_ZONE_ID")]
    zone: Option<String>,

    /// Account ID to scan, for account-scoped resource types
    #[arg(long, env = "CLOUDFLARE_ACCOUNT_ID")]
    account: Option<String>,

    /// Only generate blocks for these resource IDs (comma-separated)
    #[arg(long)]
    resource_id: Option<String>,

    /// Write generated configuration to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Cloudflare API token
    #[arg(long, env = "CLOUDFLARE_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Cloudflare global API key (legacy auth, requires --email)
    #[arg(long, env = "CLOUDFLARE_API_KEY", hide_env_values = true)]
    key: Option<String>,

    /// Cloudflare account email (legacy auth, requires --key)
    #[arg(long, env = "CLOUDFLARE_EMAIL")]
    email: Option<String>,
}

impl GenerateCommand {
    pub fn execute(self) -> Result<()> {
        // Dispatch happens before credentials are checked so asking for an
        // unknown type never requires auth. Message preserved verbatim
        // from the original tool.
        let Some(spec) = registry::lookup(&self.resource_type) else {
            println!(
                "\"{}\" is not yet supported for automatic generation",
                self.resource_type
            );
            return Ok(());
        };

        let client = Client::new(self.credentials()?)?;
        self.run(spec, &client)
    }

    /// Fetch, extract, and render; separated from `execute` so tests can
    /// inject a mock transport.
    fn run<H: HttpClient>(&self, spec: &ResourceSpec, client: &Client<H>) -> Result<()> {
        let (scope_attr, scope_id) = self.scope_identifier(spec)?;

        let endpoint = spec
            .endpoint
            .replace("{zone}", scope_id)
            .replace("{account}", scope_id);

        let records = client
            .fetch_all(&endpoint)
            .with_context(|| format!("failed to list {} resources", spec.resource_type))?;

        let wanted = self.resource_ids();
        let mut blocks = Vec::new();

        for record in &records {
            if let Some(ids) = &wanted {
                let id = record.get("id").and_then(|v| v.as_str()).unwrap_or_default();
                if !ids.iter().any(|wanted_id| wanted_id == id) {
                    continue;
                }
            }

            let name = resource_block_name(record, blocks.len());

            let mut attributes =
                vec![(scope_attr.to_string(), Value::String(scope_id.to_string()))];
            attributes.extend(registry::extract_attributes(spec, record));

            blocks.push(hcl::render_resource(spec.resource_type, &name, &attributes));
        }

        let rendered = blocks.join("\n");

        match &self.output {
            Some(path) => {
                std::fs::write(path, &rendered)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                output::success_with_details(
                    &format!("Generated {} resource block(s)", blocks.len()),
                    &path.display().to_string(),
                );
            }
            None => print!("{}", rendered),
        }

        Ok(())
    }

    fn scope_identifier(&self, spec: &ResourceSpec) -> Result<(&'static str, &str)> {
        match spec.scope {
            Scope::Zone => {
                let zone = self
                    .zone
                    .as_deref()
                    .with_context(|| format!("--zone is required for {}", spec.resource_type))?;
                Ok(("zone_id", zone))
            }
            Scope::Account => {
                let account = self
                    .account
                    .as_deref()
                    .with_context(|| format!("--account is required for {}", spec.resource_type))?;
                Ok(("account_id", account))
            }
        }
    }

    fn resource_ids(&self) -> Option<Vec<String>> {
        self.resource_id.as_deref().map(|ids| {
            ids.split(',')
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty())
                .collect()
        })
    }

    fn credentials(&self) -> Result<Credentials> {
        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            return Ok(Credentials::Token(token.to_string()));
        }

        match (self.key.as_deref(), self.email.as_deref()) {
            (Some(key), Some(email)) if !key.is_empty() && !email.is_empty() => {
                Ok(Credentials::KeyEmail {
                    key: key.to_string(),
                    email: email.to_string(),
                })
            }
            _ => Err(anyhow::anyhow!(
                "No credentials provided. Set CLOUDFLARE_API_TOKEN, or CLOUDFLARE_API_KEY and CLOUDFLARE_EMAIL"
            )),
        }
    }
}

lazy_static! {
    static ref UNSAFE_NAME_CHARS: Regex = Regex::new(r"[^a-zA-Z0-9_]").expect("valid regex");
}

/// Derive the Terraform block name for one record.
///
/// Uses the record's `id` when present, sanitized to a valid HCL
/// identifier; falls back to the record's position for endpoints whose
/// records carry no id.
fn resource_block_name(record: &serde_json::Value, index: usize) -> String {
    match record.get("id").and_then(|v| v.as_str()) {
        Some(id) if !id.is_empty() => format!(
            "terraform_managed_resource_{}",
            UNSAFE_NAME_CHARS.replace_all(id, "_")
        ),
        _ => format!("terraform_managed_resource_{}", index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ApiResult};
    use std::collections::HashMap;

    struct MockHttpClient {
        responses: HashMap<String, String>,
    }

    impl MockHttpClient {
        fn new(responses: &[(&str, &str)]) -> Self {
            Self {
                responses: responses
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, path_and_query: &str) -> ApiResult<String> {
            self.responses
                .get(path_and_query)
                .cloned()
                .ok_or_else(|| ApiError::Http(format!("unexpected request: {}", path_and_query)))
        }
    }

    fn command(resource_type: &str, zone: Option<&str>, account: Option<&str>) -> GenerateCommand {
        GenerateCommand {
            resource_type: resource_type.to_string(),
            zone: zone.map(String::from),
            account: account.map(String::from),
            resource_id: None,
            output: None,
            token: Some("test-token".to_string()),
            key: None,
            email: None,
        }
    }

    #[test]
    fn test_generate_dns_records_golden() {
        let cmd = command(
            "cloudflare_record",
            Some("0da42c8d2132a9ddaf714f9e7c920711"),
            None,
        );
        let spec = registry::lookup("cloudflare_record").unwrap();

        let http = MockHttpClient::new(&[(
            "zones/0da42c8d2132a9ddaf714f9e7c920711/dns_records?page=1&per_page=50",
            r#"{
                "success": true,
                "result": [{
                    "id": "569b07d7a1e4b1f35d55f07a66c5a0f9",
                    "type": "A",
                    "name": "example.com",
                    "content": "198.51.100.4",
                    "proxied": false,
                    "ttl": 3600
                }],
                "result_info": {"page": 1, "total_pages": 1}
            }"#,
        )]);

        let output = tempfile::NamedTempFile::new().unwrap();
        let cmd = GenerateCommand {
            output: Some(output.path().to_path_buf()),
            ..cmd
        };

        cmd.run(spec, &Client::with_http(http)).unwrap();

        let expected = "\
resource \"cloudflare_record\" \"terraform_managed_resource_569b07d7a1e4b1f35d55f07a66c5a0f9\" {
  zone_id = \"0da42c8d2132a9ddaf714f9e7c920711\"
  name = \"example.com\"
  type = \"A\"
  content = \"198.51.100.4\"
  ttl = 3600
  proxied = false
}
";
        assert_eq!(std::fs::read_to_string(output.path()).unwrap(), expected);
    }

    #[test]
    fn test_generate_joins_blocks_with_blank_line() {
        let cmd = command(
            "cloudflare_workers_kv_namespace",
            None,
            Some("f037e56e89293a057740de681ac9abbe"),
        );
        let spec = registry::lookup("cloudflare_workers_kv_namespace").unwrap();

        let http = MockHttpClient::new(&[(
            "accounts/f037e56e89293a057740de681ac9abbe/storage/kv/namespaces?page=1&per_page=50",
            r#"{
                "success": true,
                "result": [
                    {"id": "ns1", "title": "sessions"},
                    {"id": "ns2", "title": "assets"}
                ],
                "result_info": {"page": 1, "total_pages": 1}
            }"#,
        )]);

        let output = tempfile::NamedTempFile::new().unwrap();
        let cmd = GenerateCommand {
            output: Some(output.path().to_path_buf()),
            ..cmd
        };

        cmd.run(spec, &Client::with_http(http)).unwrap();

        let rendered = std::fs::read_to_string(output.path()).unwrap();
        assert_eq!(
            rendered
                .matches("resource \"cloudflare_workers_kv_namespace\"")
                .count(),
            2
        );
        assert!(rendered.contains("}\n\nresource"));
        assert!(rendered.contains("  title = \"sessions\"\n"));
    }

    #[test]
    fn test_generate_filters_by_resource_id() {
        let mut cmd = command("cloudflare_workers_kv_namespace", None, Some("acc"));
        cmd.resource_id = Some("ns2".to_string());
        let spec = registry::lookup("cloudflare_workers_kv_namespace").unwrap();

        let http = MockHttpClient::new(&[(
            "accounts/acc/storage/kv/namespaces?page=1&per_page=50",
            r#"{
                "success": true,
                "result": [
                    {"id": "ns1", "title": "sessions"},
                    {"id": "ns2", "title": "assets"}
                ]
            }"#,
        )]);

        let output = tempfile::NamedTempFile::new().unwrap();
        cmd.output = Some(output.path().to_path_buf());

        cmd.run(spec, &Client::with_http(http)).unwrap();

        let rendered = std::fs::read_to_string(output.path()).unwrap();
        assert!(!rendered.contains("sessions"));
        assert!(rendered.contains("assets"));
    }

    #[test]
    fn test_generate_requires_matching_scope_flag() {
        // Zone-scoped type with only an account supplied
        let cmd = command("cloudflare_record", None, Some("acc"));
        let spec = registry::lookup("cloudflare_record").unwrap();
        let err = cmd.scope_identifier(spec).unwrap_err();
        assert!(err.to_string().contains("--zone is required"));
    }

    #[test]
    fn test_credentials_token_takes_precedence() {
        let mut cmd = command("cloudflare_record", Some("z"), None);
        cmd.key = Some("legacy-key".to_string());
        cmd.email = Some("ops@example.com".to_string());

        assert!(matches!(cmd.credentials().unwrap(), Credentials::Token(_)));

        cmd.token = None;
        assert!(matches!(
            cmd.credentials().unwrap(),
            Credentials::KeyEmail { .. }
        ));

        cmd.key = None;
        assert!(cmd.credentials().is_err());
    }

    #[test]
    fn test_resource_block_name_sanitizes_ids() {
        let record = serde_json::json!({"id": "terraform.cfapi.net/thyygxveip"});
        assert_eq!(
            resource_block_name(&record, 0),
            "terraform_managed_resource_terraform_cfapi_net_thyygxveip"
        );

        let record = serde_json::json!({"title": "no id here"});
        assert_eq!(
            resource_block_name(&record, 3),
            "terraform_managed_resource_3"
        );
    }
}
