//! Resource Type Registry
//!
//! Maps Terraform resource types (e.g. `cloudflare_record`) to the
//! Cloudflare API endpoint that lists them and to an ordered field table
//! describing which API fields become which Terraform attributes. The
//! tables are data, not code: adding a resource type means adding one
//! entry here, never touching the renderer.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::hcl::Value;

/// Whether a resource type is enumerated under an account or a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Account,
    Zone,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Account => "account",
            Scope::Zone => "zone",
        }
    }
}

/// How an extracted API value becomes a Terraform attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Copy the value as-is
    Verbatim,
    /// Coerce scalars to a string literal (for attributes the provider
    /// types as string even when the API may return a number or bool,
    /// e.g. a port that can also be a "1000-2000" range)
    AsString,
}

/// One row of a field table: API field path -> Terraform attribute
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Dot-separated path into the API record; numeric segments index
    /// into arrays (e.g. `targets.0.constraint.value`)
    pub api: &'static str,
    /// Terraform attribute name
    pub attr: &'static str,
    pub transform: Transform,
}

const fn field(api: &'static str, attr: &'static str) -> Field {
    Field {
        api,
        attr,
        transform: Transform::Verbatim,
    }
}

const fn field_str(api: &'static str, attr: &'static str) -> Field {
    Field {
        api,
        attr,
        transform: Transform::AsString,
    }
}

/// Static description of one supported resource type
#[derive(Debug, Clone, Copy)]
pub struct ResourceSpec {
    /// The Terraform resource type (e.g. "cloudflare_record")
    pub resource_type: &'static str,
    pub scope: Scope,
    /// API path template; `{zone}` or `{account}` is substituted with the
    /// identifier the user passed
    pub endpoint: &'static str,
    /// Ordered field table; order is preserved verbatim in output
    pub fields: &'static [Field],
}

const fn spec(
    resource_type: &'static str,
    scope: Scope,
    endpoint: &'static str,
    fields: &'static [Field],
) -> ResourceSpec {
    ResourceSpec {
        resource_type,
        scope,
        endpoint,
        fields,
    }
}

/// Look up the spec for a Terraform resource type
pub fn lookup(resource_type: &str) -> Option<&'static ResourceSpec> {
    RESOURCE_SPECS.get(resource_type).copied()
}

/// All supported resource types, sorted by Terraform type name
pub fn all() -> Vec<&'static ResourceSpec> {
    let mut specs: Vec<&'static ResourceSpec> = RESOURCE_SPECS.values().copied().collect();
    specs.sort_by_key(|s| s.resource_type);
    specs
}

/// Walk a record with the spec's field table, producing the ordered
/// attribute sequence the renderer consumes.
///
/// Missing fields and JSON `null` both become [`Value::Absent`], which the
/// renderer omits entirely.
pub fn extract_attributes(
    spec: &ResourceSpec,
    record: &serde_json::Value,
) -> Vec<(String, Value)> {
    spec.fields
        .iter()
        .map(|f| {
            let value = match lookup_path(record, f.api) {
                None => Value::Absent,
                Some(raw) => apply_transform(Value::from_json(raw), f.transform),
            };
            (f.attr.to_string(), value)
        })
        .collect()
}

fn apply_transform(value: Value, transform: Transform) -> Value {
    match transform {
        Transform::Verbatim => value,
        Transform::AsString => match value {
            Value::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    Value::String(format!("{}", n as i64))
                } else {
                    Value::String(format!("{n}"))
                }
            }
            Value::Bool(b) => Value::String(b.to_string()),
            other => other,
        },
    }
}

/// Descend into a JSON value by a dot-separated path.
///
/// Object segments index by key; numeric segments index into arrays.
fn lookup_path<'a>(record: &'a serde_json::Value, path: &str) -> Option<&'a serde_json::Value> {
    let mut current = record;
    for segment in path.split('.') {
        current = match current {
            serde_json::Value::Object(map) => map.get(segment)?,
            serde_json::Value::Array(items) => {
                let index: usize = segment.parse().ok()?;
                items.get(index)?
            }
            _ => return None,
        };
    }
    Some(current)
}

fn build_resource_specs() -> HashMap<&'static str, &'static ResourceSpec> {
    let mut m: HashMap<&'static str, &'static ResourceSpec> = HashMap::new();
    for s in ALL_SPECS {
        m.insert(s.resource_type, s);
    }
    m
}

lazy_static! {
    static ref RESOURCE_SPECS: HashMap<&'static str, &'static ResourceSpec> =
        build_resource_specs();
}

static ALL_SPECS: &[ResourceSpec] = &[
    // Zone-scoped
    spec(
        "cloudflare_record",
        Scope::Zone,
        "zones/{zone}/dns_records",
        &[
            field("name", "name"),
            field("type", "type"),
            field("content", "content"),
            field("ttl", "ttl"),
            field("priority", "priority"),
            field("proxied", "proxied"),
        ],
    ),
    spec(
        "cloudflare_filter",
        Scope::Zone,
        "zones/{zone}/filters",
        &[
            field("expression", "expression"),
            field("description", "description"),
            field("paused", "paused"),
            field("ref", "ref"),
        ],
    ),
    spec(
        "cloudflare_firewall_rule",
        Scope::Zone,
        "zones/{zone}/firewall/rules",
        &[
            field("filter.id", "filter_id"),
            field("action", "action"),
            field("description", "description"),
            field("paused", "paused"),
            field("priority", "priority"),
        ],
    ),
    spec(
        "cloudflare_healthcheck",
        Scope::Zone,
        "zones/{zone}/healthchecks",
        &[
            field("name", "name"),
            field("address", "address"),
            field("type", "type"),
            field("description", "description"),
            field("suspended", "suspended"),
            field("check_regions", "check_regions"),
            field("consecutive_fails", "consecutive_fails"),
            field("consecutive_successes", "consecutive_successes"),
            field("retries", "retries"),
            field("timeout", "timeout"),
            field("interval", "interval"),
        ],
    ),
    spec(
        "cloudflare_load_balancer",
        Scope::Zone,
        "zones/{zone}/load_balancers",
        &[
            field("name", "name"),
            field("fallback_pool", "fallback_pool_id"),
            field("default_pools", "default_pool_ids"),
            field("description", "description"),
            field("enabled", "enabled"),
            field("proxied", "proxied"),
            field("session_affinity", "session_affinity"),
            field("session_affinity_attributes", "session_affinity_attributes"),
            field("steering_policy", "steering_policy"),
            field("ttl", "ttl"),
        ],
    ),
    spec(
        "cloudflare_page_rule",
        Scope::Zone,
        "zones/{zone}/pagerules",
        &[
            field("targets.0.constraint.value", "target"),
            field("priority", "priority"),
            field("status", "status"),
        ],
    ),
    spec(
        "cloudflare_rate_limit",
        Scope::Zone,
        "zones/{zone}/rate_limits",
        &[
            field("threshold", "threshold"),
            field("period", "period"),
            field("disabled", "disabled"),
            field("description", "description"),
        ],
    ),
    spec(
        "cloudflare_custom_hostname",
        Scope::Zone,
        "zones/{zone}/custom_hostnames",
        &[
            field("hostname", "hostname"),
            field("custom_origin_server", "custom_origin_server"),
            field("custom_origin_sni", "custom_origin_sni"),
        ],
    ),
    spec(
        "cloudflare_waiting_room",
        Scope::Zone,
        "zones/{zone}/waiting_rooms",
        &[
            field("name", "name"),
            field("host", "host"),
            field("path", "path"),
            field("total_active_users", "total_active_users"),
            field("new_users_per_minute", "new_users_per_minute"),
            field("custom_page_html", "custom_page_html"),
            field("queue_all", "queue_all"),
            field("disable_session_renewal", "disable_session_renewal"),
            field("session_duration", "session_duration"),
            field("json_response_enabled", "json_response_enabled"),
            field("description", "description"),
            field("suspended", "suspended"),
        ],
    ),
    spec(
        "cloudflare_worker_route",
        Scope::Zone,
        "zones/{zone}/workers/routes",
        &[field("pattern", "pattern"), field("script", "script_name")],
    ),
    spec(
        "cloudflare_zone_lockdown",
        Scope::Zone,
        "zones/{zone}/firewall/lockdowns",
        &[
            field("description", "description"),
            field("paused", "paused"),
            field("urls", "urls"),
            field("configurations", "configurations"),
        ],
    ),
    spec(
        "cloudflare_tiered_cache",
        Scope::Zone,
        "zones/{zone}/argo/tiered_caching",
        &[field("value", "cache_type")],
    ),
    spec(
        "cloudflare_spectrum_application",
        Scope::Zone,
        "zones/{zone}/spectrum/apps",
        &[
            field("protocol", "protocol"),
            field("dns", "dns"),
            field("traffic_type", "traffic_type"),
            field("ip_firewall", "ip_firewall"),
            field("proxy_protocol", "proxy_protocol"),
            field("tls", "tls"),
            field("argo_smart_routing", "argo_smart_routing"),
            field_str("origin_port", "origin_port"),
            field("origin_direct", "origin_direct"),
            field("edge_ips", "edge_ips"),
        ],
    ),
    spec(
        "cloudflare_url_normalization_settings",
        Scope::Zone,
        "zones/{zone}/url_normalization",
        &[field("type", "type"), field("scope", "scope")],
    ),
    // Account-scoped
    spec(
        "cloudflare_access_rule",
        Scope::Account,
        "accounts/{account}/firewall/access_rules/rules",
        &[
            field("notes", "notes"),
            field("mode", "mode"),
            field("configuration", "configuration"),
        ],
    ),
    spec(
        "cloudflare_list",
        Scope::Account,
        "accounts/{account}/rules/lists",
        &[
            field("name", "name"),
            field("description", "description"),
            field("kind", "kind"),
        ],
    ),
    spec(
        "cloudflare_load_balancer_monitor",
        Scope::Account,
        "accounts/{account}/load_balancers/monitors",
        &[
            field("type", "type"),
            field("description", "description"),
            field("method", "method"),
            field("path", "path"),
            field("expected_codes", "expected_codes"),
            field("expected_body", "expected_body"),
            field("timeout", "timeout"),
            field("retries", "retries"),
            field("interval", "interval"),
            field("port", "port"),
            field("allow_insecure", "allow_insecure"),
            field("follow_redirects", "follow_redirects"),
            field("probe_zone", "probe_zone"),
        ],
    ),
    spec(
        "cloudflare_load_balancer_pool",
        Scope::Account,
        "accounts/{account}/load_balancers/pools",
        &[
            field("name", "name"),
            field("enabled", "enabled"),
            field("minimum_origins", "minimum_origins"),
            field("notification_email", "notification_email"),
            field("description", "description"),
            field("latitude", "latitude"),
            field("longitude", "longitude"),
            field("origins", "origins"),
        ],
    ),
    spec(
        "cloudflare_tunnel",
        Scope::Account,
        "accounts/{account}/cfd_tunnel",
        &[field("name", "name")],
    ),
    spec(
        "cloudflare_turnstile_widget",
        Scope::Account,
        "accounts/{account}/challenges/widgets",
        &[
            field("name", "name"),
            field("domains", "domains"),
            field("mode", "mode"),
            field("bot_fight_mode", "bot_fight_mode"),
            field("region", "region"),
            field("offlabel", "offlabel"),
        ],
    ),
    spec(
        "cloudflare_workers_kv_namespace",
        Scope::Account,
        "accounts/{account}/storage/kv/namespaces",
        &[field("title", "title")],
    ),
];
