use serde::{Deserialize, Serialize};

/// Certificate as returned by the controller.
///
/// The PEM body and private key are never echoed back, so they only exist on
/// [`CertCreateRequest`]. `owner`, `created`, `updated` and `id` are
/// populated for certificates that already exist on the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    #[serde(rename = "common_name")]
    pub name: String,

    /// Expiry as reported by the controller; opaque to the client.
    pub expires: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Controller-assigned id. Zero is never a real id and is omitted.
    #[serde(default, skip_serializing_if = "id_is_unset")]
    pub id: Option<u64>,
}

/// Response of `GET /v1/certs/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certs {
    pub count: u64,

    /// Forward cursor. Pass back verbatim to fetch the next page.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub next: u64,

    #[serde(default, deserialize_with = "null_as_zero")]
    pub previous: u64,

    #[serde(rename = "results", default)]
    pub certs: Vec<Cert>,
}

/// Body of `POST /v1/certs/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertCreateRequest {
    /// PEM-encoded certificate.
    pub certificate: String,

    /// PEM-encoded private key.
    pub key: String,

    #[serde(rename = "common_name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body of `POST /v1/certs/<name>/domain/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertAttachRequest {
    pub domain: String,
}

fn id_is_unset(id: &Option<u64>) -> bool {
    matches!(id, None | Some(0))
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or_default())
}
