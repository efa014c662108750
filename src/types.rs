//! Wire types for the PowerDNS API.
//!
//! Optional fields are `Option<T>` with `skip_serializing_if` so that a
//! field left out of a request body stays distinguishable from one
//! explicitly set to its zero value, matching the API's partial-update
//! semantics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! rr_types {
    ($($variant:ident),+ $(,)?) => {
        /// DNS record types understood by the API.
        ///
        /// Serializes as the uppercase wire name (`"A"`, `"CNAME"`, ...).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum RrType {
            $($variant,)+
        }

        impl RrType {
            /// The type's wire name, as the API spells it.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(RrType::$variant => stringify!($variant),)+
                }
            }
        }

        impl FromStr for RrType {
            type Err = UnknownRrType;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_uppercase().as_str() {
                    $(stringify!($variant) => Ok(RrType::$variant),)+
                    _ => Err(UnknownRrType(s.to_string())),
                }
            }
        }
    };
}

rr_types! {
    A, AAAA, AFSDB, ALIAS, CAA, CERT, CDNSKEY, CDS, CNAME, DNSKEY, DNAME,
    DS, HINFO, KEY, LOC, MX, NAPTR, NS, NSEC, NSEC3, NSEC3PARAM,
    OPENPGPKEY, PTR, RP, RRSIG, SOA, SPF, SSHFP, SRV, TLSA, SMIMEA, TXT,
    URI,
}

/// Record types whose content names another domain and therefore must be
/// submitted in canonical (trailing-dot) form. Extend here when the
/// server grows strict about further types.
const CANONICAL_CONTENT_TYPES: &[RrType] = &[RrType::CNAME, RrType::MX];

impl RrType {
    /// Whether record content of this type is a domain reference that the
    /// server requires fully qualified.
    pub fn requires_canonical_content(self) -> bool {
        CANONICAL_CONTENT_TYPES.contains(&self)
    }
}

impl fmt::Display for RrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown record type '{0}'")]
pub struct UnknownRrType(pub String);

/// What a PATCHed RRset does to the records already present under its
/// name and type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
    Replace,
    Delete,
}

/// A single resource record inside an RRset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record payload; canonical form depends on the owning RRset's type.
    pub content: String,
    #[serde(default)]
    pub disabled: bool,
    /// Ask the server to also maintain the matching PTR record.
    #[serde(rename = "set-ptr", default, skip_serializing_if = "Option::is_none")]
    pub set_ptr: Option<bool>,
}

impl Record {
    pub fn new(content: impl Into<String>) -> Self {
        Record {
            content: content.into(),
            disabled: false,
            set_ptr: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub content: String,
    pub account: String,
    /// Epoch seconds of the last modification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<u64>,
}

/// The set of records sharing one owner name and type, mutated as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rrset {
    /// Owner name, e.g. `"www.example.com."`.
    pub name: String,
    #[serde(rename = "type")]
    pub rr_type: RrType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Present only when PATCHing a zone.
    #[serde(rename = "changetype", default, skip_serializing_if = "Option::is_none")]
    pub change_type: Option<ChangeType>,
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    Native,
    Master,
    Slave,
}

/// A zone as reported (and created) by the zones endpoint.
///
/// Everything except the name is optional: responses omit fields
/// depending on the endpoint, and request bodies should carry only what
/// the caller means to set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Zone {
    /// Opaque zone id, usually the canonical zone name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Canonical zone name, e.g. `"example.com."`.
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub zone_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ZoneKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrsets: Option<Vec<Rrset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notified_serial: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masters: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dnssec: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsec3param: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsec3narrow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soa_edit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soa_edit_api: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_rectify: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Accepted on zone creation only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,
}

/// A DNSSEC signing key owned by one zone, identified by (zone, id).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cryptokey {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub key_kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// `"ksk"`, `"zsk"`, or `"csk"`.
    #[serde(rename = "keytype", default, skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dnskey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ds: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privatekey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bits: Option<u32>,
}

/// A read-only server configuration setting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSetting {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub setting_type: Option<String>,
    pub value: String,
}

/// Response of the zone notify endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyResult {
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rr_type_round_trips_through_wire_name() {
        for (s, t) in [("A", RrType::A), ("CNAME", RrType::CNAME), ("NSEC3PARAM", RrType::NSEC3PARAM)] {
            assert_eq!(t.as_str(), s);
            assert_eq!(s.parse::<RrType>().unwrap(), t);
        }
        assert_eq!("mx".parse::<RrType>().unwrap(), RrType::MX);
        assert!("BOGUS".parse::<RrType>().is_err());
    }

    #[test]
    fn canonical_content_table_covers_name_referencing_types() {
        assert!(RrType::CNAME.requires_canonical_content());
        assert!(RrType::MX.requires_canonical_content());
        assert!(!RrType::A.requires_canonical_content());
        assert!(!RrType::TXT.requires_canonical_content());
    }

    #[test]
    fn change_type_uses_uppercase_wire_values() {
        assert_eq!(serde_json::to_string(&ChangeType::Replace).unwrap(), "\"REPLACE\"");
        assert_eq!(serde_json::to_string(&ChangeType::Delete).unwrap(), "\"DELETE\"");
    }

    #[test]
    fn record_omits_unset_optional_fields() {
        let json = serde_json::to_value(Record::new("192.0.2.1")).unwrap();
        assert_eq!(json, serde_json::json!({"content": "192.0.2.1", "disabled": false}));
    }
}
