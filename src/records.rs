//! RRset construction and pre-submission normalization.
//!
//! PowerDNS is strict about trailing-dot canonical form for name-valued
//! record content. Leaving the dot off does not error server-side; it
//! silently turns an absolute name into a relative one. The client
//! therefore repairs record sets before submitting them instead of
//! passing the caller's input through verbatim.

use reqwest::Method;
use serde::Serialize;

use crate::client::Client;
use crate::error::Result;
use crate::naming::{make_domain_canonical, trim_domain};
use crate::types::{ChangeType, Record, RrType, Rrset};

/// Body of a `PATCH zones/{zone}` request.
#[derive(Debug, Serialize)]
pub(crate) struct RrsetPatch {
    pub rrsets: Vec<Rrset>,
}

/// Rewrites every record's content into canonical form, in place.
pub(crate) fn canonical_record_values(records: &mut [Record]) {
    for record in records.iter_mut() {
        record.content = make_domain_canonical(&record.content);
    }
}

/// Repairs an RRset before submission: for types whose content is a
/// domain reference, all record contents are made canonical; everything
/// else is left untouched. Total and idempotent.
pub(crate) fn fix_rrset(rrset: &mut Rrset) {
    if !rrset.rr_type.requires_canonical_content() {
        return;
    }
    canonical_record_values(&mut rrset.records);
}

/// Collapses rrsets that share an owner name, type, and change type into
/// one, appending the later records in first-seen order. The server
/// rejects duplicate name/type pairs within one patch; merging keeps the
/// normalizer total instead of inventing a client-side error.
pub(crate) fn merge_duplicate_rrsets(rrsets: Vec<Rrset>) -> Vec<Rrset> {
    let mut merged: Vec<Rrset> = Vec::with_capacity(rrsets.len());
    for rrset in rrsets {
        let duplicate = merged.iter_mut().find(|m| {
            m.name == rrset.name
                && m.rr_type == rrset.rr_type
                && m.change_type == rrset.change_type
        });
        match duplicate {
            Some(existing) => {
                existing.records.extend(rrset.records);
                if existing.ttl.is_none() {
                    existing.ttl = rrset.ttl;
                }
            }
            None => merged.push(rrset),
        }
    }
    merged
}

impl Client {
    /// Creates the record set for `name`/`rr_type`, replacing whatever
    /// the zone currently holds under that pair.
    pub async fn add_record(
        &self,
        zone: &str,
        name: &str,
        rr_type: RrType,
        ttl: u32,
        contents: &[&str],
    ) -> Result<()> {
        self.change_record(zone, name, rr_type, ttl, contents).await
    }

    /// Replaces the record set for `name`/`rr_type` with the given
    /// contents.
    pub async fn change_record(
        &self,
        zone: &str,
        name: &str,
        rr_type: RrType,
        ttl: u32,
        contents: &[&str],
    ) -> Result<()> {
        let rrset = Rrset {
            name: name.to_string(),
            rr_type,
            ttl: Some(ttl),
            change_type: Some(ChangeType::Replace),
            records: contents.iter().map(|c| Record::new(*c)).collect(),
            comments: None,
        };
        self.patch_rrsets(zone, vec![rrset]).await
    }

    /// Deletes the whole record set for `name`/`rr_type`.
    pub async fn delete_record(&self, zone: &str, name: &str, rr_type: RrType) -> Result<()> {
        let rrset = Rrset {
            name: name.to_string(),
            rr_type,
            ttl: None,
            change_type: Some(ChangeType::Delete),
            records: Vec::new(),
            comments: None,
        };
        self.patch_rrsets(zone, vec![rrset]).await
    }

    /// Submits an ordered sequence of RRset mutations as one request.
    ///
    /// Owner names are canonicalized, name-valued record contents are
    /// repaired per [`RrType::requires_canonical_content`], and rrsets
    /// duplicating a name/type/changetype combination are merged before
    /// the PATCH goes out. Record order within each rrset is preserved.
    pub async fn patch_rrsets(&self, zone: &str, mut rrsets: Vec<Rrset>) -> Result<()> {
        for rrset in &mut rrsets {
            rrset.name = make_domain_canonical(&rrset.name);
            fix_rrset(rrset);
        }
        let body = RrsetPatch {
            rrsets: merge_duplicate_rrsets(rrsets),
        };
        let path = format!("zones/{}", trim_domain(zone));
        self.execute_discard(Method::PATCH, &path, Some(&body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rrset_of(rr_type: RrType, contents: &[&str]) -> Rrset {
        Rrset {
            name: "test.example.com.".to_string(),
            rr_type,
            ttl: Some(300),
            change_type: Some(ChangeType::Replace),
            records: contents.iter().map(|c| Record::new(*c)).collect(),
            comments: None,
        }
    }

    #[test]
    fn canonical_record_values_appends_missing_dots() {
        let cases: &[(&[&str], &[&str])] = &[
            (&["foo.tld"], &["foo.tld."]),
            (&["foo.tld."], &["foo.tld."]),
            (&["foo.tld", "foo.tld."], &["foo.tld.", "foo.tld."]),
        ];
        for (input, want) in cases {
            let mut records: Vec<Record> = input.iter().map(|c| Record::new(*c)).collect();
            canonical_record_values(&mut records);
            let got: Vec<&str> = records.iter().map(|r| r.content.as_str()).collect();
            assert_eq!(&got, want);
        }
    }

    #[test]
    fn fix_rrset_canonicalizes_name_referencing_types() {
        for rr_type in [RrType::CNAME, RrType::MX] {
            let mut rrset = rrset_of(rr_type, &["foo.tld"]);
            fix_rrset(&mut rrset);
            assert_eq!(rrset.records[0].content, "foo.tld.");
        }
    }

    #[test]
    fn fix_rrset_is_a_no_op_on_canonical_content() {
        let mut rrset = rrset_of(RrType::CNAME, &["foo.tld."]);
        fix_rrset(&mut rrset);
        assert_eq!(rrset.records[0].content, "foo.tld.");
    }

    #[test]
    fn fix_rrset_leaves_address_records_alone() {
        let mut rrset = rrset_of(RrType::A, &["foo.tld"]);
        fix_rrset(&mut rrset);
        assert_eq!(rrset.records[0].content, "foo.tld");
    }

    #[test]
    fn fix_rrset_handles_empty_record_sets() {
        let mut rrset = rrset_of(RrType::CNAME, &[]);
        fix_rrset(&mut rrset);
        assert!(rrset.records.is_empty());
    }

    #[test]
    fn merge_collapses_same_name_type_changetype() {
        let merged = merge_duplicate_rrsets(vec![
            rrset_of(RrType::TXT, &["\"one\""]),
            rrset_of(RrType::TXT, &["\"two\""]),
        ]);
        assert_eq!(merged.len(), 1);
        let contents: Vec<&str> = merged[0].records.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, ["\"one\"", "\"two\""]);
    }

    #[test]
    fn merge_keeps_distinct_rrsets_in_order() {
        let a = rrset_of(RrType::A, &["192.0.2.1"]);
        let txt = rrset_of(RrType::TXT, &["\"x\""]);
        let mut delete = rrset_of(RrType::A, &[]);
        delete.change_type = Some(ChangeType::Delete);

        let merged = merge_duplicate_rrsets(vec![a.clone(), txt.clone(), delete.clone()]);
        assert_eq!(merged, vec![a, txt, delete]);
    }
}
