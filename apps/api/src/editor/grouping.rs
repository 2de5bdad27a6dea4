//! Company grouping for display.
//!
//! Records are partitioned by owning company. Companies named in the
//! configured presentation order come first, remaining companies follow in
//! encounter order, and the sentinel bucket (bullets with no owning heading)
//! is last among the unlisted.

use std::collections::HashMap;

use serde::Serialize;

use crate::editor::store::BulletRecord;
use crate::extract::attribution::SENTINEL_COMPANY;

#[derive(Debug, Clone, Serialize)]
pub struct CompanyGroup {
    pub company: String,
    pub bullets: Vec<BulletRecord>,
}

/// Partitions `records` into per-company groups, applying `preferred_order`
/// as the leading presentation order.
pub fn group_by_company<'a, I>(records: I, preferred_order: &[String]) -> Vec<CompanyGroup>
where
    I: IntoIterator<Item = &'a BulletRecord>,
{
    let mut encounter_order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<BulletRecord>> = HashMap::new();
    for record in records {
        if !buckets.contains_key(&record.company) {
            encounter_order.push(record.company.clone());
        }
        buckets
            .entry(record.company.clone())
            .or_default()
            .push(record.clone());
    }

    let mut groups = Vec::new();
    for company in preferred_order {
        if let Some(bullets) = buckets.remove(company) {
            groups.push(CompanyGroup {
                company: company.clone(),
                bullets,
            });
        }
    }

    let mut sentinel = None;
    for company in encounter_order {
        if let Some(bullets) = buckets.remove(&company) {
            let group = CompanyGroup { company, bullets };
            if group.company == SENTINEL_COMPANY {
                sentinel = Some(group);
            } else {
                groups.push(group);
            }
        }
    }
    if let Some(group) = sentinel {
        groups.push(group);
    }

    groups
}
