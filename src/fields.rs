//! Name-based field access for catalog records.
//!
//! Search, sort and projection all address fields by their wire name
//! (`companyName`, `sicCodes`, ...). Each record kind maps those names to
//! accessors explicitly, so an unknown name resolves to `None` instead of
//! reaching into the struct dynamically.

use serde_json::{json, Value};
use std::cmp::Ordering;

use crate::models::{Company, Contact};

/// A record kind that can be searched, sorted and projected by field name.
pub trait Record {
    /// Wire name of the identifier field, always kept by projection.
    const ID_FIELD: &'static str;
    /// Every public field name, in wire order.
    const FIELDS: &'static [&'static str];

    fn id(&self) -> &str;

    /// Returns the value of `name`, or `None` if the record kind has no such field.
    ///
    /// Known fields that are null on this record come back as `Some(Value::Null)`.
    fn field(&self, name: &str) -> Option<Value>;
}

impl Record for Company {
    const ID_FIELD: &'static str = "id";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "companyName",
        "website",
        "phone",
        "fax",
        "email",
        "ticker",
        "revenue",
        "revenueRange",
        "employees",
        "employeesRange",
        "sicCodes",
        "naicsCodes",
        "primaryIndustry",
        "subIndustries",
        "address",
        "founded",
        "description",
        "companyType",
        "ownership",
        "stockExchange",
        "logoUrl",
        "linkedInUrl",
        "facebookUrl",
        "twitterUrl",
        "technologies",
        "lastUpdated",
        "validDate",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "id" => json!(self.id),
            "companyName" => json!(self.company_name),
            "website" => json!(self.website),
            "phone" => json!(self.phone),
            "fax" => json!(self.fax),
            "email" => json!(self.email),
            "ticker" => json!(self.ticker),
            "revenue" => json!(self.revenue),
            "revenueRange" => json!(self.revenue_range),
            "employees" => json!(self.employees),
            "employeesRange" => json!(self.employees_range),
            "sicCodes" => json!(self.sic_codes),
            "naicsCodes" => json!(self.naics_codes),
            "primaryIndustry" => json!(self.primary_industry),
            "subIndustries" => json!(self.sub_industries),
            "address" => json!({
                "street": self.address.street,
                "city": self.address.city,
                "state": self.address.state,
                "zipCode": self.address.zip_code,
                "country": self.address.country,
            }),
            "founded" => json!(self.founded),
            "description" => json!(self.description),
            "companyType" => json!(self.company_type),
            "ownership" => json!(self.ownership),
            "stockExchange" => json!(self.stock_exchange),
            "logoUrl" => json!(self.logo_url),
            "linkedInUrl" => json!(self.linkedin_url),
            "facebookUrl" => json!(self.facebook_url),
            "twitterUrl" => json!(self.twitter_url),
            "technologies" => json!(self.technologies),
            "lastUpdated" => json!(self.last_updated),
            "validDate" => json!(self.valid_date),
            _ => return None,
        };
        Some(value)
    }
}

impl Record for Contact {
    const ID_FIELD: &'static str = "id";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "firstName",
        "lastName",
        "fullName",
        "jobTitle",
        "jobFunction",
        "department",
        "managementLevel",
        "email",
        "emailStatus",
        "directPhone",
        "mobilePhone",
        "officePhone",
        "linkedInUrl",
        "address",
        "companyId",
        "companyName",
        "companyWebsite",
        "companyPhone",
        "lastUpdated",
        "validDate",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "id" => json!(self.id),
            "firstName" => json!(self.first_name),
            "lastName" => json!(self.last_name),
            "fullName" => json!(self.full_name),
            "jobTitle" => json!(self.job_title),
            "jobFunction" => json!(self.job_function),
            "department" => json!(self.department),
            "managementLevel" => json!(self.management_level),
            "email" => json!(self.email),
            "emailStatus" => json!(self.email_status),
            "directPhone" => json!(self.direct_phone),
            "mobilePhone" => json!(self.mobile_phone),
            "officePhone" => json!(self.office_phone),
            "linkedInUrl" => json!(self.linkedin_url),
            "address" => json!({
                "city": self.address.city,
                "state": self.address.state,
                "country": self.address.country,
            }),
            "companyId" => json!(self.company_id),
            "companyName" => json!(self.company_name),
            "companyWebsite" => json!(self.company_website),
            "companyPhone" => json!(self.company_phone),
            "lastUpdated" => json!(self.last_updated),
            "validDate" => json!(self.valid_date),
            _ => return None,
        };
        Some(value)
    }
}

/// Comparable view of a field value.
///
/// Variant order is the cross-type order: a missing or non-scalar value sorts
/// lowest, then booleans, numbers, and text.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Missing,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SortKey {
    pub fn of<R: Record>(record: &R, field: &str) -> Self {
        match record.field(field) {
            Some(Value::Bool(b)) => SortKey::Bool(b),
            Some(Value::Number(n)) => n.as_f64().map_or(SortKey::Missing, SortKey::Number),
            Some(Value::String(s)) => SortKey::Text(s),
            _ => SortKey::Missing,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Missing => 0,
            SortKey::Bool(_) => 1,
            SortKey::Number(_) => 2,
            SortKey::Text(_) => 3,
        }
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
