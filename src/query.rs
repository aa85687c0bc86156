//! Search and enrich pipelines over the record store.
//!
//! Search: filter -> sort -> paginate -> project.
//! Enrich: keyed lookup -> project -> optional contact join.

use serde_json::Value;

use crate::errors::AppError;
use crate::fields::Record;
use crate::filters::Criteria;
use crate::models::{
    Company, CompanyEnrichRequest, Contact, ContactEnrichRequest, MatchType, Pagination,
    SearchParams,
};
use crate::pagination::paginate;
use crate::projection::project;
use crate::sorting::{sort_records, SortOrder};
use crate::store::RecordStore;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const DEFAULT_CONTACTS_LIMIT: i64 = 10;

/// Search parameters with defaults applied and bounds checked.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    pub page: u64,
    pub page_size: u64,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub output_fields: Vec<String>,
}

impl SearchOptions {
    /// Applies defaults for the record kind and rejects non-positive paging values.
    pub fn resolve<C: Criteria>(params: &SearchParams) -> Result<Self, AppError> {
        let page = positive("page", params.page, DEFAULT_PAGE)?;
        let page_size = positive("pageSize", params.page_size, DEFAULT_PAGE_SIZE)?;

        Ok(Self {
            page,
            page_size,
            sort_by: params
                .sort_by
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| C::DEFAULT_SORT.to_string()),
            sort_order: SortOrder::parse(params.sort_order.as_deref()),
            output_fields: params.output_fields.clone().unwrap_or_default(),
        })
    }
}

fn positive(name: &str, value: Option<i64>, default: u64) -> Result<u64, AppError> {
    match value {
        None => Ok(default),
        Some(n) if n >= 1 => Ok(n as u64),
        Some(n) => Err(AppError::BadRequest(format!(
            "{} must be at least 1, got {}",
            name, n
        ))),
    }
}

/// A page of projected records plus its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub data: Vec<Value>,
    pub pagination: Pagination,
}

/// Runs the search pipeline over `records` without touching the source slice.
pub fn search<C: Criteria>(
    records: &[C::Record],
    criteria: &C,
    options: &SearchOptions,
) -> SearchResult {
    let predicate = criteria.predicate();
    let mut matched: Vec<&C::Record> = records.iter().filter(|r| predicate.matches(r)).collect();

    sort_records(&mut matched, &options.sort_by, options.sort_order);

    let page = paginate(matched, options.page, options.page_size);
    let data = page
        .items
        .into_iter()
        .map(|r| project(r, &options.output_fields))
        .collect();

    SearchResult {
        data,
        pagination: page.pagination,
    }
}

/// A successful enrich: the projected record and how it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Enriched {
    pub data: Value,
    pub match_type: MatchType,
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Resolves the company a request refers to.
///
/// Only the highest-priority key present is consulted: id, then name, then website.
pub fn find_company<'a>(
    store: &'a RecordStore,
    request: &CompanyEnrichRequest,
) -> Option<(&'a Company, MatchType)> {
    let companies = store.companies();

    if let Some(id) = supplied(&request.company_id) {
        return store
            .company_by_id(id)
            .map(|c| (c, MatchType::FullMatch));
    }

    if let Some(name) = supplied(&request.company_name) {
        let wanted = name.to_lowercase();
        if let Some(exact) = companies
            .iter()
            .find(|c| c.company_name.to_lowercase() == wanted)
        {
            return Some((exact, MatchType::FullMatch));
        }
        return companies
            .iter()
            .find(|c| c.company_name.to_lowercase().contains(&wanted))
            .map(|c| (c, MatchType::PartialMatch));
    }

    if let Some(website) = supplied(&request.website) {
        let wanted = website.to_lowercase();
        return companies
            .iter()
            .find(|c| c.website.to_lowercase() == wanted)
            .map(|c| (c, MatchType::FullMatch));
    }

    None
}

/// Resolves the contact a request refers to: id, then email, then full name within a company.
pub fn find_contact<'a>(
    store: &'a RecordStore,
    request: &ContactEnrichRequest,
) -> Option<&'a Contact> {
    let contacts = store.contacts();

    if let Some(id) = supplied(&request.contact_id) {
        return contacts.iter().find(|c| c.id == id);
    }

    if let Some(email) = supplied(&request.email) {
        let wanted = email.to_lowercase();
        return contacts.iter().find(|c| c.email.to_lowercase() == wanted);
    }

    if let (Some(full_name), Some(company_id)) = (
        supplied(&request.full_name),
        supplied(&request.company_id),
    ) {
        let wanted = full_name.to_lowercase();
        return contacts
            .iter()
            .find(|c| c.full_name.to_lowercase() == wanted && c.company_id == company_id);
    }

    None
}

/// Looks up one company, projects it and optionally attaches its contacts.
pub fn enrich_company(
    store: &RecordStore,
    request: &CompanyEnrichRequest,
) -> Result<Enriched, AppError> {
    let (company, match_type) = find_company(store, request).ok_or(AppError::CompanyNotFound)?;

    let mut data = project(company, &request.output_fields);

    let include_contacts =
        request.include_contacts || request.output_fields.iter().any(|f| f == "contacts");
    if include_contacts {
        let limit = request
            .contacts_limit
            .unwrap_or(DEFAULT_CONTACTS_LIMIT)
            .max(0) as usize;
        let contacts: Vec<Value> = store
            .contacts_for_company(company.id())
            .take(limit)
            .map(|c| project(c, &request.contact_fields))
            .collect();

        if let Value::Object(ref mut object) = data {
            object.insert("contacts".to_string(), Value::Array(contacts));
        }
    }

    Ok(Enriched { data, match_type })
}

/// Looks up one contact and projects it. Contact lookups are always exact.
pub fn enrich_contact(
    store: &RecordStore,
    request: &ContactEnrichRequest,
) -> Result<Enriched, AppError> {
    let contact = find_contact(store, request).ok_or(AppError::ContactNotFound)?;

    Ok(Enriched {
        data: project(contact, &request.output_fields),
        match_type: MatchType::FullMatch,
    })
}
