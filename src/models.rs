use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Reads an optional integer, also accepting JSON floats with no fractional part (`1e9`, `10.0`).
fn integral<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(n) = number.as_i64() {
        return Ok(Some(n));
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(Some(f as i64))
        }
        _ => Err(de::Error::custom(format!("expected an integer, got {}", number))),
    }
}

// ============ Catalog Records ============

/// Postal address attached to a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// A company as stored in the catalog.
///
/// Only `id` is guaranteed to be meaningful; the nullable fields mirror the
/// gaps that real provider data has (private companies have no ticker, etc).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Stable provider identifier.
    pub id: String,
    pub company_name: String,
    pub website: String,
    pub phone: String,
    pub fax: Option<String>,
    pub email: String,
    /// Stock ticker, absent for private companies and subsidiaries.
    pub ticker: Option<String>,
    /// Annual revenue in USD.
    pub revenue: i64,
    pub revenue_range: String,
    pub employees: i64,
    pub employees_range: String,
    pub sic_codes: Vec<String>,
    pub naics_codes: Vec<String>,
    pub primary_industry: String,
    pub sub_industries: Vec<String>,
    pub address: Address,
    /// Year founded.
    pub founded: i32,
    pub description: String,
    pub company_type: Option<String>,
    /// "Public" or "Private".
    pub ownership: Option<String>,
    pub stock_exchange: Option<String>,
    pub logo_url: Option<String>,
    #[serde(rename = "linkedInUrl")]
    pub linkedin_url: Option<String>,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub technologies: Vec<String>,
    /// RFC 3339 timestamp of the last data refresh.
    pub last_updated: String,
    /// ISO date the record was last verified.
    pub valid_date: String,
}

/// Location attached to a contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactAddress {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// A person working at one of the catalog companies.
///
/// `company_name`, `company_website` and `company_phone` are denormalized
/// copies of the parent company and are never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub job_title: String,
    pub job_function: String,
    pub department: String,
    /// e.g. "VP", "Director".
    pub management_level: String,
    pub email: String,
    /// e.g. "Verified".
    pub email_status: String,
    pub direct_phone: String,
    pub mobile_phone: String,
    pub office_phone: String,
    #[serde(rename = "linkedInUrl")]
    pub linkedin_url: String,
    pub address: ContactAddress,
    /// Foreign key into the company catalog.
    pub company_id: String,
    pub company_name: String,
    pub company_website: String,
    pub company_phone: String,
    pub last_updated: String,
    pub valid_date: String,
}

// ============ Request Models ============

/// Body of `POST /authenticate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub client_id: Option<String>,
    pub private_key: Option<String>,
}

/// Filters accepted by `POST /search/company`.
///
/// Every criterion is optional; paging and sorting defaults are applied by
/// [`SearchOptions`], not here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCriteria {
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    #[serde(default, deserialize_with = "integral")]
    pub revenue_min: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub revenue_max: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub employees_min: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub employees_max: Option<i64>,
    pub industry: Option<String>,
    pub sic_code: Option<String>,
    pub naics_code: Option<String>,
    pub ticker: Option<String>,
    pub ownership: Option<String>,
    pub technologies: Option<Vec<String>>,
}

/// Filters accepted by `POST /search/contact`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCriteria {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub management_level: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub company_id: Option<String>,
    pub company_name: Option<String>,
}

/// Paging, ordering and projection parameters shared by both search endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default, deserialize_with = "integral")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub output_fields: Option<Vec<String>>,
}

/// A search request: criteria plus paging parameters, read from one flat body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest<C> {
    #[serde(flatten)]
    pub criteria: C,
    #[serde(flatten)]
    pub params: SearchParams,
}

/// Body of `POST /enrich/company`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyEnrichRequest {
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub output_fields: Vec<String>,
    #[serde(default)]
    pub include_contacts: bool,
    #[serde(default)]
    pub contact_fields: Vec<String>,
    #[serde(default, deserialize_with = "integral")]
    pub contacts_limit: Option<i64>,
}

/// Body of `POST /enrich/contact`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactEnrichRequest {
    pub contact_id: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub company_id: Option<String>,
    #[serde(default)]
    pub output_fields: Vec<String>,
}

/// Body of `POST /search/company/bulk`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSearchRequest {
    pub job_name: Option<String>,
    /// Accepted for contract compatibility; the stub never evaluates it.
    pub search_criteria: Option<Value>,
    pub max_results: Option<u64>,
}

// ============ Response Models ============

/// How an enrich lookup resolved its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    FullMatch,
    PartialMatch,
    NoMatch,
}

/// Pagination metadata returned by the search endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub page_size: u64,
    pub total_results: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub data: Vec<Value>,
    pub pagination: Pagination,
    /// The request body exactly as received.
    pub query: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichResponse {
    pub success: bool,
    pub data: Value,
    pub match_type: MatchType,
    /// Billing signal; always true on a successful enrich.
    pub credit_used: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    pub jwt: String,
    pub expires_in: u64,
    pub token_type: String,
}

/// Lifecycle states reported for a bulk job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Processing,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkJobSubmitted {
    pub success: bool,
    pub job_id: String,
    pub job_name: String,
    pub status: JobStatus,
    pub submitted_at: String,
    pub estimated_completion_time: String,
    pub max_results: u64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkJobStatus {
    pub success: bool,
    pub job_id: String,
    pub status: JobStatus,
    pub submitted_at: String,
    pub completed_at: String,
    pub total_results: u64,
    pub download_url: String,
    pub expires_at: String,
}

/// One entry of a field catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub field: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFieldsResponse {
    pub success: bool,
    pub search_fields: &'static [FieldDescriptor],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputFieldsResponse {
    pub success: bool,
    pub output_fields: &'static [FieldDescriptor],
}

/// Credit and rate-limit counters for the calling account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSnapshot {
    pub credits_used: u64,
    pub credits_remaining: u64,
    pub credits_total: u64,
    pub requests_this_minute: u64,
    pub requests_per_minute_limit: u64,
    pub current_period_start: &'static str,
    pub current_period_end: &'static str,
    pub records_enriched: u64,
    pub records_enriched_limit: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsageResponse {
    pub success: bool,
    pub usage: UsageSnapshot,
}
