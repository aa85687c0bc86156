//! Static field catalogs and the usage snapshot served by `/lookup/*` and `/user/usage`.

use crate::models::{FieldDescriptor, UsageSnapshot};

const fn f(field: &'static str, kind: &'static str, description: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        field,
        kind,
        description,
    }
}

pub static COMPANY_SEARCH_FIELDS: &[FieldDescriptor] = &[
    f("companyName", "string", "Company name"),
    f("website", "string", "Company website"),
    f("phone", "string", "Company phone number"),
    f("city", "string", "City"),
    f("state", "string", "State/Province"),
    f("zipCode", "string", "Zip/Postal code"),
    f("country", "string", "Country"),
    f("revenueMin", "number", "Minimum revenue"),
    f("revenueMax", "number", "Maximum revenue"),
    f("employeesMin", "number", "Minimum employees"),
    f("employeesMax", "number", "Maximum employees"),
    f("industry", "string", "Industry"),
    f("sicCode", "string", "SIC code"),
    f("naicsCode", "string", "NAICS code"),
    f("ticker", "string", "Stock ticker symbol"),
    f("ownership", "string", "Ownership type (Public/Private)"),
    f("technologies", "array", "Technologies used"),
];

pub static CONTACT_SEARCH_FIELDS: &[FieldDescriptor] = &[
    f("firstName", "string", "First name"),
    f("lastName", "string", "Last name"),
    f("fullName", "string", "Full name"),
    f("jobTitle", "string", "Job title"),
    f("department", "string", "Department"),
    f("managementLevel", "string", "Management level"),
    f("email", "string", "Work email"),
    f("city", "string", "City"),
    f("state", "string", "State/Province"),
    f("country", "string", "Country"),
    f("companyId", "string", "Company ID"),
    f("companyName", "string", "Company name"),
];

pub static COMPANY_OUTPUT_FIELDS: &[FieldDescriptor] = &[
    f("id", "string", "Unique company identifier"),
    f("companyName", "string", "Company name"),
    f("website", "string", "Company website"),
    f("phone", "string", "Company phone number"),
    f("fax", "string", "Company fax number"),
    f("email", "string", "Company email"),
    f("ticker", "string", "Stock ticker symbol"),
    f("revenue", "number", "Annual revenue"),
    f("revenueRange", "string", "Revenue range"),
    f("employees", "number", "Number of employees"),
    f("employeesRange", "string", "Employee count range"),
    f("sicCodes", "array", "SIC codes"),
    f("naicsCodes", "array", "NAICS codes"),
    f("primaryIndustry", "string", "Primary industry"),
    f("subIndustries", "array", "Sub-industries"),
    f("address", "object", "Company address"),
    f("founded", "number", "Year founded"),
    f("description", "string", "Company description"),
    f("companyType", "string", "Company type"),
    f("ownership", "string", "Ownership type"),
    f("stockExchange", "string", "Stock exchange"),
    f("logoUrl", "string", "Logo URL"),
    f("linkedInUrl", "string", "LinkedIn URL"),
    f("facebookUrl", "string", "Facebook URL"),
    f("twitterUrl", "string", "Twitter URL"),
    f("technologies", "array", "Technologies used"),
    f("lastUpdated", "string", "Last updated date"),
    f("validDate", "string", "Valid date"),
    f("contacts", "array", "Associated contacts"),
];

pub static CONTACT_OUTPUT_FIELDS: &[FieldDescriptor] = &[
    f("id", "string", "Unique contact identifier"),
    f("firstName", "string", "First name"),
    f("lastName", "string", "Last name"),
    f("fullName", "string", "Full name"),
    f("jobTitle", "string", "Job title"),
    f("jobFunction", "string", "Job function"),
    f("department", "string", "Department"),
    f("managementLevel", "string", "Management level"),
    f("email", "string", "Work email"),
    f("emailStatus", "string", "Email status"),
    f("directPhone", "string", "Direct phone"),
    f("mobilePhone", "string", "Mobile phone"),
    f("officePhone", "string", "Office phone"),
    f("linkedInUrl", "string", "LinkedIn profile URL"),
    f("address", "object", "Contact location"),
    f("companyId", "string", "Company ID"),
    f("companyName", "string", "Company name"),
    f("companyWebsite", "string", "Company website"),
    f("companyPhone", "string", "Company phone"),
    f("lastUpdated", "string", "Last updated date"),
    f("validDate", "string", "Valid date"),
];

/// Usage counters are fixed; no quota is ever consumed.
pub fn usage_snapshot() -> UsageSnapshot {
    UsageSnapshot {
        credits_used: 1250,
        credits_remaining: 8750,
        credits_total: 10_000,
        requests_this_minute: 15,
        requests_per_minute_limit: 1500,
        current_period_start: "2025-01-01T00:00:00Z",
        current_period_end: "2025-01-31T23:59:59Z",
        records_enriched: 450,
        records_enriched_limit: 25_000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Record;
    use crate::models::{Company, Contact};

    fn names(fields: &[FieldDescriptor]) -> Vec<&'static str> {
        fields.iter().map(|d| d.field).collect()
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(COMPANY_SEARCH_FIELDS.len(), 17);
        assert_eq!(CONTACT_SEARCH_FIELDS.len(), 12);
        assert_eq!(COMPANY_OUTPUT_FIELDS.len(), 29);
        assert_eq!(CONTACT_OUTPUT_FIELDS.len(), 21);
    }

    #[test]
    fn test_output_catalogs_match_record_fields() {
        let mut company = names(COMPANY_OUTPUT_FIELDS);
        assert_eq!(company.pop(), Some("contacts"));
        assert_eq!(company, Company::FIELDS);
        assert_eq!(names(CONTACT_OUTPUT_FIELDS), Contact::FIELDS);
    }

    #[test]
    fn test_usage_adds_up() {
        let usage = usage_snapshot();
        assert_eq!(usage.credits_used + usage.credits_remaining, usage.credits_total);
    }
}
