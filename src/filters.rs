//! Translates search criteria into record predicates.
//!
//! Every supplied criterion becomes one test; a record passes when all tests
//! pass. Empty strings, zero numeric bounds and empty lists count as "not
//! supplied" and add no test.

use crate::fields::Record;
use crate::models::{Company, CompanyCriteria, Contact, ContactCriteria};

type Test<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// Conjunction of per-field tests over one record kind.
pub struct Predicate<R> {
    tests: Vec<Test<R>>,
}

impl<R> Predicate<R> {
    /// The predicate that accepts every record.
    pub fn all() -> Self {
        Self { tests: Vec::new() }
    }

    pub fn and(mut self, test: impl Fn(&R) -> bool + Send + Sync + 'static) -> Self {
        self.tests.push(Box::new(test));
        self
    }

    pub fn matches(&self, record: &R) -> bool {
        self.tests.iter().all(|test| test(record))
    }

    /// Number of active constraints.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

impl<R> std::fmt::Debug for Predicate<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate")
            .field("tests", &self.tests.len())
            .finish()
    }
}

/// Search criteria for one record kind.
pub trait Criteria {
    type Record: Record;

    /// Field used when the request names no `sortBy`.
    const DEFAULT_SORT: &'static str;

    fn predicate(&self) -> Predicate<Self::Record>;
}

/// Lowercased filter text, or `None` when absent or empty.
fn text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Filter text compared literally (codes, phone numbers, identifiers).
fn literal(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(String::from)
}

fn bound(value: Option<i64>) -> Option<i64> {
    value.filter(|n| *n != 0)
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn eq_ci(value: &str, needle_lower: &str) -> bool {
    value.to_lowercase() == needle_lower
}

fn opt_eq_ci(value: &Option<String>, needle_lower: &str) -> bool {
    value.as_deref().is_some_and(|v| eq_ci(v, needle_lower))
}

impl Criteria for CompanyCriteria {
    type Record = Company;
    const DEFAULT_SORT: &'static str = "companyName";

    fn predicate(&self) -> Predicate<Company> {
        let mut p = Predicate::all();

        if let Some(name) = text(&self.company_name) {
            p = p.and(move |c: &Company| contains_ci(&c.company_name, &name));
        }
        if let Some(website) = text(&self.website) {
            p = p.and(move |c: &Company| contains_ci(&c.website, &website));
        }
        if let Some(phone) = literal(&self.phone) {
            p = p.and(move |c: &Company| c.phone == phone);
        }
        if let Some(city) = text(&self.city) {
            p = p.and(move |c: &Company| eq_ci(&c.address.city, &city));
        }
        if let Some(state) = text(&self.state) {
            p = p.and(move |c: &Company| eq_ci(&c.address.state, &state));
        }
        if let Some(zip) = literal(&self.zip_code) {
            p = p.and(move |c: &Company| c.address.zip_code == zip);
        }
        if let Some(country) = text(&self.country) {
            p = p.and(move |c: &Company| eq_ci(&c.address.country, &country));
        }
        if let Some(min) = bound(self.revenue_min) {
            p = p.and(move |c: &Company| c.revenue >= min);
        }
        if let Some(max) = bound(self.revenue_max) {
            p = p.and(move |c: &Company| c.revenue <= max);
        }
        if let Some(min) = bound(self.employees_min) {
            p = p.and(move |c: &Company| c.employees >= min);
        }
        if let Some(max) = bound(self.employees_max) {
            p = p.and(move |c: &Company| c.employees <= max);
        }
        if let Some(industry) = text(&self.industry) {
            p = p.and(move |c: &Company| contains_ci(&c.primary_industry, &industry));
        }
        if let Some(sic) = literal(&self.sic_code) {
            p = p.and(move |c: &Company| c.sic_codes.contains(&sic));
        }
        if let Some(naics) = literal(&self.naics_code) {
            p = p.and(move |c: &Company| c.naics_codes.contains(&naics));
        }
        if let Some(ticker) = literal(&self.ticker) {
            p = p.and(move |c: &Company| c.ticker.as_deref() == Some(ticker.as_str()));
        }
        if let Some(ownership) = text(&self.ownership) {
            p = p.and(move |c: &Company| opt_eq_ci(&c.ownership, &ownership));
        }
        if let Some(wanted) = self.technologies.as_ref().filter(|t| !t.is_empty()) {
            let wanted: Vec<String> = wanted.iter().map(|t| t.to_lowercase()).collect();
            p = p.and(move |c: &Company| {
                wanted
                    .iter()
                    .any(|tech| c.technologies.iter().any(|have| contains_ci(have, tech)))
            });
        }

        p
    }
}

impl Criteria for ContactCriteria {
    type Record = Contact;
    const DEFAULT_SORT: &'static str = "fullName";

    fn predicate(&self) -> Predicate<Contact> {
        let mut p = Predicate::all();

        if let Some(first) = text(&self.first_name) {
            p = p.and(move |c: &Contact| contains_ci(&c.first_name, &first));
        }
        if let Some(last) = text(&self.last_name) {
            p = p.and(move |c: &Contact| contains_ci(&c.last_name, &last));
        }
        if let Some(full) = text(&self.full_name) {
            p = p.and(move |c: &Contact| contains_ci(&c.full_name, &full));
        }
        if let Some(title) = text(&self.job_title) {
            p = p.and(move |c: &Contact| contains_ci(&c.job_title, &title));
        }
        if let Some(department) = text(&self.department) {
            p = p.and(move |c: &Contact| contains_ci(&c.department, &department));
        }
        if let Some(level) = text(&self.management_level) {
            p = p.and(move |c: &Contact| eq_ci(&c.management_level, &level));
        }
        if let Some(email) = text(&self.email) {
            p = p.and(move |c: &Contact| eq_ci(&c.email, &email));
        }
        if let Some(city) = text(&self.city) {
            p = p.and(move |c: &Contact| eq_ci(&c.address.city, &city));
        }
        if let Some(state) = text(&self.state) {
            p = p.and(move |c: &Contact| eq_ci(&c.address.state, &state));
        }
        if let Some(country) = text(&self.country) {
            p = p.and(move |c: &Contact| eq_ci(&c.address.country, &country));
        }
        if let Some(company_id) = literal(&self.company_id) {
            p = p.and(move |c: &Contact| c.company_id == company_id);
        }
        if let Some(company) = text(&self.company_name) {
            p = p.and(move |c: &Contact| contains_ci(&c.company_name, &company));
        }

        p
    }
}
