use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;

use crate::models::{Company, Contact};

const BUILTIN_COMPANIES: &str = include_str!("../data/companies.json");
const BUILTIN_CONTACTS: &str = include_str!("../data/contacts.json");

/// Read-only catalog of companies and contacts.
///
/// Built once at startup and shared behind an `Arc`; every query borrows from
/// it and nothing ever mutates or reorders the collections.
#[derive(Debug, Clone)]
pub struct RecordStore {
    companies: Vec<Company>,
    contacts: Vec<Contact>,
}

impl RecordStore {
    /// Builds a store, rejecting duplicate identifiers within either collection.
    pub fn new(companies: Vec<Company>, contacts: Vec<Contact>) -> anyhow::Result<Self> {
        ensure_unique("company", companies.iter().map(|c| c.id.as_str()))?;
        ensure_unique("contact", contacts.iter().map(|c| c.id.as_str()))?;

        let known: HashSet<&str> = companies.iter().map(|c| c.id.as_str()).collect();
        for contact in contacts.iter().filter(|c| !known.contains(c.company_id.as_str())) {
            tracing::warn!(
                "Contact {} references unknown company {}",
                contact.id,
                contact.company_id
            );
        }

        Ok(Self {
            companies,
            contacts,
        })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(BUILTIN_COMPANIES, BUILTIN_CONTACTS)
    }

    /// Loads `companies.json` and `contacts.json` from `dir`.
    pub fn from_dir(dir: &Path) -> anyhow::Result<Self> {
        let companies_path = dir.join("companies.json");
        let contacts_path = dir.join("contacts.json");
        let companies = std::fs::read_to_string(&companies_path)
            .with_context(|| format!("reading {}", companies_path.display()))?;
        let contacts = std::fs::read_to_string(&contacts_path)
            .with_context(|| format!("reading {}", contacts_path.display()))?;
        Self::from_json(&companies, &contacts)
    }

    pub fn from_json(companies: &str, contacts: &str) -> anyhow::Result<Self> {
        let companies: Vec<Company> =
            serde_json::from_str(companies).context("parsing company catalog")?;
        let contacts: Vec<Contact> =
            serde_json::from_str(contacts).context("parsing contact catalog")?;
        Self::new(companies, contacts)
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn company_by_id(&self, id: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    /// Contacts whose `companyId` points at `company_id`, in catalog order.
    pub fn contacts_for_company<'a>(
        &'a self,
        company_id: &'a str,
    ) -> impl Iterator<Item = &'a Contact> + 'a {
        self.contacts
            .iter()
            .filter(move |c| c.company_id == company_id)
    }
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("duplicate {} id {}", kind, id);
        }
    }
    Ok(())
}
