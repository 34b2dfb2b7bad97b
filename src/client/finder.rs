//! Email discovery by person, domain or company.

use crate::client::core::EmailListChecker;
use crate::types::{CompanySearchOptions, DomainSearchOptions};
use crate::Result;
use reqwest::Method;
use serde_json::{json, Value};

impl EmailListChecker {
    /// Guess the address of a person at a domain (`POST /finder/email`).
    pub async fn find_email(
        &self,
        first_name: &str,
        last_name: &str,
        domain: &str,
    ) -> Result<Value> {
        let body = json!({
            "first_name": first_name,
            "last_name": last_name,
            "domain": domain,
        });
        self.request(Method::POST, "/finder/email", Some(&body), None)
            .await
    }

    /// Addresses known for a domain (`POST /finder/domain`).
    pub async fn find_by_domain(
        &self,
        domain: &str,
        options: &DomainSearchOptions,
    ) -> Result<Value> {
        let body = json!({
            "domain": domain,
            "limit": options.limit,
            "offset": options.offset,
        });
        self.request(Method::POST, "/finder/domain", Some(&body), None)
            .await
    }

    /// Addresses associated with a company name (`POST /finder/company`).
    pub async fn find_by_company(
        &self,
        company: &str,
        options: &CompanySearchOptions,
    ) -> Result<Value> {
        let body = json!({
            "company": company,
            "limit": options.limit,
        });
        self.request(Method::POST, "/finder/company", Some(&body), None)
            .await
    }
}
