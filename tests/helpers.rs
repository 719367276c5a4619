// Shared test helpers: a canned DNS backend for driving the public API without network.

use std::collections::HashMap;

use async_trait::async_trait;
use hickory_resolver::error::ResolveError;
use mail_posture::{MxHost, RecordLookup};

/// Answers from fixed tables; unknown names have no records.
#[derive(Default)]
pub struct FixedLookup {
    pub mx: HashMap<String, Vec<MxHost>>,
    pub txt: HashMap<String, Vec<String>>,
    pub failing: Vec<String>,
}

impl FixedLookup {
    /// The domain from the end-to-end scenario: one MX, strict SPF and DMARC.
    #[allow(dead_code)] // Used by other test files
    pub fn example_com() -> Self {
        let mut lookup = Self::default();
        lookup.mx.insert(
            "example.com".to_string(),
            vec![MxHost::new(10, "mx.example.com.")],
        );
        lookup
            .txt
            .insert("example.com".to_string(), vec!["v=spf1 -all".to_string()]);
        lookup.txt.insert(
            "_dmarc.example.com".to_string(),
            vec!["v=DMARC1; p=reject;".to_string()],
        );
        lookup
    }

    /// Makes every query for `name` fail.
    #[allow(dead_code)] // Used by other test files
    pub fn fail(mut self, name: &str) -> Self {
        self.failing.push(name.to_string());
        self
    }

    fn check(&self, name: &str) -> Result<(), ResolveError> {
        if self.failing.iter().any(|n| n == name) {
            return Err(ResolveError::from(format!("simulated failure for {name}")));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordLookup for FixedLookup {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxHost>, ResolveError> {
        self.check(domain)?;
        Ok(self.mx.get(domain).cloned().unwrap_or_default())
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, ResolveError> {
        self.check(name)?;
        Ok(self.txt.get(name).cloned().unwrap_or_default())
    }
}
