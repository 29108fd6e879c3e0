//! Response envelope shared by every machine-readable `stockcast` output.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{TradingDate, ValidationError};

/// Schema version stamped on every envelope this crate produces.
pub const SCHEMA_VERSION: &str = "v1.0.0";

const MIN_REQUEST_ID_LEN: usize = 8;

/// `data` plus the metadata needed to reproduce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub meta: EnvelopeMeta,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn success(meta: EnvelopeMeta, data: T) -> Self {
        Self { meta, data }
    }

    /// Whether the run produced no warnings.
    pub fn is_clean(&self) -> bool {
        self.meta.warnings.is_empty()
    }
}

/// Metadata attached to every envelope.
///
/// `seed` and `reference_date` are enough to regenerate `data` exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeMeta {
    pub request_id: String,
    pub schema_version: String,
    /// Unix timestamp (seconds) at which the envelope was built.
    pub generated_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub reference_date: TradingDate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl EnvelopeMeta {
    pub fn new(
        request_id: impl Into<String>,
        reference_date: TradingDate,
    ) -> Result<Self, ValidationError> {
        let meta = Self {
            request_id: request_id.into(),
            schema_version: SCHEMA_VERSION.to_owned(),
            generated_at: OffsetDateTime::now_utc().unix_timestamp(),
            seed: None,
            reference_date,
            warnings: Vec::new(),
        };
        meta.validate()?;
        Ok(meta)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.request_id.trim().len() < MIN_REQUEST_ID_LEN {
            return Err(ValidationError::InvalidRequestId);
        }

        parse_schema_version(&self.schema_version)
            .map(|_| ())
            .ok_or_else(|| ValidationError::InvalidSchemaVersion {
                value: self.schema_version.clone(),
            })
    }
}

/// `(major, minor, patch)` of a `vMAJOR.MINOR.PATCH` string.
fn parse_schema_version(value: &str) -> Option<(u32, u32, u32)> {
    let mut parts = value.strip_prefix('v')?.split('.');
    let mut component = || -> Option<u32> {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    };

    let version = (component()?, component()?, component()?);
    parts.next().is_none().then_some(version)
}
