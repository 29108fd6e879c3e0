use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use stockcast_core::{EnvelopeMeta, TradingDate, ValidationError};
use uuid::Uuid;

/// Request identifier (UUID v4) stamped on every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Per-invocation context resolved from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub request_id: RequestId,
    pub seed: u64,
    pub reference_date: TradingDate,
    pub warnings: Vec<String>,
}

impl Metadata {
    pub fn new(seed: u64, reference_date: TradingDate) -> Self {
        Self {
            request_id: RequestId::new_v4(),
            seed,
            reference_date,
            warnings: Vec::new(),
        }
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// `seeded` is false for commands whose output does not depend on the seed.
    pub fn into_envelope_meta(self, seeded: bool) -> Result<EnvelopeMeta, ValidationError> {
        let mut meta = EnvelopeMeta::new(self.request_id.to_string(), self.reference_date)?;
        if seeded {
            meta = meta.with_seed(self.seed);
        }

        for warning in self.warnings {
            meta.push_warning(warning);
        }

        Ok(meta)
    }
}
