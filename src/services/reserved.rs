//! In-memory code availability.

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::debug;

use crate::services::{CodeAvailability, CodeStatus, ServiceError};

/// Code checker backed by a fixed set of codes already in use.
#[derive(Debug, Clone, Default)]
pub struct ReservedCodes {
    taken: HashSet<String>,
}

impl ReservedCodes {
    /// Creates a checker treating every code in `taken` as unavailable.
    pub fn new<I, S>(taken: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: taken.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl CodeAvailability for ReservedCodes {
    async fn check_code(&self, code: &str) -> Result<CodeStatus, ServiceError> {
        let available = !self.taken.contains(code);

        debug!(code, available, "checked reserved codes");

        Ok(CodeStatus { available })
    }
}
