//! Per-run import rules.

/// Status name assigned to every imported order unless configured otherwise.
pub const DEFAULT_STATUS_NAME: &str = "Aguardando Chegada";

/// Origin tag stamped on imported orders unless configured otherwise.
pub const DEFAULT_ORIGIN_TAG: &str = "Importada Planilha";

/// Which status imported orders receive and how they are tagged.
///
/// The origin tag doubles as the purge key: a run deletes every row carrying
/// it before inserting the new batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPlan {
    status_name: String,
    origin_tag: String,
}

impl ImportPlan {
    /// Creates an import plan.
    #[must_use]
    pub fn new(status_name: impl Into<String>, origin_tag: impl Into<String>) -> Self {
        Self {
            status_name: status_name.into(),
            origin_tag: origin_tag.into(),
        }
    }

    /// Returns the status name looked up in the reference table.
    #[must_use]
    pub fn status_name(&self) -> &str {
        &self.status_name
    }

    /// Returns the origin tag.
    #[must_use]
    pub fn origin_tag(&self) -> &str {
        &self.origin_tag
    }
}

impl Default for ImportPlan {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_NAME, DEFAULT_ORIGIN_TAG)
    }
}
