use crate::error::guild::GuildError;

/// Outcome of reconciling one guild target.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetReport {
    pub guild_id: u64,
    /// Whether the nickname update was accepted by Discord
    pub nickname_updated: bool,
    /// Color applied to the role, `None` if the role was left untouched
    pub role_color: Option<u32>,
    /// Errors recorded for this target, in the order they occurred
    pub errors: Vec<GuildError>,
}

impl TargetReport {
    pub fn new(guild_id: u64) -> Self {
        Self {
            guild_id,
            nickname_updated: false,
            role_color: None,
            errors: Vec::new(),
        }
    }

    /// True when every step for this target completed without error.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Aggregated result of one reconciliation pass over all targets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReconcileReport {
    /// Whether the presence text was set this tick
    pub presence_updated: bool,
    /// Per-target outcomes, in configured target order
    pub targets: Vec<TargetReport>,
}

impl ReconcileReport {
    /// All errors across all targets.
    pub fn errors(&self) -> impl Iterator<Item = &GuildError> {
        self.targets.iter().flat_map(|target| target.errors.iter())
    }

    /// Number of targets that completed without any error.
    pub fn success_count(&self) -> usize {
        self.targets.iter().filter(|t| t.is_success()).count()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }
}
