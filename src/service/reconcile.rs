//! Guild reconciliation: projects a price sample onto every target guild.
//!
//! Each tick the reconciler derives a fresh `DisplayState` and applies it to
//! each target in configured order. Targets are fully isolated from each other:
//! every failure is recorded on that target's report and logged where it
//! happens, and processing moves on. Nothing is diffed against the previous
//! tick, so a guild left half-updated converges on the next pass.

use crate::{
    data::platform::GuildPlatform,
    error::guild::GuildError,
    model::{
        display::DisplayState,
        price::PriceSample,
        report::{ReconcileReport, TargetReport},
        target::GuildTarget,
    },
    service::display::derive_display_state,
};

/// Applies price display state to guild targets through a `GuildPlatform`.
pub struct GuildReconciler<'a> {
    platform: &'a dyn GuildPlatform,
    /// Decimals shown in the nickname
    precision: usize,
}

impl<'a> GuildReconciler<'a> {
    /// Creates a new GuildReconciler.
    ///
    /// # Arguments
    /// - `platform` - Connected chat session
    /// - `precision` - Number of decimals shown in the price nickname
    pub fn new(platform: &'a dyn GuildPlatform, precision: usize) -> Self {
        Self {
            platform,
            precision,
        }
    }

    /// Reconciles presence, nickname and role color for every target.
    ///
    /// Never fails as a whole: per-target errors are collected in the report.
    ///
    /// # Arguments
    /// - `sample` - Latest price sample
    /// - `targets` - Guild targets in configured order
    ///
    /// # Returns
    /// - `ReconcileReport` - Presence flag plus one `TargetReport` per target
    pub async fn apply(&self, sample: &PriceSample, targets: &[GuildTarget]) -> ReconcileReport {
        let state = derive_display_state(sample, self.precision);
        let mut report = ReconcileReport::default();

        if let Some(presence) = &state.presence {
            self.platform.set_presence(presence);
            tracing::info!("Updated presence: Watching {}", presence);
            report.presence_updated = true;
        }

        let self_id = self.platform.current_user_id();
        for target in targets {
            let target_report = self.reconcile_target(target, &state, self_id).await;
            report.targets.push(target_report);
        }

        report
    }

    async fn reconcile_target(
        &self,
        target: &GuildTarget,
        state: &DisplayState,
        self_id: u64,
    ) -> TargetReport {
        let guild_id = target.guild_id;
        let mut report = TargetReport::new(guild_id);

        if !self.platform.has_guild(guild_id) {
            record(&mut report, GuildError::GuildNotFound { guild_id });
            return report;
        }

        let is_member = match self.platform.is_member(guild_id, self_id).await {
            Ok(is_member) => is_member,
            Err(e) => {
                tracing::error!("Failed to look up bot member in guild {}: {}", guild_id, e);
                false
            }
        };
        if !is_member {
            record(&mut report, GuildError::SelfNotMember { guild_id });
            return report;
        }

        match self.platform.set_nickname(guild_id, &state.nickname).await {
            Ok(()) => {
                tracing::info!("Nickname updated to {} in guild {}", state.nickname, guild_id);
                report.nickname_updated = true;
            }
            Err(e) => record(
                &mut report,
                GuildError::NicknameUpdateFailed {
                    guild_id,
                    reason: e.to_string(),
                },
            ),
        }

        let role_id = match self
            .platform
            .find_role_by_name(guild_id, &target.role_name)
            .await
        {
            Ok(role_id) => role_id,
            Err(e) => {
                tracing::error!(
                    "Failed to look up role '{}' in guild {}: {}",
                    target.role_name,
                    guild_id,
                    e
                );
                None
            }
        };
        let Some(role_id) = role_id else {
            record(
                &mut report,
                GuildError::RoleNotFound {
                    guild_id,
                    role_name: target.role_name.clone(),
                },
            );
            return report;
        };

        // Nothing to signal without a 24h change
        let Some(color) = state.sentiment.role_color() else {
            tracing::debug!(
                "No 24h change, leaving role '{}' color unchanged in guild {}",
                target.role_name,
                guild_id
            );
            return report;
        };

        match self.platform.set_role_color(guild_id, role_id, color).await {
            Ok(()) => {
                tracing::info!(
                    "Set role '{}' color to {:#08X} in guild {}",
                    target.role_name,
                    color,
                    guild_id
                );
                report.role_color = Some(color);
            }
            Err(e) => record(
                &mut report,
                GuildError::RoleUpdateFailed {
                    guild_id,
                    role_name: target.role_name.clone(),
                    reason: e.to_string(),
                },
            ),
        }

        report
    }
}

fn record(report: &mut TargetReport, error: GuildError) {
    if error.is_warning() {
        tracing::warn!("{}", error);
    } else {
        tracing::error!("{}", error);
    }
    report.errors.push(error);
}
