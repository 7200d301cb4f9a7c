//! Enum to (label, tone) mappings. Anything unrecognised is neutral.

use super::{Badge, Tone};
use crate::api::types::{ActivityType, DeviceStatus, Severity};

pub fn device_status_badge(status: DeviceStatus) -> Badge {
    match status {
        DeviceStatus::Active => Badge::new("Actif", Tone::Success, "●"),
        DeviceStatus::Inactive => Badge::new("Inactif", Tone::Warning, "○"),
        DeviceStatus::Compromised => Badge::new("Compromis", Tone::Danger, "✖"),
        DeviceStatus::Maintenance => Badge::new("Maintenance", Tone::Info, "⚙"),
        DeviceStatus::Unknown => Badge::unknown(),
    }
}

pub fn severity_badge(severity: Severity) -> Badge {
    match severity {
        Severity::Error => Badge::new("Erreur", Tone::Danger, "✖"),
        Severity::Warning => Badge::new("Avertissement", Tone::Warning, "⚠"),
        Severity::Info => Badge::new("Info", Tone::Info, "ℹ"),
        Severity::Unknown => Badge::unknown(),
    }
}

pub fn activity_badge(activity_type: ActivityType) -> Badge {
    match activity_type {
        ActivityType::Reward => Badge::new("Récompense", Tone::Success, "★"),
        ActivityType::Transaction => Badge::new("Transaction", Tone::Info, "⇄"),
        ActivityType::DeviceActivity => Badge::new("Appareil", Tone::Accent, "◉"),
        ActivityType::Anomaly => Badge::new("Anomalie", Tone::Danger, "⚠"),
        ActivityType::Mining => Badge::new("Minage", Tone::Warning, "⛏"),
        ActivityType::Unknown => Badge::unknown(),
    }
}

pub fn sync_badge(is_synced: bool) -> Badge {
    if is_synced {
        Badge::new("Synchronisé", Tone::Success, "●")
    } else {
        Badge::new("Non synchronisé", Tone::Warning, "○")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_values_fall_back_to_neutral() {
        let device = device_status_badge(DeviceStatus::from("rebooting"));
        assert_eq!(device.label, "Inconnu");
        assert_eq!(device.tone, Tone::Neutral);

        let severity = severity_badge(Severity::from("critical"));
        assert_eq!(severity.label, "Inconnu");
        assert_eq!(severity.tone, Tone::Neutral);

        assert_eq!(activity_badge(ActivityType::Unknown).tone, Tone::Neutral);
    }

    #[test]
    fn known_statuses_have_fixed_labels() {
        assert_eq!(device_status_badge(DeviceStatus::Active).label, "Actif");
        assert_eq!(device_status_badge(DeviceStatus::Compromised).tone, Tone::Danger);
        assert_eq!(severity_badge(Severity::Warning).tone, Tone::Warning);
        assert_eq!(activity_badge(ActivityType::Reward).label, "Récompense");
        assert_eq!(sync_badge(false).label, "Non synchronisé");
    }
}
