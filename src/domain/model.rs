use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed offset applied by [`crate::core::datetime::add_time_to_date`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOffset {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeOffset {
    pub fn new(days: i64, hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    pub fn days(days: i64) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }

    pub fn hours(hours: i64) -> Self {
        Self {
            hours,
            ..Self::default()
        }
    }

    pub fn with_hours(mut self, hours: i64) -> Self {
        self.hours = hours;
        self
    }

    pub fn with_minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    pub fn with_seconds(mut self, seconds: i64) -> Self {
        self.seconds = seconds;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInformation {
    #[serde(rename = "OS")]
    pub os: String,
    #[serde(rename = "OS Release")]
    pub os_release: String,
    #[serde(rename = "OS Version")]
    pub os_version: String,
    #[serde(rename = "Hostname")]
    pub hostname: String,
    #[serde(rename = "Architecture")]
    pub architecture: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessorInformation {
    /// CPU brand string; empty when the platform does not report one.
    #[serde(rename = "Processor")]
    pub processor: String,
    #[serde(rename = "CPU Cores")]
    pub cpu_cores: usize,
    #[serde(rename = "Total Memory (MB)")]
    pub total_memory_mb: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RustEnvironment {
    #[serde(rename = "Crate Version")]
    pub crate_version: String,
    #[serde(rename = "Implementation")]
    pub implementation: String,
    #[serde(rename = "Target Family")]
    pub target_family: String,
    #[serde(rename = "Build Profile")]
    pub build_profile: String,
    #[serde(rename = "Minimum Rust Version")]
    pub rust_version: String,
}

/// Snapshot of the host, serialized as a map of sections to key/value maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PcSpecs {
    #[serde(rename = "System Information")]
    pub system: SystemInformation,
    #[serde(rename = "Processor Information")]
    pub processor: ProcessorInformation,
    #[serde(rename = "Rust Environment")]
    pub rust: RustEnvironment,
}

impl PcSpecs {
    /// Flattened `(section, [(key, value)])` view, in display order.
    pub fn sections(&self) -> Vec<(&'static str, Vec<(&'static str, String)>)> {
        vec![
            (
                "System Information",
                vec![
                    ("OS", self.system.os.clone()),
                    ("OS Release", self.system.os_release.clone()),
                    ("OS Version", self.system.os_version.clone()),
                    ("Hostname", self.system.hostname.clone()),
                    ("Architecture", self.system.architecture.clone()),
                ],
            ),
            (
                "Processor Information",
                vec![
                    ("Processor", self.processor.processor.clone()),
                    ("CPU Cores", self.processor.cpu_cores.to_string()),
                    (
                        "Total Memory (MB)",
                        self.processor.total_memory_mb.to_string(),
                    ),
                ],
            ),
            (
                "Rust Environment",
                vec![
                    ("Crate Version", self.rust.crate_version.clone()),
                    ("Implementation", self.rust.implementation.clone()),
                    ("Target Family", self.rust.target_family.clone()),
                    ("Build Profile", self.rust.build_profile.clone()),
                    ("Minimum Rust Version", self.rust.rust_version.clone()),
                ],
            ),
        ]
    }
}

impl fmt::Display for PcSpecs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (section, entries) in self.sections() {
            writeln!(f, "{}:", section)?;
            for (key, value) in entries {
                writeln!(f, "  {}: {}", key, value)?;
            }
        }
        Ok(())
    }
}
