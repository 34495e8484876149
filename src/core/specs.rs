//! Best-effort host introspection.
//!
//! With the `cli` feature the values come from `sysinfo`; without it only
//! what is known at compile time is reported and the rest is left empty.

use crate::domain::model::{PcSpecs, ProcessorInformation, RustEnvironment, SystemInformation};
#[cfg(feature = "cli")]
use sysinfo::System;

#[cfg(feature = "cli")]
pub fn get_pc_specs() -> PcSpecs {
    let mut system = System::new_all();
    system.refresh_all();

    let processor = system
        .cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .unwrap_or_default();
    let cpu_cores = match system.cpus().len() {
        0 => available_cores(),
        n => n,
    };
    tracing::debug!("probed {} logical CPUs ({})", cpu_cores, processor);

    PcSpecs {
        system: SystemInformation {
            os: System::name().unwrap_or_else(|| std::env::consts::OS.to_string()),
            os_release: System::kernel_version().unwrap_or_default(),
            os_version: System::os_version().unwrap_or_default(),
            hostname: System::host_name().unwrap_or_default(),
            architecture: std::env::consts::ARCH.to_string(),
        },
        processor: ProcessorInformation {
            processor,
            cpu_cores,
            total_memory_mb: system.total_memory() / 1024 / 1024,
        },
        rust: rust_environment(),
    }
}

// Fallback when sysinfo is not compiled in
#[cfg(not(feature = "cli"))]
pub fn get_pc_specs() -> PcSpecs {
    tracing::debug!("sysinfo unavailable, reporting compile-time platform data only");
    PcSpecs {
        system: SystemInformation {
            os: std::env::consts::OS.to_string(),
            os_release: String::new(),
            os_version: String::new(),
            hostname: String::new(),
            architecture: std::env::consts::ARCH.to_string(),
        },
        processor: ProcessorInformation {
            processor: String::new(),
            cpu_cores: available_cores(),
            total_memory_mb: 0,
        },
        rust: rust_environment(),
    }
}

/// Logs every section of `specs`, collecting a fresh snapshot when `None`.
pub fn print_pc_specs(specs: Option<&PcSpecs>) {
    let owned;
    let specs = match specs {
        Some(specs) => specs,
        None => {
            owned = get_pc_specs();
            &owned
        }
    };

    for (section, entries) in specs.sections() {
        tracing::info!("--- {} ---", section);
        for (key, value) in entries {
            tracing::info!("{}: {}", key, value);
        }
    }
}

fn available_cores() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn rust_environment() -> RustEnvironment {
    RustEnvironment {
        crate_version: env!("CARGO_PKG_VERSION").to_string(),
        implementation: "rustc".to_string(),
        target_family: std::env::consts::FAMILY.to_string(),
        build_profile: if cfg!(debug_assertions) {
            "debug".to_string()
        } else {
            "release".to_string()
        },
        rust_version: option_env!("CARGO_PKG_RUST_VERSION")
            .unwrap_or_default()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_pc_specs_shape() {
        let specs = get_pc_specs();
        assert!(!specs.system.os.is_empty());
        assert_eq!(specs.system.architecture, std::env::consts::ARCH);
        assert!(specs.processor.cpu_cores >= 1);
        assert_eq!(specs.rust.crate_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(specs.rust.implementation, "rustc");
    }

    #[test]
    fn test_specs_serialize_as_nested_map() {
        let specs = get_pc_specs();
        let json = serde_json::to_value(&specs).unwrap();
        let system = json.get("System Information").unwrap();
        assert!(system.get("OS").unwrap().is_string());
        assert!(json["Processor Information"]["CPU Cores"].is_u64());
        assert!(json["Rust Environment"]["Build Profile"].is_string());
    }

    #[test]
    fn test_display_lists_every_section() {
        let rendered = get_pc_specs().to_string();
        assert!(rendered.contains("System Information:"));
        assert!(rendered.contains("Processor Information:"));
        assert!(rendered.contains("  CPU Cores: "));
        print_pc_specs(None);
    }
}
