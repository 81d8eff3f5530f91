use colored::Colorize;

use fgt2ftd::translate::Translation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub network_objects: usize,
    pub network_groups: usize,
    pub port_objects: usize,
    pub port_groups: usize,
    pub access_policies: usize,
    pub nat_policies: usize,
    pub warnings: usize,
}

pub fn summarize(translation: &Translation) -> ConversionSummary {
    let config = &translation.config;
    ConversionSummary {
        network_objects: config.network_objects.len(),
        network_groups: config.network_groups.len(),
        port_objects: config.port_objects.len(),
        port_groups: config.port_groups.len(),
        access_policies: config.access_policies.len(),
        nat_policies: config.nat_policies.len(),
        warnings: translation.warnings.len(),
    }
}

/// Render summary counts for terminal output.
pub fn render(summary: ConversionSummary) -> String {
    let mut out = vec![
        "Conversion Summary:".cyan().to_string(),
        format!("  Network Objects: {}", summary.network_objects),
        format!("  Network Groups: {}", summary.network_groups),
        format!("  Port Objects: {}", summary.port_objects),
        format!("  Port Groups: {}", summary.port_groups),
        format!("  Access Policies: {}", summary.access_policies),
        format!("  NAT Policies: {}", summary.nat_policies),
    ];
    if summary.warnings > 0 {
        out.push(
            format!("  Warnings: {}", summary.warnings)
                .yellow()
                .to_string(),
        );
    }
    out.join("\n")
}
