//! Display policy for metric values.
//!
//! Units are derived from the metric name alone and never stored with the
//! fitted coefficients.

use curve_facade::{metric_key, CoefficientTable};

/// Kind of metric, decides the unit printed after a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Cpu,
    Throughput,
    Plain,
}

/// Name fragments and the kind they select. First match wins.
const UNIT_RULES: &[(&str, MetricKind)] = &[
    ("cpu", MetricKind::Cpu),
    ("read", MetricKind::Throughput),
    ("write", MetricKind::Throughput),
    ("rx", MetricKind::Throughput),
    ("tx", MetricKind::Throughput),
];

impl MetricKind {
    /// Classify a metric by its (case-insensitive) name.
    pub fn classify(name: &str) -> Self {
        let key = metric_key(name);
        UNIT_RULES
            .iter()
            .find(|(fragment, _)| key.contains(fragment))
            .map(|&(_, kind)| kind)
            .unwrap_or(MetricKind::Plain)
    }

    /// Suffix appended after a formatted value.
    pub fn suffix(self) -> &'static str {
        match self {
            MetricKind::Cpu => " CPU",
            MetricKind::Throughput => " MB/s",
            MetricKind::Plain => "",
        }
    }
}

/// Format the fitted coefficients, one metric per line.
pub fn format_coefficients(table: &CoefficientTable) -> String {
    let mut out = String::from("Fitted coefficients (y = a·x^b):\n");
    for (name, fit) in table.iter() {
        out.push_str(&format!("  {}: a = {:.6e}, b = {:.6}\n", name, fit.a, fit.b));
    }
    out
}

/// Format one predicted value with its unit.
pub fn format_prediction(name: &str, value: f64) -> String {
    format!(
        "  {} = {:.5}{}",
        name,
        value,
        MetricKind::classify(name).suffix()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_facade::FitResult;

    #[test]
    fn test_classify() {
        assert_eq!(MetricKind::classify("CPU load"), MetricKind::Cpu);
        assert_eq!(MetricKind::classify("RX"), MetricKind::Throughput);
        assert_eq!(MetricKind::classify("tx"), MetricKind::Throughput);
        assert_eq!(MetricKind::classify("Disk Read"), MetricKind::Throughput);
        assert_eq!(MetricKind::classify("write"), MetricKind::Throughput);
        assert_eq!(MetricKind::classify("latency"), MetricKind::Plain);
    }

    #[test]
    fn test_cpu_rule_wins() {
        // Matches both "cpu" and "write"
        assert_eq!(MetricKind::classify("cpu write wait"), MetricKind::Cpu);
    }

    #[test]
    fn test_format_prediction() {
        assert_eq!(format_prediction("cpu load", 20.0), "  cpu load = 20.00000 CPU");
        assert_eq!(format_prediction("rx", 1.234567), "  rx = 1.23457 MB/s");
        assert_eq!(format_prediction("latency", 3.0), "  latency = 3.00000");
    }

    #[test]
    fn test_format_coefficients() {
        let mut table = CoefficientTable::new();
        table.insert("RX", FitResult::new(0.0123, 1.5));

        assert_eq!(
            format_coefficients(&table),
            "Fitted coefficients (y = a·x^b):\n  rx: a = 1.230000e-2, b = 1.500000\n"
        );
    }
}
