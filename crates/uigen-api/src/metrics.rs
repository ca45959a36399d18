//! Prometheus registry backing `/metrics`
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

pub const TOOL_CALLS_TOTAL: &str = "uigen_tool_calls_total";

pub struct Metrics {
    registry: Registry,
    tool_calls: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let tool_calls = IntCounterVec::new(
            Opts::new(TOOL_CALLS_TOTAL, "Tool calls by tool and outcome"),
            &["tool", "outcome"],
        )?;
        registry.register(Box::new(tool_calls.clone()))?;
        Ok(Metrics { registry, tool_calls })
    }

    pub fn record_tool_call(&self, tool: &str, is_error: bool) {
        let outcome = if is_error { "error" } else { "ok" };
        self.tool_calls.with_label_values(&[tool, outcome]).inc();
    }

    pub fn tool_call_count(&self, tool: &str, outcome: &str) -> u64 {
        self.tool_calls.with_label_values(&[tool, outcome]).get()
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_outcome() {
        let metrics = Metrics::new().unwrap();
        metrics.record_tool_call("generate-component", false);
        metrics.record_tool_call("generate-component", true);
        metrics.record_tool_call("generate-component", true);

        assert_eq!(metrics.tool_call_count("generate-component", "ok"), 1);
        assert_eq!(metrics.tool_call_count("generate-component", "error"), 2);

        let text = metrics.encode().unwrap();
        assert!(text.contains("uigen_tool_calls_total{outcome=\"error\",tool=\"generate-component\"} 2"));
    }
}
