//! Multi-tenant call-volume simulation.
//!
//! Drives the tracker with canned per-tenant call counts so the billing
//! export accumulates label data worth analyzing. Strictly sequential: one
//! call in flight at a time, first error stops the run.

use crate::Result;
use crate::labels::NO_LABEL_TENANT;
use crate::tracker::GeminiTracker;

const SIMULATION_PROMPT: &str = "This is a test prompt.";

/// An ordered list of tenants and how many calls to issue for each.
#[derive(Debug, Clone, Default)]
pub struct SimulationPlan {
    entries: Vec<(String, usize)>,
}

impl SimulationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// The canned demo volume: four labeled tenants and an unlabeled
    /// control group.
    pub fn default_plan() -> Self {
        Self::new()
            .with_tenant("tenant-a", 5)
            .with_tenant("tenant-b", 12)
            .with_tenant("tenant-c", 3)
            .with_tenant("tenant-d", 10)
            .with_tenant(NO_LABEL_TENANT, 5)
    }

    pub fn with_tenant(mut self, tenant_id: impl Into<String>, calls: usize) -> Self {
        self.entries.push((tenant_id.into(), calls));
        self
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn total_calls(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Run the plan to completion, printing progress per tenant.
    pub async fn run(&self, tracker: &GeminiTracker) -> Result<()> {
        for (tenant_id, calls) in &self.entries {
            println!("\nSimulating {calls} calls for '{tenant_id}'...");
            for _ in 0..*calls {
                tracker.track_and_generate(tenant_id, SIMULATION_PROMPT).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_contents() {
        let plan = SimulationPlan::default_plan();
        assert_eq!(plan.total_calls(), 35);
        assert_eq!(plan.entries().len(), 5);

        // Order is preserved; the unlabeled control group runs last.
        assert_eq!(plan.entries()[0], ("tenant-a".to_string(), 5));
        assert_eq!(plan.entries()[1], ("tenant-b".to_string(), 12));
        assert_eq!(plan.entries()[4], (NO_LABEL_TENANT.to_string(), 5));
    }

    #[test]
    fn test_custom_plan() {
        let plan = SimulationPlan::new()
            .with_tenant("acme", 2)
            .with_tenant("globex", 1);
        assert_eq!(plan.total_calls(), 3);
    }
}
