use anyhow::Result;
use clap::Args;

use crate::output;
use crate::registry;

/// List resource types supported for automatic generation
#[derive(Debug, Args)]
pub struct ListCommand {}

impl ListCommand {
    pub fn execute(self) -> Result<()> {
        let specs = registry::all();

        output::section("Supported resource types");
        for spec in &specs {
            output::key_value(spec.resource_type, spec.scope.as_str());
        }

        output::blank();
        output::dimmed(&format!("{} resource types", specs.len()));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_executes() {
        ListCommand {}.execute().unwrap();
    }
}
