use super::CommandContext;
use crate::catalog::solve_catalog;
use crate::io::output::{create_writer, OutputFormat};
use crate::solver::Solver;
use anyhow::{Context, Result};

pub fn show_catalog(format: OutputFormat, context: &CommandContext) -> Result<()> {
    let solver = Solver::new(&context.config);
    let rows = solve_catalog(&solver).context("Failed to solve the sample catalog")?;
    tracing::debug!(entries = rows.len(), "catalog solved");

    let mut writer = create_writer(format, context.formatting);
    writer.write_catalog(&rows)?;
    Ok(())
}
