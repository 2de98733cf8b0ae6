use crate::catalog::CatalogRow;
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter, PlainFormatter};
use crate::solver::Solution;
use comfy_table::{presets, ContentArrangement, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

pub trait OutputWriter {
    fn write_solution(&mut self, solution: &Solution) -> anyhow::Result<()>;
    fn write_catalog(&mut self, rows: &[CatalogRow]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_solution(&mut self, solution: &Solution) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(solution)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    fn write_catalog(&mut self, rows: &[CatalogRow]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_solution(&mut self, solution: &Solution) -> anyhow::Result<()> {
        let result = &solution.classification;
        writeln!(self.writer, "## {}", result.theorem)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Item | Value |")?;
        writeln!(self.writer, "|------|-------|")?;
        writeln!(self.writer, "| Form | `{}` |", result.theorem.shape())?;
        writeln!(self.writer, "| Recurrence | `{}` |", solution.recurrence)?;
        writeln!(self.writer, "| Case | {} |", result.case)?;
        writeln!(
            self.writer,
            "| Comparison | {} |",
            markdown_cell(&result.comparison)
        )?;
        writeln!(self.writer, "| Time complexity | **{}** |", result.summary())?;
        writeln!(self.writer)?;
        if let Some(narrative) = solution.narrative {
            writeln!(self.writer, "{}", narrative)?;
            writeln!(self.writer)?;
        }
        if let Some(note) = solution.note {
            writeln!(self.writer, "> {}", note)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_catalog(&mut self, rows: &[CatalogRow]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Sample Recurrences")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Name | Recurrence | Method | Case | Complexity |"
        )?;
        writeln!(
            self.writer,
            "|------|------------|--------|------|------------|"
        )?;
        for row in rows {
            let result = &row.solution.classification;
            writeln!(
                self.writer,
                "| {} | `{}` | {} | {} | {} |",
                row.name,
                row.solution.recurrence,
                result.theorem,
                result.case,
                result.summary()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Table cells cannot hold raw newlines or pipes.
fn markdown_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
    plain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        let plain = !formatting.color.should_use_color();
        Self {
            writer,
            formatter: formatter_for(formatting),
            plain,
        }
    }

    /// Uncolored writer, mainly for tests and piping.
    pub fn plain(writer: W) -> Self {
        Self {
            writer,
            formatter: Box::new(PlainFormatter),
            plain: true,
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_solution(&mut self, solution: &Solution) -> anyhow::Result<()> {
        let result = &solution.classification;
        let fmt = &self.formatter;

        writeln!(
            self.writer,
            "{} {}",
            fmt.header("Recurrence relation:"),
            fmt.bold(&solution.recurrence)
        )?;

        if result.is_exact() {
            writeln!(
                self.writer,
                "{} {}",
                fmt.header(&format!("{} Case {} applies:", result.theorem, result.case)),
                result.comparison
            )?;
        } else {
            writeln!(self.writer, "{}", fmt.header("Approximate bounds:"))?;
            writeln!(self.writer, "{}", result.comparison)?;
        }

        writeln!(
            self.writer,
            "{} {}",
            fmt.header("Time complexity:"),
            fmt.success(&result.summary())
        )?;

        if let Some(narrative) = solution.narrative {
            writeln!(self.writer, "{}", fmt.info(narrative))?;
        }
        if let Some(note) = solution.note {
            writeln!(self.writer, "{}", fmt.dim(&format!("Note: {}", note)))?;
        }
        Ok(())
    }

    fn write_catalog(&mut self, rows: &[CatalogRow]) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(if self.plain {
                presets::ASCII_FULL
            } else {
                presets::UTF8_FULL
            })
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Name", "Recurrence", "Method", "Case", "Complexity"]);

        for row in rows {
            let result = &row.solution.classification;
            table.add_row(vec![
                row.name.to_string(),
                row.solution.recurrence.clone(),
                result.theorem.to_string(),
                result.case.to_string(),
                result.summary(),
            ]);
        }

        writeln!(self.writer, "{}", table)?;
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat, formatting: FormattingConfig) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout(), formatting)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ApproximationParams, DividingParams};
    use crate::solver::{Recurrence, Solver};

    fn merge_sort() -> Solution {
        Solver::default()
            .solve(&Recurrence::Master(DividingParams::new(2.0, 2.0, 1.0)))
            .unwrap()
    }

    #[test]
    fn test_terminal_output() {
        let mut buf = Vec::new();
        TerminalWriter::plain(&mut buf)
            .write_solution(&merge_sort())
            .unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(
            output,
            "Recurrence relation: T(n) = 2 T(n/2) + Θ(n^1)\n\
             Master Theorem Case 2 applies: log_2(2) = 1.000 ≈ 1\n\
             Time complexity: Θ(n log n)\n\
             The subproblems and the combine step contribute equally.\n"
        );
    }

    #[test]
    fn test_terminal_output_for_bounds() {
        let solution = Solver::default()
            .solve(&Recurrence::Approximation(ApproximationParams::new(
                vec![0.5, 0.25],
                vec![2.0, 3.0],
                2.0,
            )))
            .unwrap();
        let mut buf = Vec::new();
        TerminalWriter::plain(&mut buf)
            .write_solution(&solution)
            .unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Approximate bounds:\n"));
        assert!(output.contains("Time complexity: Ω(n^2) to O(n^2 log n)\n"));
        assert!(output.contains("Note: This is an approximation"));
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf)
            .write_solution(&merge_sort())
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["theorem"], "master");
        assert_eq!(value["case"], 2);
        assert_eq!(value["complexity"]["notation"], "theta");
        assert_eq!(value["complexity"]["expression"], "n log n");
        assert!(value.get("lower_bound").is_none());
    }

    #[test]
    fn test_markdown_escapes_cells() {
        assert_eq!(markdown_cell("a\nb|c"), "a<br>b\\|c");

        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf)
            .write_solution(&merge_sort())
            .unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("## Master Theorem\n"));
        assert!(output.contains("| Time complexity | **Θ(n log n)** |"));
    }
}
