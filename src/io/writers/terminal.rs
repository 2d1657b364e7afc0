use crate::core::{Point, Termination};
use crate::io::output::{ClusteringReport, OutputWriter};
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────";

/// Human-oriented report: summary, per-cluster table and the iteration log.
pub struct TerminalWriter<W: Write> {
    writer: W,
    precision: usize,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, precision: usize) -> Self {
        Self { writer, precision }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ClusteringReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_cluster_table(report)?;
        self.write_iteration_log(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn fmt_point(point: &Point, precision: usize) -> String {
    format!("{:.*}", precision, point)
}

fn termination_label(termination: Termination) -> ColoredString {
    match termination {
        Termination::Converged => "CONVERGED".green(),
        Termination::BudgetExhausted => "BUDGET EXHAUSTED".yellow(),
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, report: &ClusteringReport) -> anyhow::Result<()> {
        let title = format!(
            "{} CLUSTERING REPORT",
            report.algorithm().display_name().to_uppercase()
        );
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", RULE.cyan())?;
        writeln!(self.writer, "{:^43}", title.bold().cyan())?;
        writeln!(self.writer, "{}", RULE.cyan())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &ClusteringReport) -> anyhow::Result<()> {
        let result = &report.result;
        let precision = self.precision;

        writeln!(self.writer, "{}", "SUMMARY".bold())?;
        writeln!(self.writer, "{}", THIN_RULE)?;
        writeln!(self.writer, "Source: {}", report.metadata.source)?;
        writeln!(self.writer, "Points: {}", report.points.len())?;
        writeln!(self.writer, "Clusters (k): {}", result.cluster_count())?;
        writeln!(
            self.writer,
            "Iterations: {} / {} ({})",
            result.iterations(),
            report.metadata.max_iterations,
            termination_label(result.termination)
        )?;
        writeln!(
            self.writer,
            "Inertia: {:.*}",
            precision, report.metadata.inertia
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cluster_table(&mut self, report: &ClusteringReport) -> anyhow::Result<()> {
        let result = &report.result;
        let precision = self.precision;
        let label = report.algorithm().representative_label();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec![
            "Cluster".to_string(),
            label.trim_end_matches('s').to_string(),
            "Size".to_string(),
            "Points".to_string(),
        ]);

        for (cluster, members) in result.clusters().iter().enumerate() {
            let listed = members
                .iter()
                .map(|&i| format!("#{} {}", i, fmt_point(&report.points[i], precision)))
                .collect::<Vec<_>>()
                .join("\n");
            table.add_row(vec![
                cluster.to_string(),
                fmt_point(&result.representatives[cluster], precision),
                members.len().to_string(),
                if listed.is_empty() {
                    "(empty)".to_string()
                } else {
                    listed
                },
            ]);
        }

        writeln!(self.writer, "{}", label.to_uppercase().bold())?;
        writeln!(self.writer, "{}", table)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_iteration_log(&mut self, report: &ClusteringReport) -> anyhow::Result<()> {
        let label = report.algorithm().representative_label();
        let precision = self.precision;

        writeln!(self.writer, "{}", "ITERATION LOG".bold())?;
        writeln!(self.writer, "{}", THIN_RULE)?;

        for record in &report.result.log {
            writeln!(
                self.writer,
                "{}",
                format!("Iteration {}", record.iteration + 1).bold()
            )?;
            writeln!(self.writer, "  Initial {}:", label)?;
            for point in &record.initial {
                writeln!(self.writer, "    • {}", fmt_point(point, precision))?;
            }
            writeln!(self.writer, "  Updated {}:", label)?;
            for (index, point) in record.updated.iter().enumerate() {
                let rendered = fmt_point(point, precision);
                if record.initial.get(index) == Some(point) {
                    writeln!(self.writer, "    • {}", rendered)?;
                } else {
                    writeln!(self.writer, "    • {}", rendered.yellow())?;
                }
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}
