use crate::core::Point;
use crate::io::output::{ClusteringReport, OutputWriter};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
    precision: usize,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, precision: usize) -> Self {
        Self { writer, precision }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ClusteringReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_clusters(report)?;
        self.write_iteration_log(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn fmt_point(point: &Point, precision: usize) -> String {
    format!("{:.*}", precision, point)
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &ClusteringReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "# {} Clustering Report",
            report.algorithm().display_name()
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", report.metadata.kcluster_version)?;
        writeln!(self.writer, "Source: `{}`", report.metadata.source)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &ClusteringReport) -> anyhow::Result<()> {
        let result = &report.result;

        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Points | {} |", report.points.len())?;
        writeln!(self.writer, "| Clusters (k) | {} |", result.cluster_count())?;
        writeln!(
            self.writer,
            "| Iterations | {} / {} |",
            result.iterations(),
            report.metadata.max_iterations
        )?;
        writeln!(self.writer, "| Termination | {} |", result.termination)?;
        let precision = self.precision;
        writeln!(
            self.writer,
            "| Inertia | {:.*} |",
            precision, report.metadata.inertia
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_clusters(&mut self, report: &ClusteringReport) -> anyhow::Result<()> {
        let label = report.algorithm().representative_label();
        let result = &report.result;
        let precision = self.precision;

        writeln!(self.writer, "## {}", label)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Cluster | Representative | Size | Points |")?;
        writeln!(self.writer, "|---------|----------------|------|--------|")?;

        for (cluster, members) in result.clusters().iter().enumerate() {
            let listed = members
                .iter()
                .map(|&i| fmt_point(&report.points[i], precision))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                cluster,
                fmt_point(&result.representatives[cluster], precision),
                members.len(),
                listed
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_iteration_log(&mut self, report: &ClusteringReport) -> anyhow::Result<()> {
        let label = report.algorithm().representative_label();
        let precision = self.precision;

        writeln!(self.writer, "## Iteration Log")?;
        writeln!(self.writer)?;

        for record in &report.result.log {
            writeln!(self.writer, "### Iteration {}", record.iteration + 1)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "**Initial {}:**", label)?;
            writeln!(self.writer)?;
            for point in &record.initial {
                writeln!(self.writer, "- {}", fmt_point(point, precision))?;
            }
            writeln!(self.writer)?;
            writeln!(self.writer, "**Updated {}:**", label)?;
            writeln!(self.writer)?;
            for point in &record.updated {
                writeln!(self.writer, "- {}", fmt_point(point, precision))?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}
