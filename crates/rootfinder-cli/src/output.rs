//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use rootfinder_domain::memetic::{FitnessBreakdown, MemeComparison};
use rootfinder_domain::{Lineage, MemeKind, Policy};
use rootfinder_engine::{PhenotypeMatch, PolicyMetrics};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Root entry of a lineage report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootEntry {
    /// Policy ID
    pub id: String,
    /// Policy name
    pub name: String,
    /// Year created
    pub year: i32,
    /// Survival years at the reference year
    pub survival_years: i32,
}

/// Ancestor or sibling entry of a lineage report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelativeEntry {
    /// Policy ID
    pub id: String,
    /// Policy name
    pub name: String,
    /// Year created
    pub year: i32,
}

/// Descendant entry of a lineage report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescendantEntry {
    /// Policy ID
    pub id: String,
    /// Policy name
    pub name: String,
    /// Year created
    pub year: i32,
    /// Inheritance score with respect to the root
    pub inheritance: f64,
}

/// Lineage summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineageStatistics {
    /// Number of descendants
    pub total_descendants: usize,
    /// Mean inheritance score
    pub mean_inheritance: f64,
    /// Highest inheritance score
    pub max_inheritance: f64,
}

/// Serializable genealogy export of one lineage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineageReport {
    /// The traced policy
    pub root: RootEntry,
    /// Ancestors
    pub ancestors: Vec<RelativeEntry>,
    /// Descendants with inheritance scores
    pub descendants: Vec<DescendantEntry>,
    /// Siblings
    pub siblings: Vec<RelativeEntry>,
    /// Summary statistics
    pub statistics: LineageStatistics,
}

impl LineageReport {
    /// Build a report, measuring survival at `reference_year`.
    pub fn new(lineage: &Lineage<'_>, reference_year: i32) -> Self {
        let relative = |p: &&Policy| RelativeEntry {
            id: p.id.to_string(),
            name: p.name.clone(),
            year: p.year_created,
        };

        Self {
            root: RootEntry {
                id: lineage.root.id.to_string(),
                name: lineage.root.name.clone(),
                year: lineage.root.year_created,
                survival_years: lineage.root.survival_years_at(reference_year),
            },
            ancestors: lineage.ancestors.iter().map(relative).collect(),
            descendants: lineage
                .descendants
                .iter()
                .map(|d| DescendantEntry {
                    id: d.id.to_string(),
                    name: d.name.clone(),
                    year: d.year_created,
                    inheritance: lineage.inheritance_of(&d.id).unwrap_or(0.0),
                })
                .collect(),
            siblings: lineage.siblings.iter().map(relative).collect(),
            statistics: LineageStatistics {
                total_descendants: lineage.total_descendants(),
                mean_inheritance: lineage.mean_inheritance(),
                max_inheritance: lineage.max_inheritance(),
            },
        }
    }
}

#[derive(Serialize)]
struct PhenotypeRow<'a> {
    id: &'a str,
    name: &'a str,
    year_created: i32,
    survival_years: i32,
    ideology: &'a str,
    score: f64,
}

#[derive(Serialize)]
struct FitnessReport<'a> {
    kind: &'a str,
    country: &'a str,
    components: [(&'static str, f64); 5],
    fitness_base: f64,
    cultural_compatibility: f64,
    replication_fidelity: f64,
    total_fitness: f64,
}

impl<'a> FitnessReport<'a> {
    fn new(breakdown: &FitnessBreakdown, kind: MemeKind, country: &'a str) -> Self {
        Self {
            kind: kind.as_str(),
            country,
            components: breakdown.components.components(),
            fitness_base: breakdown.fitness_base,
            cultural_compatibility: breakdown.cultural_compatibility,
            replication_fidelity: breakdown.replication_fidelity,
            total_fitness: breakdown.total_fitness,
        }
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a traced lineage.
    pub fn format_lineage(&self, report: &LineageReport) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(report)?);
        }

        let root = &report.root;
        let mut sections = vec![self.colorize(
            &format!(
                "{} ({}) - {}, {} years",
                root.name, root.id, root.year, root.survival_years
            ),
            "cyan",
        )];

        sections.push(self.relatives_section("Ancestors", &report.ancestors));

        sections.push(format!("Descendants ({})", report.descendants.len()));
        if report.descendants.is_empty() {
            sections.push(self.colorize("  none", "yellow"));
        } else {
            let mut builder = Builder::default();
            builder.push_record(["ID", "Name", "Year", "Inheritance"]);
            for d in &report.descendants {
                builder.push_record([
                    d.id.clone(),
                    d.name.clone(),
                    d.year.to_string(),
                    format!("{:.3}", d.inheritance),
                ]);
            }
            sections.push(self.build_table(builder));
        }

        sections.push(self.relatives_section("Siblings", &report.siblings));

        let stats = &report.statistics;
        sections.push(format!(
            "Statistics: {} descendants, mean inheritance {:.3}, max inheritance {:.3}",
            stats.total_descendants, stats.mean_inheritance, stats.max_inheritance
        ));

        Ok(sections.join("\n"))
    }

    fn relatives_section(&self, title: &str, relatives: &[RelativeEntry]) -> String {
        if relatives.is_empty() {
            return format!("{} (0)\n{}", title, self.colorize("  none", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Year"]);
        for r in relatives {
            builder.push_record([r.id.clone(), r.name.clone(), r.year.to_string()]);
        }
        format!("{} ({})\n{}", title, relatives.len(), self.build_table(builder))
    }

    /// Format extended-phenotype matches.
    pub fn format_phenotypes(&self, matches: &[PhenotypeMatch<'_>]) -> Result<String> {
        let rows: Vec<PhenotypeRow<'_>> = matches
            .iter()
            .map(|m| PhenotypeRow {
                id: m.policy.id.as_str(),
                name: &m.policy.name,
                year_created: m.policy.year_created,
                survival_years: m.survival_years,
                ideology: &m.policy.ideology,
                score: m.score,
            })
            .collect();

        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(&rows)?);
        }
        if rows.is_empty() {
            return Ok(self.colorize("No extended phenotypes found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Created", "Survival", "Ideology", "Score"]);
        for row in &rows {
            builder.push_record([
                row.id.to_string(),
                row.name.to_string(),
                row.year_created.to_string(),
                row.survival_years.to_string(),
                row.ideology.to_string(),
                format!("{:.3}", row.score),
            ]);
        }
        Ok(self.build_table(builder))
    }

    /// Format policy metric rows.
    pub fn format_metrics(&self, rows: &[PolicyMetrics]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(rows)?);
        }
        if rows.is_empty() {
            return Ok(self.colorize("No policies found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record([
            "ID", "Survival", "Active", "Desc", "Anc", "Mean Inh", "Max Inh", "Phenotype", "Fitness", "Degree",
        ]);
        for m in rows {
            builder.push_record([
                m.policy_id.clone(),
                m.survival_years.to_string(),
                if m.active { "yes" } else { "no" }.to_string(),
                m.descendants.to_string(),
                m.ancestors.to_string(),
                format!("{:.3}", m.mean_inheritance),
                format!("{:.3}", m.max_inheritance),
                format!("{:.3}", m.phenotype_score),
                format!("{:.3}", m.memetic_fitness),
                m.degree.to_string(),
            ]);
        }
        Ok(self.build_table(builder))
    }

    /// Format one memetic fitness breakdown.
    pub fn format_fitness(&self, breakdown: &FitnessBreakdown, kind: MemeKind, country: &str) -> Result<String> {
        let report = FitnessReport::new(breakdown, kind, country);
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(&report)?);
        }

        let mut builder = Builder::default();
        builder.push_record(["Factor", "Value"]);
        for (name, value) in report.components {
            builder.push_record([name.to_string(), format!("{:.2}", value)]);
        }
        builder.push_record(["fitness_base".to_string(), format!("{:.3}", report.fitness_base)]);
        builder.push_record([
            "cultural_compatibility".to_string(),
            format!("{:.3}", report.cultural_compatibility),
        ]);
        builder.push_record([
            "replication_fidelity".to_string(),
            format!("{:.3}", report.replication_fidelity),
        ]);

        Ok(format!(
            "{}\n{}\n{}",
            self.colorize(&format!("{} message in {}", kind.as_str(), country), "cyan"),
            self.build_table(builder),
            self.success(&format!("Total fitness: {:.3}", report.total_fitness)),
        ))
    }

    /// Format a populist vs liberal comparison.
    pub fn format_comparison(&self, comparison: &MemeComparison, country: &str) -> Result<String> {
        if self.format == OutputFormat::Json {
            let value = serde_json::json!({
                "populist": FitnessReport::new(&comparison.populist, MemeKind::Populist, country),
                "liberal": FitnessReport::new(&comparison.liberal, MemeKind::Liberal, country),
                "fitness_ratio": comparison.fitness_ratio,
                "populist_advantage": comparison.populist_advantage,
            });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        let mut builder = Builder::default();
        builder.push_record(["", "Populist", "Liberal"]);
        let pairs = comparison
            .populist
            .components
            .components()
            .into_iter()
            .zip(comparison.liberal.components.components());
        for ((name, populist), (_, liberal)) in pairs {
            builder.push_record([name.to_string(), format!("{:.2}", populist), format!("{:.2}", liberal)]);
        }
        for (name, populist, liberal) in [
            ("fitness_base", comparison.populist.fitness_base, comparison.liberal.fitness_base),
            (
                "cultural_compatibility",
                comparison.populist.cultural_compatibility,
                comparison.liberal.cultural_compatibility,
            ),
            (
                "replication_fidelity",
                comparison.populist.replication_fidelity,
                comparison.liberal.replication_fidelity,
            ),
            ("total_fitness", comparison.populist.total_fitness, comparison.liberal.total_fitness),
        ] {
            builder.push_record([name.to_string(), format!("{:.3}", populist), format!("{:.3}", liberal)]);
        }

        let verdict = if comparison.populist_advantage {
            self.success(&format!("Populist message is {:.2}x fitter", comparison.fitness_ratio))
        } else {
            self.info(&format!("Fitness ratio (populist/liberal): {:.2}", comparison.fitness_ratio))
        };

        Ok(format!("{}\n{}", self.build_table(builder), verdict))
    }

    fn build_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
