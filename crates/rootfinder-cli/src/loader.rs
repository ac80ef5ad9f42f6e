//! CSV corpus loading.
//!
//! Expected headers (extra columns are ignored):
//!
//! ```text
//! policy_id,policy_name,year_created,year_terminated,parent_policy,policy_type,government,ideological_orientation
//! ```
//!
//! Only `policy_id`, `policy_name` and `year_created` are required. Empty
//! `year_terminated` and `parent_policy` cells mean the value is absent.

use crate::error::{CliError, Result};
use rootfinder_domain::Policy;
use rootfinder_store::Corpus;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

const REQUIRED_COLUMNS: [&str; 3] = ["policy_id", "policy_name", "year_created"];

/// Column positions resolved from the header row
#[derive(Debug, Clone)]
struct Columns {
    id: usize,
    name: usize,
    year_created: usize,
    year_terminated: Option<usize>,
    parent: Option<usize>,
    policy_type: Option<usize>,
    government: Option<usize>,
    ideology: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h == name);
        let required = |name: &str| {
            position(name).ok_or_else(|| CliError::InvalidInput(format!("Missing required column: {}", name)))
        };

        Ok(Self {
            id: required(REQUIRED_COLUMNS[0])?,
            name: required(REQUIRED_COLUMNS[1])?,
            year_created: required(REQUIRED_COLUMNS[2])?,
            year_terminated: position("year_terminated"),
            parent: position("parent_policy"),
            policy_type: position("policy_type"),
            government: position("government"),
            ideology: position("ideological_orientation"),
        })
    }
}

/// Parse a year cell, accepting float renderings such as `2020.0`.
pub fn parse_year(value: &str) -> std::result::Result<i32, String> {
    let value = value.trim();
    if let Ok(year) = value.parse::<i32>() {
        return Ok(year);
    }

    match value.parse::<f64>() {
        Ok(year) if year.is_finite() && year.fract() == 0.0 && year.abs() <= f64::from(i32::MAX) => {
            Ok(year as i32)
        }
        _ => Err(format!("invalid year '{}'", value)),
    }
}

fn parse_row(row: &csv::StringRecord, columns: &Columns) -> std::result::Result<Policy, String> {
    let cell = |idx: Option<usize>| {
        idx.and_then(|i| row.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };
    let required = |idx: usize, name: &str| cell(Some(idx)).ok_or_else(|| format!("missing {}", name));

    let id = required(columns.id, "policy_id")?;
    let name = required(columns.name, "policy_name")?;
    let year_created = parse_year(required(columns.year_created, "year_created")?)?;

    let mut policy = Policy::new(id, name, year_created);
    if let Some(year) = cell(columns.year_terminated) {
        policy = policy.terminated_in(parse_year(year)?);
    }
    if let Some(parent) = cell(columns.parent) {
        policy = policy.with_parent(parent);
    }
    if let Some(policy_type) = cell(columns.policy_type) {
        policy = policy.with_type(policy_type);
    }
    if let Some(government) = cell(columns.government) {
        policy = policy.with_government(government);
    }
    if let Some(ideology) = cell(columns.ideology) {
        policy = policy.with_ideology(ideology);
    }

    Ok(policy)
}

/// Read policies from CSV data.
///
/// A malformed row fails the whole read unless `skip_malformed` is set, in
/// which case it is logged and skipped.
pub fn read_policies<R: Read>(reader: R, skip_malformed: bool) -> Result<Vec<Policy>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = Columns::from_headers(&headers)?;
    let mut policies = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let row = result?;
        match parse_row(&row, &columns) {
            Ok(policy) => policies.push(policy),
            Err(reason) if skip_malformed => {
                warn!(row = idx + 1, %reason, "Skipping malformed record");
            }
            Err(reason) => return Err(CliError::MalformedRecord { row: idx + 1, reason }),
        }
    }

    Ok(policies)
}

/// Load a corpus file into a store and genealogy graph.
pub fn load_corpus(path: &Path, skip_malformed: bool) -> Result<Corpus> {
    let file = std::fs::File::open(path)?;
    let policies = read_policies(file, skip_malformed)?;
    let rows = policies.len();
    let corpus = Corpus::from_policies(policies);

    info!(
        path = %path.display(),
        rows,
        policies = corpus.len(),
        edges = corpus.graph().edge_count(),
        "Loaded corpus"
    );
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rootfinder_domain::PolicyId;

    const HEADER: &str = "policy_id,policy_name,year_created,year_terminated,parent_policy,policy_type,government,ideological_orientation\n";

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("1945"), Ok(1945));
        assert_eq!(parse_year(" 2020.0 "), Ok(2020));
        assert!(parse_year("2020.5").is_err());
        assert!(parse_year("soon").is_err());
        assert!(parse_year("NaN").is_err());
    }

    #[test]
    fn test_read_full_row() {
        let data = format!(
            "{}ARG_SAC_1967,SAC,1967,1976.0,ARG_AGUINALDO_1945,Labor,Onganía,Military\n",
            HEADER
        );
        let policies = read_policies(data.as_bytes(), false).unwrap();

        assert_eq!(policies.len(), 1);
        let policy = &policies[0];
        assert_eq!(policy.id, PolicyId::new("ARG_SAC_1967"));
        assert_eq!(policy.year_terminated, Some(1976));
        assert_eq!(policy.parent_id, Some(PolicyId::new("ARG_AGUINALDO_1945")));
        assert_eq!(policy.government, "Onganía");
        assert_eq!(policy.ideology, "Military");
    }

    #[test]
    fn test_empty_optional_cells() {
        let data = format!("{}ROOT,Root,1945,,,,,\n", HEADER);
        let policies = read_policies(data.as_bytes(), false).unwrap();

        assert!(policies[0].is_active());
        assert!(policies[0].parent_id.is_none());
        assert_eq!(policies[0].ideology, "");
    }

    #[test]
    fn test_minimal_columns_and_extras() {
        let data = "notes,policy_name,policy_id,year_created\nfoo,Root,ROOT,1945\n";
        let policies = read_policies(data.as_bytes(), false).unwrap();
        assert_eq!(policies[0].name, "Root");
    }

    #[test]
    fn test_missing_required_column() {
        let data = "policy_id,policy_name\nA,B\n";
        assert!(matches!(read_policies(data.as_bytes(), false), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_malformed_row_names_row() {
        let data = format!("{}A,First,1945,,,,,\nB,Second,someday,,,,,\n", HEADER);
        match read_policies(data.as_bytes(), false) {
            Err(CliError::MalformedRecord { row, reason }) => {
                assert_eq!(row, 2);
                assert!(reason.contains("someday"));
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_skip_malformed() {
        let data = format!("{}A,First,1945,,,,,\n,No id,1950,,,,,\nC,Third,1960\n", HEADER);
        let policies = read_policies(data.as_bytes(), true).unwrap();

        let ids: Vec<&str> = policies.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C"]);
    }
}
