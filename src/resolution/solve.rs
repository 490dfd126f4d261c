use std::fmt::Display;
use std::str::FromStr;
use std::time::Instant;

use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::error::RelayError;
use crate::instance::RelayInstance;

use super::model::{Assignment, RankedLineup};
use super::rank::rank;
use super::time;

#[derive(Debug, Args)]
pub struct Rank {
    /// The path to the instance file
    #[clap(short, long)]
    pub instance: String,
    /// Number of lineups to display
    #[clap(short='n', long, default_value="10")]
    pub top: usize,
    /// Display every valid lineup
    #[clap(short, long, action)]
    pub all: bool,
    /// The output format
    #[clap(short, long, default_value="text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Text,
    Json,
}
impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err("The only supported output formats are 'text' and 'json'"),
        }
    }
}
impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// One displayed line of the ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupRow {
    pub rank: usize,
    pub total: String,
    pub total_seconds: f64,
    pub swimmers: Vec<String>,
    pub excluded: String,
    pub assignment: Assignment,
}

impl LineupRow {
    fn new(rank: usize, lineup: &RankedLineup, names: &[String]) -> Self {
        let name = |swimmer: usize| names.get(swimmer).cloned().unwrap_or_default();
        LineupRow {
            rank,
            total: time::encode(lineup.total_seconds),
            total_seconds: lineup.total_seconds,
            swimmers: lineup.assignment.legs().iter().map(|&s| name(s)).collect(),
            excluded: name(lineup.assignment.excluded()),
            assignment: lineup.assignment,
        }
    }
}

/// Turns a ranking into display rows, keeping at most `limit` of them.
pub fn rows(ranked: &[RankedLineup], names: &[String], limit: Option<usize>) -> Vec<LineupRow> {
    ranked
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(i, lineup)| LineupRow::new(i + 1, lineup, names))
        .collect()
}

impl Rank {
    pub fn rank(&self) -> Result<(), RelayError> {
        let instance = RelayInstance::load(&self.instance)?;
        let matrix = instance.time_matrix();

        let start = Instant::now();
        let ranked = rank(&matrix);
        let duration = start.elapsed();

        info!(
            instance = %self.instance,
            lineups = ranked.len(),
            duration_us = duration.as_micros() as u64,
            "ranking complete"
        );

        let limit = if self.all { None } else { Some(self.top) };
        let rows = rows(&ranked, &instance.names, limit);

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
            OutputFormat::Text => print!("{}", render_text(&rows, &instance.names)),
        }

        Ok(())
    }
}

fn render_text(rows: &[LineupRow], names: &[String]) -> String {
    if rows.is_empty() {
        return "no valid lineup\n".to_string();
    }

    let width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0).max(6);

    let mut out = String::new();
    out.push_str(&format!("{:>4}  {:<9}", "rank", "total"));
    for leg in 1..=super::model::NB_LEGS {
        out.push_str(&format!("  {:<width$}", format!("leg {leg}")));
    }
    out.push_str(&format!("  {:<width$}\n", "out"));

    for row in rows {
        out.push_str(&format!("{:>4}  {:<9}", row.rank, row.total));
        for swimmer in row.swimmers.iter() {
            out.push_str(&format!("  {swimmer:<width$}"));
        }
        out.push_str(&format!("  {:<width$}\n", row.excluded));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolution::model::{TimeMatrix, NB_LEGS, NB_SWIMMERS};

    fn names() -> Vec<String> {
        ["Ada", "Ben", "Cleo", "Dan", "Eve"].iter().map(|s| s.to_string()).collect()
    }

    fn diagonal() -> Vec<RankedLineup> {
        let mut rows = [[None; NB_LEGS]; NB_SWIMMERS];
        rows[0][0] = Some(30.5);
        rows[1][1] = Some(35.25);
        rows[2][2] = Some(32.0);
        rows[3][3] = Some(28.75);
        rank(&TimeMatrix::from_swimmer_rows(rows))
    }

    #[test]
    fn rows_name_swimmers_in_leg_order() {
        let rows = rows(&diagonal(), &names(), Some(10));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].total, "2:6,50");
        assert_eq!(rows[0].swimmers, vec!["Ada", "Ben", "Cleo", "Dan"]);
        assert_eq!(rows[0].excluded, "Eve");
    }

    #[test]
    fn rows_are_truncated_to_the_limit() {
        let matrix = TimeMatrix::from_swimmer_rows([[Some(30.0); NB_LEGS]; NB_SWIMMERS]);
        let ranked = rank(&matrix);

        assert_eq!(rows(&ranked, &names(), Some(10)).len(), 10);
        assert_eq!(rows(&ranked, &names(), None).len(), 120);
    }

    #[test]
    fn empty_ranking_renders_a_message() {
        assert_eq!(render_text(&[], &names()), "no valid lineup\n");
    }

    #[test]
    fn text_rendering_lists_every_row() {
        let rows = rows(&diagonal(), &names(), None);
        let text = render_text(&rows, &names());
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("leg 4"));
        assert!(lines[1].contains("2:6,50"));
        assert!(lines[1].trim_end().ends_with("Eve"));
    }

    #[test]
    fn output_format_parses() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
