//! Report assembly
//!
//! Runs the four summaries over the configured columns and lays the results
//! out as plain [`Table`]s, one per export sheet. A frequency table is added
//! only when the configuration names frequency columns. Rounding happens here and
//! only here; the engine results carried alongside keep full precision.

pub mod table;

use log::info;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::ReportConfig;
use crate::dataframe::DataFrame;
use crate::error::Result;
use crate::series::Series;
use crate::stats::{
    self, round_to, ColumnDispersion, ColumnPosition, ColumnSummary, CorrelationResult,
};

pub use self::table::{Cell, Table};

/// Sheet names, in export order
pub const DATA_SHEET: &str = "Data";
pub const CENTRAL_SHEET: &str = "CentralTendency";
pub const DISPERSION_SHEET: &str = "Dispersion";
pub const POSITION_SHEET: &str = "Position";
pub const CORRELATION_SHEET: &str = "Correlation";
pub const FREQUENCY_SHEET: &str = "Frequency";

/// Everything a presentation or export layer needs
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub data: Table,
    pub central: Table,
    pub dispersion: Table,
    pub position: Table,
    pub correlation: Table,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Table>,
    #[serde(skip)]
    pub summaries: Vec<ColumnSummary>,
    #[serde(skip)]
    pub dispersions: Vec<ColumnDispersion>,
    #[serde(skip)]
    pub positions: Vec<ColumnPosition>,
    #[serde(skip)]
    pub correlations: Vec<CorrelationResult>,
}

impl Report {
    /// Tables in sheet order
    pub fn tables(&self) -> Vec<&Table> {
        let mut tables = vec![
            &self.data,
            &self.central,
            &self.dispersion,
            &self.position,
            &self.correlation,
        ];
        tables.extend(self.frequency.as_ref());
        tables
    }
}

/// Builds a [`Report`] from a dataset and a configuration
#[derive(Debug)]
pub struct ReportAssembler<'a> {
    df: &'a DataFrame,
    config: &'a ReportConfig,
}

impl<'a> ReportAssembler<'a> {
    /// Create an assembler; fails if the configuration names unknown columns
    pub fn new(df: &'a DataFrame, config: &'a ReportConfig) -> Result<Self> {
        config.validate(df)?;
        Ok(ReportAssembler { df, config })
    }

    /// Compute every summary and lay out the tables
    pub fn assemble(&self) -> Result<Report> {
        let summaries = self.map_columns(&self.config.numeric_columns, stats::central_tendency)?;
        let dispersions = self.map_columns(&self.config.numeric_columns, stats::dispersion)?;
        let positions = self.map_columns(&self.config.position_columns, stats::positions)?;
        let correlations = self.correlations()?;
        let frequency = if self.config.frequency_columns.is_empty() {
            None
        } else {
            Some(self.frequency_table()?)
        };

        let report = Report {
            data: self.data_table()?,
            central: self.central_table(&summaries)?,
            dispersion: self.dispersion_table(&dispersions)?,
            position: self.position_table(&positions)?,
            correlation: self.correlation_table(&correlations)?,
            frequency,
            summaries,
            dispersions,
            positions,
            correlations,
        };
        info!(
            "assembled report: {} rows, {} numeric columns, {} correlations",
            self.df.row_count(),
            report.summaries.len(),
            report.correlations.len()
        );
        Ok(report)
    }

    /// Correlation results for every configured pair
    pub fn correlations(&self) -> Result<Vec<CorrelationResult>> {
        self.config
            .correlations
            .iter()
            .map(|pair| {
                let x = self.df.column(&pair.x)?;
                let y = self.df.column(&pair.y)?;
                stats::correlate(&x, &y)
            })
            .collect()
    }

    /// Extract the named columns, then summarize each one
    fn map_columns<T, F>(&self, names: &[String], f: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&Series) -> T + Sync,
    {
        let columns = names
            .iter()
            .map(|name| self.df.column(name))
            .collect::<Result<Vec<Series>>>()?;

        if self.config.parallel {
            Ok(columns.par_iter().map(|s| f(s)).collect())
        } else {
            Ok(columns.iter().map(|s| f(s)).collect())
        }
    }

    fn data_table(&self) -> Result<Table> {
        let mut table = Table::new(DATA_SHEET, self.df.column_names().to_vec());
        for row in self.df.rows() {
            table.push_row(row.iter().map(|&v| Cell::from(v)).collect())?;
        }
        Ok(table)
    }

    fn central_table(&self, summaries: &[ColumnSummary]) -> Result<Table> {
        let places = self.config.precision.metric;
        let mut table = Table::new(CENTRAL_SHEET, vec!["Variable", "Mean", "Median", "Mode"]);
        for s in summaries {
            table.push_row(vec![
                s.name.as_str().into(),
                round_to(s.mean, places).into(),
                round_to(s.median, places).into(),
                s.mode.render(s.kind, self.config.locale).into(),
            ])?;
        }
        Ok(table)
    }

    fn dispersion_table(&self, dispersions: &[ColumnDispersion]) -> Result<Table> {
        let places = self.config.precision.metric;
        let mut table = Table::new(
            DISPERSION_SHEET,
            vec![
                "Variable",
                "Min",
                "Max",
                "Range",
                "Variance (sample)",
                "Std.Dev (sample)",
                "Coef. Variation (%)",
            ],
        );
        for d in dispersions {
            table.push_row(vec![
                d.name.as_str().into(),
                round_to(d.min, places).into(),
                round_to(d.max, places).into(),
                round_to(d.range, places).into(),
                round_to(d.variance, places).into(),
                round_to(d.std, places).into(),
                round_to(d.cv_percent, self.config.precision.cv_percent).into(),
            ])?;
        }
        Ok(table)
    }

    fn position_table(&self, positions: &[ColumnPosition]) -> Result<Table> {
        let places = self.config.precision.metric;
        let mut table = Table::new(
            POSITION_SHEET,
            vec!["Variable", "Q1", "Q2", "Q3", "P25", "P50", "P75"],
        );
        for p in positions {
            table.push_row(vec![
                p.name.as_str().into(),
                round_to(p.q1, places).into(),
                round_to(p.q2, places).into(),
                round_to(p.q3, places).into(),
                round_to(p.p25, places).into(),
                round_to(p.p50, places).into(),
                round_to(p.p75, places).into(),
            ])?;
        }
        Ok(table)
    }

    fn correlation_table(&self, correlations: &[CorrelationResult]) -> Result<Table> {
        let mut table = Table::new(CORRELATION_SHEET, vec!["Relation", "r", "Interpretation"]);
        for c in correlations {
            table.push_row(vec![
                format!("{} vs {}", c.column_a, c.column_b).into(),
                round_to(c.r, self.config.precision.correlation).into(),
                c.label(self.config.locale).into(),
            ])?;
        }
        Ok(table)
    }

    /// One row per distinct value of each frequency column, ascending
    fn frequency_table(&self) -> Result<Table> {
        let mut table = Table::new(FREQUENCY_SHEET, vec!["Variable", "Value", "Count"]);
        for name in &self.config.frequency_columns {
            let series = self.df.column(name)?;
            for (value, count) in stats::frequency_table(series.dropna()) {
                table.push_row(vec![
                    name.as_str().into(),
                    series.format_value(value).into(),
                    Cell::Int(count as i64),
                ])?;
            }
        }
        Ok(table)
    }
}

/// Assemble a report in one call
pub fn build_report(df: &DataFrame, config: &ReportConfig) -> Result<Report> {
    ReportAssembler::new(df, config)?.assemble()
}
