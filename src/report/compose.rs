use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use tracing::{debug, info};

use super::alerts::{evaluate, BudgetAlert, NO_ALERTS};
use super::chart::{BarChart, PercentOf};
use super::summary::{summarize, Summary};
use super::trend::{trend, trend_window, Trend};
use crate::config::Config;
use crate::error::{BudgetError, Result};
use crate::models::{BudgetTable, EntryKind, Ledger, Month};
use crate::util::{format_amount, format_percent};

pub(crate) const TITLE: &str = "=== PERSONAL BUDGET TRACKER ===";
const NOT_ENOUGH_TREND_DATA: &str = "(Not enough data for trend analysis)";

/// Everything known about one month, ready to print or export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Report {
    pub month: Month,
    pub summary: Summary,
    /// Rendered bar chart lines, largest expense first.
    pub expense_breakdown: Vec<String>,
    pub alerts: Vec<BudgetAlert>,
    /// Oldest month first, ending with `month`.
    pub trend_window: Vec<Month>,
    /// Expense trend for every category spent on or budgeted in `month`.
    pub trends: BTreeMap<String, Trend>,
}

pub(crate) fn compose(
    ledger: &Ledger,
    budgets: &BudgetTable,
    month: Month,
    config: &Config,
) -> Report {
    let summary = summarize(ledger, month);
    let expenses = ledger.amounts(month, EntryKind::Expenses);
    let limits = budgets.limits(month);

    // Stable sort keeps equal amounts in category order.
    let mut by_amount: Vec<(&str, Decimal)> = expenses
        .iter()
        .map(|(category, amount)| (category.as_str(), *amount))
        .collect();
    by_amount.sort_by(|a, b| b.1.cmp(&a.1));

    let expense_breakdown = BarChart::new(config.bar_width)
        .label_width(config.label_width)
        .percent_of(PercentOf::Total(summary.total_expenses))
        .render(&by_amount);

    let alerts = evaluate(expenses, limits);

    let window = trend_window(month, config.trend_months);
    let trends: BTreeMap<String, Trend> = expenses
        .keys()
        .chain(limits.keys())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|category| {
            let direction = trend(ledger, category, &window, EntryKind::Expenses);
            (category.clone(), direction)
        })
        .collect();

    debug!(
        "Composed report for {month}: {} expense categories, {} alerts, {} trends",
        expenses.len(),
        alerts.len(),
        trends.len()
    );

    Report {
        month,
        summary,
        expense_breakdown,
        alerts,
        trend_window: window,
        trends,
    }
}

impl Report {
    /// `budget_summary_<YYYY-MM>.txt`
    pub(crate) fn file_name(&self) -> String {
        format!("budget_summary_{}.txt", self.month)
    }

    /// The report text. Console output and export files both use this.
    pub(crate) fn render(&self) -> String {
        self.to_string()
    }

    /// Write the report into `dir` and return the file path.
    ///
    /// The text goes to a temporary file in `dir` first and is renamed into
    /// place, so a failed export never leaves a partial file behind. On unix
    /// the file is created `0644`, subject to the umask.
    pub(crate) fn export(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        let export_error = |source| BudgetError::Export {
            path: path.clone(),
            source,
        };

        let mut builder = tempfile::Builder::new();
        // Temp files default to 0600; exports are plain readable files.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o644));
        }
        let mut file = builder.tempfile_in(dir).map_err(export_error)?;
        file.write_all(self.render().as_bytes())
            .map_err(export_error)?;
        file.persist(&path).map_err(|e| export_error(e.error))?;

        info!("Exported {} summary to {}", self.month, path.display());
        Ok(path)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "Month: {}", self.month.long_name())?;
        writeln!(f)?;

        let s = &self.summary;
        writeln!(f, "💰 FINANCIAL SUMMARY")?;
        writeln!(f, "Total Income: {}", format_amount(s.total_income))?;
        writeln!(f, "Total Expenses: {}", format_amount(s.total_expenses))?;
        writeln!(
            f,
            "Net Savings: {} ({}%)",
            format_amount(s.net),
            format_percent(s.net_percent_of_income)
        )?;
        writeln!(f)?;

        writeln!(f, "📊 EXPENSE BREAKDOWN")?;
        for line in &self.expense_breakdown {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;

        writeln!(f, "⚠️ BUDGET ALERTS:")?;
        if self.alerts.is_empty() {
            writeln!(f, "{NO_ALERTS}")?;
        }
        for alert in &self.alerts {
            writeln!(f, "{alert}")?;
        }
        writeln!(f)?;

        writeln!(f, "📈 SPENDING TREND ANALYSIS:")?;
        if self.trend_window.len() < 2 {
            writeln!(f, "{NOT_ENOUGH_TREND_DATA}")?;
        } else {
            for (category, direction) in &self.trends {
                writeln!(f, "{category}: {direction}")?;
            }
        }
        Ok(())
    }
}
