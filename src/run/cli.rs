use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::{EntryKind, Month};
use crate::report::{BarChart, PercentOf};
use crate::session::Session;
use crate::util::format_amount;

pub(crate) fn as_cli(args: &[String], session: &Session) -> Result<()> {
    let Some(command) = args.first() else {
        return cli_summary(&[], session);
    };

    match command.as_str() {
        "summary" | "s" => cli_summary(&args[1..], session),
        "export" => cli_export(&args[1..], session),
        "chart" => cli_chart(&args[1..], session),
        "trend" => cli_trend(&args[1..], session),
        "search" => cli_search(&args[1..], session),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budget-tracker {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("budget-tracker: monthly budget summaries over the sample ledger");
    println!();
    println!("Usage: budget-tracker [--log-level <level>] [--dir <path>] [command]");
    println!();
    println!("Commands:");
    println!("  summary [YYYY-MM]             Print the monthly report (default: latest month)");
    println!("  export [YYYY-MM]              Write budget_summary_<YYYY-MM>.txt");
    println!("    --dir <path>                Directory to write to (default: current)");
    println!("  chart [YYYY-MM]               Bar chart of expenses by category");
    println!("    --income                    Chart income instead");
    println!("  trend <category> [YYYY-MM]    Spending trend over the last months");
    println!("    --income                    Income trend instead");
    println!("  search <text>                 Find categories containing <text>");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Logging: --log-level <off|error|warn|info|debug|trace>, or RUST_LOG");
}

/// First non-flag argument as a month, else the session default.
fn month_arg(args: &[String], session: &Session) -> Result<Month> {
    match args.iter().find(|a| !a.starts_with('-')) {
        Some(arg) => Ok(arg.parse()?),
        None => Ok(session.default_month()),
    }
}

fn kind_arg(args: &[String]) -> EntryKind {
    if args.iter().any(|a| a == "--income") {
        EntryKind::Income
    } else {
        EntryKind::Expenses
    }
}

fn cli_summary(args: &[String], session: &Session) -> Result<()> {
    let month = month_arg(args, session)?;
    print!("{}", session.report(month).render());
    Ok(())
}

fn cli_export(args: &[String], session: &Session) -> Result<()> {
    let month = month_arg(args, session)?;
    let path = session.export(month)?;
    println!("Monthly summary exported to {}", path.display());
    Ok(())
}

fn cli_chart(args: &[String], session: &Session) -> Result<()> {
    let month = month_arg(args, session)?;
    let kind = kind_arg(args);
    let config = session.config();

    let mut items: Vec<(&str, Decimal)> = session
        .ledger()
        .amounts(month, kind)
        .iter()
        .map(|(category, amount)| (category.as_str(), *amount))
        .collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));

    let summary = session.summary(month);
    let total = match kind {
        EntryKind::Income => summary.total_income,
        EntryKind::Expenses => summary.total_expenses,
    };
    println!(
        "{} by category, {} (total {})",
        capitalize(kind.as_str()),
        month.long_name(),
        format_amount(total)
    );
    let chart = BarChart::new(config.bar_width)
        .label_width(config.label_width)
        .percent_of(PercentOf::Largest);
    for line in chart.render(&items) {
        println!("{line}");
    }
    Ok(())
}

fn cli_trend(args: &[String], session: &Session) -> Result<()> {
    let Some(category) = args.first().filter(|a| !a.starts_with('-')) else {
        anyhow::bail!("Usage: budget-tracker trend <category> [YYYY-MM] [--income]");
    };
    let month = month_arg(&args[1..], session)?;
    let kind = kind_arg(args);

    let trend = session.trend(category, month, kind);
    println!(
        "{category}: {trend} ({kind}, {} months back from {month})",
        session.config().trend_months
    );
    Ok(())
}

fn cli_search(args: &[String], session: &Session) -> Result<()> {
    let Some(query) = args.first() else {
        anyhow::bail!("Usage: budget-tracker search <text>");
    };

    let matches = session.ledger().search(query);
    if matches.is_empty() {
        println!("No categories matching '{query}'");
        return Ok(());
    }

    println!("{:<8} {:<9} {:<20} Amount", "Month", "Type", "Category");
    println!("{}", "─".repeat(52));
    for m in &matches {
        println!(
            "{:<8} {:<9} {:<20} {}",
            m.month.to_string(),
            m.kind.as_str(),
            m.category,
            format_amount(m.amount)
        );
    }
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
