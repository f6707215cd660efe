#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::Config;
use crate::error::BudgetError;
use crate::models::{EntryKind, Month};
use crate::report::Trend;
use crate::sample::sample_session;
use crate::session::Session;

fn month(s: &str) -> Month {
    s.parse().unwrap()
}

// ── Input checks ──────────────────────────────────────────────

#[test]
fn test_add_expense_accumulates() {
    let mut session = Session::default();
    let jan = month("2024-01");
    session.add_expense(jan, "Food", dec!(250)).unwrap();
    let total = session.add_expense(jan, "Food", dec!(180)).unwrap();
    assert_eq!(total, dec!(430));
    assert_eq!(session.ledger().amount(jan, EntryKind::Expenses, "Food"), dec!(430));
}

#[test]
fn test_add_trims_category() {
    let mut session = Session::default();
    let jan = month("2024-01");
    session.add_income(jan, "  salary ", dec!(3200)).unwrap();
    assert_eq!(session.ledger().amount(jan, EntryKind::Income, "salary"), dec!(3200));
}

#[test]
fn test_zero_amount_is_accepted() {
    let mut session = Session::default();
    let jan = month("2024-01");
    session.add_expense(jan, "Food", Decimal::ZERO).unwrap();
    assert!(session.ledger().month(jan).is_some());
}

#[test]
fn test_negative_amount_is_rejected_without_mutation() {
    let mut session = Session::default();
    let jan = month("2024-01");
    let err = session.add_expense(jan, "Food", dec!(-5)).unwrap_err();
    assert!(matches!(err, BudgetError::NegativeAmount { .. }));
    assert!(session.ledger().month(jan).is_none());
}

#[test]
fn test_overflowing_amount_is_rejected_without_mutation() {
    let mut session = Session::default();
    let jan = month("2024-01");
    session.add_expense(jan, "Food", Decimal::MAX).unwrap();
    for category in ["Food", "Rent"] {
        let err = session.add_expense(jan, category, dec!(1)).unwrap_err();
        assert!(matches!(err, BudgetError::AmountOverflow { .. }));
    }
    assert_eq!(session.ledger().amount(jan, EntryKind::Expenses, "Rent"), Decimal::ZERO);

    // Reporting on the saturated month must not panic.
    session.set_budget(jan, "Food", dec!(0.01)).unwrap();
    let summary = session.summary(jan);
    assert_eq!(summary.total_expenses, Decimal::MAX);
    assert_eq!(summary.net, -Decimal::MAX);
    let report = session.report(jan);
    assert_eq!(report.alerts[0].percent_of_limit, Some(Decimal::MAX));
    assert!(report.render().contains("Total Expenses: $"));
}

#[test]
fn test_empty_category_is_rejected() {
    let mut session = Session::default();
    let jan = month("2024-01");
    assert!(matches!(
        session.add_income(jan, "   ", dec!(10)),
        Err(BudgetError::EmptyCategory)
    ));
    assert!(matches!(
        session.set_budget(jan, "", dec!(10)),
        Err(BudgetError::EmptyCategory)
    ));
    assert!(session.ledger().month(jan).is_none());
    assert!(session.budgets().limits(jan).is_empty());
}

#[test]
fn test_non_positive_limit_is_rejected() {
    let mut session = Session::default();
    let jan = month("2024-01");
    session.set_budget(jan, "Food", dec!(400)).unwrap();
    for bad in [Decimal::ZERO, dec!(-1)] {
        let err = session.set_budget(jan, "Food", bad).unwrap_err();
        assert!(matches!(err, BudgetError::NonPositiveLimit { .. }));
    }
    assert_eq!(session.budgets().limits(jan).get("Food"), Some(&dec!(400)));
}

#[test]
fn test_set_budget_overwrites() {
    let mut session = Session::default();
    let jan = month("2024-01");
    session.set_budget(jan, "Food", dec!(400)).unwrap();
    session.set_budget(jan, "Food", dec!(300)).unwrap();
    assert_eq!(session.budgets().limits(jan).get("Food"), Some(&dec!(300)));
}

// ── Reports ───────────────────────────────────────────────────

#[test]
fn test_summary_for_sample_january() {
    let session = sample_session(Config::default()).unwrap();
    let summary = session.summary(month("2024-01"));
    assert_eq!(summary.total_income, dec!(3200));
    assert_eq!(summary.total_expenses, dec!(1430));
    assert_eq!(summary.net, dec!(1770));
    assert_eq!(summary.net_percent_of_income, dec!(55.3125));
}

#[test]
fn test_report_for_sample_january() {
    let session = sample_session(Config::default()).unwrap();
    let report = session.report(month("2024-01"));
    assert_eq!(report.alerts.len(), 1);
    assert_eq!(report.alerts[0].category, "Food");
    assert_eq!(report.alerts[0].over_amount, dec!(30));
    assert_eq!(report.alerts[0].percent_of_limit, Some(dec!(107.5)));
    assert_eq!(report.trends.get("Food"), Some(&Trend::Increasing));
    assert_eq!(report.trends.get("Transport"), Some(&Trend::Decreasing));
    assert_eq!(report.trends.get("Housing"), Some(&Trend::Stable));
}

#[test]
fn test_trend_matches_category_ignoring_case() {
    let session = sample_session(Config::default()).unwrap();
    let jan = month("2024-01");
    assert_eq!(session.trend("food", jan, EntryKind::Expenses), Trend::Increasing);
    assert_eq!(session.trend("SALARY", jan, EntryKind::Income), Trend::Stable);
    assert_eq!(session.trend("unknown", jan, EntryKind::Expenses), Trend::Stable);
}

#[test]
fn test_default_month() {
    let session = sample_session(Config::default()).unwrap();
    assert_eq!(session.default_month(), month("2024-01"));

    let before = Month::current();
    let empty_default = Session::default().default_month();
    let after = Month::current();
    assert!(empty_default == before || empty_default == after);
}

#[test]
fn test_export_uses_configured_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default().with_export_dir(dir.path());
    let session = sample_session(config).unwrap();
    assert_eq!(session.config().export_dir, dir.path());

    let path = session.export(month("2024-01")).unwrap();
    assert_eq!(path, dir.path().join("budget_summary_2024-01.txt"));
    let written = std::fs::read_to_string(path).unwrap();
    assert!(written.contains("Month: January 2024\n"));
    assert!(written.contains("Food: $30.00 over budget (107.5% of limit)\n"));
}

#[test]
fn test_sample_december_alerts() {
    let session = sample_session(Config::default()).unwrap();
    let report = session.report(month("2023-12"));
    let names: Vec<&str> = report.alerts.iter().map(|a| a.category.as_str()).collect();
    assert_eq!(names, vec!["Food", "Gifts"]);
}
