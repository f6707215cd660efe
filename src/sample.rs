use rust_decimal::Decimal;

use crate::config::Config;
use crate::error::Result;
use crate::models::Month;
use crate::session::Session;

struct MonthSeed {
    month: &'static str,
    income: &'static [(&'static str, i64)],
    expenses: &'static [(&'static str, i64)],
    budgets: &'static [(&'static str, i64)],
}

/// Four months ending in January 2024. Repeated categories in one month are
/// separate entries that accumulate.
const SEEDS: &[MonthSeed] = &[
    MonthSeed {
        month: "2023-10",
        income: &[("salary", 3200)],
        expenses: &[("Food", 350), ("Transport", 240), ("Housing", 800)],
        budgets: &[("Food", 400), ("Transport", 250)],
    },
    MonthSeed {
        month: "2023-11",
        income: &[("salary", 3200)],
        expenses: &[("Food", 380), ("Transport", 210), ("Housing", 800)],
        budgets: &[("Food", 400), ("Transport", 250)],
    },
    MonthSeed {
        month: "2023-12",
        income: &[("salary", 3200), ("bonus", 500)],
        expenses: &[
            ("Food", 300),
            ("Food", 160),
            ("Transport", 230),
            ("Housing", 800),
            ("Gifts", 150),
        ],
        budgets: &[("Food", 400), ("Gifts", 100)],
    },
    MonthSeed {
        month: "2024-01",
        income: &[("salary", 3200)],
        expenses: &[
            ("Food", 250),
            ("Food", 180),
            ("Transport", 200),
            ("Housing", 800),
        ],
        budgets: &[("Food", 400), ("Transport", 220), ("Housing", 850)],
    },
];

pub(crate) fn sample_session(config: Config) -> Result<Session> {
    let mut session = Session::new(config);
    for seed in SEEDS {
        let month: Month = seed.month.parse()?;
        for &(category, amount) in seed.income {
            session.add_income(month, category, Decimal::from(amount))?;
        }
        for &(category, amount) in seed.expenses {
            session.add_expense(month, category, Decimal::from(amount))?;
        }
        for &(category, limit) in seed.budgets {
            session.set_budget(month, category, Decimal::from(limit))?;
        }
    }
    Ok(session)
}
