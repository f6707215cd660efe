//! Monthly analysis: totals, expense bar chart, budget alerts and spending
//! trends, composed into a printable [`Report`].

mod alerts;
mod chart;
mod compose;
mod summary;
mod trend;

pub(crate) use chart::{BarChart, PercentOf};
pub(crate) use compose::{compose, Report};
pub(crate) use summary::{summarize, Summary};
pub(crate) use trend::{trend, trend_window, Trend};
