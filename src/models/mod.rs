mod budget;
mod ledger;
mod month;

pub use budget::BudgetTable;
pub use ledger::{Amounts, EntryKind, Ledger};
pub use month::Month;
