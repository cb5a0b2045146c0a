/*! Filtering utilities

Filters decide which articles are left out of the dataset.
They never delete files: a rejected article is added to the [crate::corpus::Blacklist], together with its pair.

Filters implement [filter::Filter], [filter::FilterMut] or both:
- [filter::Filter] is implemented for filters that do not have state (see [TokenBudget])
- [filter::FilterMut] is implemented for filters that do have state (see [Duplicates]).
! */
mod duplicate;
mod filter;
mod length;

pub use duplicate::{remove_duplicates, Duplicates, PAGE_NOT_FOUND};
pub use filter::Filter;
pub use filter::FilterMut;
pub use length::{check_token_budget, TokenBudget, DEFAULT_TOKEN_BUDGET};
