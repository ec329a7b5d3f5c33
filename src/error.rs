use thiserror::Error as ThisError;

use crate::db::store::StoreError;
use crate::draft::session::{DraftError, PickError};
use crate::series::SeriesError;
use crate::team::{roles::BalanceError, split::SplitError};
use crate::tiebreak::TiebreakError;

/// Error type to wrap the component errors that will often be a possibility
/// in tandem inside a command handler: a pick can fail while the series
/// lookup behind it does too.
///
/// This is to avoid repetitive verbose error handling for each type by
/// facilitating/enabling the use of the `?` operator on [`Result`] returns.
/// Every variant is recoverable: reject the user's action, keep the session.
#[derive(ThisError, Debug)]
pub enum InhouseError {
    #[error(transparent)]
    Split(#[from] SplitError),
    #[error(transparent)]
    Balance(#[from] BalanceError),
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Pick(#[from] PickError),
    #[error(transparent)]
    Tiebreak(#[from] TiebreakError),
    #[error(transparent)]
    Series(#[from] SeriesError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Error = InhouseError;
