use crate::algebra::Membership;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`SparseColMatrix`](crate::algebra::SparseColMatrix)
///
/// Settings are normally assembled with the generated builder:
///
/// ```
/// use lpsparse::algebra::*;
///
/// let settings = MatrixSettingsBuilder::default()
///     .verbose(true)
///     .default_membership(Membership::RowsAndCols)
///     .build()
///     .unwrap();
/// assert!(settings.verbose);
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatrixSettings {
    ///print a summary line on every compressed column export
    #[builder(default = "false")]
    pub verbose: bool,

    ///membership checks applied by `insert`
    #[builder(default = "Membership::Unchecked")]
    pub default_membership: Membership,

    ///number of entries to reserve in the entry store at construction
    #[builder(default = "0")]
    pub nnz_hint: usize,
}

impl Default for MatrixSettings {
    fn default() -> MatrixSettings {
        MatrixSettingsBuilder::default().build().unwrap()
    }
}

#[test]
fn test_settings_defaults() {
    let settings = MatrixSettings::default();
    assert!(!settings.verbose);
    assert_eq!(settings.default_membership, Membership::Unchecked);
    assert_eq!(settings.nnz_hint, 0);

    let settings = MatrixSettingsBuilder::default()
        .nnz_hint(16)
        .build()
        .unwrap();
    assert_eq!(settings.nnz_hint, 16);
    assert!(!settings.verbose);
}
