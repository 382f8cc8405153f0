use thiserror::Error;

/// Errors raised while building or querying a [`StoreTable`](super::StoreTable)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreTableError {
    #[error("store list has no column named '{column}'")]
    MissingColumn { column: String },

    #[error("workbook contains no worksheets")]
    EmptyWorkbook,
}

impl StoreTableError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        StoreTableError::MissingColumn {
            column: column.into(),
        }
    }
}
