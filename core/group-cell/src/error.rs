//! FILENAME: core/group-cell/src/error.rs

use row_tree::TreeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupCellError {
    #[error("Row tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Expression error: {0}")]
    Expression(String),

    #[error("Unknown cell renderer: {0}")]
    UnknownRenderer(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
