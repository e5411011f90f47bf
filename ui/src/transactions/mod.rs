//! New-transaction form: category options that follow the selected type, and
//! client-side validation mirroring the server's form constraints.

pub mod form;
pub mod view;

pub use form::{
    CategoryOption, Field, FieldError, TransactionDraft, TransactionType, ValidTransaction,
};
pub use view::TransactionFormView;
