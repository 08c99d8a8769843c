pub mod dns;

pub use dns::{BuildResponseUseCase, QuestionResolver, Transaction, TransactionLog};
