mod build_response;
mod resolve_question;

pub use build_response::{BuildResponseUseCase, Transaction, TransactionLog};
pub use resolve_question::QuestionResolver;
