pub mod assignment;
pub mod call;
pub mod document;
pub mod expression;
pub mod function;
pub mod import;
pub mod member;
pub mod new_expression;
pub mod statement;
