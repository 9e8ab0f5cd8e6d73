pub mod calc;
pub mod repl;
