pub mod arithmetic;
pub mod history;

pub use history::HistoryStore;
