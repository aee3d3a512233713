pub mod selection_strategy;
pub mod truncation;

pub use selection_strategy::SelectionStrategy;
pub use truncation::TruncationSelection;
