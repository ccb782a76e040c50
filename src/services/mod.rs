pub mod badge;
pub mod reconcile;
pub mod selector;
