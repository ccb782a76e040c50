pub mod identities;
pub mod solved_sets;
