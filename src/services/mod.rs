pub mod profiles;
pub mod ranker;
pub mod recommendations;
pub mod scorer;
