pub mod players;
pub mod report;
pub mod speak;
