pub mod report;
pub mod selftest;
pub mod table;
