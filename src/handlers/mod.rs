pub mod command;
pub mod demo;
pub mod department;
pub mod employee;
