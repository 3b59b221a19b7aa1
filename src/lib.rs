//! Positional line comparison of two text files with XML reports.

pub mod compare;
pub mod input;
pub mod model;
pub mod naming;
pub mod remote;
pub mod report;
pub mod storage;
pub mod xml;
