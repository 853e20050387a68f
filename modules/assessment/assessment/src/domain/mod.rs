pub mod aggregator;
pub mod calculators;
pub mod error;
pub mod lead_gate;
pub mod numbers;
pub mod page;
pub mod repo;
pub mod service;
pub mod theme;
pub mod widget;
