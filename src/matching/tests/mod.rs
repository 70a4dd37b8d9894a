mod common;
mod learning;
mod strategy;
