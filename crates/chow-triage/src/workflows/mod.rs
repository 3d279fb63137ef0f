pub mod chow;
