// Utility exports

pub mod date;
