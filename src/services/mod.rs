// Service module exports

pub mod clock;
pub mod countdown;
pub mod display;
pub mod notification;
pub mod scheduler;
pub mod settings;
