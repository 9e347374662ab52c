pub mod email;
pub mod output;
