pub mod discord;
pub mod p4;
