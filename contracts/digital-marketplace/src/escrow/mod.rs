mod balance;
mod sponsor;
mod views;
