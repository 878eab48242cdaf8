mod account;
mod listing;
mod user;
