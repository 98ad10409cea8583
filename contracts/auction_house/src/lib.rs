#![no_std]

mod auction_house;
mod contract;
mod controller;
pub mod errors;
mod events;
mod interfaces;
mod msg;
mod storage;

#[cfg(test)]
mod tests;
