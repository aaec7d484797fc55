pub mod dispatch;

mod activity;
mod analytics;
mod audit;
mod dashboard;
mod import;
mod pages;
mod proxy;
mod session;
mod shared;
