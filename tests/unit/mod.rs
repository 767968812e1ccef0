mod auth;
mod distance;
mod plan;
mod workout;
