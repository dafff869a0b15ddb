//! Wire contracts shared by the browser front end and the gateway.

pub mod usecases;
