//! Test modules for bootstrapping

mod bus;
