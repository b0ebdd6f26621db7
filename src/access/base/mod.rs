pub mod policy;
pub mod role;
pub mod scope;
