pub mod account;
pub mod application;
pub mod company;
pub mod resume;
pub mod specialty;
pub mod vacancy;
