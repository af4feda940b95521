pub mod dashboard;
pub mod descriptor;
pub mod forecast;
pub mod raw;
