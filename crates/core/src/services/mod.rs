pub mod budget_service;
pub mod edit;
pub mod trip_service;
