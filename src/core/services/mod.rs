pub mod crack_service;
