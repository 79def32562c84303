pub mod auth;
pub mod clientes;
pub mod dashboard;
pub mod entrenadores;
pub mod pagos;
pub mod planes;
pub mod sistemas;
