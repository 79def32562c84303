pub mod auth;
pub mod cliente;
pub mod common;
pub mod entrenador;
pub mod pago;
pub mod plan;
pub mod sistema;
