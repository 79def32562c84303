pub mod cliente;
pub mod entrenador;
pub mod pago;
pub mod plan;
pub mod sistema;
pub mod usuario;
