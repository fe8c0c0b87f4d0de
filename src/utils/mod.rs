pub mod cpf;
pub mod password;
pub mod session;
pub mod time;
