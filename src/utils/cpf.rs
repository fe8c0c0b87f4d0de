use crate::types::error::AppError;

pub const CPF_LEN: usize = 11;

/// Keeps only ASCII digits, so "123.456.789-00" becomes "12345678900".
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn normalize_cpf(input: &str) -> Result<String, AppError> {
    let cpf = digits_only(input);
    if cpf.len() != CPF_LEN {
        return Err(AppError::Validation(format!(
            "CPF must have {CPF_LEN} digits, got {}",
            cpf.len()
        )));
    }
    Ok(cpf)
}
