//! Utilidades de validação
//!
//! Funções helper para validação de dados de domínio: volumes,
//! valores monetários, CNPJ/CPF, placas e formatos básicos.

use chrono::{DateTime, NaiveDate, Utc};
use lazy_static::lazy_static;
use num_traits::Zero;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use validator::ValidationError;

lazy_static! {
    // CNPJ com ou sem máscara: 12.345.678/0001-90 ou 12345678000190
    static ref CNPJ_RE: Regex =
        Regex::new(r"^\d{2}\.?\d{3}\.?\d{3}/?\d{4}-?\d{2}$").unwrap();
    // CPF com ou sem máscara
    static ref CPF_RE: Regex = Regex::new(r"^\d{3}\.?\d{3}\.?\d{3}-?\d{2}$").unwrap();
    // Placa brasileira: ABC-1234 ou padrão Mercosul ABC1D23
    static ref PLACA_RE: Regex =
        Regex::new(r"^[A-Za-z]{3}-?\d[A-Za-z0-9]\d{2}$").unwrap();
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// Validar que um volume (m³) seja um decimal estritamente positivo
pub fn validate_positive_volume(value: Decimal) -> Result<(), ValidationError> {
    if value <= Decimal::zero() {
        let mut error = ValidationError::new("positive_volume");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que uma taxa/valor monetário seja não negativo
pub fn validate_non_negative_amount(value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::zero() {
        let mut error = ValidationError::new("non_negative_amount");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que um string não esteja vazio
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de e-mail
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(value) {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de telefone (apenas quantidade de dígitos)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if !(10..=15).contains(&digits) {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar CNPJ ou CPF (formato, não dígito verificador)
pub fn validate_cpf_cnpj(value: &str) -> Result<(), ValidationError> {
    if !CNPJ_RE.is_match(value) && !CPF_RE.is_match(value) {
        let mut error = ValidationError::new("cpf_cnpj");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de placa de caminhão
pub fn validate_plate(value: &str) -> Result<(), ValidationError> {
    if !PLACA_RE.is_match(value) {
        let mut error = ValidationError::new("plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar e converter string para data (YYYY-MM-DD)
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar e converter string para datetime RFC3339
pub fn validate_datetime(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            let mut error = ValidationError::new("datetime");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"RFC3339".to_string());
            error
        })
}

/// Validar que um valor esteja em um intervalo
pub fn validate_range<T: PartialOrd + Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_volume() {
        assert!(validate_positive_volume(Decimal::from(5)).is_ok());
        assert!(validate_positive_volume("0.1".parse().unwrap()).is_ok());
        assert!(validate_positive_volume(Decimal::ZERO).is_err());
        assert!(validate_positive_volume(Decimal::from(-5)).is_err());
    }

    #[test]
    fn test_validate_non_negative_amount() {
        assert!(validate_non_negative_amount(Decimal::ZERO).is_ok());
        assert!(validate_non_negative_amount("80.50".parse().unwrap()).is_ok());
        assert!(validate_non_negative_amount(Decimal::from(-1)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("vendedor@concreteflow.com.br").is_ok());
        assert!(validate_email("sem-arroba").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("(11) 98765-4321").is_ok());
        assert!(validate_phone("123").is_err());
    }

    #[test]
    fn test_validate_cpf_cnpj() {
        assert!(validate_cpf_cnpj("12.345.678/0001-90").is_ok());
        assert!(validate_cpf_cnpj("12345678000190").is_ok());
        assert!(validate_cpf_cnpj("123.456.789-00").is_ok());
        assert!(validate_cpf_cnpj("12345").is_err());
    }

    #[test]
    fn test_validate_plate() {
        assert!(validate_plate("ABC-1234").is_ok());
        assert!(validate_plate("ABC1D23").is_ok());
        assert!(validate_plate("A1").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2025-10-01").is_ok());
        assert!(validate_date("01/10/2025").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range(5, 1, 10).is_ok());
        assert!(validate_range(0, 1, 10).is_err());
    }
}
