//! Job application form: cleaning, validation and the submitted payload.

use listing::sanitize;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use url::Url;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{7,12}$").unwrap());

/// Raw form fields as submitted.
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    pub nombre: String,
    pub email: String,
    pub vacante: String,
    pub telefono: String,
    pub mensaje: String,
    /// Honeypot; humans leave it empty.
    pub empresa: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplicationError {
    #[error("Error de validación.")]
    Honeypot,
    #[error("Por favor completa los campos obligatorios.")]
    MissingRequired,
    #[error("Ingresa un correo válido.")]
    InvalidEmail,
    #[error("El teléfono debe tener entre 7 y 12 dígitos.")]
    InvalidPhone,
}

/// A validated application, ready to send.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Application {
    pub nombre: String,
    pub email: String,
    pub vacante: String,
    pub telefono: String,
    pub mensaje: String,
    pub ua: String,
    pub tz: String,
}

impl ApplicationForm {
    pub fn validate(&self, tz: &str) -> Result<Application, ApplicationError> {
        if !self.empresa.is_empty() {
            return Err(ApplicationError::Honeypot);
        }

        let nombre = sanitize(&self.nombre);
        let email = sanitize(&self.email);
        let vacante = sanitize(&self.vacante);
        let telefono = sanitize(&self.telefono);
        let mensaje = sanitize(&self.mensaje);

        if nombre.is_empty() || email.is_empty() || vacante.is_empty() {
            return Err(ApplicationError::MissingRequired);
        }
        if !EMAIL.is_match(&email) {
            return Err(ApplicationError::InvalidEmail);
        }
        if !telefono.is_empty() && !PHONE.is_match(&telefono) {
            return Err(ApplicationError::InvalidPhone);
        }

        Ok(Application {
            nombre,
            email,
            vacante,
            telefono,
            mensaje,
            ua: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            tz: tz.to_string(),
        })
    }
}

/// Shown to the applicant whenever a submission does not go through.
pub const SUBMIT_FAILED: &str = "No se pudo enviar. Intenta más tarde.";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("endpoint answered {0}")]
    Status(reqwest::StatusCode),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl Application {
    /// POST the application as JSON to `endpoint`. One attempt, no retry.
    pub async fn submit(
        &self,
        client: &reqwest::Client,
        endpoint: &Url,
    ) -> Result<(), SubmitError> {
        let response = client.post(endpoint.clone()).json(self).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status));
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{local_client, one_shot_server};
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn form() -> ApplicationForm {
        ApplicationForm {
            nombre: "  Ana <b>Gómez</b> ".to_string(),
            email: "ana@example.co".to_string(),
            vacante: "Vivero".to_string(),
            ..Default::default()
        }
    }

    #[rstest]
    fn test_valid_application_is_cleaned(form: ApplicationForm) {
        let app = form.validate("America/Bogota").unwrap();
        assert_eq!(app.nombre, "Ana bGómez/b");
        assert_eq!(app.tz, "America/Bogota");
        assert!(app.telefono.is_empty());
    }

    #[rstest]
    fn test_honeypot_rejects(mut form: ApplicationForm) {
        form.empresa = "ACME".to_string();
        assert_eq!(form.validate("UTC"), Err(ApplicationError::Honeypot));
    }

    #[rstest]
    #[case("", "ana@example.co", "Vivero")]
    #[case("Ana", "   ", "Vivero")]
    #[case("Ana", "ana@example.co", "<>")]
    fn test_required_fields(
        #[case] nombre: &str,
        #[case] email: &str,
        #[case] vacante: &str,
    ) {
        let form = ApplicationForm {
            nombre: nombre.to_string(),
            email: email.to_string(),
            vacante: vacante.to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate("UTC"), Err(ApplicationError::MissingRequired));
    }

    #[rstest]
    #[case("ana")]
    #[case("ana@example")]
    #[case("ana @example.co")]
    #[case("@example.co")]
    fn test_invalid_email(mut form: ApplicationForm, #[case] email: &str) {
        form.email = email.to_string();
        assert_eq!(form.validate("UTC"), Err(ApplicationError::InvalidEmail));
    }

    #[rstest]
    #[case("123456", false)]
    #[case("1234567", true)]
    #[case("123456789012", true)]
    #[case("1234567890123", false)]
    #[case("300-123-4567", false)]
    fn test_phone(mut form: ApplicationForm, #[case] telefono: &str, #[case] ok: bool) {
        form.telefono = telefono.to_string();
        let result = form.validate("UTC");
        if ok {
            assert!(result.is_ok());
        } else {
            assert_eq!(result, Err(ApplicationError::InvalidPhone));
        }
    }

    #[tokio::test]
    async fn test_submit_posts_json() {
        let (endpoint, server) = one_shot_server("200 OK").await;
        let app = form().validate("America/Bogota").unwrap();

        app.submit(&local_client(), &endpoint).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /postulaciones HTTP/1.1"));
        assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
        assert!(request.contains(r#""vacante":"Vivero""#));
        assert!(request.contains(r#""tz":"America/Bogota""#));
    }

    #[rstest]
    #[case("404 Not Found", 404)]
    #[case("503 Service Unavailable", 503)]
    #[tokio::test]
    async fn test_submit_maps_error_status(#[case] status: &'static str, #[case] code: u16) {
        let (endpoint, server) = one_shot_server(status).await;
        let app = form().validate("UTC").unwrap();

        let err = app.submit(&local_client(), &endpoint).await.unwrap_err();
        assert!(matches!(err, SubmitError::Status(s) if s.as_u16() == code));
        server.await.unwrap();
    }
}
