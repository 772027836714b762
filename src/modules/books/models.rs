use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Catalog record for a donated book.
///
/// Stored columns are English; the wire keys are Portuguese, so queries
/// alias columns to these field names.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    /// Identifier assigned by the store on insert
    pub id: i64,
    pub titulo: String,
    pub categoria: String,
    pub autor: String,
    pub imagem_url: String,
}

/// Request body for the donation endpoint.
///
/// Fields are optional at the serde layer so absent and `null` values reach
/// the presence check instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonateRequest {
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub autor: Option<String>,
    #[serde(default)]
    pub imagem_url: Option<String>,
}

/// Validated donation payload handed to the storage gateway.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub titulo: String,
    pub categoria: String,
    pub autor: String,
    pub imagem_url: String,
}

impl DonateRequest {
    /// Aggregated presence check: absent, `null`, and empty-string all fail.
    /// Returns the names of the offending fields on error.
    pub fn validate(self) -> Result<NewBook, Vec<&'static str>> {
        let missing: Vec<&'static str> = [
            ("titulo", &self.titulo),
            ("categoria", &self.categoria),
            ("autor", &self.autor),
            ("imagem_url", &self.imagem_url),
        ]
        .iter()
        .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            return Err(missing);
        }

        // Presence was just verified, the defaults are unreachable.
        Ok(NewBook {
            titulo: self.titulo.unwrap_or_default(),
            categoria: self.categoria.unwrap_or_default(),
            autor: self.autor.unwrap_or_default(),
            imagem_url: self.imagem_url.unwrap_or_default(),
        })
    }
}

/// Confirmation message body returned by mutating endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct Confirmation {
    pub mensagem: String,
}

impl Confirmation {
    pub fn new(mensagem: impl Into<String>) -> Self {
        Self {
            mensagem: mensagem.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> DonateRequest {
        DonateRequest {
            titulo: Some("Dune".to_string()),
            categoria: Some("Ficção".to_string()),
            autor: Some("Frank Herbert".to_string()),
            imagem_url: Some("http://x/1.jpg".to_string()),
        }
    }

    #[test]
    fn complete_payload_validates() {
        let book = full_request().validate().unwrap();
        assert_eq!(book.titulo, "Dune");
        assert_eq!(book.imagem_url, "http://x/1.jpg");
    }

    #[test]
    fn absent_field_is_reported() {
        let mut request = full_request();
        request.autor = None;

        assert_eq!(request.validate().unwrap_err(), vec!["autor"]);
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let mut request = full_request();
        request.titulo = Some(String::new());

        assert_eq!(request.validate().unwrap_err(), vec!["titulo"]);
    }

    #[test]
    fn every_missing_field_is_aggregated() {
        let missing = DonateRequest::default().validate().unwrap_err();
        assert_eq!(missing, vec!["titulo", "categoria", "autor", "imagem_url"]);
    }

    #[test]
    fn null_fields_deserialize_and_fail_validation() {
        let request: DonateRequest = serde_json::from_str(
            r#"{"titulo": null, "categoria": "Ficção", "autor": "Frank Herbert", "imagem_url": "http://x/1.jpg"}"#,
        )
        .unwrap();

        assert_eq!(request.validate().unwrap_err(), vec!["titulo"]);
    }

    #[test]
    fn book_serializes_with_wire_keys() {
        let book = Book {
            id: 1,
            titulo: "Dune".to_string(),
            categoria: "Ficção".to_string(),
            autor: "Frank Herbert".to_string(),
            imagem_url: "http://x/1.jpg".to_string(),
        };

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["titulo"], "Dune");
        assert_eq!(value["imagem_url"], "http://x/1.jpg");
    }
}
