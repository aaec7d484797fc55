//! Bulk user import endpoint.

use crate::{ApiClient, error::ApiError, http::check_response};

impl ApiClient {
    /// Upload a CSV file of users as a single multipart POST.
    ///
    /// The backend replies with one result message per row, returned
    /// wholesale. There is no chunking or resumability; a failed upload is
    /// simply retried by the operator.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn import_users(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Vec<String>, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let url = self.endpoint("/v1/import/users");
        let resp = check_response(self.http.post(&url).multipart(form).send().await?).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_per_row_result_messages() {
        let body = r#"[
            "Row 1: created user ada",
            "Row 2: created user grace",
            "Row 3: skipped duplicate username 'ada'"
        ]"#;
        let results: Vec<String> = serde_json::from_str(body).expect("body should parse");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], "Row 1: created user ada");
        assert!(results[2].contains("duplicate"));
    }
}
