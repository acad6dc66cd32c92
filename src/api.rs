use wasm_bindgen::JsCast;

use crate::models::*;

/// Backend base URL, overridable at compile time.
const API_BASE: &str = match option_env!("LIBRARY_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8762",
};

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Best-effort error text from a non-2xx response body: structured
/// `{"message": ...}` envelope, then the raw body, then a generic fallback.
fn extract_error_message(body: &str, fallback: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message {
            if !message.trim().is_empty() {
                return message;
            }
        }
    }
    if !body.trim().is_empty() {
        return body.trim().to_string();
    }
    fallback.to_string()
}

async fn read_error(resp: web_sys::Response, fallback: &str) -> String {
    let text = match resp.text() {
        Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    extract_error_message(&text, fallback)
}

async fn send(method: &str, url: &str, body: Option<String>) -> Result<web_sys::Response, String> {
    use web_sys::{RequestInit, RequestMode};

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    if let Some(b) = body {
        let body_js = wasm_bindgen::JsValue::from_str(&b);
        opts.set_body(&body_js);
        let headers = web_sys::Headers::new().map_err(|_| "Failed to create headers")?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|_| "Failed to set header")?;
        opts.set_headers(&headers);
    }

    let window = web_sys::window().ok_or("No window")?;
    let request =
        web_sys::Request::new_with_str_and_init(url, &opts).map_err(|_| "Failed to create request")?;

    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| "Fetch failed")?;

    resp_value.dyn_into().map_err(|_| "Invalid response".to_string())
}

/// JSON request expecting a JSON response.
async fn request<T: serde::de::DeserializeOwned>(
    method: &str,
    url: &str,
    body: Option<String>,
) -> Result<T, String> {
    let resp = send(method, url, body).await?;

    if !resp.ok() {
        return Err(read_error(resp, "Request failed").await);
    }

    let json = wasm_bindgen_futures::JsFuture::from(resp.json().map_err(|_| "Failed to get json")?)
        .await
        .map_err(|_| "Failed to parse json")?;

    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// JSON request where only the status matters (delete).
async fn request_no_content(method: &str, url: &str) -> Result<(), String> {
    let resp = send(method, url, None).await?;

    if !resp.ok() {
        return Err(read_error(resp, "Request failed").await);
    }

    Ok(())
}

// Users API

pub async fn get_users() -> Result<Vec<User>, String> {
    request("GET", &format!("{}/api/users", API_BASE), None).await
}

pub async fn get_user(id: i64) -> Result<User, String> {
    request("GET", &format!("{}/api/users/{}", API_BASE, id), None).await
}

pub async fn create_user(payload: UserPayload) -> Result<User, String> {
    let body = serde_json::to_string(&payload).map_err(|e| e.to_string())?;
    request("POST", &format!("{}/api/users", API_BASE), Some(body)).await
}

pub async fn update_user(id: i64, payload: UserPayload) -> Result<User, String> {
    let body = serde_json::to_string(&payload).map_err(|e| e.to_string())?;
    request("PUT", &format!("{}/api/users/{}", API_BASE, id), Some(body)).await
}

pub async fn delete_user(id: i64) -> Result<(), String> {
    request_no_content("DELETE", &format!("{}/api/users/{}", API_BASE, id)).await
}

// Books API

pub async fn get_books() -> Result<Vec<Book>, String> {
    request("GET", &format!("{}/api/books", API_BASE), None).await
}

pub async fn get_book(id: i64) -> Result<Book, String> {
    request("GET", &format!("{}/api/books/{}", API_BASE, id), None).await
}

pub async fn create_book(payload: BookPayload) -> Result<Book, String> {
    let body = serde_json::to_string(&payload).map_err(|e| e.to_string())?;
    request("POST", &format!("{}/api/books", API_BASE), Some(body)).await
}

pub async fn update_book(id: i64, payload: BookPayload) -> Result<Book, String> {
    let body = serde_json::to_string(&payload).map_err(|e| e.to_string())?;
    request("PUT", &format!("{}/api/books/{}", API_BASE, id), Some(body)).await
}

pub async fn delete_book(id: i64) -> Result<(), String> {
    request_no_content("DELETE", &format!("{}/api/books/{}", API_BASE, id)).await
}

// Loans API

pub async fn get_loans() -> Result<Vec<Loan>, String> {
    request("GET", &format!("{}/api/loans", API_BASE), None).await
}

pub async fn get_loan(id: i64) -> Result<Loan, String> {
    request("GET", &format!("{}/api/loans/{}", API_BASE, id), None).await
}

pub async fn get_active_loans() -> Result<Vec<Loan>, String> {
    request("GET", &format!("{}/api/loans/active", API_BASE), None).await
}

pub async fn get_overdue_loans() -> Result<Vec<Loan>, String> {
    request("GET", &format!("{}/api/loans/overdue", API_BASE), None).await
}

pub async fn get_loans_by_user(user_id: i64) -> Result<Vec<Loan>, String> {
    request("GET", &format!("{}/api/loans/user/{}", API_BASE, user_id), None).await
}

pub async fn get_loans_by_book(book_id: i64) -> Result<Vec<Loan>, String> {
    request("GET", &format!("{}/api/loans/book/{}", API_BASE, book_id), None).await
}

pub async fn create_loan(payload: CreateLoanPayload) -> Result<Loan, String> {
    let body = serde_json::to_string(&payload).map_err(|e| e.to_string())?;
    request("POST", &format!("{}/api/loans", API_BASE), Some(body)).await
}

pub async fn update_loan(id: i64, payload: UpdateLoanPayload) -> Result<Loan, String> {
    let body = serde_json::to_string(&payload).map_err(|e| e.to_string())?;
    request("PUT", &format!("{}/api/loans/{}", API_BASE, id), Some(body)).await
}

/// No body; the server computes the actual-return timestamp and status.
pub async fn return_loan(id: i64) -> Result<Loan, String> {
    request("PUT", &format!("{}/api/loans/{}/return", API_BASE, id), None).await
}

#[cfg(test)]
mod tests {
    use super::extract_error_message;

    #[test]
    fn error_message_from_json_envelope() {
        let body = r#"{"message":"No copies available for this book"}"#;
        assert_eq!(
            extract_error_message(body, "Request failed"),
            "No copies available for this book"
        );
    }

    #[test]
    fn error_message_falls_back_to_raw_text() {
        assert_eq!(
            extract_error_message("internal server error", "Request failed"),
            "internal server error"
        );
        // JSON without a usable message still falls through to the raw body.
        let body = r#"{"timestamp":"2024-01-01","status":500}"#;
        assert_eq!(extract_error_message(body, "Request failed"), body);
    }

    #[test]
    fn error_message_falls_back_to_generic() {
        assert_eq!(extract_error_message("", "Request failed"), "Request failed");
        assert_eq!(extract_error_message("  \n", "Request failed"), "Request failed");
    }
}
