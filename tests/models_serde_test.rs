use library_console::models::*;

#[test]
fn loan_status_uses_wire_labels() {
    assert_eq!(
        serde_json::to_string(&LoanStatus::Ongoing).unwrap(),
        "\"ONGOING\""
    );
    assert_eq!(
        serde_json::to_string(&LoanStatus::Returned).unwrap(),
        "\"RETURNED\""
    );
    assert_eq!(
        serde_json::to_string(&LoanStatus::Overdue).unwrap(),
        "\"OVERDUE\""
    );

    let status: LoanStatus = serde_json::from_str("\"OVERDUE\"").unwrap();
    assert_eq!(status, LoanStatus::Overdue);
}

#[test]
fn loan_deserializes_camel_case_wire_format() {
    let json = r#"{
        "id": 7,
        "userId": 3,
        "bookId": 12,
        "borrowDate": "2024-01-10T00:00:00",
        "dueDate": "2024-01-24T00:00:00",
        "returnDate": null,
        "status": "ONGOING"
    }"#;
    let loan: Loan = serde_json::from_str(json).unwrap();
    assert_eq!(loan.id, 7);
    assert_eq!(loan.user_id, 3);
    assert_eq!(loan.book_id, 12);
    assert_eq!(loan.return_date, None);
    assert_eq!(loan.status, LoanStatus::Ongoing);
}

#[test]
fn returned_loan_carries_actual_return_date() {
    let json = r#"{
        "id": 8,
        "userId": 3,
        "bookId": 12,
        "borrowDate": "2024-01-10T00:00:00",
        "dueDate": "2024-01-24T00:00:00",
        "returnDate": "2024-01-20T09:15:00",
        "status": "RETURNED"
    }"#;
    let loan: Loan = serde_json::from_str(json).unwrap();
    assert_eq!(loan.return_date.as_deref(), Some("2024-01-20T09:15:00"));
    assert_eq!(loan.status, LoanStatus::Returned);
}

#[test]
fn update_loan_payload_omits_absent_fields() {
    let payload = UpdateLoanPayload {
        borrow_date: Some("2024-01-10T00:00:00".to_string()),
        duration_days: Some(14),
        ..Default::default()
    };
    let json = serde_json::to_string(&payload).unwrap();
    assert!(json.contains("\"borrowDate\":\"2024-01-10T00:00:00\""));
    assert!(json.contains("\"durationDays\":14"));
    assert!(!json.contains("userId"));
    assert!(!json.contains("bookId"));
}

#[test]
fn create_loan_payload_sends_only_the_two_references() {
    let payload = CreateLoanPayload {
        user_id: 3,
        book_id: 12,
    };
    let json = serde_json::to_string(&payload).unwrap();
    assert_eq!(json, r#"{"userId":3,"bookId":12}"#);
}

#[test]
fn book_round_trips_quantities() {
    let book = Book {
        id: 1,
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        category: "SCIENCE_FICTION".to_string(),
        isbn: "978-0441013593".to_string(),
        total_quantity: 5,
        available_quantity: 3,
        borrowed_quantity: 2,
    };
    let json = serde_json::to_string(&book).unwrap();
    assert!(json.contains("\"totalQuantity\":5"));
    assert!(json.contains("\"availableQuantity\":3"));
    assert!(json.contains("\"borrowedQuantity\":2"));
    let back: Book = serde_json::from_str(&json).unwrap();
    assert_eq!(back, book);
}

#[test]
fn user_payload_has_no_id_field() {
    let payload = UserPayload {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        address: "12 Analytical Row".to_string(),
        phone: "+44 20 0000 0000".to_string(),
    };
    let json = serde_json::to_string(&payload).unwrap();
    assert!(!json.contains("\"id\""));
    assert!(json.contains("\"email\":\"ada@example.com\""));
}

#[test]
fn category_labels_cover_the_fixed_set() {
    assert_eq!(BOOK_CATEGORIES.len(), 7);
    assert_eq!(category_label("NOVEL"), "Novel");
    assert_eq!(category_label("SCIENCE_FICTION"), "Science fiction");
    // Unknown values fall back to the raw wire string.
    assert_eq!(category_label("POETRY"), "POETRY");
}
