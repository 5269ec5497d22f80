use serde::Deserialize;

/// One row of the hosted `users` table.
///
/// Only `Email` is rendered; `id` serves as the render-list key and carries
/// no other semantics. Kept under the server-side column spelling.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserRow {
    pub id: i64,
    #[serde(rename = "Email")]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_deserialize_in_received_order() {
        let body = r#"[{"id":1,"Email":"a@x.com"},{"id":2,"Email":"b@x.com"}]"#;

        let rows: Vec<UserRow> = serde_json::from_str(body).unwrap();

        assert_eq!(
            rows,
            vec![
                UserRow {
                    id: 1,
                    email: "a@x.com".into()
                },
                UserRow {
                    id: 2,
                    email: "b@x.com".into()
                },
            ]
        );
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let body = r#"[{"id":7,"Email":"c@x.com","created_at":"2024-01-01"}]"#;

        let rows: Vec<UserRow> = serde_json::from_str(body).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].email, "c@x.com");
    }
}
