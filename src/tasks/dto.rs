use serde::Deserialize;
use time::OffsetDateTime;

/// Request body for task creation. `timeofentry` defaults to the server
/// clock when absent; the flags default to false.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub task: String,
    #[serde(default, rename = "type")]
    pub task_type: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub timeofentry: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub remindertime: Option<OffsetDateTime>,
    #[serde(default)]
    pub completestatus: bool,
    #[serde(default)]
    pub currentstatus: bool,
}

/// Request body for the status-transition routes. Both flags are
/// overwritten unconditionally.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    #[serde(default)]
    pub completestatus: bool,
    #[serde(default)]
    pub currentstatus: bool,
}

/// Request body for content edits. A missing `editedtype` overwrites the
/// stored type with an empty string.
#[derive(Debug, Deserialize)]
pub struct EditTaskRequest {
    #[serde(default)]
    pub editedtask: String,
    #[serde(default)]
    pub editedtype: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_minimal_body() {
        let req: CreateTaskRequest = serde_json::from_str(
            r#"{"task":"water plants","type":"home","remindertime":"2026-09-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(req.task, "water plants");
        assert_eq!(req.task_type, "home");
        assert!(req.timeofentry.is_none());
        assert!(req.remindertime.is_some());
        assert!(!req.completestatus);
        assert!(!req.currentstatus);
    }

    #[test]
    fn edit_request_type_may_be_absent() {
        let req: EditTaskRequest = serde_json::from_str(r#"{"editedtask":"new text"}"#).unwrap();
        assert_eq!(req.editedtask, "new text");
        assert!(req.editedtype.is_none());
    }

    #[test]
    fn status_request_reads_both_flags() {
        let req: SetStatusRequest =
            serde_json::from_str(r#"{"completestatus":true,"currentstatus":false}"#).unwrap();
        assert!(req.completestatus);
        assert!(!req.currentstatus);
    }
}
