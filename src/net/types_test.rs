use super::*;

#[test]
fn project_decodes_server_casing() {
    let json = r#"{"ID":7,"Name":"Website","Description":"Marketing site","CreatedAt":"2024-01-01T00:00:00Z"}"#;
    let project: Project = serde_json::from_str(json).expect("project json");
    assert_eq!(project.id, 7);
    assert_eq!(project.name, "Website");
    assert_eq!(project.description, "Marketing site");
}

#[test]
fn project_description_defaults_when_missing() {
    let json = r#"{"ID":1,"Name":"Bare"}"#;
    let project: Project = serde_json::from_str(json).expect("project json");
    assert_eq!(project.description, "");
}

#[test]
fn task_decodes_server_casing() {
    let json = r#"{"ID":3,"Title":"Ship it","Description":"","ProjectId":7}"#;
    let task: Task = serde_json::from_str(json).expect("task json");
    assert_eq!(task.id, 3);
    assert_eq!(task.title, "Ship it");
}
