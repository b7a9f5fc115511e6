use super::*;

#[test]
fn test_display_joins_app_and_name() {
    let id = MigrationId::new("shop", "0003_create_order");
    assert_eq!(id.to_string(), "shop.0003_create_order");
}

#[test]
fn test_equality_is_structural() {
    assert_eq!(
        MigrationId::new("shop", "0001_initial"),
        MigrationId::new("shop", "0001_initial")
    );
    assert_ne!(
        MigrationId::new("shop", "0001_initial"),
        MigrationId::new("crm", "0001_initial")
    );
}

#[test]
fn test_serializes_as_struct() {
    let id = MigrationId::new("crm", "0042_add_notes");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, r#"{"app":"crm","name":"0042_add_notes"}"#);
}
