use super::*;

#[test]
fn recipes_endpoint_is_the_collection_path() {
    assert_eq!(RECIPES_ENDPOINT, "/api/recipes");
}

#[test]
fn recipe_endpoint_formats_expected_path() {
    assert_eq!(recipe_endpoint("r123"), "/api/recipes/r123");
}

#[test]
fn save_failed_message_formats_status() {
    assert_eq!(save_failed_message(500), "save failed: 500");
    assert_eq!(save_failed_message(403), "save failed: 403");
}
