use super::*;

#[test]
fn exact_path_is_active() {
    assert!(is_active("/admin/users", ADMIN_USERS_PATH));
    assert!(is_active("/admin/users/", ADMIN_USERS_PATH));
}

#[test]
fn nested_path_is_active() {
    assert!(is_active("/admin/consults/12", ADMIN_CONSULTS_PATH));
}

#[test]
fn sibling_and_prefix_paths_are_inactive() {
    assert!(!is_active("/admin/dashboard", ADMIN_USERS_PATH));
    assert!(!is_active("/admin/usersettings", ADMIN_USERS_PATH));
}

#[test]
fn links_cover_admin_views_in_order() {
    let labels: Vec<&str> = ADMIN_LINKS.iter().map(|(_, label)| *label).collect();
    assert_eq!(labels, ["Dashboard", "Users", "Consults"]);
}
