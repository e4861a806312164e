use super::*;

#[test]
fn role_names_round_trip() {
    for role in [Role::Admin, Role::Teacher, Role::Student] {
        assert_eq!(Role::from_name(role.as_str()), Some(role));
    }
}

#[test]
fn unknown_role_name_is_rejected() {
    assert_eq!(Role::from_name("Superuser"), None);
    assert_eq!(Role::from_name("admin"), None);
    assert_eq!(Role::from_name(""), None);
}

#[test]
fn login_codes_match_backend() {
    assert_eq!(Role::Admin.login_code(), "1");
    assert_eq!(Role::Teacher.login_code(), "2");
    assert_eq!(Role::Student.login_code(), "3");
}

#[test]
fn dashboard_paths_are_per_role() {
    assert_eq!(Role::Admin.dashboard_path(), "/Admin-dashboard");
    assert_eq!(Role::Teacher.dashboard_path(), "/Teacher-dashboard");
    assert_eq!(Role::Student.dashboard_path(), "/Student-dashboard");
}
