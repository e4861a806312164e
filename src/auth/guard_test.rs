use super::*;

#[test]
fn loading_waits_without_redirecting() {
    assert_eq!(
        decide(AuthStatus::Loading, &[Role::Admin], "/add-student"),
        RouteDecision::Wait
    );
    assert_eq!(decide(AuthStatus::Loading, &[], "/course-management"), RouteDecision::Wait);
}

#[test]
fn anonymous_is_sent_to_login_with_origin() {
    assert_eq!(
        decide(AuthStatus::Anonymous, &[Role::Admin], "/add-student"),
        RouteDecision::Login {
            redirect: "/?from=/add-student".to_owned()
        }
    );
}

#[test]
fn anonymous_at_root_gets_plain_login_path() {
    assert_eq!(
        decide(AuthStatus::Anonymous, &[], "/"),
        RouteDecision::Login {
            redirect: "/".to_owned()
        }
    );
    assert_eq!(
        decide(AuthStatus::Anonymous, &[], ""),
        RouteDecision::Login {
            redirect: "/".to_owned()
        }
    );
}

#[test]
fn wrong_role_is_sent_to_its_own_dashboard() {
    assert_eq!(
        decide(
            AuthStatus::Authenticated(Role::Student),
            &[Role::Admin],
            "/teacher-management"
        ),
        RouteDecision::Home {
            path: "/Student-dashboard"
        }
    );
}

#[test]
fn matching_role_is_granted() {
    assert_eq!(
        decide(
            AuthStatus::Authenticated(Role::Admin),
            &[Role::Admin],
            "/Admin-dashboard"
        ),
        RouteDecision::Grant
    );
}

#[test]
fn empty_allow_list_admits_any_authenticated_role() {
    for role in [Role::Admin, Role::Teacher, Role::Student] {
        assert_eq!(
            decide(AuthStatus::Authenticated(role), &[], "/course-management"),
            RouteDecision::Grant
        );
    }
}

#[test]
fn allow_list_with_several_roles_admits_each() {
    let allowed = [Role::Admin, Role::Teacher];
    assert_eq!(
        decide(AuthStatus::Authenticated(Role::Teacher), &allowed, "/x"),
        RouteDecision::Grant
    );
    assert_eq!(
        decide(AuthStatus::Authenticated(Role::Student), &allowed, "/x"),
        RouteDecision::Home {
            path: "/Student-dashboard"
        }
    );
}
