//! Root application component: context providers, startup session check,
//! and the route table.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::context::Auth;
use crate::auth::guard::RequireAuth;
use crate::auth::role::Role;
use crate::auth::session::BrowserStore;
use crate::pages::{
    add_student::AddStudentPage, admin_dashboard::AdminDashboardPage,
    course_management::CourseManagementPage, login::LoginPage, not_found::NotFoundPage,
    student_dashboard::StudentDashboardPage, teacher_dashboard::TeacherDashboardPage,
    teacher_management::TeacherManagementPage,
};

/// Root component. Provides the auth context and sets up routing; every
/// route except the login entry sits behind [`RequireAuth`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = Auth::new(Arc::new(BrowserStore));
    provide_context(auth.clone());

    // Startup check runs after mount; guards render their wait state until
    // it has resolved the persisted session.
    Effect::new(move || auth.restore());

    view! {
        <Stylesheet id="leptos" href="/classpulse.css"/>
        <Title text="ClassPulse"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route
                    path=StaticSegment("Admin-dashboard")
                    view=|| view! {
                        <RequireAuth roles=vec![Role::Admin]>
                            <AdminDashboardPage/>
                        </RequireAuth>
                    }
                />
                <Route
                    path=StaticSegment("Teacher-dashboard")
                    view=|| view! {
                        <RequireAuth roles=vec![Role::Teacher]>
                            <TeacherDashboardPage/>
                        </RequireAuth>
                    }
                />
                <Route
                    path=StaticSegment("Student-dashboard")
                    view=|| view! {
                        <RequireAuth roles=vec![Role::Student]>
                            <StudentDashboardPage/>
                        </RequireAuth>
                    }
                />
                // Any authenticated role may browse courses.
                <Route
                    path=StaticSegment("course-management")
                    view=|| view! {
                        <RequireAuth>
                            <CourseManagementPage/>
                        </RequireAuth>
                    }
                />
                <Route
                    path=StaticSegment("add-student")
                    view=|| view! {
                        <RequireAuth roles=vec![Role::Admin]>
                            <AddStudentPage/>
                        </RequireAuth>
                    }
                />
                <Route
                    path=StaticSegment("teacher-management")
                    view=|| view! {
                        <RequireAuth roles=vec![Role::Admin]>
                            <TeacherManagementPage/>
                        </RequireAuth>
                    }
                />
            </Routes>
        </Router>
    }
}
