use crate::layout::global_context::PortalContext;
use crate::layout::Shell;
use crate::shared::toast::ToastService;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    // Single store for the whole session, shared via context.
    provide_context(PortalContext::new());
    provide_context(ToastService::new());

    view! {
        <Router>
            <Routes fallback=NotFound>
                <ParentRoute path=path!("") view=Shell>
                    <Route path=path!("") view=crate::dashboards::d001_home::view::HomeDashboard />
                    <Route path=path!("wreath") view=crate::usecases::u101_wreath::view::WreathRequestPage />
                    <Route path=path!("supplies") view=crate::usecases::u102_supplies::view::SuppliesRequestPage />
                    <Route path=path!("vehicle") view=crate::usecases::u103_vehicle::view::VehicleRequestPage />
                    <Route path=path!("business-card") view=crate::usecases::u104_business_card::view::BusinessCardPage />
                    <Route path=path!("document") view=crate::usecases::u105_document::view::DocumentRequestPage />
                    <Route path=path!("facility") view=crate::usecases::u106_facility::view::FacilityReportPage />
                    <Route path=path!("manuals") view=crate::domain::a004_manual::ui::page::ManualsPage />
                    <Route path=path!("inquiry") view=crate::domain::a004_manual::ui::page::ManualsPage />
                    <Route path=path!("my-requests") view=crate::domain::a001_request::ui::list::MyRequestsPage />
                    <Route path=path!("profile") view=crate::system::pages::profile::ProfilePage />
                    <Route path=path!("settings") view=crate::system::pages::settings::SettingsPage />
                    <Route path=path!("admin") view=crate::dashboards::d002_admin::view::AdminDashboard />
                    <Route path=path!("admin/approvals") view=crate::domain::a001_request::ui::approvals::ApprovalManagementPage />
                    <Route path=path!("admin/users") view=crate::system::users::ui::UserManagementPage />
                    <Route path=path!("admin/manuals") view=crate::domain::a004_manual::ui::manage::ManualManagementPage />
                    <Route path=path!("admin/faqs") view=crate::domain::a005_faq::ui::manage::FaqManagementPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"페이지를 찾을 수 없습니다."</p>
        </div>
    }
}
