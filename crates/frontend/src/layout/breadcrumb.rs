use leptos::prelude::*;
use leptos_router::hooks::use_location;

fn page_title(path: &str) -> &'static str {
    match path {
        "/" => "홈",
        "/wreath" => "화환 신청",
        "/supplies" => "사무용품 신청",
        "/vehicle" => "법인차량 예약",
        "/business-card" => "명함 신청",
        "/document" => "법인 문서 발급",
        "/facility" => "고장 신고",
        "/manuals" => "업무 매뉴얼",
        "/inquiry" => "문의하기",
        "/my-requests" => "내 신청 내역",
        "/profile" => "프로필",
        "/settings" => "설정",
        "/admin" => "관리자 홈",
        "/admin/approvals" => "승인 관리",
        "/admin/users" => "사용자 관리",
        "/admin/manuals" => "매뉴얼 관리",
        "/admin/faqs" => "FAQ 관리",
        _ => "페이지를 찾을 수 없습니다",
    }
}

#[component]
pub fn Breadcrumb() -> impl IntoView {
    let location = use_location();
    let current = move || page_title(&location.pathname.get());
    let in_admin = move || location.pathname.get().starts_with("/admin");

    view! {
        <nav class="breadcrumb">
            <span class="breadcrumb__root">"C&W 인트라넷"</span>
            <Show when=in_admin>
                <span class="breadcrumb__sep">"/"</span>
                <span>"관리자"</span>
            </Show>
            <span class="breadcrumb__sep">"/"</span>
            <span class="breadcrumb__current">{current}</span>
        </nav>
    }
}
