use crate::layout::global_context::use_portal;
use crate::shared::components::ui::{Button, Textarea};
use crate::shared::components::PageHeader;
use crate::shared::format::format_krw;
use crate::shared::icons::icon;
use crate::shared::list_utils::{CategoryPills, SearchInput};
use crate::shared::toast::use_toast;
use contracts::domain::a001_request::ServiceKind;
use contracts::domain::a002_supply::{Cart, CartLine, SupplyItem};
use contracts::seed;
use contracts::shared::filter_list;
use leptos::prelude::*;
use leptos_router::components::A;

fn cart_title(cart: &Cart) -> String {
    match cart.lines.as_slice() {
        [] => String::new(),
        [only] => format!("{} {}개", only.name, only.qty),
        [first, rest @ ..] => {
            format!("{} {}개 외 {}건", first.name, first.qty, rest.len())
        }
    }
}

/// Ticket title for the submitted cart; urgent requests are flagged so the
/// approval queue can spot them.
fn request_title(cart: &Cart, urgent: bool) -> String {
    let base = cart_title(cart);
    if urgent {
        format!("[긴급] {base}")
    } else {
        base
    }
}

/// Catalog on the left, running cart on the right.
#[component]
pub fn SuppliesRequestPage() -> impl IntoView {
    let portal = use_portal();
    let toasts = use_toast();

    let catalog = StoredValue::new(seed::supply_items());
    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal("전체".to_string());
    let cart = RwSignal::new(Cart::new());
    let (purpose, set_purpose) = signal(String::new());
    let (urgent, set_urgent) = signal(false);
    let (submitted_id, set_submitted_id) = signal(None::<String>);

    let filtered = move || {
        catalog.with_value(|items| {
            filter_list(items, &search.get(), &category.get(), "전체", |i| {
                i.category.clone()
            })
        })
    };

    let submit = move |_| {
        let snapshot = cart.get_untracked();
        if snapshot.is_empty() {
            toasts.error("장바구니가 비어 있습니다.");
            return;
        }
        let title = request_title(&snapshot, urgent.get_untracked());
        let id = portal.submit_request(ServiceKind::Supplies, &title);
        set_submitted_id.set(Some(id));
    };

    let restart = move |_| {
        cart.set(Cart::new());
        set_purpose.set(String::new());
        set_urgent.set(false);
        set_submitted_id.set(None);
    };

    view! {
        <div class="page">
            <PageHeader title="사무용품 신청" subtitle="필요한 품목을 장바구니에 담아 신청합니다" />

            <Show when=move || submitted_id.get().is_some()>
                <div class="card done">
                    <span class="done__icon">{icon("check-circle")}</span>
                    <h2>"구입 요청이 완료되었습니다!"</h2>
                    <p class="done__id">{move || submitted_id.get().unwrap_or_default()}</p>
                    <p>"승인 결과는 알림으로 안내됩니다."</p>
                    <div class="form__actions">
                        <A href="/my-requests" attr:class="button button--primary">"신청 현황"</A>
                        <Button variant="secondary" on_click=Callback::new(restart)>
                            "새 요청"
                        </Button>
                    </div>
                </div>
            </Show>

            <Show when=move || submitted_id.get().is_none()>
            <div class="supplies">
                <div class="supplies__catalog">
                    <div class="list-toolbar">
                        <SearchInput
                            value=search
                            on_input=Callback::new(move |v: String| set_search.set(v))
                            placeholder="품목 검색"
                        />
                        <CategoryPills
                            categories=Signal::derive(|| seed::supply_categories())
                            selected=category
                            on_select=Callback::new(move |v: String| set_category.set(v))
                        />
                    </div>
                    <div class="supply-grid">
                        <For
                            each=filtered
                            key=|i| i.id.clone()
                            children=move |item: SupplyItem| {
                                let add_item = item.clone();
                                view! {
                                    <div class="supply-card">
                                        <span class="supply-card__category">{item.category.clone()}</span>
                                        <h3 class="supply-card__name">{item.name.clone()}</h3>
                                        <p class="supply-card__price">
                                            {format_krw(item.price as u64)}
                                        </p>
                                        <div class="supply-card__footer">
                                            <a
                                                class="supply-card__link"
                                                href=item.external_url.clone()
                                                target="_blank"
                                                rel="noreferrer"
                                            >
                                                {icon("external-link")}
                                                {item.supplier.clone()}
                                            </a>
                                            <Button
                                                size="sm"
                                                on_click=Callback::new(move |_| {
                                                    cart.update(|c| c.add(&add_item));
                                                })
                                            >
                                                "담기"
                                            </Button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>

                <aside class="cart card">
                    <h2 class="card__title">
                        {icon("cart")}
                        " 장바구니"
                    </h2>
                    <For
                        each=move || cart.get().lines
                        key=|l| (l.id.clone(), l.qty)
                        children=move |line: CartLine| {
                            let dec_id = line.id.clone();
                            let inc_id = line.id.clone();
                            let remove_id = line.id.clone();
                            view! {
                                <div class="cart__line">
                                    <div class="cart__info">
                                        <span class="cart__name">{line.name.clone()}</span>
                                        <span class="cart__price">
                                            {format_krw(line.line_total())}
                                        </span>
                                    </div>
                                    <div class="cart__controls">
                                        <button
                                            class="cart__qty-button"
                                            on:click=move |_| {
                                                cart.update(|c| c.bump_qty(&dec_id, -1))
                                            }
                                        >
                                            "−"
                                        </button>
                                        <span class="cart__qty">{line.qty}</span>
                                        <button
                                            class="cart__qty-button"
                                            on:click=move |_| {
                                                cart.update(|c| c.bump_qty(&inc_id, 1))
                                            }
                                        >
                                            "+"
                                        </button>
                                        <button
                                            class="cart__remove"
                                            on:click=move |_| {
                                                cart.update(|c| c.remove(&remove_id))
                                            }
                                        >
                                            {icon("trash")}
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                    <Show when=move || cart.with(|c| c.is_empty())>
                        <p class="empty">"담긴 품목이 없습니다."</p>
                    </Show>
                    <div class="cart__total">
                        <span>"합계"</span>
                        <strong>{move || cart.with(|c| format_krw(c.total()))}</strong>
                    </div>
                    <Textarea
                        label="사용 목적 (선택)"
                        value=purpose
                        rows=2
                        placeholder="예: 2월 팀 비품 보충"
                        on_input=Callback::new(move |v: String| set_purpose.set(v))
                    />
                    <label class="form__check">
                        <input
                            type="checkbox"
                            prop:checked=move || urgent.get()
                            on:change=move |_| set_urgent.update(|u| *u = !*u)
                        />
                        <span>"긴급 요청 (우선 처리)"</span>
                    </label>
                    <Button
                        class="cart__submit"
                        disabled=Signal::derive(move || cart.with(|c| c.is_empty()))
                        on_click=Callback::new(submit)
                    >
                        "신청하기"
                    </Button>
                </aside>
            </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{cart_title, request_title};
    use contracts::domain::a002_supply::{Cart, SupplyItem};

    fn item(id: &str, name: &str) -> SupplyItem {
        SupplyItem {
            id: id.into(),
            name: name.into(),
            category: "기타".into(),
            external_url: String::new(),
            supplier: "오피스 디포".into(),
            price: 1_000,
        }
    }

    #[test]
    fn title_reflects_cart_shape() {
        let mut cart = Cart::new();
        assert_eq!(cart_title(&cart), "");

        cart.add(&item("s1", "A4 용지 (박스)"));
        cart.add(&item("s1", "A4 용지 (박스)"));
        assert_eq!(cart_title(&cart), "A4 용지 (박스) 2개");

        cart.add(&item("s2", "볼펜 (흑색)"));
        cart.add(&item("s9", "스테이플러"));
        assert_eq!(cart_title(&cart), "A4 용지 (박스) 2개 외 2건");
    }

    #[test]
    fn urgent_requests_are_flagged_in_the_title() {
        let mut cart = Cart::new();
        cart.add(&item("s1", "A4 용지 (박스)"));
        assert_eq!(request_title(&cart, false), "A4 용지 (박스) 1개");
        assert_eq!(request_title(&cart, true), "[긴급] A4 용지 (박스) 1개");
    }
}
