use leptos::prelude::*;

/// Observatory brand mark. The embedded label is the Arabic name of the
/// Ministry of Transport and Logistic Services.
#[component]
pub fn ObservatoryLogo(#[prop(default = 40)] size: u32) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 200 200"
            width=size
            height=size
            class="brand-logo"
            aria-hidden="true"
        >
            <circle cx="100" cy="100" r="90" fill="#00685E"/>
            <path d="M50,120 L150,120 L100,40 Z" fill="#8BAA99"/>
            <text x="50" y="170" font-family="DIN Next Lt Arabic Regular" font-size="20" fill="#101820">
                "وزارة النقل والخدمات اللوجستية"
            </text>
        </svg>
    }
}
