use yew::prelude::*;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?q=80&w=1920&auto=format&fit=crop";

const BENEFITS: &[&str] = &[
    "Member rates & bonus nights",
    "Late checkout upon availability",
    "Dining & spa savings across properties",
];

#[function_component(HeroPanel)]
pub fn hero_panel() -> Html {
    html! {
        <aside class="hero">
            <img class="hero-image" src={HERO_IMAGE} alt="TAJ HOTEL lobby" />
            <div class="hero-shade" />

            <div class="hero-content">
                <div>
                    <div class="brand">
                        <div class="brand-mark" aria-hidden="true">{ "\u{1F310}" }</div>
                        <div>
                            <p class="brand-eyebrow">{ "WELCOME TO" }</p>
                            <h1 class="brand-name">{ "TAJ HOTEL" }</h1>
                        </div>
                    </div>
                    <p class="hero-copy">
                        { "Discover timeless hospitality and member-only privileges. Earn points on every stay, \
                           unlock exclusive rates, and access complimentary upgrades." }
                    </p>
                </div>

                <ul class="benefits">
                    { for BENEFITS.iter().map(|b| html! {
                        <li class="benefit">
                            <span class="benefit-dot" />
                            { *b }
                        </li>
                    })}
                </ul>
            </div>
        </aside>
    }
}
