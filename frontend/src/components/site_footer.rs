use chrono::{Datelike, Local};
use yew::prelude::*;

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <p>{ format!("\u{A9} {} TAJ HOTEL. All rights reserved.", year) }</p>
            <nav class="footer-links">
                <a href="#">{ "Help" }</a>
                <a href="#">{ "Contact" }</a>
                <a href="#">{ "Cookie Preferences" }</a>
            </nav>
        </footer>
    }
}
