use shared::{CountryCode, FormAction, SignInMode};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IdentifierFieldProps {
    pub mode: SignInMode,
    pub email: AttrValue,
    pub phone: AttrValue,
    pub country_code: CountryCode,
    pub on_action: Callback<FormAction>,
}

/// Email input, or country code plus phone input, depending on the mode.
#[function_component(IdentifierField)]
pub fn identifier_field(props: &IdentifierFieldProps) -> Html {
    match props.mode {
        SignInMode::Email => {
            let on_input = {
                let on_action = props.on_action.clone();
                Callback::from(move |e: InputEvent| {
                    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                        on_action.emit(FormAction::SetEmail(input.value()));
                    }
                })
            };

            html! {
                <div class="form-group">
                    <label for="email">{ "Email address" }</label>
                    <div class="input-with-icon">
                        <span class="input-icon" aria-hidden="true">{ "\u{2709}" }</span>
                        <input
                            id="email"
                            type="email"
                            placeholder="you@example.com"
                            value={props.email.clone()}
                            oninput={on_input}
                            autocomplete="email"
                            required=true
                        />
                    </div>
                </div>
            }
        }
        SignInMode::Phone => {
            let on_country_change = {
                let on_action = props.on_action.clone();
                Callback::from(move |e: Event| {
                    let Some(select) = e.target_dyn_into::<HtmlSelectElement>() else {
                        return;
                    };
                    match select.value().parse::<CountryCode>() {
                        Ok(code) => on_action.emit(FormAction::SetCountryCode(code)),
                        Err(err) => log::warn!("{}", err),
                    }
                })
            };

            let on_input = {
                let on_action = props.on_action.clone();
                Callback::from(move |e: InputEvent| {
                    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                        on_action.emit(FormAction::SetPhone(input.value()));
                    }
                })
            };

            html! {
                <div class="form-group">
                    <label for="phone">{ "Mobile number" }</label>
                    <div class="phone-row">
                        <select class="country-code" aria-label="Country code" onchange={on_country_change}>
                            { for CountryCode::all().iter().map(|code| html! {
                                <option value={code.as_str()} selected={*code == props.country_code}>
                                    { code.as_str() }
                                </option>
                            })}
                        </select>
                        <div class="input-with-icon grow">
                            <span class="input-icon" aria-hidden="true">{ "\u{260E}" }</span>
                            <input
                                id="phone"
                                type="tel"
                                inputmode="tel"
                                placeholder="98765 43210"
                                value={props.phone.clone()}
                                oninput={on_input}
                                autocomplete="tel"
                                required=true
                            />
                        </div>
                    </div>
                </div>
            }
        }
    }
}
