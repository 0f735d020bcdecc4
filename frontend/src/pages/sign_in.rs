use gloo_timers::callback::Timeout;
use shared::{FormAction, Login, Notice, SignInMode, SubmissionMachine, SubmitOutcome, SubmitPhase};
use yew::prelude::*;

use crate::components::hero_panel::HeroPanel;
use crate::components::identifier_field::IdentifierField;
use crate::components::mode_tabs::ModeTabs;
use crate::components::password_field::PasswordField;
use crate::components::site_footer::SiteFooter;
use crate::config;
use crate::notify::notify;
use crate::state::FormModel;

#[function_component(SignIn)]
pub fn sign_in() -> Html {
    let config = use_memo((), |_| config::from_build_env());
    let form = use_reducer(FormModel::default);
    let machine = use_mut_ref(SubmissionMachine::default);
    let phase = use_state(SubmitPhase::default);
    // Dropping the Timeout clears it, so the completion never fires once
    // the page is gone.
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let machine = machine.clone();
        let pending = pending.clone();
        use_effect_with((), move |_| {
            move || {
                if pending.borrow_mut().take().is_some() {
                    log::debug!("Sign-in page unmounted, dropping pending submit timer");
                }
                machine.borrow_mut().cancel();
            }
        });
    }

    let on_action = {
        let form = form.clone();
        Callback::from(move |action: FormAction| form.dispatch(action))
    };

    let on_select_mode = {
        let form = form.clone();
        Callback::from(move |mode: SignInMode| form.dispatch(FormAction::SelectMode(mode)))
    };

    let on_remember_change = {
        let form = form.clone();
        Callback::from(move |_: Event| form.dispatch(FormAction::ToggleRememberMe))
    };

    let on_submit = {
        let form = form.clone();
        let machine = machine.clone();
        let phase = phase.clone();
        let pending = pending.clone();
        let config = config.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let outcome = machine.borrow_mut().submit(&form.state, &config.rules);
            match outcome {
                SubmitOutcome::Rejected(err) => {
                    log::info!("Sign-in rejected: {}", err);
                    notify(&Notice::Error(err));
                }
                SubmitOutcome::Ignored => {
                    log::debug!("Sign-in already in progress, ignoring submit");
                }
                SubmitOutcome::Started {
                    ticket,
                    credentials,
                } => {
                    match &credentials.login {
                        Login::Email(_) => log::info!("Signing in with email"),
                        Login::Phone { country_code, .. } => {
                            log::info!("Signing in with phone ({})", country_code)
                        }
                    }
                    log::debug!("Remember me: {}", credentials.remember_me);
                    phase.set(SubmitPhase::Submitting);

                    let machine = machine.clone();
                    let phase = phase.clone();
                    // Stand-in for the real request; it always succeeds.
                    let timeout = Timeout::new(config.submit_delay_ms, move || {
                        let notice = machine.borrow_mut().complete(ticket);
                        phase.set(machine.borrow().phase());
                        match notice {
                            Some(notice) => notify(&notice),
                            None => log::debug!("Stale sign-in completion dropped"),
                        }
                    });
                    *pending.borrow_mut() = Some(timeout);
                }
            }
        })
    };

    let on_get_otp = {
        let machine = machine.clone();
        Callback::from(move |_: MouseEvent| {
            let notice = machine.borrow().request_otp();
            notify(&notice);
        })
    };

    let state = &form.state;
    let submitting = *phase == SubmitPhase::Submitting;

    html! {
        <div class="page">
            <div class="page-grid">
                <HeroPanel />

                <main class="signin-main">
                    <div class="card">
                        <div class="card-header">
                            <h2 class="card-title">{ "Member Sign In" }</h2>
                            <p class="card-subtitle">
                                { "Sign in to your " }
                                <span class="strong">{ "TAJ HOTEL" }</span>
                                { " membership." }
                            </p>
                        </div>

                        <ModeTabs mode={state.mode} on_select={on_select_mode} />

                        <form class="signin-form" onsubmit={on_submit}>
                            <IdentifierField
                                mode={state.mode}
                                email={AttrValue::from(state.email.clone())}
                                phone={AttrValue::from(state.phone.clone())}
                                country_code={state.country_code}
                                on_action={on_action.clone()}
                            />

                            <PasswordField
                                password={AttrValue::from(state.password.clone())}
                                input_type={state.password_input_type()}
                                toggle_label={state.password_toggle_label()}
                                visible={state.password_visible}
                                on_action={on_action}
                            />

                            <div class="form-row">
                                <label class="remember">
                                    <input
                                        id="remember"
                                        type="checkbox"
                                        checked={state.remember_me}
                                        onchange={on_remember_change}
                                    />
                                    { "Remember me" }
                                </label>
                                <button type="button" class="link-button">
                                    { "Forgot password?" }
                                </button>
                            </div>

                            <button type="submit" class="btn btn-primary btn-full" disabled={submitting}>
                                { if submitting { "Signing in\u{2026}" } else { "Sign In \u{2192}" } }
                            </button>

                            <div class="divider">{ "Or" }</div>

                            <button type="button" class="btn btn-outline btn-full" onclick={on_get_otp}>
                                { "Get OTP" }
                            </button>

                            <p class="legal">
                                { "By continuing you agree to the " }
                                <a href="#">{ "Terms" }</a>
                                { " and " }
                                <a href="#">{ "Privacy Policy" }</a>
                                { "." }
                            </p>
                        </form>

                        <div class="card-footer">
                            { "New to TAJ HOTEL? " }
                            <a href="#" class="strong">{ "Create an account" }</a>
                        </div>
                    </div>
                </main>
            </div>

            <SiteFooter />
        </div>
    }
}
