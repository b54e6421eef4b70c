use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlInputElement, Request, RequestInit, RequestMode, Response};
use yew::prelude::*;

use newsletter_common::signup::SignupRequest;

use crate::components::selector::Selector;
use crate::components::FetchError;
use crate::domain::regions;
use crate::form::{EmailValidation, SignupForm, SubmitOutcome, SUBMIT_FAILED};
use crate::theme::ThemeContext;

const SIGNUP_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// This function takes the signup request assembled from the form fields and
/// puts it on the wire. Only the response status matters to the caller; the
/// body is never read.
async fn post_signup(url: &str, request: &SignupRequest) -> Result<u16, FetchError> {
    let body = serde_json::to_string(request)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::new("Could not build a request"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| FetchError::new("Could not set header"))?;

    let window = gloo::utils::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| FetchError::new("Could not fetch response"))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| FetchError::new("Could not cast response"))?;

    Ok(resp.status())
}

pub enum Msg {
    EmailEdited(String),
    EmailBlurred,
    CountrySelected(String),
    ProvinceSelected(String),
    SubmitRequested,
    SubmitFinished(SubmitOutcome),
    ThemeChanged(ThemeContext),
}

pub struct NewsletterBanner {
    form: SignupForm,
    theme: ThemeContext,
    _theme_listener: ContextHandle<ThemeContext>,
}

impl Component for NewsletterBanner {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (theme, listener) = ctx
            .link()
            .context(ctx.link().callback(Msg::ThemeChanged))
            .expect("no theme context found");
        Self {
            form: SignupForm::new(),
            theme,
            _theme_listener: listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::EmailEdited(text) => {
                self.form.edit_email(text);
                true
            }
            Msg::EmailBlurred => {
                self.form.blur_email();
                true
            }
            Msg::CountrySelected(country) => {
                self.form.select_country(country);
                true
            }
            Msg::ProvinceSelected(province) => {
                self.form.select_province(province);
                true
            }
            Msg::SubmitRequested => {
                if let Some(request) = self.form.begin_submit() {
                    ctx.link().send_future(async move {
                        match post_signup(SIGNUP_URL, &request).await {
                            Ok(status) => Msg::SubmitFinished(SubmitOutcome::Responded(status)),
                            Err(err) => {
                                // Diagnostics only, the user gets the fixed
                                // retry message.
                                gloo_console::error!("signup request failed:", err.to_string());
                                Msg::SubmitFinished(SubmitOutcome::TransportFailed)
                            }
                        }
                    });
                }
                true
            }
            Msg::SubmitFinished(outcome) => {
                self.form.finish_submit(outcome);
                true
            }
            Msg::ThemeChanged(theme) => {
                self.theme = theme;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle_theme = self.theme.toggle.reform(|_: MouseEvent| ());

        html! {
            <div class="w-full p-2 max-w-[500px] flex flex-col">
                <div class="w-full flex justify-between items-center mb-2">
                    <img
                        src="/images/logo.webp"
                        alt="newsletter logo"
                        class="w-full max-w-[200px] mb-2"
                    />
                    <div
                        class="w-fit bg-black dark:bg-white text-white dark:text-black font-bold py-2 px-4 rounded-[8px] cursor-pointer"
                        onclick={toggle_theme}
                    >
                        { self.theme.theme.as_str() }
                    </div>
                </div>

                <div class="flex flex-col gap-2 w-full">
                    <h2 class="text-black text-xl md:text-2xl font-[800] dark:text-white">
                        {"Sign up"}<br/>{"for our newsletter"}
                    </h2>
                    <p class="text-black text-sm md:text-md dark:text-white mb-5">
                        {"Keep up to date on the latest in R&D tax credits and innovation funding."}
                    </p>
                    {
                        if self.form.succeeded() {
                            self.view_confirmation()
                        } else {
                            self.view_form(ctx)
                        }
                    }
                </div>
            </div>
        }
    }
}

impl NewsletterBanner {
    fn view_confirmation(&self) -> Html {
        html! {
            <h2 class="text-black text-md md:text-lg font-[800] dark:text-white">
                {"Success! Thank you for your subscription."}
            </h2>
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let oninput = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::EmailEdited(input.value())
        });
        let onblur = link.callback(|_: FocusEvent| Msg::EmailBlurred);
        let on_country = link.callback(Msg::CountrySelected);
        let on_province = link.callback(Msg::ProvinceSelected);
        let on_submit = link.callback(|_: MouseEvent| Msg::SubmitRequested);

        let submit_class = classes!(
            "w-fit",
            "bg-black",
            "dark:bg-white",
            "text-white",
            "dark:text-black",
            "font-bold",
            "py-2",
            "px-4",
            "rounded-[8px]",
            "mt-5",
            if self.form.submit_disabled() { "cursor-not-allowed" } else { "cursor-pointer" },
        );

        html! {
            <>
                <div class="w-full relative">
                    <input
                        type="email"
                        placeholder="Enter your email"
                        class="p-2 border border-gray-300 bg-white rounded-md w-full transition-all active:outline-none active:border-black focus:outline-none focus:border-black dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        value={self.form.email().to_string()}
                        {oninput}
                        {onblur}
                    />
                    {
                        if self.form.email_validation() == EmailValidation::Valid {
                            html! {
                                <img src="/images/check.svg" alt="check-icon" class="absolute right-2 top-3" />
                            }
                        } else if self.form.email_error().is_some() {
                            html! {
                                <img src="/images/error.svg" alt="error-icon" class="absolute right-2 top-3.5" />
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                if let Some(message) = self.form.email_error() {
                    <p class="text-red-500 text-xs md:text-sm">{ message }</p>
                }

                <Selector
                    value={self.form.country().to_string()}
                    on_select={on_country}
                    options={regions::COUNTRIES.iter().map(|c| c.to_string()).collect::<Vec<_>>()}
                    placeholder="Select your country"
                    class={classes!("mt-3")}
                />
                if let Some(message) = self.form.country_error() {
                    <p class="text-red-500 text-xs md:text-sm">{ message }</p>
                }

                if let Some(options) = self.form.province_options() {
                    <Selector
                        value={self.form.province().to_string()}
                        on_select={on_province}
                        options={options.iter().map(|p| p.to_string()).collect::<Vec<_>>()}
                        placeholder="Select your province/state"
                        class={classes!("mt-3")}
                    />
                }

                <button
                    type="submit"
                    class={submit_class}
                    disabled={self.form.submit_disabled()}
                    onclick={on_submit}
                >
                    {
                        if self.form.submitting() {
                            html! {
                                <img
                                    src={format!("/images/spinner-{}.svg", self.theme.theme.as_str())}
                                    alt="spinner-icon"
                                />
                            }
                        } else {
                            html! { {"SUBMIT"} }
                        }
                    }
                </button>

                if self.form.submit_failed() {
                    <p class="text-red-500 text-xs md:text-sm">{ SUBMIT_FAILED }</p>
                }
            </>
        }
    }
}
