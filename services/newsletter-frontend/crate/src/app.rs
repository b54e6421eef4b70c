use yew::prelude::*;

use crate::components::banner::NewsletterBanner;
use crate::theme::ThemeProvider;

#[function_component(Main)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <div class="bg-white w-screen flex items-center justify-center h-[100vh] dark:bg-black">
                <NewsletterBanner />
            </div>
        </ThemeProvider>
    }
}
