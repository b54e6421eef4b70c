use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A labeled, clickable list of mutually exclusive options. The parent owns
/// the selected value; the selector only reports picks through `on_select`.
/// Options double as keys, so they must be unique.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: String,
    pub placeholder: String,
    pub options: Vec<String>,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub class: Classes,
}

pub enum Msg {
    Toggle,
    Select(String),
    Dismiss,
}

pub struct Selector {
    open: bool,
    node: NodeRef,
    // Document level registrations, dropped (and thereby unsubscribed) with
    // the component.
    outside_listeners: Vec<EventListener>,
}

impl Component for Selector {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            node: NodeRef::default(),
            outside_listeners: Vec::new(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            // Close on any pointer interaction landing outside the rendered
            // bounds, whatever the current state.
            self.outside_listeners = ["mousedown", "touchstart"]
                .into_iter()
                .map(|event| self.listen_outside(ctx, event))
                .collect();
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle => {
                self.open = !self.open;
                true
            }
            Msg::Select(option) => {
                ctx.props().on_select.emit(option);
                self.open = false;
                true
            }
            Msg::Dismiss => {
                let was_open = self.open;
                self.open = false;
                was_open
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let toggle = ctx.link().callback(|_: MouseEvent| Msg::Toggle);

        let header_class = classes!(
            "border",
            "rounded-lg",
            "shadow-sm",
            "bg-white",
            "cursor-pointer",
            "p-2",
            "flex",
            "justify-between",
            "items-center",
            "transition-all",
            "dark:bg-gray-700",
            "dark:border-gray-600",
            "dark:text-white",
            if self.open { "border-black" } else { "border-gray-300" },
        );

        html! {
            <div ref={self.node.clone()} class={classes!("relative", "w-full", props.class.clone())}>
                <div class={header_class} onclick={toggle}>
                    <span class={if props.value.is_empty() { "text-gray-400" } else { "text-black" }}>
                        {
                            if props.value.is_empty() {
                                props.placeholder.as_str()
                            } else {
                                props.value.as_str()
                            }
                        }
                    </span>
                    <img
                        class={classes!("w-2", "h-2", "transition-transform", self.open.then_some("rotate-180"))}
                        src="/images/arrow.svg"
                    />
                </div>
                if self.open {
                    <div class="absolute z-10 mt-2 w-full rounded-lg shadow-lg bg-white">
                        <ul class="max-h-[20vh] md:max-h-[25vh] overflow-auto rounded-lg">
                            {
                                for props.options.iter().map(|option| {
                                    let select = {
                                        let option = option.clone();
                                        ctx.link().callback(move |_: MouseEvent| Msg::Select(option.clone()))
                                    };
                                    html! {
                                        <li
                                            key={option.clone()}
                                            class="p-2 cursor-pointer transition-all hover:bg-gray-100"
                                            onclick={select}
                                        >
                                            { option.as_str() }
                                        </li>
                                    }
                                })
                            }
                        </ul>
                    </div>
                }
            </div>
        }
    }
}

impl Selector {
    fn listen_outside(&self, ctx: &Context<Self>, event: &'static str) -> EventListener {
        let link = ctx.link().clone();
        let node = self.node.clone();
        EventListener::new(&gloo::utils::document(), event, move |event| {
            let inside = node
                .cast::<web_sys::Node>()
                .zip(event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()))
                .map(|(el, target)| el.contains(Some(&target)))
                .unwrap_or(false);
            if !inside {
                link.send_message(Msg::Dismiss);
            }
        })
    }
}
