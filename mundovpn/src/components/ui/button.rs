use crate::icons::ChevronLeft;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn BackButton(to: Route) -> Element {
    let nav = use_navigator();
    rsx! {
        button {
            class: "p-2 hover:bg-gray-800 rounded-full transition-colors active:scale-90",
            onclick: move |_| {
                nav.push(to.clone());
            },
            ChevronLeft { size: 20, class: Some("text-gray-400".to_string()) }
        }
    }
}

#[component]
pub fn ActionTile(
    label: String,
    icon: Element,
    #[props(default)] danger: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: "flex-1 glass p-4 rounded-2xl flex flex-col items-center gap-2 transition-colors active:scale-95",
            class: if danger { "text-red-400 hover:text-red-300" } else { "text-gray-400 hover:text-white" },
            onclick: move |e| onclick.call(e),
            {icon}
            span { class: "text-[10px] font-bold uppercase", "{label}" }
        }
    }
}
