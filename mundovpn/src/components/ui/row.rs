use dioxus::prelude::*;

#[component]
pub fn SecurityRow(
    label: String,
    description: String,
    icon: Element,
    checked: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: "p-4 flex items-center justify-between hover:bg-gray-800/20 transition-colors",
            div { class: "flex items-center gap-4",
                div {
                    class: "p-2 rounded-xl",
                    class: if checked { "bg-blue-600/20 text-blue-400" } else { "bg-gray-800 text-gray-500" },
                    {icon}
                }
                div {
                    p { class: "text-sm font-bold", "{label}" }
                    p { class: "text-[10px] text-gray-500", "{description}" }
                }
            }
            button {
                class: "w-10 h-5 rounded-full relative transition-colors shrink-0",
                class: if checked { "bg-blue-600" } else { "bg-gray-700" },
                onclick: move |e| onclick.call(e),
                div {
                    class: "absolute top-1 w-3 h-3 bg-white rounded-full transition-all",
                    class: if checked { "right-1" } else { "left-1" },
                }
            }
        }
    }
}

#[component]
pub fn SectionTitle(label: String, icon: Element) -> Element {
    rsx! {
        h3 { class: "text-sm font-bold text-gray-400 uppercase tracking-widest flex items-center gap-2",
            {icon}
            "{label}"
        }
    }
}

#[component]
pub fn StatTile(label: String, value: String, icon: Element) -> Element {
    rsx! {
        div { class: "bg-gray-800/40 p-3 rounded-2xl flex flex-col items-center",
            {icon}
            span { class: "text-[10px] text-gray-500 uppercase font-bold", "{label}" }
            span { class: "text-xs font-mono font-bold", "{value}" }
        }
    }
}
