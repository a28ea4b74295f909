//! Filter button row for one facet

use dioxus::prelude::*;

use crate::state::{Facet, FacetValue};

#[derive(Props, Clone, PartialEq)]
pub struct FacetBarProps {
    /// Button labels, `All` first
    pub labels: Vec<&'static str>,
    /// Index of the active button
    pub selected: usize,
    pub on_select: EventHandler<usize>,
    /// Classes for the active button
    #[props(default = "bg-blue-800 text-yellow-400 font-semibold")]
    pub active_class: &'static str,
}

#[component]
pub fn FacetBar(props: FacetBarProps) -> Element {
    let on_select = props.on_select;
    let buttons: Vec<(usize, &'static str, String)> = props
        .labels
        .iter()
        .copied()
        .enumerate()
        .map(|(index, label)| {
            let state = if index == props.selected {
                props.active_class
            } else {
                "bg-white border hover:bg-gray-50"
            };
            (index, label, format!("px-4 py-2 rounded whitespace-nowrap {}", state))
        })
        .collect();

    rsx! {
        div {
            class: "flex gap-2 overflow-x-auto",
            for (index, label, class) in buttons {
                button {
                    key: "{label}",
                    class: "{class}",
                    onclick: move |_| on_select.call(index),
                    "{label}"
                }
            }
        }
    }
}

/// Labels and active index for rendering a facet with `FacetBar`.
pub fn facet_buttons<T: FacetValue>(selected: Facet<T>) -> (Vec<&'static str>, usize) {
    let choices = Facet::<T>::choices();
    let index = choices
        .iter()
        .position(|facet| *facet == selected)
        .unwrap_or(0);
    (choices.iter().map(Facet::label).collect(), index)
}

/// Facet behind the button at `index`, falling back to `All`.
pub fn facet_at<T: FacetValue>(index: usize) -> Facet<T> {
    Facet::<T>::choices()
        .get(index)
        .copied()
        .unwrap_or_default()
}
