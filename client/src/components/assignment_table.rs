//! Per-subject style table for the management page.
//!
//! Each row offers the whole style catalog; picking an entry reports
//! `(subject_id, style_id)` to the page, which owns the update call.

#[cfg(test)]
#[path = "assignment_table_test.rs"]
mod assignment_table_test;

use leptos::prelude::*;

use crate::net::types::{Style, SubjectStyleAssignment};

pub const ASSIGNMENT_ROW_MARKER: &str = "s5";

/// Style id currently selected in a row's picker.
fn current_style_id(assignment: &SubjectStyleAssignment) -> String {
    assignment.style.as_ref().map(|p| p.style_id.clone()).unwrap_or_default()
}

fn current_style_name(assignment: &SubjectStyleAssignment) -> String {
    assignment
        .style
        .as_ref()
        .map_or_else(|| "(none)".to_owned(), |p| p.style_name.clone())
}

#[component]
pub fn AssignmentTable(
    #[prop(into)] assignments: Signal<Vec<SubjectStyleAssignment>>,
    #[prop(into)] styles: Signal<Vec<Style>>,
    on_change: Callback<(String, String)>,
) -> impl IntoView {
    let rows = move || {
        let catalog = styles.get();
        assignments
            .get()
            .into_iter()
            .map(|assignment| {
                let subject_id = assignment.subject_id.clone();
                let selected = current_style_id(&assignment);
                let has_pointer = assignment.style.is_some();
                let options = catalog
                    .iter()
                    .map(|style| {
                        let is_selected = style.id == selected;
                        view! {
                            <option value=style.id.clone() selected=is_selected>
                                {style.name.clone()}
                            </option>
                        }
                    })
                    .collect_view();
                view! {
                    <tr class="assignment-row" data-style-id=ASSIGNMENT_ROW_MARKER>
                        <td>{assignment.subject_name.clone()}</td>
                        <td>{assignment.ui_element_class_name.clone()}</td>
                        <td>{assignment.description.clone().unwrap_or_default()}</td>
                        <td>{current_style_name(&assignment)}</td>
                        <td>
                            <select
                                class="assignment-row__style"
                                prop:value=selected.clone()
                                on:change=move |ev| on_change.run((subject_id.clone(), event_target_value(&ev)))
                            >
                                {(!has_pointer).then(|| view! { <option value="">"Select Style"</option> })}
                                {options}
                            </select>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Show
            when=move || assignments.with(|a| !a.is_empty())
            fallback=|| view! { <p class="empty-state">"No style configurations loaded."</p> }
        >
            <table class="assignment-table">
                <thead>
                    <tr>
                        <th>"Subject"</th>
                        <th>"Marker"</th>
                        <th>"Description"</th>
                        <th>"Current Style"</th>
                        <th>"Change"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </Show>
    }
}
