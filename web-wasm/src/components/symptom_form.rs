//! Symptom intake form component.
//!
//! Submission is blocked until age, weight, and a non-empty symptom
//! description are all present; the bottle photo is optional.

use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::app::{form_is_valid, Submission};

#[component]
pub fn SymptomForm<F>(on_submit: F) -> impl IntoView
where
    F: Fn(Submission) + 'static + Copy,
{
    let (age, set_age) = signal(String::new());
    let (weight, set_weight) = signal(String::new());
    let (symptoms, set_symptoms) = signal(String::new());
    // The picked file is DOM-local and never crosses threads
    let image = RwSignal::new_local(None::<web_sys::File>);
    let (image_name, set_image_name) = signal(None::<String>);

    let is_valid = move || form_is_valid(&age.get(), &weight.get(), &symptoms.get());

    let on_file_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        set_image_name.set(file.as_ref().map(|f| f.name()));
        image.set(file);
    };

    let on_click = move |_| {
        // The button is disabled while invalid; re-check anyway
        if !is_valid() {
            return;
        }
        let (Ok(age), Ok(weight)) = (
            age.get_untracked().trim().parse::<u32>(),
            weight.get_untracked().trim().parse::<f64>(),
        ) else {
            return;
        };

        on_submit(Submission {
            age,
            weight,
            symptoms: symptoms.get_untracked(),
            image: image.get_untracked(),
        });
    };

    view! {
        <div class="symptom-form">
            <h2>"Symptoms"</h2>
            <p class="text-muted">"Provide your details for an OTC dosage recommendation"</p>

            <div class="form-row">
                <div class="form-group">
                    <label for="age">"Age"</label>
                    <input
                        type="number"
                        id="age"
                        placeholder="e.g. 32"
                        min="0"
                        max="120"
                        prop:value=move || age.get()
                        on:input=move |ev| set_age.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="weight">"Weight (lbs)"</label>
                    <input
                        type="number"
                        id="weight"
                        placeholder="e.g. 160"
                        min="0"
                        max="999"
                        prop:value=move || weight.get()
                        on:input=move |ev| set_weight.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-group">
                <label for="symptoms">"Describe your symptoms"</label>
                <textarea
                    id="symptoms"
                    rows="4"
                    placeholder="Describe your symptoms in detail... e.g. headache for 2 days, mild fever, sore throat"
                    prop:value=move || symptoms.get()
                    on:input=move |ev| set_symptoms.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-group">
                <label for="bottle-upload">
                    "Upload Medication Bottle " <span class="text-muted">"(optional)"</span>
                </label>
                <input
                    type="file"
                    id="bottle-upload"
                    accept="image/*"
                    on:change=on_file_change
                />
                <Show when=move || image_name.get().is_some()>
                    <p class="file-name">{move || image_name.get().unwrap_or_default()}</p>
                </Show>
            </div>

            <button
                class="btn btn-primary"
                disabled=move || !is_valid()
                on:click=on_click
            >
                "Analyze Symptoms"
            </button>
        </div>
    }
}
