//! Jobs Page
//!
//! Listing for one channel with search, city and department filters.

use leptos::*;
use leptos_router::*;

use crate::api::{self, Facets, Job, JobFilter};
use crate::components::Loading;
use crate::format::{format_relative_date, parse_publish_date};

fn display_name(job_type: &str) -> &'static str {
    match job_type {
        "campus" => "Campus Recruiting",
        "intern" => "Internships",
        "experienced" => "Experienced Hires",
        _ => "Unknown channel",
    }
}

/// Jobs listing page
#[component]
pub fn Jobs() -> impl IntoView {
    let params = use_params_map();
    let job_type = move || params.with(|p| p.get("job_type").cloned().unwrap_or_default());

    let (search, set_search) = create_signal(String::new());
    let (city, set_city) = create_signal(String::new());
    let (department, set_department) = create_signal(String::new());

    let facets = create_local_resource(job_type, |job_type| async move {
        api::fetch_facets(&job_type).await.unwrap_or_default()
    });

    let jobs = create_local_resource(
        move || {
            (
                job_type(),
                JobFilter {
                    search: search.get(),
                    city: city.get(),
                    department: department.get(),
                },
            )
        },
        |(job_type, filter)| async move { api::fetch_jobs(&job_type, &filter).await },
    );

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{move || display_name(&job_type())}</h1>

            <div class="flex flex-wrap gap-3">
                <input
                    id="search"
                    type="text"
                    placeholder="Search title or description"
                    class="bg-gray-800 border border-gray-700 rounded-lg px-3 py-2 flex-1"
                    prop:value=search
                    on:change=move |ev| set_search.set(event_target_value(&ev))
                />
                <FacetSelect
                    label="All cities"
                    options=Signal::derive(move || facets.get().map(|f: Facets| f.cities).unwrap_or_default())
                    on_select=move |value| set_city.set(value)
                />
                <FacetSelect
                    label="All departments"
                    options=Signal::derive(move || facets.get().map(|f: Facets| f.departments).unwrap_or_default())
                    on_select=move |value| set_department.set(value)
                />
            </div>

            <Transition fallback=move || view! { <Loading /> }>
                {move || jobs.get().map(|result| match result {
                    Ok(list) if list.is_empty() => view! {
                        <p class="text-gray-400 text-center py-12">"No matching jobs"</p>
                    }.into_view(),
                    Ok(list) => view! {
                        <p class="text-gray-400">{format!("{} jobs", list.len())}</p>
                        <div class="space-y-3">
                            {list.into_iter().map(|job| view! { <JobRow job=job /> }).collect_view()}
                        </div>
                    }.into_view(),
                    Err(e) => view! {
                        <p class="text-red-400">{format!("Failed to load jobs: {}", e)}</p>
                    }.into_view(),
                })}
            </Transition>
        </div>
    }
}

#[component]
fn FacetSelect<F>(label: &'static str, #[prop(into)] options: Signal<Vec<String>>, on_select: F) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    view! {
        <select
            class="bg-gray-800 border border-gray-700 rounded-lg px-3 py-2"
            on:change=move |ev| on_select(event_target_value(&ev))
        >
            <option value="">{label}</option>
            {move || options.get().into_iter().map(|option| view! {
                <option value=option.clone()>{option}</option>
            }).collect_view()}
        </select>
    }
}

#[component]
fn JobRow(job: Job) -> impl IntoView {
    let today = chrono::Local::now().date_naive();
    let published = parse_publish_date(&job.publish_time)
        .map(|date| format_relative_date(date, today))
        .unwrap_or_default();
    let cities = job
        .city_list
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            <div class="flex items-start justify-between">
                <h3 class="font-semibold">{job.title}</h3>
                <span class="text-gray-500 text-sm">{published}</span>
            </div>
            <div class="flex space-x-4 mt-2 text-sm text-gray-400">
                <span>{job.department}</span>
                <span>{cities}</span>
            </div>
            <p class="text-gray-300 text-sm mt-2 line-clamp-3">{job.description}</p>
        </div>
    }
}
