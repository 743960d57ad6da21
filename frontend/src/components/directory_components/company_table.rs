//! Result table for the current page.

use common::{
    company::{Company, format_thousands},
    directory_query::EmptyState,
};
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_action_icons::{MdCheckCircle, MdOpenInNew, MdSearchOff},
        md_communication_icons::MdLocationOn,
        md_file_icons::MdCloudOff,
        md_navigation_icons::MdCancel,
    },
};

const COLUMN_HEADERS: [&str; 9] = ["Name", "Industry", "Location", "Employees", "Founded", "Website", "CEO", "Description", "Hiring"];

#[component]
pub fn CompanyTable(records: ReadSignal<Vec<Company>>, empty_state: ReadSignal<Option<EmptyState>>) -> Element {
    rsx! {
        div {
            style: "overflow-x: auto;",
            table {
                style: "min-width: 100%; border-collapse: collapse;",
                thead {
                    style: "background: linear-gradient(90deg, #4F46E5, #2563EB);",
                    tr {
                        for header in COLUMN_HEADERS {
                            th {
                                key: "{header}",
                                style: "
                                    padding: 16px 24px;
                                    text-align: left;
                                    font-size: 12px;
                                    font-weight: 700;
                                    color: white;
                                    text-transform: uppercase;
                                    letter-spacing: 0.05em;
                                ",
                                "{header}"
                            }
                        }
                    }
                }
                tbody {
                    for (row_index, company) in records.read().iter().cloned().enumerate() {
                        CompanyRow { key: "{company.id}", company, striped: row_index % 2 == 1 }
                    }
                    {(*empty_state.read()).map(|empty_state| rsx! { EmptyStateRow { empty_state } })}
                }
            }
        }
    }
}

#[component]
fn CompanyRow(company: ReadSignal<Company>, striped: bool) -> Element {
    let Company { name, industry, location, number_of_employees, founded_year, website, ceo, description, is_hiring, .. } = company.read().clone();
    let background = if striped { "#F9FAFB" } else { "white" };
    let employees = number_of_employees.map(format_thousands).unwrap_or_default();
    let founded = founded_year.map(|year| year.to_string()).unwrap_or_default();

    rsx! {
        tr {
            class: "x-company-row",
            style: "background: {background}; border-top: 1px solid #F3F4F6;",
            td {
                style: "padding: 16px 24px; white-space: nowrap; font-weight: 600; color: #111827;",
                "{name}"
            }
            td {
                style: "padding: 16px 24px; white-space: nowrap;",
                if !industry.is_empty() {
                    span {
                        style: "padding: 4px 8px; font-size: 12px; font-weight: 500; border-radius: 6px; background: #F3E8FF; color: #6B21A8;",
                        "{industry}"
                    }
                }
            }
            td {
                style: "padding: 16px 24px; white-space: nowrap; color: #374151;",
                if !location.is_empty() {
                    div {
                        style: "display: flex; align-items: center; gap: 4px;",
                        Icon { icon: MdLocationOn, style: "width: 16px; height: 16px;" }
                        "{location}"
                    }
                }
            }
            td {
                style: "padding: 16px 24px; white-space: nowrap; color: #374151; font-weight: 500;",
                "{employees}"
            }
            td {
                style: "padding: 16px 24px; white-space: nowrap; color: #374151;",
                "{founded}"
            }
            td {
                style: "padding: 16px 24px; white-space: nowrap;",
                if !website.is_empty() {
                    a {
                        href: "{website}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        style: "display: inline-flex; align-items: center; gap: 4px; color: #4F46E5; font-weight: 500;",
                        "Visit"
                        Icon { icon: MdOpenInNew, style: "width: 12px; height: 12px;" }
                    }
                }
            }
            td {
                style: "padding: 16px 24px; white-space: nowrap; color: #374151;",
                "{ceo}"
            }
            td {
                style: "padding: 16px 24px; max-width: 320px;",
                div {
                    class: "x-line-clamp-2",
                    style: "font-size: 14px; color: #4B5563;",
                    "{description}"
                }
            }
            td {
                style: "padding: 16px 24px; white-space: nowrap;",
                HiringBadge { hiring: is_hiring.is_hiring() }
            }
        }
    }
}

#[component]
fn HiringBadge(hiring: bool) -> Element {
    let badge_style = "display: inline-flex; align-items: center; gap: 4px; padding: 6px 12px; border-radius: 9999px; font-size: 12px; font-weight: 600;";
    if hiring {
        rsx! {
            span {
                style: "{badge_style} background: #DCFCE7; color: #166534;",
                Icon { icon: MdCheckCircle, style: "width: 12px; height: 12px;" }
                "Hiring"
            }
        }
    } else {
        rsx! {
            span {
                style: "{badge_style} background: #F3F4F6; color: #4B5563;",
                Icon { icon: MdCancel, style: "width: 12px; height: 12px;" }
                "Not Hiring"
            }
        }
    }
}

#[component]
fn EmptyStateRow(empty_state: EmptyState) -> Element {
    let (title, hint) = match empty_state {
        EmptyState::NoData => ("No data available", "The company list is empty or could not be loaded. Reload the page to try again."),
        EmptyState::NoMatches => ("No companies found", "Try adjusting your filters or search criteria"),
        EmptyState::PageOutOfRange => ("No companies on this page", "Moving to the last page of results."),
    };
    let icon_style = "width: 48px; height: 48px; color: #9CA3AF;";

    rsx! {
        tr {
            td {
                colspan: "{COLUMN_HEADERS.len()}",
                style: "text-align: center; padding: 64px 0px;",
                div {
                    style: "display: flex; flex-direction: column; align-items: center; gap: 4px;",
                    if empty_state == EmptyState::NoData {
                        Icon { icon: MdCloudOff, style: "{icon_style}" }
                    } else {
                        Icon { icon: MdSearchOff, style: "{icon_style}" }
                    }
                    p {
                        style: "font-size: 18px; font-weight: 600; color: #4B5563;",
                        "{title}"
                    }
                    p {
                        style: "font-size: 14px; color: #6B7280;",
                        "{hint}"
                    }
                }
            }
        }
    }
}
