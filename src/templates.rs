use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::models::{Candidate, EditErrors, Movie};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const INPUT_CLASS: &str = "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";
const BUTTON_CLASS: &str =
    "w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700";

pub fn index_page(movies: &[Movie]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "Ranked by your own ratings." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add Movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies yet. Add one to start your list." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn add_page(title: &str, error: Option<&str>) -> String {
    page(
        "Add Movie",
        form_shell(
            "Add a Movie",
            html! {
                form class="mt-8 space-y-6" method="post" action="/add" {
                    div {
                        label class="block text-sm font-medium text-gray-700" for="title" { "Movie Title" }
                        input class=(INPUT_CLASS) name="title" id="title" value=(title) required;
                        (field_error(error))
                    }
                    button class=(BUTTON_CLASS) type="submit" { "Add Movie" }
                }
            },
        ),
    )
}

pub fn select_page(query: &str, candidates: &[Candidate]) -> String {
    page(
        "Select Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Select Movie" }
                        p class="mt-2 text-gray-600" { "Results for \"" (query) "\"" }

                        @if candidates.is_empty() {
                            p class="mt-6 text-gray-600" { "No matches found." }
                        } @else {
                            ul class="mt-6 divide-y divide-gray-200" {
                                @for c in candidates {
                                    li class="py-3" {
                                        a class="text-blue-600 hover:text-blue-800" href=(format!("/find?id={}", c.provider_id)) {
                                            (c.title)
                                            @if let Some(date) = &c.release_date {
                                                span class="ml-2 text-gray-500" { "(" (date) ")" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/add" { "Search again" }
                    }
                }
            }
        },
    )
}

pub fn edit_page(movie: &Movie, rating: &str, review: &str, errors: &EditErrors) -> String {
    let action = format!("/edit?id={}", movie.id);

    page(
        "Edit Movie",
        form_shell(
            &movie.title,
            html! {
                form class="mt-8 space-y-6" method="post" action=(action) {
                    div {
                        label class="block text-sm font-medium text-gray-700" for="rating" { "Your Rating Out of 10 e.g. 7.5" }
                        input class=(INPUT_CLASS) name="rating" id="rating" inputmode="decimal" value=(rating) required;
                        (field_error(errors.rating))
                    }
                    div {
                        label class="block text-sm font-medium text-gray-700" for="review" { "Your Review" }
                        input class=(INPUT_CLASS) name="review" id="review" value=(review) required;
                        (field_error(errors.review))
                    }
                    button class=(BUTTON_CLASS) type="submit" { "Done" }
                }
            },
        ),
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error " (status.as_u16()) }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn form_shell(heading: &str, form: Markup) -> Markup {
    html! {
        div class="min-h-screen bg-gray-50" {
            div class="max-w-2xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-3xl font-bold text-gray-900" { (heading) }
                    (form)
                    a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                }
            }
        }
    }
}

fn field_error(error: Option<&str>) -> Markup {
    html! {
        @if let Some(error) = error {
            p class="mt-2 text-sm text-red-600" { (error) }
        }
    }
}

fn movie_card(movie: &Movie) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            img class="w-24 rounded" src=(movie.img_url) alt=(movie.title);
            div class="flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        @if let Some(ranking) = movie.ranking {
                            span class="mr-2 text-gray-400" { "#" (ranking) }
                        }
                        (movie.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                    }
                    span class="text-lg font-semibold text-gray-900" {
                        @match movie.rating {
                            Some(rating) => { (format!("{rating:.1}")) "/10" },
                            None => span class="text-sm text-gray-400" { "Unrated" },
                        }
                    }
                }
                @if let Some(review) = &movie.review {
                    p class="mt-2 italic text-gray-700" { "\u{201c}" (review) "\u{201d}" }
                }
                p class="mt-2 text-sm text-gray-600" { (movie.description) }
                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/edit?id={}", movie.id)) { "Update" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete?id={}", movie.id)) { "Delete" }
                }
            }
        }
    }
}
