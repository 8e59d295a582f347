use leptos::*;

const BRAND_TITLE: &str = "Aux1Tr4vel";
const TAGLINE: &str = "Explore New Places";
const SEARCH_PLACEHOLDER: &str = "Search…";

/// Page header with the brand title and a search box.
///
/// The search input is not wired up yet: the intended behavior on
/// submission is still undecided, so it stays a plain text field.
#[component]
pub fn Header() -> impl IntoView {
    view! {
      <header class="bg-blue-600 text-white shadow-md">
        <div class="container mx-auto flex items-center justify-between p-4">
          <h1 class="text-2xl font-bold">{ BRAND_TITLE }</h1>
          <div class="flex items-center space-x-6">
            <h2 class="hidden text-lg md:block">{ TAGLINE }</h2>
            <div class="relative">
              <span class="pointer-events-none absolute inset-y-0 left-0 flex items-center pl-3">
                <svg
                  class="h-4 w-4 text-white"
                  viewBox="0 0 24 24"
                  fill="none"
                  stroke="currentColor"
                  stroke-width="2"
                  stroke-linecap="round"
                >
                  <circle cx="11" cy="11" r="7" />
                  <line x1="21" y1="21" x2="16" y2="16" />
                </svg>
              </span>
              <input
                type="text"
                placeholder=SEARCH_PLACEHOLDER
                class="w-48 rounded bg-blue-500 py-2 pl-9 pr-3 text-white placeholder-blue-100 outline-none focus:bg-blue-400 md:w-64"
              />
            </div>
          </div>
        </div>
      </header>
    }
}
