use std::rc::Rc;

use leptos::*;

use crate::{
    application::FetchLifecycleController,
    domain::{
        lifecycle::{FetchLifecycle, LifecycleStatus},
        logging::LogComponent,
        theme::{ThemeController, ThemeMode},
    },
    infrastructure::{ClientConfig, CoinGeckoClient, DocumentClassFlag},
    log_debug,
    view_state::{AssetRow, DashboardSnapshot},
};

/// Table header plus the class deciding below which viewport width it is hidden
struct Column {
    header: &'static str,
    class: &'static str,
}

const COLUMNS: [Column; 7] = [
    Column { header: "Rank", class: "col-rank" },
    Column { header: "Name", class: "col-name" },
    Column { header: "Symbol", class: "hide-below-sm" },
    Column { header: "Market Cap", class: "hide-below-md" },
    Column { header: "Price", class: "col-price" },
    Column { header: "Total Supply", class: "hide-below-lg" },
    Column { header: "Volume(24hr)", class: "hide-below-xl" },
];

const STYLES: &str = r#"
    .crypto-app {
        font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        background: linear-gradient(135deg, #f3f4f6 0%, #ffffff 100%);
        color: #111827;
    }
    html.dark .crypto-app {
        background: linear-gradient(135deg, #111827 0%, #1f2937 100%);
        color: #ffffff;
    }

    .app-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 24px 32px;
        background: linear-gradient(90deg, #bbf7d0 0%, #93c5fd 100%);
    }
    html.dark .app-header {
        background: linear-gradient(90deg, #4ade80 0%, #3b82f6 100%);
    }
    .app-header h1 {
        flex-grow: 1;
        margin: 0;
        text-align: center;
        font-size: 2.25rem;
        font-weight: 800;
        color: #ffffff;
    }

    .theme-toggle {
        border: none;
        border-radius: 9999px;
        padding: 8px 12px;
        font-size: 1.25rem;
        cursor: pointer;
        background: #e5e7eb;
        color: #1f2937;
    }
    html.dark .theme-toggle {
        background: #1f2937;
        color: #facc15;
    }

    .app-main {
        flex-grow: 1;
        display: flex;
        flex-direction: column;
        padding: 32px;
    }

    .search-box {
        width: 100%;
        max-width: 42rem;
        margin: 0 auto 32px;
    }
    .search-box input {
        width: 100%;
        box-sizing: border-box;
        padding: 8px 16px;
        border-radius: 6px;
        border: 1px solid #d1d5db;
        background: #ffffff;
        color: #111827;
    }
    html.dark .search-box input {
        border-color: #4b5563;
        background: #374151;
        color: #ffffff;
    }
    .search-box input:focus {
        outline: none;
        border-color: #4ade80;
        box-shadow: 0 0 0 3px rgba(74, 222, 128, 0.5);
    }

    .sr-only {
        position: absolute;
        width: 1px;
        height: 1px;
        overflow: hidden;
        clip: rect(0, 0, 0, 0);
        white-space: nowrap;
    }

    .banner {
        text-align: center;
        font-size: 1.25rem;
        color: #374151;
    }
    html.dark .banner { color: #d1d5db; }
    .banner.error { color: #dc2626; }
    html.dark .banner.error { color: #f87171; }

    .table-wrapper {
        flex-grow: 1;
        overflow: auto;
        border-radius: 8px;
        background: #ffffff;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    html.dark .table-wrapper { background: #1f2937; }

    .asset-table {
        min-width: 100%;
        border-collapse: collapse;
    }
    .asset-table th {
        padding: 14px 12px;
        text-align: left;
        font-size: 0.875rem;
        font-weight: 600;
        background: #f3f4f6;
    }
    html.dark .asset-table th {
        background: #1f2937;
        color: #e5e7eb;
    }
    .asset-table td {
        padding: 16px 12px;
        font-size: 0.875rem;
        white-space: nowrap;
        color: #6b7280;
        border-top: 1px solid #e5e7eb;
    }
    html.dark .asset-table td {
        color: #d1d5db;
        border-top-color: #374151;
    }
    .asset-table tbody tr:hover { background: #f9fafb; }
    html.dark .asset-table tbody tr:hover { background: #1f2937; }

    .asset-name {
        display: flex;
        align-items: center;
        gap: 8px;
        font-weight: 500;
        color: #111827;
    }
    html.dark .asset-name { color: #ffffff; }
    .asset-name img {
        width: 24px;
        height: 24px;
        border-radius: 9999px;
    }
    .asset-table td.col-price { color: #16a34a; }

    @media (max-width: 639px) { .hide-below-sm { display: none; } }
    @media (max-width: 767px) { .hide-below-md { display: none; } }
    @media (max-width: 1023px) { .hide-below-lg { display: none; } }
    @media (max-width: 1279px) { .hide-below-xl { display: none; } }
"#;

/// Market dashboard: one fetch per mount, incremental name search, light/dark mode
#[component]
pub fn App() -> impl IntoView {
    let lifecycle = create_rw_signal(FetchLifecycle::new());
    let (search_query, set_search_query) = create_signal(String::new());
    let (theme_mode, set_theme_mode) = create_signal(ThemeMode::default());
    let theme = store_value(ThemeController::new(DocumentClassFlag::dark_mode()));

    let controller = Rc::new(FetchLifecycleController::new(
        CoinGeckoClient::with_config(ClientConfig::from_host_page()),
        lifecycle,
    ));
    spawn_local({
        let controller = Rc::clone(&controller);
        async move {
            controller.activate().await;
        }
    });
    on_cleanup(move || controller.deactivate());

    let snapshot = create_memo(move |_| {
        search_query.with(|query| {
            lifecycle.with(|lifecycle| DashboardSnapshot::capture(lifecycle, query, theme_mode.get()))
        })
    });
    let status = create_memo(move |_| snapshot.with(|s| s.status));
    let rows = Signal::derive(move || snapshot.with(DashboardSnapshot::rows));
    let error_message = Signal::derive(move || {
        snapshot.with(|s| s.error_message.clone().unwrap_or_default())
    });

    let on_search_query_changed = Callback::new(move |query: String| {
        set_search_query.set(query);
    });
    let on_theme_toggle_requested = Callback::new(move |_: ()| {
        theme.update_value(|controller| set_theme_mode.set(controller.toggle()));
    });

    view! {
        <style>{STYLES}</style>
        <div class="crypto-app">
            <header class="app-header">
                <h1>"Crypto Currency App"</h1>
                <ThemeToggle mode=theme_mode on_toggle=on_theme_toggle_requested />
            </header>
            <main class="app-main">
                <SearchBox query=search_query on_change=on_search_query_changed />
                {move || match status.get() {
                    LifecycleStatus::Loading => {
                        view! { <p class="banner">"Loading..."</p> }.into_view()
                    }
                    LifecycleStatus::Failed => {
                        view! { <p class="banner error">{error_message}</p> }.into_view()
                    }
                    LifecycleStatus::Ready => view! { <AssetTable rows=rows /> }.into_view(),
                }}
            </main>
        </div>
    }
}

#[component]
fn ThemeToggle(mode: ReadSignal<ThemeMode>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="theme-toggle"
            aria-label=move || {
                if mode.get().is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            }
            on:click=move |_| on_toggle.call(())
        >
            {move || if mode.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}

#[component]
fn SearchBox(query: ReadSignal<String>, on_change: Callback<String>) -> impl IntoView {
    view! {
        <div class="search-box">
            <label for="search" class="sr-only">"Search cryptocurrencies"</label>
            <input
                id="search"
                type="search"
                placeholder="Search cryptocurrencies..."
                prop:value=move || query.get()
                on:input=move |ev| on_change.call(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn AssetTable(rows: Signal<Vec<AssetRow>>) -> impl IntoView {
    log_debug!(LogComponent::Presentation("AssetTable"), "table mounted");

    view! {
        <div class="table-wrapper">
            <table class="asset-table">
                <thead>
                    <tr>
                        {COLUMNS
                            .iter()
                            .map(|column| view! { <th scope="col" class=column.class>{column.header}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| row.key.clone()
                        children=move |row| view! { <AssetRowView row=row /> }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn AssetRowView(row: AssetRow) -> impl IntoView {
    view! {
        <tr>
            <td class="col-rank">{row.rank}</td>
            <td class="col-name">
                <div class="asset-name">
                    <img src=row.icon_url alt="" />
                    <span>{row.name}</span>
                </div>
            </td>
            <td class="hide-below-sm">{row.symbol}</td>
            <td class="hide-below-md">{row.market_cap}</td>
            <td class="col-price">{row.price}</td>
            <td class="hide-below-lg">{row.total_supply}</td>
            <td class="hide-below-xl">{row.volume}</td>
        </tr>
    }
}
